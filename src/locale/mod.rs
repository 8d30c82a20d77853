//! Translation lookup and active-locale discovery.
//!
//! Phrases are looked up by their canonical English text. A missing
//! translation is never an error: the key itself is used as the template.

mod catalog;
mod provider;

pub use catalog::Catalog;
pub use provider::{EnvLocale, FixedLocale};

use std::sync::Arc;

/// Maps a canonical phrase key to a printf-style template in some locale
pub trait Localizer: Send + Sync {
    /// Template for `key` in `locale`, or `None` when no translation exists
    fn lookup(&self, key: &str, locale: &str) -> Option<&str>;

    /// Template for `key` in `locale`, falling back to the key itself
    fn localize<'a>(&'a self, key: &'a str, locale: &str) -> &'a str {
        self.lookup(key, locale).unwrap_or(key)
    }
}

impl<T: Localizer + ?Sized> Localizer for &T {
    fn lookup(&self, key: &str, locale: &str) -> Option<&str> {
        (**self).lookup(key, locale)
    }
}

impl<T: Localizer + ?Sized> Localizer for Arc<T> {
    fn lookup(&self, key: &str, locale: &str) -> Option<&str> {
        (**self).lookup(key, locale)
    }
}

/// Supplies the identifier of the locale to format in (`"en"`, `"ru"`, ...)
pub trait LocaleProvider: Send + Sync {
    fn active_locale(&self) -> String;
}

impl<T: LocaleProvider + ?Sized> LocaleProvider for &T {
    fn active_locale(&self) -> String {
        (**self).active_locale()
    }
}

impl<T: LocaleProvider + ?Sized> LocaleProvider for Box<T> {
    fn active_locale(&self) -> String {
        (**self).active_locale()
    }
}

/// Lowercased primary language subtag: `ru_RU.UTF-8` and `ru-RU` both give `ru`
pub fn primary_language(locale: &str) -> String {
    locale
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Canonical form used for table keys: `ru_RU.UTF-8` becomes `ru-ru`
pub fn normalize_locale(locale: &str) -> String {
    locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-")
        .to_ascii_lowercase()
}
