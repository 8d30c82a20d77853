use std::env;

use super::LocaleProvider;

const DEFAULT_LOCALE: &str = "en";

/// Always reports the same locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }

    pub fn english() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Default for FixedLocale {
    fn default() -> Self {
        Self::english()
    }
}

impl LocaleProvider for FixedLocale {
    fn active_locale(&self) -> String {
        self.0.clone()
    }
}

/// Reads the locale from `LC_ALL`, `LC_MESSAGES` and `LANG`, in that order.
///
/// Empty values and the `C`/`POSIX` locales are skipped; with nothing usable
/// set the locale is English.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLocale;

impl EnvLocale {
    fn resolve<F>(var: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .into_iter()
            .filter_map(var)
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty() && !is_posix(value))
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }
}

impl LocaleProvider for EnvLocale {
    fn active_locale(&self) -> String {
        Self::resolve(|name| env::var(name).ok())
    }
}

fn is_posix(value: &str) -> bool {
    let base = value.split(['.', '@']).next().unwrap_or_default();
    base.is_empty() || base == "C" || base == "POSIX"
}
