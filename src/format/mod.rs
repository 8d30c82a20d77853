//! Turning a measured gap into a localized phrase.
//!
//! - [`RelativeBranch`]: long-form ladder ("3 days ago", "Last month")
//! - [`ShortBranch`]: abbreviated ladder ("3d", "1M")
//! - [`TimeAgo`]: measures, selects, pluralizes and translates

mod relative;
mod short;

pub use relative::RelativeBranch;
pub use short::ShortBranch;

use std::sync::OnceLock;

use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use crate::config::{FormatOptions, FormatterConfig};
use crate::error::Result;
use crate::locale::{Catalog, EnvLocale, FixedLocale, LocaleProvider, Localizer};
use crate::model::{Gap, Phrase};
use crate::plural::{PluralRules, PluralSuffix};

/// One entry of a selector ladder: the branch and the test that enables it
pub(crate) struct Rung<B> {
    pub branch: B,
    pub applies: fn(&Gap) -> bool,
}

impl<B: Copy> Rung<B> {
    pub const fn new(branch: B, applies: fn(&Gap) -> bool) -> Self {
        Self { branch, applies }
    }

    pub fn applies(&self, gap: &Gap) -> bool {
        (self.applies)(gap)
    }
}

/// First branch in the ladder that applies
fn climb<B: Copy>(ladder: &[Rung<B>], gap: &Gap, last: B) -> B {
    ladder
        .iter()
        .find(|rung| rung.applies(gap))
        .map_or(last, |rung| rung.branch)
}

/// Formats the distance between two instants as a localized phrase.
///
/// Holds only read-only collaborators, so one instance can be shared across
/// threads and reused for any number of calls.
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use ago::{FormatOptions, TimeAgo};
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
/// let formatter = TimeAgo::new();
///
/// let then = now - Duration::days(3);
/// assert_eq!(formatter.time_ago(&then, &now, FormatOptions::default()), "3 days ago");
/// assert_eq!(formatter.short_time_ago(&then, &now), "3d");
/// ```
#[derive(Debug, Clone)]
pub struct TimeAgo<C = &'static Catalog, L = FixedLocale> {
    catalog: C,
    locale: L,
    plural_rules: PluralRules,
}

impl TimeAgo {
    /// English formatter over the bundled tables
    pub fn new() -> Self {
        Self::for_locale("en")
    }

    /// Formatter over the bundled tables for a fixed locale
    pub fn for_locale(locale: impl Into<String>) -> Self {
        TimeAgo::with_parts(Catalog::bundled(), FixedLocale::new(locale))
    }

    /// Shared English formatter backing the crate-level functions
    pub fn english() -> &'static TimeAgo {
        static ENGLISH: OnceLock<TimeAgo> = OnceLock::new();
        ENGLISH.get_or_init(TimeAgo::new)
    }
}

impl Default for TimeAgo {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeAgo<Catalog, Box<dyn LocaleProvider>> {
    /// Assemble a formatter from configuration.
    ///
    /// Extra string tables are laid over the bundled ones; without an explicit
    /// locale the environment decides.
    pub fn from_config(config: &FormatterConfig) -> Result<Self> {
        let mut catalog = Catalog::bundled().clone();
        if let Some(path) = &config.extra_strings {
            catalog.merge(Catalog::load_file(path)?);
        }

        let locale: Box<dyn LocaleProvider> = match &config.locale {
            Some(locale) => Box::new(FixedLocale::new(locale.clone())),
            None => Box::new(EnvLocale),
        };

        debug!(locale = %locale.active_locale(), "Formatter configured");

        Ok(TimeAgo::with_parts(catalog, locale))
    }
}

impl<C: Localizer, L: LocaleProvider> TimeAgo<C, L> {
    pub fn with_parts(catalog: C, locale: L) -> Self {
        Self {
            catalog,
            locale,
            plural_rules: PluralRules::default(),
        }
    }

    pub fn with_plural_rules(mut self, plural_rules: PluralRules) -> Self {
        self.plural_rules = plural_rules;
        self
    }

    /// Long-form phrase for `subject` as seen from `reference`
    pub fn time_ago<Tz: TimeZone>(
        &self,
        subject: &DateTime<Tz>,
        reference: &DateTime<Tz>,
        options: FormatOptions,
    ) -> String {
        let gap = Gap::measure(subject, reference);
        let branch = RelativeBranch::select(&gap);

        debug!(
            branch = ?branch,
            direction = ?gap.direction,
            breakdown = ?gap.breakdown,
            "Selected relative phrase"
        );

        self.render(branch.phrase(&gap, options))
    }

    /// Abbreviated token for `subject` as seen from `reference`
    pub fn short_time_ago<Tz: TimeZone>(
        &self,
        subject: &DateTime<Tz>,
        reference: &DateTime<Tz>,
    ) -> String {
        let gap = Gap::measure(subject, reference);
        let branch = ShortBranch::select(&gap);

        debug!(branch = ?branch, breakdown = ?gap.breakdown, "Selected short phrase");

        self.render(branch.phrase(&gap))
    }

    /// [`TimeAgo::time_ago`] measured from the current time
    pub fn time_ago_since_now<Tz: TimeZone>(
        &self,
        subject: &DateTime<Tz>,
        options: FormatOptions,
    ) -> String {
        let now = Utc::now().with_timezone(&subject.timezone());
        self.time_ago(subject, &now, options)
    }

    /// [`TimeAgo::short_time_ago`] measured from the current time
    pub fn short_time_ago_since_now<Tz: TimeZone>(&self, subject: &DateTime<Tz>) -> String {
        let now = Utc::now().with_timezone(&subject.timezone());
        self.short_time_ago(subject, &now)
    }

    /// Translate a phrase into the active locale and fill in its count
    pub fn render(&self, phrase: Phrase) -> String {
        let locale = self.locale.active_locale();

        let suffix = phrase
            .value()
            .map_or(PluralSuffix::Many, |value| {
                self.plural_rules.suffix(&locale, u64::from(value))
            });
        let key = phrase.key(suffix);
        let template = self.catalog.localize(&key, &locale);

        match phrase.value() {
            Some(value) => substitute(template, value),
            None => template.to_string(),
        }
    }
}

/// Fill the first `%d` (or `%1$d`) of a printf-style template; `%%` is a
/// literal percent sign.
fn substitute(template: &str, value: u32) -> String {
    let mut out = String::with_capacity(template.len() + 10);
    let mut rest = template;
    let mut filled = false;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('%') {
            out.push('%');
            rest = after;
            continue;
        }

        let conversion = tail.strip_prefix("1$").unwrap_or(tail);
        match conversion.strip_prefix('d') {
            Some(after) if !filled => {
                out.push_str(&value.to_string());
                filled = true;
                rest = after;
            }
            _ => {
                out.push('%');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
