//! ago - calendar-aware, locale-aware "time ago" phrases
//!
//! Turns the distance between two instants into a phrase such as
//! "3 days ago", "Last month" or "In an hour", or into a compact token such
//! as "3d" or "1h".
//!
//! - Gaps are broken down on the calendar (whole years, months, weeks, ...),
//!   so month lengths and leap years are respected
//! - Exactly one phrase is chosen by an ordered ladder of thresholds
//! - Phrases are translated through a string catalog, with one/few/many plural
//!   forms for languages such as Russian and Ukrainian
//!
//! # Architecture
//!
//! - [`model`]: calendar breakdown, gap measurement and untranslated phrases
//! - [`format`]: the long and short ladders and the [`TimeAgo`] formatter
//! - [`plural`]: per-language plural rules
//! - [`locale`]: string catalog and active-locale providers
//! - [`config`]: formatting options
//! - [`error`]: errors from loading tables and parsing input
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use ago::{FormatOptions, TimeAgo};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
//!
//! assert_eq!(ago::time_ago(&(now - Duration::hours(30)), &now, FormatOptions::default()), "Yesterday");
//! assert_eq!(ago::short_time_ago(&(now + Duration::weeks(2)), &now), "2w");
//!
//! let ru = TimeAgo::for_locale("ru");
//! assert_eq!(ru.time_ago(&(now - Duration::days(2)), &now, FormatOptions::default()), "2 дня назад");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod locale;
pub mod model;
pub mod plural;
pub mod util;

use chrono::{DateTime, TimeZone};

// Re-export commonly used types at the crate root
pub use config::{FormatOptions, FormatterConfig};
pub use error::{Error, Result};
pub use format::{RelativeBranch, ShortBranch, TimeAgo};
pub use locale::{Catalog, EnvLocale, FixedLocale, LocaleProvider, Localizer};
pub use model::{CalendarUnitBreakdown, Direction, Gap, Phrase, Unit};
pub use plural::{EastSlavicPlural, PluralRule, PluralRules, PluralSuffix, SimplePlural};
pub use util::{earlier_of, later_of};

/// Long-form English phrase for `subject` as seen from `reference`
pub fn time_ago<Tz: TimeZone>(
    subject: &DateTime<Tz>,
    reference: &DateTime<Tz>,
    options: FormatOptions,
) -> String {
    TimeAgo::english().time_ago(subject, reference, options)
}

/// Abbreviated English token for `subject` as seen from `reference`
pub fn short_time_ago<Tz: TimeZone>(subject: &DateTime<Tz>, reference: &DateTime<Tz>) -> String {
    TimeAgo::english().short_time_ago(subject, reference)
}

/// Long-form English phrase for `subject` as seen from now
pub fn time_ago_since_now<Tz: TimeZone>(subject: &DateTime<Tz>, options: FormatOptions) -> String {
    TimeAgo::english().time_ago_since_now(subject, options)
}

/// Abbreviated English token for `subject` as seen from now
pub fn short_time_ago_since_now<Tz: TimeZone>(subject: &DateTime<Tz>) -> String {
    TimeAgo::english().short_time_ago_since_now(subject)
}
