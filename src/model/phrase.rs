use std::borrow::Cow;

use super::Direction;
use crate::plural::PluralSuffix;

/// Calendar unit a phrase talks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Plural English word used inside long-form keys
    pub fn word(self) -> &'static str {
        match self {
            Unit::Year => "years",
            Unit::Month => "months",
            Unit::Week => "weeks",
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
        }
    }

    /// Single-letter glyph used inside short-form keys
    pub fn glyph(self) -> char {
        match self {
            Unit::Year => 'y',
            Unit::Month => 'M',
            Unit::Week => 'w',
            Unit::Day => 'd',
            Unit::Hour => 'h',
            Unit::Minute => 'm',
            Unit::Second => 's',
        }
    }
}

/// Whether a counted phrase is written out or abbreviated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Long(Direction),
    Short,
}

/// A phrase picked by a selector, before translation.
///
/// The translation key is the canonical English text. Counted phrases carry a
/// `%d` placeholder and a slot for the plural suffix right before the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrase {
    /// "%d years ago", "In %d days", "%dh"
    Count { unit: Unit, value: u32, style: Style },
    /// "Last month", "In an hour", or with `numeric` set "1 month ago"
    Single {
        unit: Unit,
        direction: Direction,
        numeric: bool,
    },
}

impl Phrase {
    /// Build the translation key with the given plural suffix spliced in
    pub fn key(&self, suffix: PluralSuffix) -> Cow<'static, str> {
        match *self {
            Phrase::Count { unit, style, .. } => {
                let suffix = suffix.marker();
                let key = match style {
                    Style::Long(Direction::Past) => format!("%d {suffix}{} ago", unit.word()),
                    Style::Long(Direction::Future) => format!("In %d {suffix}{}", unit.word()),
                    Style::Short => format!("%d{suffix}{}", unit.glyph()),
                };
                Cow::Owned(key)
            }
            Phrase::Single {
                unit,
                direction,
                numeric,
            } => Cow::Borrowed(single_key(unit, direction, numeric)),
        }
    }

    /// Value substituted into the template, if the phrase has one
    pub fn value(&self) -> Option<u32> {
        match *self {
            Phrase::Count { value, .. } => Some(value),
            Phrase::Single { .. } => None,
        }
    }
}

fn single_key(unit: Unit, direction: Direction, numeric: bool) -> &'static str {
    use Direction::{Future, Past};

    match (unit, direction, numeric) {
        (Unit::Year, Past, false) => "Last year",
        (Unit::Year, Future, false) => "Next year",
        (Unit::Year, Past, true) => "1 year ago",
        (Unit::Year, Future, true) => "In 1 year",
        (Unit::Month, Past, false) => "Last month",
        (Unit::Month, Future, false) => "Next month",
        (Unit::Month, Past, true) => "1 month ago",
        (Unit::Month, Future, true) => "In 1 month",
        (Unit::Week, Past, false) => "Last week",
        (Unit::Week, Future, false) => "Next week",
        (Unit::Week, Past, true) => "1 week ago",
        (Unit::Week, Future, true) => "In 1 week",
        (Unit::Day, Past, false) => "Yesterday",
        (Unit::Day, Future, false) => "Tomorrow",
        (Unit::Day, Past, true) => "1 day ago",
        (Unit::Day, Future, true) => "In 1 day",
        (Unit::Hour, Past, false) => "An hour ago",
        (Unit::Hour, Future, false) => "In an hour",
        (Unit::Hour, Past, true) => "1 hour ago",
        (Unit::Hour, Future, true) => "In 1 hour",
        (Unit::Minute, Past, false) => "A minute ago",
        (Unit::Minute, Future, false) => "In a minute",
        (Unit::Minute, Past, true) => "1 minute ago",
        (Unit::Minute, Future, true) => "In 1 minute",
        (Unit::Second, Past, false) => "Just now",
        (Unit::Second, Future, false) => "Right now",
        (Unit::Second, Past, true) => "1 second ago",
        (Unit::Second, Future, true) => "In 1 second",
    }
}
