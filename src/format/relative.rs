use super::{climb, Rung};
use crate::config::FormatOptions;
use crate::model::{Gap, Phrase, Style, Unit};

/// Rungs of the long-form ladder, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelativeBranch {
    /// "3 years ago"
    Years,
    /// "Last year"
    OneYear,
    Months,
    OneMonth,
    Weeks,
    OneWeek,
    Days,
    /// "Yesterday", keyed on day of month rather than the day count
    Yesterday,
    Hours,
    OneHour,
    Minutes,
    OneMinute,
    Seconds,
    /// "Just now"
    Now,
}

const LADDER: [Rung<RelativeBranch>; 14] = [
    Rung::new(RelativeBranch::Years, |g| g.breakdown.years >= 2),
    Rung::new(RelativeBranch::OneYear, |g| g.breakdown.years >= 1),
    Rung::new(RelativeBranch::Months, |g| g.breakdown.months >= 2),
    Rung::new(RelativeBranch::OneMonth, |g| g.breakdown.months >= 1),
    Rung::new(RelativeBranch::Weeks, |g| g.breakdown.weeks >= 2),
    Rung::new(RelativeBranch::OneWeek, |g| g.breakdown.weeks >= 1),
    Rung::new(RelativeBranch::Days, |g| g.breakdown.days >= 2),
    Rung::new(RelativeBranch::Yesterday, |g| g.is_yesterday),
    Rung::new(RelativeBranch::Hours, |g| g.breakdown.hours >= 2),
    Rung::new(RelativeBranch::OneHour, |g| g.breakdown.hours >= 1),
    Rung::new(RelativeBranch::Minutes, |g| g.breakdown.minutes >= 2),
    Rung::new(RelativeBranch::OneMinute, |g| g.breakdown.minutes >= 1),
    Rung::new(RelativeBranch::Seconds, |g| g.breakdown.seconds >= 3),
    Rung::new(RelativeBranch::Now, |_| true),
];

impl RelativeBranch {
    /// Pick the first rung whose threshold the gap meets
    pub fn select(gap: &Gap) -> Self {
        climb(&LADDER, gap, RelativeBranch::Now)
    }

    /// Every rung whose threshold the gap meets, in precedence order
    pub fn matching(gap: &Gap) -> Vec<Self> {
        LADDER
            .iter()
            .filter(|rung| rung.applies(gap))
            .map(|rung| rung.branch)
            .collect()
    }

    /// Build the untranslated phrase for this rung
    pub fn phrase(self, gap: &Gap, options: FormatOptions) -> Phrase {
        let b = &gap.breakdown;
        let direction = gap.direction;

        let count = |unit, value| Phrase::Count {
            unit,
            value,
            style: Style::Long(direction),
        };
        let single = |unit, numeric| Phrase::Single {
            unit,
            direction,
            numeric,
        };

        match self {
            RelativeBranch::Years => count(Unit::Year, b.years),
            RelativeBranch::OneYear => single(Unit::Year, options.numeric_dates),
            RelativeBranch::Months => count(Unit::Month, b.months),
            RelativeBranch::OneMonth => single(Unit::Month, options.numeric_dates),
            RelativeBranch::Weeks => count(Unit::Week, b.weeks),
            RelativeBranch::OneWeek => single(Unit::Week, options.numeric_dates),
            RelativeBranch::Days => count(Unit::Day, b.days),
            RelativeBranch::Yesterday => single(Unit::Day, options.numeric_dates),
            RelativeBranch::Hours => count(Unit::Hour, b.hours),
            RelativeBranch::OneHour => single(Unit::Hour, options.numeric_times),
            RelativeBranch::Minutes => count(Unit::Minute, b.minutes),
            RelativeBranch::OneMinute => single(Unit::Minute, options.numeric_times),
            RelativeBranch::Seconds => count(Unit::Second, b.seconds),
            RelativeBranch::Now => single(Unit::Second, options.numeric_times),
        }
    }
}
