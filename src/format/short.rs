use super::{climb, Rung};
use crate::model::{Gap, Phrase, Style, Unit};

/// Rungs of the abbreviated ladder, highest precedence first.
///
/// Unlike the long form, years, months and weeks are used from a count of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShortBranch {
    Years,
    Months,
    Weeks,
    Days,
    /// Always `1d`
    Yesterday,
    Hours,
    Minutes,
    /// Also covers zero and near-zero gaps
    Seconds,
}

const LADDER: [Rung<ShortBranch>; 8] = [
    Rung::new(ShortBranch::Years, |g| g.breakdown.years >= 1),
    Rung::new(ShortBranch::Months, |g| g.breakdown.months >= 1),
    Rung::new(ShortBranch::Weeks, |g| g.breakdown.weeks >= 1),
    Rung::new(ShortBranch::Days, |g| g.breakdown.days >= 2),
    Rung::new(ShortBranch::Yesterday, |g| g.is_yesterday),
    Rung::new(ShortBranch::Hours, |g| g.breakdown.hours >= 1),
    Rung::new(ShortBranch::Minutes, |g| g.breakdown.minutes >= 1),
    Rung::new(ShortBranch::Seconds, |_| true),
];

impl ShortBranch {
    pub fn select(gap: &Gap) -> Self {
        climb(&LADDER, gap, ShortBranch::Seconds)
    }

    pub fn matching(gap: &Gap) -> Vec<Self> {
        LADDER
            .iter()
            .filter(|rung| rung.applies(gap))
            .map(|rung| rung.branch)
            .collect()
    }

    pub fn phrase(self, gap: &Gap) -> Phrase {
        let b = &gap.breakdown;
        let (unit, value) = match self {
            ShortBranch::Years => (Unit::Year, b.years),
            ShortBranch::Months => (Unit::Month, b.months),
            ShortBranch::Weeks => (Unit::Week, b.weeks),
            ShortBranch::Days => (Unit::Day, b.days),
            ShortBranch::Yesterday => (Unit::Day, 1),
            ShortBranch::Hours => (Unit::Hour, b.hours),
            ShortBranch::Minutes => (Unit::Minute, b.minutes),
            ShortBranch::Seconds => (Unit::Second, b.seconds),
        };

        Phrase::Count {
            unit,
            value,
            style: Style::Short,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CalendarUnitBreakdown, Direction};

    fn gap(breakdown: CalendarUnitBreakdown, is_yesterday: bool) -> Gap {
        Gap {
            breakdown,
            direction: Direction::Future,
            is_yesterday,
        }
    }

    #[test]
    fn test_single_units_trigger_at_one() {
        let zero = CalendarUnitBreakdown::default();
        assert_eq!(
            ShortBranch::select(&gap(CalendarUnitBreakdown { years: 1, months: 5, ..zero }, false)),
            ShortBranch::Years
        );
        assert_eq!(
            ShortBranch::select(&gap(CalendarUnitBreakdown { months: 1, ..zero }, false)),
            ShortBranch::Months
        );
        assert_eq!(
            ShortBranch::select(&gap(CalendarUnitBreakdown { weeks: 1, days: 6, ..zero }, true)),
            ShortBranch::Weeks
        );
    }

    #[test]
    fn test_days_and_yesterday() {
        let zero = CalendarUnitBreakdown::default();
        assert_eq!(
            ShortBranch::select(&gap(CalendarUnitBreakdown { days: 2, ..zero }, true)),
            ShortBranch::Days
        );
        let one_day = gap(CalendarUnitBreakdown { days: 1, hours: 4, ..zero }, true);
        assert_eq!(ShortBranch::select(&one_day), ShortBranch::Yesterday);
        assert_eq!(
            ShortBranch::Yesterday.phrase(&one_day),
            Phrase::Count {
                unit: Unit::Day,
                value: 1,
                style: Style::Short
            }
        );
        // Without the yesterday flag a one-day gap falls to the hour count
        assert_eq!(
            ShortBranch::select(&gap(CalendarUnitBreakdown { days: 1, hours: 4, ..zero }, false)),
            ShortBranch::Hours
        );
    }

    #[test]
    fn test_seconds_covers_zero() {
        let zero = CalendarUnitBreakdown::default();
        assert_eq!(ShortBranch::select(&gap(zero, false)), ShortBranch::Seconds);
        assert_eq!(
            ShortBranch::Seconds.phrase(&gap(zero, false)).value(),
            Some(0)
        );
        assert_eq!(
            ShortBranch::select(&gap(CalendarUnitBreakdown { minutes: 1, ..zero }, false)),
            ShortBranch::Minutes
        );
    }
}
