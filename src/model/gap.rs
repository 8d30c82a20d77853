use chrono::{DateTime, Datelike, Days, TimeZone};

use super::CalendarUnitBreakdown;
use crate::util::earlier_of;

/// Which side of the reference instant the described instant lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Past,
    Future,
}

impl Direction {
    pub fn is_future(self) -> bool {
        self == Direction::Future
    }
}

/// Everything the selectors need to know about one subject/reference pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    pub breakdown: CalendarUnitBreakdown,
    pub direction: Direction,
    /// The subject falls on the day of month just before the reference's
    pub is_yesterday: bool,
}

impl Gap {
    /// Measure `subject` against `reference`.
    ///
    /// Identical instants count as [`Direction::Future`]. The yesterday flag
    /// only compares days of month, in the reference's wall clock.
    pub fn measure<Tz: TimeZone>(subject: &DateTime<Tz>, reference: &DateTime<Tz>) -> Self {
        let earlier = earlier_of(subject.clone(), reference.clone());
        let later = if earlier == *subject {
            reference
        } else {
            subject
        };

        let direction = if earlier == *reference {
            Direction::Future
        } else {
            Direction::Past
        };

        Self {
            breakdown: CalendarUnitBreakdown::between(&earlier, later),
            direction,
            is_yesterday: is_yesterday(subject, reference),
        }
    }
}

fn is_yesterday<Tz: TimeZone>(subject: &DateTime<Tz>, reference: &DateTime<Tz>) -> bool {
    let subject_day = subject.with_timezone(&reference.timezone()).day();

    reference
        .naive_local()
        .checked_sub_days(Days::new(1))
        .is_some_and(|yesterday| yesterday.day() == subject_day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_past_and_future() {
        let t = reference();
        assert_eq!(
            Gap::measure(&(t - Duration::hours(3)), &t).direction,
            Direction::Past
        );
        assert_eq!(
            Gap::measure(&(t + Duration::hours(3)), &t).direction,
            Direction::Future
        );
    }

    #[test]
    fn test_identical_instants_count_as_future() {
        let t = reference();
        let gap = Gap::measure(&t, &t);
        assert!(gap.direction.is_future());
        assert!(gap.breakdown.is_zero());
    }

    #[test]
    fn test_breakdown_magnitude_ignores_direction() {
        let t = reference();
        let past = Gap::measure(&(t - Duration::minutes(90)), &t);
        let future = Gap::measure(&(t + Duration::minutes(90)), &t);
        assert_eq!(past.breakdown, future.breakdown);
        assert_eq!(past.breakdown.hours, 1);
        assert_eq!(past.breakdown.minutes, 30);
    }

    #[test]
    fn test_yesterday_compares_day_of_month() {
        let t = reference();
        assert!(Gap::measure(&(t - Duration::days(1)), &t).is_yesterday);
        // Late the previous evening is still yesterday
        assert!(Gap::measure(&(t - Duration::hours(13)), &t).is_yesterday);
        assert!(!Gap::measure(&(t - Duration::hours(2)), &t).is_yesterday);
        // Tomorrow never matches the day before the reference
        assert!(!Gap::measure(&(t + Duration::days(1)), &t).is_yesterday);
    }

    #[test]
    fn test_yesterday_across_month_boundary() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let subject = Utc.with_ymd_and_hms(2024, 2, 29, 22, 0, 0).unwrap();
        assert!(Gap::measure(&subject, &t).is_yesterday);
    }
}
