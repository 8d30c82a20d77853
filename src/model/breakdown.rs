use chrono::{DateTime, Datelike, Months, NaiveDateTime, TimeZone};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Whole calendar units elapsed between two instants.
///
/// Units are taken largest first: whole months (and years) are counted by
/// stepping the earlier wall-clock time forward one calendar month at a time,
/// clamping to the last day of shorter months. Whatever is left is split into
/// weeks, days, hours, minutes and seconds. Every field is therefore relative to
/// the fields above it, the way people describe elapsed calendar time
/// ("1 year and 1 month ago"), not a floor of the total duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CalendarUnitBreakdown {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CalendarUnitBreakdown {
    /// Break down the gap between two instants.
    ///
    /// The arithmetic runs on the wall clock of the earlier instant's timezone.
    /// Argument order does not matter for the magnitude; the caller keeps track
    /// of direction.
    pub fn between<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> Self {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let later = later.with_timezone(&earlier.timezone());
        Self::between_naive(earlier.naive_local(), later.naive_local())
    }

    /// Break down the gap between two wall-clock times.
    pub fn between_naive(earlier: NaiveDateTime, later: NaiveDateTime) -> Self {
        let (earlier, later) = if earlier <= later {
            (earlier, later)
        } else {
            (later, earlier)
        };

        let (total_months, anchor) = whole_months(earlier, later);
        let rest = (later - anchor).num_seconds().max(0);

        let whole_days = rest / SECONDS_PER_DAY;
        let within_day = rest % SECONDS_PER_DAY;

        Self {
            years: total_months / 12,
            months: total_months % 12,
            weeks: (whole_days / 7) as u32,
            days: (whole_days % 7) as u32,
            hours: (within_day / SECONDS_PER_HOUR) as u32,
            minutes: (within_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u32,
            seconds: (within_day % SECONDS_PER_MINUTE) as u32,
        }
    }

    /// True when every field is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Count the whole calendar months from `earlier` to `later` and return them
/// with the instant reached by adding that many months to `earlier`.
fn whole_months(earlier: NaiveDateTime, later: NaiveDateTime) -> (u32, NaiveDateTime) {
    let span = (later.year() - earlier.year()) * 12 + later.month() as i32
        - earlier.month() as i32;
    let mut months = u32::try_from(span).unwrap_or(0);

    // The month difference over-counts by at most one when `later` sits earlier
    // in its month than `earlier` does in its own. The loop also covers an
    // out-of-range addition at the edges of the representable calendar.
    while months > 0 {
        match earlier.checked_add_months(Months::new(months)) {
            Some(anchor) if anchor <= later => return (months, anchor),
            _ => months -= 1,
        }
    }

    (0, earlier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, NaiveDate, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn breakdown(
        years: u32,
        months: u32,
        weeks: u32,
        days: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> CalendarUnitBreakdown {
        CalendarUnitBreakdown {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn test_identical_instants() {
        let t = at(2024, 3, 15, 12, 0, 0);
        let b = CalendarUnitBreakdown::between_naive(t, t);
        assert!(b.is_zero());
    }

    #[test]
    fn test_time_units_roll_up() {
        let t = at(2024, 3, 15, 12, 0, 0);
        assert_eq!(
            CalendarUnitBreakdown::between_naive(t - Duration::minutes(90), t),
            breakdown(0, 0, 0, 0, 1, 30, 0)
        );
        assert_eq!(
            CalendarUnitBreakdown::between_naive(t - Duration::seconds(27), t),
            breakdown(0, 0, 0, 0, 0, 0, 27)
        );
    }

    #[test]
    fn test_thirteen_months_is_one_year_one_month() {
        assert_eq!(
            CalendarUnitBreakdown::between_naive(at(2023, 2, 15, 12, 0, 0), at(2024, 3, 15, 12, 0, 0)),
            breakdown(1, 1, 0, 0, 0, 0, 0)
        );
    }

    #[test]
    fn test_month_not_yet_complete() {
        // Jan 15 plus 13 months overshoots Feb 14, so only 12 months count
        assert_eq!(
            CalendarUnitBreakdown::between_naive(at(2023, 1, 15, 0, 0, 0), at(2024, 2, 14, 10, 0, 0)),
            breakdown(1, 0, 4, 2, 10, 0, 0)
        );
    }

    #[test]
    fn test_short_month_clamps_to_month_end() {
        // Jan 31 + 1 month lands on Feb 28 in a common year
        assert_eq!(
            CalendarUnitBreakdown::between_naive(at(2023, 1, 31, 0, 0, 0), at(2023, 3, 1, 0, 0, 0)),
            breakdown(0, 1, 0, 1, 0, 0, 0)
        );
        // and on Feb 29 in a leap year
        assert_eq!(
            CalendarUnitBreakdown::between_naive(at(2024, 1, 31, 0, 0, 0), at(2024, 3, 1, 0, 0, 0)),
            breakdown(0, 1, 0, 1, 0, 0, 0)
        );
        assert_eq!(
            CalendarUnitBreakdown::between_naive(at(2024, 1, 31, 0, 0, 0), at(2024, 2, 29, 0, 0, 0)),
            breakdown(0, 1, 0, 0, 0, 0, 0)
        );
    }

    #[test]
    fn test_leap_day_anniversary() {
        assert_eq!(
            CalendarUnitBreakdown::between_naive(at(2024, 2, 29, 8, 0, 0), at(2025, 2, 28, 8, 0, 0)),
            breakdown(1, 0, 0, 0, 0, 0, 0)
        );
        assert_eq!(
            CalendarUnitBreakdown::between_naive(at(2024, 2, 29, 8, 0, 0), at(2028, 2, 29, 8, 0, 0)),
            breakdown(4, 0, 0, 0, 0, 0, 0)
        );
    }

    #[test]
    fn test_weeks_across_year_boundary() {
        assert_eq!(
            CalendarUnitBreakdown::between_naive(at(2023, 12, 20, 0, 0, 0), at(2024, 1, 5, 0, 0, 0)),
            breakdown(0, 0, 2, 2, 0, 0, 0)
        );
    }

    #[test]
    fn test_between_is_order_independent() {
        let a = at(2020, 5, 17, 4, 3, 2);
        let b = at(2024, 1, 2, 3, 4, 5);
        assert_eq!(
            CalendarUnitBreakdown::between_naive(a, b),
            CalendarUnitBreakdown::between_naive(b, a)
        );
    }

    #[test]
    fn test_between_uses_earlier_wall_clock() {
        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
        let earlier = moscow.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap();
        // 2024-02-29T23:00+03:00 expressed in UTC
        let later = Utc
            .with_ymd_and_hms(2024, 2, 29, 20, 0, 0)
            .unwrap()
            .fixed_offset();

        assert_eq!(
            CalendarUnitBreakdown::between(&earlier, &later),
            breakdown(0, 1, 0, 0, 0, 0, 0)
        );
    }
}
