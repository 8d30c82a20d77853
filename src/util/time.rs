use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::error::{Error, Result};

/// Return the earlier of two instants, preferring `a` on a tie
pub fn earlier_of<Tz: TimeZone>(a: DateTime<Tz>, b: DateTime<Tz>) -> DateTime<Tz> {
    if a <= b {
        a
    } else {
        b
    }
}

/// Return the later of two instants, preferring `a` on a tie
pub fn later_of<Tz: TimeZone>(a: DateTime<Tz>, b: DateTime<Tz>) -> DateTime<Tz> {
    if a >= b {
        a
    } else {
        b
    }
}

/// Parse an instant given either as RFC 3339 text or as integer Unix seconds.
///
/// Unix seconds are read as UTC.
pub fn parse_instant(text: &str) -> Result<DateTime<FixedOffset>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }

    let seconds = text
        .parse::<i64>()
        .map_err(|_| Error::InvalidInstant(text.to_string()))?;

    match Utc.timestamp_opt(seconds, 0).single() {
        Some(dt) => Ok(dt.fixed_offset()),
        None => Err(Error::InvalidInstant(text.to_string())),
    }
}
