//! Human-readable "time ago" rendering for comment and post timestamps.

use time::OffsetDateTime;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = SECS_PER_MINUTE * 60;
const SECS_PER_DAY: u64 = SECS_PER_HOUR * 24;
const SECS_PER_MONTH: u64 = SECS_PER_DAY * 30;
const SECS_PER_YEAR: u64 = SECS_PER_DAY * 365;

/// Describe how long ago `previous` was, seen from `current` (both unix seconds).
///
/// Buckets use strict `<` comparisons against one minute, hour, day, 30-day
/// month and 365-day year. The count is the elapsed time divided by the
/// bucket's unit, rounded to the nearest integer with exact halves rounding
/// down, so 90 seconds reads "1 minute ago" and 150 seconds "2 minutes ago".
/// Timestamps in the future read "Just now".
pub fn time_ago(current: i64, previous: i64) -> String {
    let elapsed = current.saturating_sub(previous);
    let Ok(elapsed) = u64::try_from(elapsed) else {
        return "Just now".to_string();
    };

    if elapsed < SECS_PER_MINUTE {
        "Just now".to_string()
    } else if elapsed < SECS_PER_HOUR {
        describe(elapsed, SECS_PER_MINUTE, "minute")
    } else if elapsed < SECS_PER_DAY {
        describe(elapsed, SECS_PER_HOUR, "hour")
    } else if elapsed < SECS_PER_MONTH {
        describe(elapsed, SECS_PER_DAY, "day")
    } else if elapsed < SECS_PER_YEAR {
        describe(elapsed, SECS_PER_MONTH, "month")
    } else {
        describe(elapsed, SECS_PER_YEAR, "year")
    }
}

/// [`time_ago`] over `OffsetDateTime` values.
pub fn time_ago_between(now: OffsetDateTime, then: OffsetDateTime) -> String {
    time_ago(now.unix_timestamp(), then.unix_timestamp())
}

fn describe(elapsed: u64, unit: u64, name: &str) -> String {
    let count = round_half_down(elapsed, unit);
    if count == 1 {
        format!("{count} {name} ago")
    } else {
        format!("{count} {name}s ago")
    }
}

fn round_half_down(value: u64, unit: u64) -> u128 {
    let value = u128::from(value);
    let unit = u128::from(unit);
    (2 * value + unit - 1) / (2 * unit)
}
