#![deny(clippy::all, clippy::pedantic)]

use busybee::domain::time_ago::time_ago;
use time::OffsetDateTime;

pub fn handle(then: i64, now: Option<i64>) {
    let now = now.unwrap_or_else(|| OffsetDateTime::now_utc().unix_timestamp());
    println!("{}", time_ago(now, then));
}
