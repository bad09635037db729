//! Rolling time windows the insights are scoped to.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use serde::Deserialize;
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::entry::Entry;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr, EnumString, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Since the most recent start-of-week day, at midnight.
    #[default]
    Week,
    /// Since the first day of the month, at midnight.
    Month,
}

/// Returns the instant the current `period` started, in `now`'s time zone.
///
/// # Examples
///
/// ```
/// # use chrono::{FixedOffset, TimeZone, Weekday};
/// # use jellit_core::period::{period_start, Period};
/// let tz = FixedOffset::east_opt(2 * 3600).unwrap();
/// // Thursday
/// let now = tz.with_ymd_and_hms(2025, 8, 14, 15, 30, 0).unwrap();
///
/// let week = period_start(Period::Week, Weekday::Sun, &now);
/// assert_eq!(week, tz.with_ymd_and_hms(2025, 8, 10, 0, 0, 0).unwrap());
///
/// let month = period_start(Period::Month, Weekday::Sun, &now);
/// assert_eq!(month, tz.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap());
/// ```
pub fn period_start<Tz: TimeZone>(
    period: Period,
    week_start: Weekday,
    now: &DateTime<Tz>,
) -> DateTime<Tz> {
    let today = now.date_naive();
    let first_day = match period {
        Period::Week => {
            let back = (7 + today.weekday().num_days_from_monday()
                - week_start.num_days_from_monday())
                % 7;
            today - Duration::days(i64::from(back))
        }
        Period::Month => today - Duration::days(i64::from(today.day0())),
    };
    local_midnight(&now.timezone(), first_day)
}

/// Midnight of `date` in `tz`. When midnight falls in a DST gap, the first valid
/// instant after it is used.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::default());
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

/// Keeps the entries logged at or after the start of the current `period`.
///
/// There is no upper bound, future-dated entries stay in. Input order is kept.
pub fn filter_period<'a, Tz: TimeZone>(
    entries: impl IntoIterator<Item = &'a Entry>,
    period: Period,
    week_start: Weekday,
    now: &DateTime<Tz>,
) -> Vec<&'a Entry> {
    let start = period_start(period, week_start, now).with_timezone(&Utc);
    entries
        .into_iter()
        .filter(|entry| entry.timestamp >= start)
        .collect()
}

/// [`filter_period`] against the local clock.
pub fn filter_current_period<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
    period: Period,
    week_start: Weekday,
) -> Vec<&'a Entry> {
    filter_period(entries, period, week_start, &Local::now())
}
