use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Accepted "date time" layouts, in the writer's local time.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parses when an entry happened, as typed on the command line.
///
/// Understood, in this order:
/// 1.  **RFC 3339** with an explicit offset: `2025-08-15T07:30:00Z`.
/// 2.  **Local date and time**: `2025-08-15 07:30`.
/// 3.  **Day then optional time**: `today`, `yesterday 21:00`, `2025-08-14 8pm`.
///     A day without a time keeps the current time of day.
/// 4.  **Time alone**: `07:30`, `6am`, `noon`, taken as today.
///
/// Local times are resolved in `now`'s zone; one that doesn't exist there (a DST gap)
/// yields `None`.
///
/// # Examples
///
/// ```
/// # use chrono::{FixedOffset, TimeZone, Utc};
/// # use jellit_core::parse_input::parse_timestamp;
/// let now = FixedOffset::east_opt(2 * 3600)
///     .unwrap()
///     .with_ymd_and_hms(2025, 8, 15, 12, 0, 0)
///     .unwrap();
///
/// let at = parse_timestamp("yesterday 21:00", &now).unwrap();
/// assert_eq!(at, Utc.with_ymd_and_hms(2025, 8, 14, 19, 0, 0).unwrap());
///
/// let exact = parse_timestamp("2025-08-01T06:15:00Z", &now).unwrap();
/// assert_eq!(exact, Utc.with_ymd_and_hms(2025, 8, 1, 6, 15, 0).unwrap());
/// ```
pub fn parse_timestamp<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return resolve_local(naive, now);
    }

    let today = now.date_naive();
    let (day_token, rest) = match s.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (s, ""),
    };

    if let Some(date) = parse_day_token(day_token, today) {
        let time = if rest.is_empty() {
            now.time()
        } else {
            parse_time_token(rest)?
        };
        return resolve_local(date.and_time(time), now);
    }

    let time = parse_time_token(s)?;
    resolve_local(today.and_time(time), now)
}

/// Resolves a calendar day: `today`, `yesterday`, or a formatted date.
pub fn parse_day_token(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    match s.to_ascii_lowercase().as_str() {
        "today" => return Some(today),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {}
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Parses a time of day.
///
/// Case-insensitive; understands `noon`, `midnight`, 12-hour times (`6am`, `6:30 pm`)
/// and 24-hour `HH:MM`.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveTime;
/// # use jellit_core::parse_input::parse_time_token;
/// assert_eq!(parse_time_token("noon"), NaiveTime::from_hms_opt(12, 0, 0));
/// assert_eq!(parse_time_token("6:30 pm"), NaiveTime::from_hms_opt(18, 30, 0));
/// assert_eq!(parse_time_token("07:05"), NaiveTime::from_hms_opt(7, 5, 0));
/// ```
pub fn parse_time_token(s: &str) -> Option<NaiveTime> {
    let lower = s.trim().to_ascii_lowercase();
    match lower.as_str() {
        "noon" => return NaiveTime::from_hms_opt(12, 0, 0),
        "midnight" => return NaiveTime::from_hms_opt(0, 0, 0),
        _ => {}
    }

    if let Some((core, is_pm)) = lower
        .strip_suffix("am")
        .map(|core| (core, false))
        .or_else(|| lower.strip_suffix("pm").map(|core| (core, true)))
    {
        let core = core.trim();
        let (h, m) = match core.split_once(':') {
            Some((h, m)) => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
            None => (core.parse::<u32>().ok()?, 0),
        };
        if h == 0 || h > 12 {
            return None;
        }
        let h24 = match (h, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (_, true) => h + 12,
            (_, false) => h,
        };
        return NaiveTime::from_hms_opt(h24, m, 0);
    }

    NaiveTime::parse_from_str(&lower, "%H:%M").ok()
}

fn resolve_local<Tz: TimeZone>(naive: NaiveDateTime, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
    now.timezone()
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
