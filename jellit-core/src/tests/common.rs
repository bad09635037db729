use crate::Config;
use crate::entry::Entry;
use crate::period::Period;
use crate::session::{Session, SessionUser};
use chrono::{DateTime, Utc, Weekday};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(tmp_dir: PathBuf) -> Config {
    Config {
        store_url: Some("https://project.example.co".to_string()),
        anon_key: Some("anon".to_string()),
        week_start: Weekday::Sun,
        default_period: Period::Week,
        date_format: "%a, %d %b %Y".to_string(),
        time_format: "%H:%M".to_string(),
        recent_limit: 5,
        session_file: tmp_dir.join("session.json"),
        editor: None,
    }
}

pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

/// An entry of `owner-1` with the given scores.
pub fn mk_entry(
    id: &str,
    timestamp: &str,
    bristol: i32,
    urgency: i32,
    pain: i32,
    notes: Option<&str>,
) -> Entry {
    Entry {
        id: id.to_string(),
        owner_id: "owner-1".to_string(),
        timestamp: utc(timestamp),
        bristol_score: bristol,
        urgency_level: urgency,
        pain_level: pain,
        mood_emoji: Some("😐".to_string()),
        notes: notes.map(str::to_string),
        created_at: Some(utc(timestamp)),
    }
}

/// A default-scored entry of any owner.
pub fn mk_entry_for(owner: &str, id: &str, timestamp: &str) -> Entry {
    Entry {
        owner_id: owner.to_string(),
        ..mk_entry(id, timestamp, 4, 3, 1, None)
    }
}

pub fn mk_session(owner: &str) -> Session {
    Session {
        access_token: format!("token-{owner}"),
        refresh_token: Some(format!("refresh-{owner}")),
        user: SessionUser {
            id: owner.to_string(),
            email: Some(format!("{owner}@example.com")),
            is_anonymous: false,
        },
    }
}
