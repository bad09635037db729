use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::scales::{
    BRISTOL_RANGE, COMFORT_RANGE, DEFAULT_BRISTOL, DEFAULT_COMFORT, DEFAULT_MOOD, DEFAULT_URGENCY,
    Mood, URGENCY_RANGE, check_scale,
};

/// One logged observation, as stored in the remote `entries` table.
///
/// Rows read back from the store are taken as-is: scores outside their scale and
/// moods outside [`Mood`] are kept, only the write path validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(rename = "user_id")]
    pub owner_id: String,
    pub timestamp: DateTime<Utc>,
    pub bristol_score: i32,
    pub urgency_level: i32,
    /// Shown as "comfort".
    pub pain_level: i32,
    #[serde(default)]
    pub mood_emoji: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Notes with surrounding whitespace removed, `None` when nothing is left.
    pub fn trimmed_notes(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
    }
}

/// Fields supplied when logging a new entry. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryDraft {
    /// Left out of the request when `None`, the store then uses the insert time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub bristol_score: i32,
    pub urgency_level: i32,
    pub pain_level: i32,
    pub mood_emoji: Option<Mood>,
    pub notes: Option<String>,
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self {
            timestamp: None,
            bristol_score: DEFAULT_BRISTOL,
            urgency_level: DEFAULT_URGENCY,
            pain_level: DEFAULT_COMFORT,
            mood_emoji: Some(DEFAULT_MOOD),
            notes: None,
        }
    }
}

impl EntryDraft {
    pub fn validate(&self) -> Result<(), Error> {
        check_scale("bristol_score", self.bristol_score, &BRISTOL_RANGE)?;
        check_scale("urgency_level", self.urgency_level, &URGENCY_RANGE)?;
        check_scale("pain_level", self.pain_level, &COMFORT_RANGE)?;
        Ok(())
    }

    /// Trims the notes; blank notes are dropped.
    pub fn normalized(mut self) -> Self {
        self.notes = normalize_notes(self.notes);
        self
    }
}

/// A partial update. Only fields that are `Some` are sent; `Some(None)` clears an
/// optional column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bristol_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_emoji: Option<Option<Mood>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self == &EntryPatch::default()
    }

    pub fn validate(&self) -> Result<(), Error> {
        if let Some(score) = self.bristol_score {
            check_scale("bristol_score", score, &BRISTOL_RANGE)?;
        }
        if let Some(level) = self.urgency_level {
            check_scale("urgency_level", level, &URGENCY_RANGE)?;
        }
        if let Some(level) = self.pain_level {
            check_scale("pain_level", level, &COMFORT_RANGE)?;
        }
        Ok(())
    }

    pub fn normalized(mut self) -> Self {
        self.notes = self.notes.map(normalize_notes);
        self
    }

    /// Applies the present fields to `entry`.
    pub fn apply_to(&self, entry: &mut Entry) {
        if let Some(timestamp) = self.timestamp {
            entry.timestamp = timestamp;
        }
        if let Some(score) = self.bristol_score {
            entry.bristol_score = score;
        }
        if let Some(level) = self.urgency_level {
            entry.urgency_level = level;
        }
        if let Some(level) = self.pain_level {
            entry.pain_level = level;
        }
        if let Some(mood) = self.mood_emoji {
            entry.mood_emoji = mood.map(|m| m.emoji().to_string());
        }
        if let Some(notes) = &self.notes {
            entry.notes = notes.clone();
        }
    }
}

fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::mk_entry;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn entry_reads_store_row() {
        let row = json!({
            "id": "5f0c",
            "user_id": "owner-1",
            "timestamp": "2025-08-15T08:30:00+00:00",
            "bristol_score": 4,
            "urgency_level": 2,
            "pain_level": 1,
            "mood_emoji": "😊",
            "notes": null,
            "created_at": "2025-08-15T08:31:12.123456+00:00"
        });
        let entry: Entry = serde_json::from_value(row).unwrap();
        assert_eq!(entry.owner_id, "owner-1");
        assert_eq!(entry.bristol_score, 4);
        assert_eq!(entry.mood_emoji.as_deref(), Some("😊"));
        assert!(entry.notes.is_none());
        assert!(entry.created_at.is_some());
    }

    #[test]
    fn entry_tolerates_missing_optional_columns() {
        let row = json!({
            "id": "1",
            "user_id": "owner-1",
            "timestamp": "2025-08-15T08:30:00Z",
            "bristol_score": 9,
            "urgency_level": 2,
            "pain_level": 1
        });
        let entry: Entry = serde_json::from_value(row).unwrap();
        assert_eq!(entry.bristol_score, 9);
        assert!(entry.created_at.is_none());
    }

    #[test]
    fn draft_defaults_match_log_form() {
        let draft = EntryDraft::default();
        assert_eq!(draft.bristol_score, 4);
        assert_eq!(draft.urgency_level, 3);
        assert_eq!(draft.pain_level, 1);
        assert_eq!(draft.mood_emoji, Some(Mood::Neutral));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn draft_validation_rejects_each_scale() {
        let bad_bristol = EntryDraft {
            bristol_score: 0,
            ..Default::default()
        };
        let bad_urgency = EntryDraft {
            urgency_level: 6,
            ..Default::default()
        };
        let bad_pain = EntryDraft {
            pain_level: -1,
            ..Default::default()
        };
        for (draft, field) in [
            (bad_bristol, "bristol_score"),
            (bad_urgency, "urgency_level"),
            (bad_pain, "pain_level"),
        ] {
            match draft.validate() {
                Err(Error::InvalidEntry { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected invalid {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn draft_serializes_without_timestamp_when_absent() {
        let draft = EntryDraft {
            notes: Some("  felt fine  ".into()),
            ..Default::default()
        }
        .normalized();
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({
                "bristol_score": 4,
                "urgency_level": 3,
                "pain_level": 1,
                "mood_emoji": "😐",
                "notes": "felt fine"
            })
        );
    }

    #[test]
    fn blank_notes_are_dropped() {
        let draft = EntryDraft {
            notes: Some("   ".into()),
            ..Default::default()
        }
        .normalized();
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn patch_only_sends_present_fields() {
        let patch = EntryPatch {
            urgency_level: Some(2),
            notes: Some(None),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({ "urgency_level": 2, "notes": null }));
        assert!(!patch.is_empty());
        assert!(EntryPatch::default().is_empty());
    }

    #[test]
    fn patch_applies_to_entry() {
        let mut entry = mk_entry("a", "2025-08-15T08:00:00Z", 4, 2, 1, Some("old note"));
        let patch = EntryPatch {
            bristol_score: Some(5),
            mood_emoji: Some(Some(Mood::Happy)),
            notes: Some(Some("  new note ".into())),
            ..Default::default()
        }
        .normalized();
        patch.apply_to(&mut entry);
        assert_eq!(entry.bristol_score, 5);
        assert_eq!(entry.urgency_level, 2);
        assert_eq!(entry.mood_emoji.as_deref(), Some("😊"));
        assert_eq!(entry.notes.as_deref(), Some("new note"));
    }

    #[test]
    fn trimmed_notes_skips_whitespace() {
        let entry = mk_entry("a", "2025-08-15T08:00:00Z", 4, 2, 1, Some(" \n "));
        assert_eq!(entry.trimmed_notes(), None);
        let entry = mk_entry("b", "2025-08-15T08:00:00Z", 4, 2, 1, Some(" gas "));
        assert_eq!(entry.trimmed_notes(), Some("gas"));
    }
}
