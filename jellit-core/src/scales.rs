//! The rating scales an entry is logged with, and their human labels.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

use crate::error::Error;

pub const BRISTOL_RANGE: RangeInclusive<i32> = 1..=7;
pub const URGENCY_RANGE: RangeInclusive<i32> = 1..=5;
pub const COMFORT_RANGE: RangeInclusive<i32> = 1..=5;

/// Values a new log starts with.
pub const DEFAULT_BRISTOL: i32 = 4;
pub const DEFAULT_URGENCY: i32 = 3;
pub const DEFAULT_COMFORT: i32 = 1;
pub const DEFAULT_MOOD: Mood = Mood::Neutral;

/// The fixed set of moods an entry may carry.
///
/// Parses from the emoji itself or from its name (`"happy"`, `"neutral"`, ...),
/// always displays as the emoji.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, IntoStaticStr, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mood {
    #[strum(to_string = "😊", serialize = "happy")]
    Happy,
    #[strum(to_string = "😐", serialize = "neutral")]
    Neutral,
    #[strum(to_string = "😟", serialize = "worried")]
    Worried,
    #[strum(to_string = "😫", serialize = "exhausted")]
    Exhausted,
    #[strum(to_string = "😣", serialize = "uncomfortable")]
    Uncomfortable,
}

impl Mood {
    /// Parses a mood, reporting unknown values as an invalid entry field.
    pub fn parse(input: &str) -> Result<Self, Error> {
        Mood::from_str(input.trim()).map_err(|_| Error::InvalidEntry {
            field: "mood_emoji",
            value: input.to_string(),
            expected: "one of 😊 😐 😟 😫 😣",
        })
    }

    pub fn emoji(&self) -> &'static str {
        (*self).into()
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.emoji())
    }
}

/// `Type 4`
pub fn bristol_label(score: i32) -> String {
    format!("Type {score}")
}

pub fn bristol_description(score: i32) -> Option<&'static str> {
    match score {
        1 => Some("Separate hard lumps"),
        2 => Some("Lumpy and sausage-like"),
        3 => Some("Sausage with cracks"),
        4 => Some("Smooth and soft"),
        5 => Some("Soft blobs"),
        6 => Some("Mushy consistency"),
        7 => Some("Liquid consistency"),
        _ => None,
    }
}

pub fn urgency_label(level: i32) -> Option<&'static str> {
    match level {
        1 => Some("Very Easy"),
        2 => Some("Easy"),
        3 => Some("Moderate"),
        4 => Some("Urgent"),
        5 => Some("Very Urgent"),
        _ => None,
    }
}

pub fn comfort_label(level: i32) -> Option<&'static str> {
    match level {
        1 => Some("No Pain"),
        2 => Some("Mild"),
        3 => Some("Moderate"),
        4 => Some("Significant"),
        5 => Some("Severe"),
        _ => None,
    }
}

/// Checks `value` against a scale, naming the offending field on failure.
pub(crate) fn check_scale(
    field: &'static str,
    value: i32,
    range: &RangeInclusive<i32>,
) -> Result<(), Error> {
    if range.contains(&value) {
        return Ok(());
    }
    let expected = match (*range.start(), *range.end()) {
        (1, 7) => "between 1 and 7",
        (1, 5) => "between 1 and 5",
        _ => "within its scale",
    };
    Err(Error::InvalidEntry {
        field,
        value: value.to_string(),
        expected,
    })
}
