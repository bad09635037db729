//! Recurring words in entry notes.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens of this many characters or fewer are ignored ("the", "gas", "and").
pub const MAX_IGNORED_LEN: usize = 3;

/// How many keywords the insights view shows.
pub const TOP_KEYWORDS: usize = 5;

/// Runs of characters that are not letters, digits or underscore.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Case-insensitive word counts across many notes, remembering the order in which
/// each word was first seen.
#[derive(Debug, Default)]
pub struct KeywordTally {
    counts: IndexMap<String, usize>,
}

impl KeywordTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_text(&mut self, text: &str) {
        let lower = text.to_lowercase();
        for token in NON_WORD.split(&lower) {
            if token.chars().count() <= MAX_IGNORED_LEN {
                continue;
            }
            *self.counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// The `limit` most frequent words. Equal counts keep first-seen order.
    pub fn top(&self, limit: usize) -> Vec<KeywordCount> {
        let mut ranked: Vec<(&String, &usize)> = self.counts.iter().collect();
        // stable: ties stay in insertion order
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(word, count)| KeywordCount {
                word: word.clone(),
                count: *count,
            })
            .collect()
    }
}

/// Tallies every non-blank note and returns the top `limit` words.
///
/// # Examples
///
/// ```
/// # use jellit_core::keywords::top_keywords;
/// let top = top_keywords(["Bloating after lunch", "bloating, BLOATING!"], 5);
/// assert_eq!(top[0].word, "bloating");
/// assert_eq!(top[0].count, 3);
/// assert_eq!(top[1].word, "after");
/// assert_eq!(top[2].word, "lunch");
/// ```
pub fn top_keywords<'a>(notes: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<KeywordCount> {
    let mut tally = KeywordTally::new();
    for note in notes {
        let note = note.trim();
        if note.is_empty() {
            continue;
        }
        tally.add_text(note);
    }
    tally.top(limit)
}
