//! Statistics over a window of entries: averages, Bristol distribution and note themes.

use std::fmt;

use indexmap::IndexMap;

use crate::entry::Entry;
use crate::keywords::{KeywordCount, KeywordTally, TOP_KEYWORDS};
use crate::scales::bristol_label;

/// Arithmetic mean of integer scores.
///
/// Kept as sum and count so the one-decimal display rounds half-up exactly.
/// An empty mean is `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Average {
    sum: i64,
    count: usize,
}

impl Average {
    pub fn of(values: impl IntoIterator<Item = i32>) -> Self {
        values.into_iter().fold(Self::default(), |acc, value| Self {
            sum: acc.sum + i64::from(value),
            count: acc.count + 1,
        })
    }

    pub fn value(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum as f64 / self.count as f64
    }

    /// The mean in tenths, rounded half-up (`2.25` -> `23`).
    pub fn tenths(&self) -> i64 {
        if self.count == 0 {
            return 0;
        }
        let count = self.count as i64;
        (20 * self.sum + count).div_euclid(2 * count)
    }
}

/// One decimal place, half-up: `4.0`, `2.5`.
impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tenths = self.tenths();
        let sign = if tenths < 0 { "-" } else { "" };
        let abs = tenths.abs();
        write!(f, "{sign}{}.{}", abs / 10, abs % 10)
    }
}

/// Count and averages; defined for an empty window too (averages are `0.0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overview {
    pub count: usize,
    pub avg_bristol: Average,
    pub avg_urgency: Average,
    pub avg_pain: Average,
}

impl Overview {
    pub fn compute<'a>(entries: impl IntoIterator<Item = &'a Entry> + Clone) -> Self {
        let avg_bristol = Average::of(entries.clone().into_iter().map(|e| e.bristol_score));
        let avg_urgency = Average::of(entries.clone().into_iter().map(|e| e.urgency_level));
        let avg_pain = Average::of(entries.into_iter().map(|e| e.pain_level));
        Self {
            count: avg_bristol.count,
            avg_bristol,
            avg_urgency,
            avg_pain,
        }
    }
}

/// A row of the Bristol pattern chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionRow {
    pub score: i32,
    pub count: usize,
    /// Share of the window, rounded to a whole percent.
    pub percentage: u32,
}

/// Everything the insights view shows for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub avg_bristol: Average,
    pub avg_urgency: Average,
    pub avg_pain: Average,
    /// Observed scores only, in the order they were first seen.
    pub bristol_distribution: IndexMap<i32, usize>,
    pub most_common: Option<(i32, usize)>,
    pub top_keywords: Vec<KeywordCount>,
}

impl Summary {
    /// Computes the summary in a single scan of `entries`.
    ///
    /// Ties (most common score, keyword ranking) go to whatever was met first, so
    /// for newest-first input the most recent wins.
    pub fn compute<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let mut count = 0usize;
        let (mut bristol, mut urgency, mut pain) = (0i64, 0i64, 0i64);
        let mut distribution: IndexMap<i32, usize> = IndexMap::new();
        let mut keywords = KeywordTally::new();

        for entry in entries {
            count += 1;
            bristol += i64::from(entry.bristol_score);
            urgency += i64::from(entry.urgency_level);
            pain += i64::from(entry.pain_level);
            *distribution.entry(entry.bristol_score).or_insert(0) += 1;
            if let Some(notes) = entry.trimmed_notes() {
                keywords.add_text(notes);
            }
        }

        let most_common = most_common(&distribution);
        Self {
            count,
            avg_bristol: Average { sum: bristol, count },
            avg_urgency: Average { sum: urgency, count },
            avg_pain: Average { sum: pain, count },
            bristol_distribution: distribution,
            most_common,
            top_keywords: keywords.top(TOP_KEYWORDS),
        }
    }

    /// `Type 4 (2 times)`, or `N/A` for an empty window.
    pub fn most_common_label(&self) -> String {
        match self.most_common {
            Some((score, count)) => format!("{} ({count} times)", bristol_label(score)),
            None => "N/A".to_string(),
        }
    }

    /// Distribution sorted by score, with each score's share of the window.
    pub fn distribution_rows(&self) -> Vec<DistributionRow> {
        let mut rows: Vec<DistributionRow> = self
            .bristol_distribution
            .iter()
            .map(|(&score, &count)| DistributionRow {
                score,
                count,
                percentage: percentage(count, self.count),
            })
            .collect();
        rows.sort_by_key(|row| row.score);
        rows
    }
}

/// Summary of a filtered window, `None` when the window is empty so the caller can
/// show its empty state instead.
pub fn summarize<'a>(entries: &[&'a Entry]) -> Option<Summary> {
    if entries.is_empty() {
        return None;
    }
    Some(Summary::compute(entries.iter().copied()))
}

fn most_common(distribution: &IndexMap<i32, usize>) -> Option<(i32, usize)> {
    let mut best: Option<(i32, usize)> = None;
    for (&score, &count) in distribution {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((score, count)),
        }
    }
    best
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * part + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::mk_entry;
    use pretty_assertions::assert_eq;

    #[test]
    fn two_entry_scenario() {
        let entries = vec![
            mk_entry("b", "2025-08-14T09:00:00Z", 4, 3, 2, None),
            mk_entry("a", "2025-08-13T09:00:00Z", 4, 2, 1, None),
        ];
        let refs: Vec<&Entry> = entries.iter().collect();
        let summary = summarize(&refs).expect("non-empty");
        assert_eq!(summary.count, 2);
        assert_eq!(summary.avg_bristol.to_string(), "4.0");
        assert_eq!(summary.avg_urgency.to_string(), "2.5");
        assert_eq!(summary.avg_pain.to_string(), "1.5");
        assert_eq!(summary.bristol_distribution.len(), 1);
        assert_eq!(summary.bristol_distribution.get(&4), Some(&2));
        assert_eq!(summary.most_common_label(), "Type 4 (2 times)");
    }

    #[test]
    fn empty_window_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn averages_round_half_up() {
        assert_eq!(Average::of([2, 2, 2, 3]).to_string(), "2.3"); // 2.25
        assert_eq!(Average::of([1, 2]).to_string(), "1.5");
        assert_eq!(Average::of([1, 1, 2]).to_string(), "1.3"); // 1.333
        assert_eq!(Average::of([1, 2, 2]).to_string(), "1.7"); // 1.666
        assert_eq!(Average::of([7]).to_string(), "7.0");
        assert_eq!(Average::of([-1, 0]).to_string(), "-0.5");
        assert_eq!(Average::default().to_string(), "0.0");
        assert_eq!(Average::default().value(), 0.0);
    }

    #[test]
    fn averages_stay_within_scales() {
        let entries: Vec<Entry> = (0..50)
            .map(|i| {
                mk_entry(
                    &i.to_string(),
                    "2025-08-14T09:00:00Z",
                    1 + (i * 3) % 7,
                    1 + (i * 2) % 5,
                    1 + i % 5,
                    None,
                )
            })
            .collect();
        for n in 1..=entries.len() {
            let summary = Summary::compute(entries.iter().take(n));
            assert!((1.0..=7.0).contains(&summary.avg_bristol.value()));
            assert!((1.0..=5.0).contains(&summary.avg_urgency.value()));
            assert!((1.0..=5.0).contains(&summary.avg_pain.value()));
            assert_eq!(summary.bristol_distribution.values().sum::<usize>(), summary.count);
        }
    }

    #[test]
    fn distribution_omits_unseen_scores_and_keeps_scan_order() {
        let entries = vec![
            mk_entry("c", "2025-08-14T09:00:00Z", 6, 1, 1, None),
            mk_entry("b", "2025-08-13T09:00:00Z", 2, 1, 1, None),
            mk_entry("a", "2025-08-12T09:00:00Z", 6, 1, 1, None),
        ];
        let summary = Summary::compute(&entries);
        let keys: Vec<i32> = summary.bristol_distribution.keys().copied().collect();
        assert_eq!(keys, vec![6, 2]);
        assert_eq!(summary.most_common, Some((6, 2)));
    }

    #[test]
    fn most_common_tie_goes_to_first_seen() {
        // newest first: the 5 was logged most recently
        let entries = vec![
            mk_entry("d", "2025-08-15T09:00:00Z", 5, 1, 1, None),
            mk_entry("c", "2025-08-14T09:00:00Z", 3, 1, 1, None),
            mk_entry("b", "2025-08-13T09:00:00Z", 3, 1, 1, None),
            mk_entry("a", "2025-08-12T09:00:00Z", 5, 1, 1, None),
        ];
        let summary = Summary::compute(&entries);
        assert_eq!(summary.most_common, Some((5, 2)));
        assert_eq!(summary.most_common_label(), "Type 5 (2 times)");
    }

    #[test]
    fn keywords_use_notes_across_the_window() {
        let entries = vec![
            mk_entry("b", "2025-08-14T09:00:00Z", 4, 1, 1, Some("Bloating bloating")),
            mk_entry("a", "2025-08-13T09:00:00Z", 4, 1, 1, Some("BLOATING")),
            mk_entry("c", "2025-08-12T09:00:00Z", 4, 1, 1, Some("   ")),
        ];
        let summary = Summary::compute(&entries);
        assert_eq!(
            summary.top_keywords,
            vec![KeywordCount {
                word: "bloating".into(),
                count: 3
            }]
        );
    }

    #[test]
    fn out_of_range_scores_still_average() {
        let entries = vec![
            mk_entry("a", "2025-08-14T09:00:00Z", 9, 0, 1, None),
            mk_entry("b", "2025-08-13T09:00:00Z", 1, 0, 1, None),
        ];
        let summary = Summary::compute(&entries);
        assert_eq!(summary.avg_bristol.to_string(), "5.0");
        assert_eq!(summary.avg_urgency.to_string(), "0.0");
        assert_eq!(summary.bristol_distribution.get(&9), Some(&1));
    }

    #[test]
    fn distribution_rows_are_sorted_with_percentages() {
        let entries = vec![
            mk_entry("a", "2025-08-14T09:00:00Z", 6, 1, 1, None),
            mk_entry("b", "2025-08-13T09:00:00Z", 2, 1, 1, None),
            mk_entry("c", "2025-08-12T09:00:00Z", 6, 1, 1, None),
        ];
        let rows = Summary::compute(&entries).distribution_rows();
        assert_eq!(
            rows,
            vec![
                DistributionRow {
                    score: 2,
                    count: 1,
                    percentage: 33
                },
                DistributionRow {
                    score: 6,
                    count: 2,
                    percentage: 67
                },
            ]
        );
    }

    #[test]
    fn overview_is_zero_for_empty_window() {
        let entries: Vec<Entry> = Vec::new();
        let overview = Overview::compute(&entries);
        assert_eq!(overview.count, 0);
        assert_eq!(overview.avg_bristol.to_string(), "0.0");
        assert_eq!(overview.avg_pain.to_string(), "0.0");
    }

    #[test]
    fn overview_matches_summary_averages() {
        let entries = vec![
            mk_entry("a", "2025-08-14T09:00:00Z", 3, 2, 4, None),
            mk_entry("b", "2025-08-13T09:00:00Z", 5, 5, 1, None),
        ];
        let overview = Overview::compute(&entries);
        let summary = Summary::compute(&entries);
        assert_eq!(overview.count, summary.count);
        assert_eq!(overview.avg_bristol, summary.avg_bristol);
        assert_eq!(overview.avg_urgency, summary.avg_urgency);
        assert_eq!(overview.avg_pain, summary.avg_pain);
    }
}
