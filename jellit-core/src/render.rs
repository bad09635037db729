//! Pure Markdown rendering helpers.
//!
//! Entry block:
//!   ## Fri, 15 Aug 2025 · 07:30
//!
//!   - **Bristol:** Type 4, Smooth and soft
//!   - **Urgency:** 3, Moderate
//!   - **Comfort:** 1, No Pain
//!   - **Mood:** 😐
//!
//!   > notes…

use chrono::{DateTime, TimeZone, Utc};

use crate::entry::Entry;
use crate::insights::{Overview, Summary};
use crate::period::Period;
use crate::scales::{bristol_description, bristol_label, comfort_label, urgency_label};

pub const EMPTY_INSIGHTS: &str = "Patterns emerge with time. Keep logging gently.";
pub const DISCLAIMER: &str = "These observations are for personal reflection. \
Always consult healthcare professionals for medical guidance.";

/// `Fri, 15 Aug 2025 · 07:30`, in `tz`.
pub fn format_when<Tz: TimeZone>(
    at: &DateTime<Utc>,
    tz: &Tz,
    date_format: &str,
    time_format: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = at.with_timezone(tz);
    format!("{} · {}", local.format(date_format), local.format(time_format))
}

/// `Type 4, Smooth and soft`; an unknown score shows bare.
pub fn format_bristol(score: i32) -> String {
    labelled(bristol_label(score), bristol_description(score))
}

pub fn format_urgency(level: i32) -> String {
    labelled(level.to_string(), urgency_label(level))
}

pub fn format_comfort(level: i32) -> String {
    labelled(level.to_string(), comfort_label(level))
}

fn labelled(value: String, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{value}, {label}"),
        None => value,
    }
}

/// Render an entry block. The id is kept in a trailing code span so it can be copied
/// into `edit` and `delete`.
pub fn format_entry_block<Tz: TimeZone>(
    entry: &Entry,
    tz: &Tz,
    date_format: &str,
    time_format: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let when = format_when(&entry.timestamp, tz, date_format, time_format);
    let mut out = format!("## {when}\n\n");
    out.push_str(&format!("- **Bristol:** {}\n", format_bristol(entry.bristol_score)));
    out.push_str(&format!("- **Urgency:** {}\n", format_urgency(entry.urgency_level)));
    out.push_str(&format!("- **Comfort:** {}\n", format_comfort(entry.pain_level)));
    if let Some(mood) = entry.mood_emoji.as_deref().filter(|m| !m.is_empty()) {
        out.push_str(&format!("- **Mood:** {mood}\n"));
    }
    out.push_str(&format!("- **Id:** `{}`\n", entry.id));
    if let Some(notes) = entry.trimmed_notes() {
        out.push('\n');
        for line in notes.lines() {
            out.push_str(&format!("> {line}\n"));
        }
    }
    out.push('\n');
    out
}

/// The week at a glance: count and averages, zeros when nothing was logged.
pub fn format_overview(overview: &Overview) -> String {
    format!(
        "# This week\n\n\
         | Entries | Avg Bristol | Avg Urgency | Avg Comfort |\n\
         |:-:|:-:|:-:|:-:|\n\
         | {} | {} | {} | {} |\n\n",
        overview.count, overview.avg_bristol, overview.avg_urgency, overview.avg_pain
    )
}

/// The insights view for one period; `None` renders the gentle empty state.
pub fn format_summary(period: Period, summary: Option<&Summary>) -> String {
    let title = match period {
        Period::Week => "This week",
        Period::Month => "This month",
    };
    let mut out = format!("# Insights: {title}\n\n");

    let Some(summary) = summary else {
        out.push_str(&format!("*{EMPTY_INSIGHTS}*\n\n"));
        return out;
    };

    out.push_str(&format!(
        "- **Entries:** {}\n\
         - **Avg Bristol:** {}\n\
         - **Avg Urgency:** {}\n\
         - **Avg Comfort:** {}\n\
         - **Most common:** {}\n\n",
        summary.count,
        summary.avg_bristol,
        summary.avg_urgency,
        summary.avg_pain,
        summary.most_common_label()
    ));

    out.push_str("## Bristol pattern\n\n| Type | Count | Share |\n|:-|-:|-:|\n");
    for row in summary.distribution_rows() {
        out.push_str(&format!(
            "| {} | {} | {}% |\n",
            bristol_label(row.score),
            row.count,
            row.percentage
        ));
    }
    out.push('\n');

    if !summary.top_keywords.is_empty() {
        out.push_str("## Common themes\n\n");
        let themes: Vec<String> = summary
            .top_keywords
            .iter()
            .map(|k| format!("`{}` ({})", k.word, k.count))
            .collect();
        out.push_str(&themes.join(" · "));
        out.push_str("\n\n");
    }

    out.push_str(&format!("*{DISCLAIMER}*\n"));
    out
}
