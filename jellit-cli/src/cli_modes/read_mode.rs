use super::App;
use crate::render::Renderer;
use anyhow::Result;
use chrono::Local;
use jellit_core::Period;

/// The weekly overview, then the most recent entries.
pub fn dashboard(app: &mut App, renderer: &Renderer) -> Result<()> {
    app.signed_in()?;
    let now = Local::now();
    renderer.print_overview(&app.controller.overview(&now));

    let entries = app.controller.entries();
    if entries.is_empty() {
        renderer.print_info("Nothing logged yet. Start with `jellit log`.");
        return Ok(());
    }
    let recent = &entries[..entries.len().min(app.config.recent_limit)];
    renderer.print_md("## Recent\n\n");
    for entry in recent {
        renderer.print_entry_line(entry);
    }
    Ok(())
}

pub fn history(app: &mut App, renderer: &Renderer, limit: Option<usize>) -> Result<()> {
    app.signed_in()?;
    let entries = app.controller.entries();
    if entries.is_empty() {
        renderer.print_info("No entries found");
        return Ok(());
    }
    let shown = &entries[..limit.unwrap_or(entries.len()).min(entries.len())];
    renderer.print_info(&format!("{} of {} entries.", shown.len(), entries.len()));
    renderer.print_entries(shown);
    Ok(())
}

pub fn insights(app: &mut App, renderer: &Renderer, period: Option<Period>) -> Result<()> {
    app.signed_in()?;
    let period = period.unwrap_or(app.config.default_period);
    let summary = app.controller.summary(period, &Local::now());
    renderer.print_summary(period, summary.as_ref());
    Ok(())
}
