use super::theme::Calm;
use chrono::Local;
use jellit_core::render::{
    format_bristol, format_entry_block, format_overview, format_summary, format_when,
};
use jellit_core::{Entry, Overview, Period, Summary};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub time_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Calm::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%a, %d %b %Y".to_string(),
                    time_format: "%H:%M".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// One line per entry: `Fri, 15 Aug 2025 · 07:30  Type 4, Smooth and soft  😐  (id)`
    pub fn print_entry_line(&self, entry: &Entry) {
        let mut when = format_when(
            &entry.timestamp,
            &Local,
            &self.opts.date_format,
            &self.opts.time_format,
        );
        let mut bristol = format_bristol(entry.bristol_score);
        let mood = entry.mood_emoji.as_deref().unwrap_or("");
        let mut id = format!("({})", entry.id);
        if self.opts.use_color {
            when = when.with(Color::Cyan).to_string();
            bristol = bristol.with(Color::Yellow).to_string();
            id = id.with(Color::DarkGrey).to_string();
        }
        println!("{when}  {bristol}  {mood}  {id}");
    }

    pub fn print_entries(&self, entries: &[Entry]) {
        for (i, entry) in entries.iter().enumerate() {
            let md = format_entry_block(
                entry,
                &Local,
                &self.opts.date_format,
                &self.opts.time_format,
            );
            self.print_md(md.trim_end());
            println!();
            if i + 1 < entries.len() {
                self.print_md("---\n");
            }
        }
    }

    pub fn print_overview(&self, overview: &Overview) {
        self.print_md(&format_overview(overview));
    }

    pub fn print_summary(&self, period: Period, summary: Option<&Summary>) {
        self.print_md(&format_summary(period, summary));
    }
}
