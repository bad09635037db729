use anyhow::{Context, Result};
use chrono::Weekday;
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf, str::FromStr};

use crate::period::Period;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base url of the hosted backend (e.g. `https://xyz.supabase.co`).
    pub store_url: Option<String>,
    /// Public (anon) key of the hosted backend.
    pub anon_key: Option<String>,
    /// First day of the "week" insights window. Default is Sunday.
    pub week_start: Weekday,
    /// Window `jellit insights` shows when none is given.
    pub default_period: Period,
    pub date_format: String,
    pub time_format: String,
    /// How many entries the dashboard lists.
    pub recent_limit: usize,
    /// Where the signed-in session is kept between runs.
    pub session_file: PathBuf,
    /// Editor for writing notes; `$VISUAL`/`$EDITOR` when unset.
    pub editor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    store_url: Option<String>,
    anon_key: Option<String>,
    week_start: Option<String>,
    default_period: Option<String>,
    date_format: Option<String>,
    time_format: Option<String>,
    recent_limit: Option<usize>,
    session_file: Option<PathBuf>,
    editor: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply
    /// defaults for anything left out.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let week_start = file_config
            .week_start
            .as_deref()
            .and_then(|day| Weekday::from_str(day.trim()).ok())
            .unwrap_or(Weekday::Sun);

        let default_period = file_config
            .default_period
            .as_deref()
            .and_then(|p| Period::from_str(p.trim()).ok())
            .unwrap_or_default();

        let session_file = file_config
            .session_file
            .unwrap_or_else(Self::default_session_file);

        Self {
            store_url: file_config.store_url.filter(|url| !url.trim().is_empty()),
            anon_key: file_config.anon_key.filter(|key| !key.trim().is_empty()),
            week_start,
            default_period,
            date_format: file_config
                .date_format
                .unwrap_or_else(|| "%a, %d %b %Y".to_string()),
            time_format: file_config
                .time_format
                .unwrap_or_else(|| "%H:%M".to_string()),
            recent_limit: file_config.recent_limit.unwrap_or(5),
            session_file,
            editor: file_config.editor,
        }
    }

    /// Default session file: `{data_dir}/jellit/session.json`
    /// - macOS:   `~/Library/Application Support/jellit/session.json`
    /// - Linux:   `$XDG_DATA_HOME/jellit/session.json` or `~/.local/share/jellit/session.json`
    /// - Windows: `%APPDATA%\jellit\session.json`
    fn default_session_file() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("jellit").join("session.json")
        } else {
            PathBuf::from("./jellit/session.json")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("jellit")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("jellit").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
