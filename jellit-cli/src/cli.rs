use clap::{Args, Parser, Subcommand};
use jellit_core::Period;
use jellit_core::scales::{DEFAULT_BRISTOL, DEFAULT_COMFORT, DEFAULT_URGENCY};

use crate::render::ColorMode;

/// jellit — a gentle digestive health journal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,
    /// Log what jellit is doing to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Base url of the hosted backend; overrides `store_url` from config.toml.
    #[arg(long, env = "JELLIT_STORE_URL", hide_env_values = true, global = true)]
    pub store_url: Option<String>,
    /// Public key of the hosted backend; overrides `anon_key` from config.toml.
    #[arg(long, env = "JELLIT_ANON_KEY", hide_env_values = true, global = true)]
    pub anon_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// This week at a glance and the latest entries (default).
    Dashboard,
    /// Log a new entry (e.g., `jellit log -b 4 -u 2 --at "yesterday 21:00" after dinner`).
    Log(LogArgs),
    /// List entries, newest first.
    History {
        /// Show at most this many entries.
        #[arg(long, short)]
        limit: Option<usize>,
    },
    /// Change fields of an entry. Fields left out stay as they are.
    Edit(EditArgs),
    /// Delete an entry.
    Delete {
        /// Id of the entry, as shown by `history`.
        id: String,
        /// Don't ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
    /// Patterns over the current week or month.
    Insights {
        /// `week` or `month`. Defaults to `default_period` from config.toml.
        #[arg(long, short)]
        period: Option<Period>,
    },
    /// Sign in with email and password.
    SignIn(CredentialArgs),
    /// Create an account.
    SignUp(CredentialArgs),
    /// Sign out and forget the saved session.
    SignOut,
    /// Show who is signed in.
    Whoami,
}

#[derive(Args, Debug)]
pub struct LogArgs {
    /// Bristol stool type, 1 (hard lumps) to 7 (liquid).
    #[arg(long, short, default_value_t = DEFAULT_BRISTOL)]
    pub bristol: i32,
    /// How urgent it was, 1 (very easy) to 5 (very urgent).
    #[arg(long, short, default_value_t = DEFAULT_URGENCY)]
    pub urgency: i32,
    /// Pain, 1 (none) to 5 (severe).
    #[arg(long, short, default_value_t = DEFAULT_COMFORT)]
    pub comfort: i32,
    /// Mood emoji or name: happy, neutral, worried, exhausted, uncomfortable.
    #[arg(long, short)]
    pub mood: Option<String>,
    /// When it happened (e.g., `2025-08-15 07:30`, `yesterday 9pm`). Defaults to now.
    #[arg(long)]
    pub at: Option<String>,
    /// Write the notes in your $EDITOR.
    #[arg(long, short, conflicts_with = "notes")]
    pub editor: bool,
    /// Free text notes.
    pub notes: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Id of the entry, as shown by `history`.
    pub id: String,
    #[arg(long, short)]
    pub bristol: Option<i32>,
    #[arg(long, short)]
    pub urgency: Option<i32>,
    #[arg(long, short)]
    pub comfort: Option<i32>,
    #[arg(long, short)]
    pub mood: Option<String>,
    /// Replace the notes.
    #[arg(long, short, conflicts_with_all = ["clear_notes", "editor"])]
    pub notes: Option<String>,
    /// Remove the notes.
    #[arg(long, conflicts_with = "editor")]
    pub clear_notes: bool,
    /// Edit the current notes in your $EDITOR.
    #[arg(long, short)]
    pub editor: bool,
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Args, Debug)]
pub struct CredentialArgs {
    #[arg(long, short)]
    pub email: String,
    /// Read from stdin when not given.
    #[arg(long, env = "JELLIT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
