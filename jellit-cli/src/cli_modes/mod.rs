mod app;
mod auth_mode;
mod editor_utils;
mod prompt;
mod read_mode;
mod write_mode;

pub use app::App;
pub use auth_mode::{sign_in, sign_out, sign_up, whoami};
pub use read_mode::{dashboard, history, insights};
pub use write_mode::{delete_entry, edit_entry, log_entry};
