pub mod auth;
pub mod cache;
pub mod config;
pub mod controller;
pub mod entry;
pub mod error;
pub mod insights;
pub mod keywords;
pub mod parse_input;
pub mod period;
pub mod render;
pub mod rest;
pub mod scales;
pub mod session;
pub mod store;

pub use auth::{AuthProvider, Credentials, RestAuth};
pub use cache::EntryCache;
pub use config::Config;
pub use controller::SessionController;
pub use entry::{Entry, EntryDraft, EntryPatch};
pub use error::{Error, Operation, RemoteError};
pub use insights::{Overview, Summary};
pub use period::Period;
pub use rest::RestClient;
pub use scales::Mood;
pub use session::Session;
pub use store::{EntryStore, MemoryStore, RestEntryStore};
