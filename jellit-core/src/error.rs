//! Error types for the entry cache and its remote collaborators.

use strum_macros::Display;
use thiserror::Error;

/// The remote call that was being made when a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Operation {
    #[strum(to_string = "load entries")]
    LoadEntries,
    #[strum(to_string = "save entry")]
    CreateEntry,
    #[strum(to_string = "update entry")]
    UpdateEntry,
    #[strum(to_string = "delete entry")]
    DeleteEntry,
    #[strum(to_string = "sign in")]
    SignIn,
    #[strum(to_string = "create account")]
    SignUp,
    #[strum(to_string = "sign out")]
    SignOut,
}

/// Failures reported by the entry store or the authentication service.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no entry with id {0}")]
    NotFound(String),

    #[error("permission denied")]
    PermissionDenied,

    #[error("account created for {email}, confirm it before signing in")]
    ConfirmationPending { email: String },
}

/// Errors surfaced to whoever triggered an entry or session operation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("you need to sign in first")]
    AuthenticationRequired,

    #[error("could not {operation}")]
    RemoteOperationFailed {
        operation: Operation,
        #[source]
        source: RemoteError,
    },

    #[error("{field} must be {expected}, got {value}")]
    InvalidEntry {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("email and password are required")]
    InvalidCredentials,
}

impl Error {
    /// Wraps a [`RemoteError`] with the operation that produced it.
    pub fn remote(operation: Operation) -> impl FnOnce(RemoteError) -> Error {
        move |source| {
            tracing::warn!(%operation, error = %source, "remote operation failed");
            Error::RemoteOperationFailed { operation, source }
        }
    }
}
