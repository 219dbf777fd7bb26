//! Error types for the `ISPNET` core library.

use thiserror::Error;

use crate::session::Role;

/// Result type alias using `ISPNET` core Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for `ISPNET` domain operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Local input validation failed; no network call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The account is registered under a different role than the one
    /// selected at login. Rejected locally even though the backend
    /// authenticated the credentials.
    #[error("Invalid role selected: this account is registered as {returned}, not {selected}")]
    RoleMismatch {
        /// Role the user picked at the prompt.
        selected: Role,
        /// Role the backend reported for the account.
        returned: Role,
    },

    /// An operation that needs an authenticated session was attempted
    /// without one.
    #[error("Not logged in: {0}")]
    NotAuthenticated(String),

    /// Illegal ticket status transition (statuses only move forward).
    #[error("Ticket status cannot move from {from} back to {to}")]
    StatusRegression {
        /// Current status.
        from: crate::ticket::TicketStatus,
        /// Requested status.
        to: crate::ticket::TicketStatus,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
