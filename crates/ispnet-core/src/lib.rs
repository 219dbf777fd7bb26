//! `ISPNET` Core Library
//!
//! Shared functionality for `ISPNET` components:
//! - Session state and role handling
//! - Ticket workflow status machine and local validation
//! - Notification categories and delivery preferences
//! - Simulated analytics (usage, speed test, revenue)
//! - Common error types

pub mod account;
pub mod auth;
pub mod error;
pub mod notify;
pub mod session;
pub mod sim;
pub mod ticket;

pub use error::{Error, Result};
pub use session::{Role, Session, SessionState};
pub use ticket::TicketStatus;
