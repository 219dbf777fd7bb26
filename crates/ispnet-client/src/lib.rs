//! `ISPNET` Portal Client
//!
//! REST client for the ISP portal backend: auth, customer dashboard data,
//! support tickets, notifications, admin views, and invoice download.
//! Bearer-token auth is applied uniformly by [`PortalClient`].

pub mod client;
pub mod poll;
pub mod types;


pub use client::{PortalClient, PortalConfig, PortalError};
pub use poll::{DEFAULT_POLL_INTERVAL, spawn_unread_poller};
