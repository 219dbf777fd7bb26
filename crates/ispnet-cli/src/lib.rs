//! `ISPNET` CLI
//!
//! Terminal client for the ISP portal: auth and session management,
//! dashboards, support tickets, notifications, and the admin views.

pub mod admin_cmd;
pub mod auth_cmd;
pub mod billing_cmd;
pub mod config;
pub mod dashboard_cmd;
pub mod device_cmd;
pub mod fmt;
pub mod notify_cmd;
pub mod plan_cmd;
pub mod portal;
pub mod ticket_cmd;
