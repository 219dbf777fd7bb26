//! Portal API wire types.
//!
//! Serialization structs matching the backend's JSON requests and
//! responses. List endpoints wrap their payload in a `status` envelope;
//! fields the backend sometimes omits carry `#[serde(default)]`.

use serde::{Deserialize, Serialize};

use ispnet_core::account::{CustomerSummary, PlanOffer};
use ispnet_core::notify::{NotificationCategory, NotificationPreferences};
use ispnet_core::session::Role;
use ispnet_core::ticket::{MessageKind, TicketStatus};

// =============================================================================
// Auth
// =============================================================================

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub otp: &'a str,
    pub new_password: &'a str,
}

// =============================================================================
// Tickets
// =============================================================================

/// Ticket row from the list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub id: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub description: String,
    pub status: TicketStatus,
    pub created_at: String,
    #[serde(default)]
    pub message_count: u32,
    /// Present in admin listings only.
    #[serde(default)]
    pub customer_name: Option<String>,
}

/// One message in a ticket conversation thread.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMessage {
    #[serde(alias = "sender")]
    pub sender_name: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub message: String,
    #[serde(alias = "sentAt")]
    pub timestamp: String,
}

/// Full ticket with its conversation thread, in backend order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetail {
    pub id: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub description: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub messages: Vec<TicketMessage>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TicketListResponse {
    #[serde(default)]
    pub tickets: Vec<TicketSummary>,
}

#[derive(Debug, Deserialize)]
pub struct TicketGetResponse {
    pub ticket: Option<TicketDetail>,
}

#[derive(Debug, Serialize)]
pub struct CreateTicketRequest<'a> {
    pub subject: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest<'a> {
    pub ticket_id: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStatusRequest<'a> {
    pub ticket_id: &'a str,
    pub status: TicketStatus,
}

// =============================================================================
// Customer: devices and plans
// =============================================================================

/// Connected device snapshot. This endpoint reports snake_case fields,
/// unlike the rest of the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub device_name: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub total_data_used_mb: f64,
    #[serde(default)]
    pub average_speed_mbps: f64,
    #[serde(default)]
    pub connection_start_time: String,
    #[serde(default)]
    pub connection_end_time: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// One usage-log entry for a device.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceUsageLog {
    pub timestamp: String,
    #[serde(rename = "dataUsedGB", default)]
    pub data_used_gb: f64,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct DeviceUsageResponse {
    #[serde(rename = "usageLogs", default)]
    pub usage_logs: Vec<DeviceUsageLog>,
}

#[derive(Debug, Deserialize)]
pub struct PlansResponse {
    #[serde(default)]
    pub plans: Vec<PlanOffer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectPlanRequest<'a> {
    pub plan_id: &'a str,
}

// =============================================================================
// Admin
// =============================================================================

/// Customer list envelope. `customers` stays optional so a malformed
/// response can be surfaced with its raw body instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct CustomersResponse {
    pub customers: Option<Vec<CustomerSummary>>,
}

/// Plan block inside the admin customer detail.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanDetail {
    pub name: String,
    #[serde(rename = "dataGB", default)]
    pub data_gb: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

/// Admin view of a single customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetail {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub plan: Option<PlanDetail>,
    #[serde(default)]
    pub plan_start_date: Option<String>,
    #[serde(default)]
    pub plan_renewal_date: Option<String>,
}

// =============================================================================
// Notifications
// =============================================================================

/// One notification as listed by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Deserialize)]
pub struct UnreadCountResponse {
    #[serde(rename = "unreadCount", default)]
    pub unread_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct NotificationListResponse {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Deserialize)]
pub struct PreferencesResponse {
    pub preferences: Option<NotificationPreferences>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest<'a> {
    pub notification_id: &'a str,
}

// =============================================================================
// Shared
// =============================================================================

/// Minimal shape of a backend error body.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
