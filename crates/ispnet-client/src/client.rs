//! Portal REST API client.
//!
//! One `reqwest` wrapper for every backend endpoint. Auth is always the
//! `Authorization: Bearer` header, and any HTTP 401 maps to
//! [`PortalError::Unauthorized`] so callers have a single expired-session
//! signal.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use thiserror::Error;

use ispnet_core::account::{CustomerProfile, CustomerSummary, PlanOffer};
use ispnet_core::notify::NotificationPreferences;
use ispnet_core::session::Role;
use ispnet_core::ticket::{self, TicketStatus};

use crate::types::{
    CreateTicketRequest, CustomerDetail, CustomersResponse, Device, DeviceUsageLog,
    DeviceUsageResponse, DevicesResponse, ErrorBody, ForgotPasswordRequest, LoginRequest,
    LoginResponse, MarkReadRequest, Notification, NotificationListResponse, PlansResponse,
    PreferencesResponse, RegisterRequest, ReplyRequest, ResetPasswordRequest, SelectPlanRequest,
    TicketDetail, TicketGetResponse, TicketListResponse, TicketStatusRequest, TicketSummary,
    UnreadCountResponse,
};

/// Portal API client errors.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Portal API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP 401 from any endpoint. The caller is expected to clear the
    /// stored session exactly once, in one place.
    #[error("Session expired or invalid (HTTP 401)")]
    Unauthorized,

    /// A 2xx response that lacks a field the client depends on; carries
    /// the raw body for debugging.
    #[error("Response is missing expected field `{field}`: {body}")]
    MissingField { field: &'static str, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    /// Local domain validation failed; no request was sent.
    #[error(transparent)]
    Domain(#[from] ispnet_core::Error),
}

/// Configuration for connecting to a portal backend.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Backend base URL (e.g., "<https://portal.example.net>").
    pub base_url: String,
    /// Bearer token; `None` for the pre-login auth endpoints.
    pub token: Option<String>,
}

/// Portal REST API client.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// Create a new portal API client.
    pub fn new(config: &PortalConfig) -> Result<Self, PortalError> {
        if config.base_url.is_empty() {
            return Err(PortalError::Config("base_url is empty".into()));
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            if token.is_empty() {
                return Err(PortalError::Config("token is empty".into()));
            }
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| PortalError::Config("Invalid token format".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        // Ensure a TLS crypto provider is installed (reqwest uses rustls-no-provider).
        // The `Err` case just means it was already installed — safe to ignore.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Build the API URL for a given path.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Map a non-success response into a portal error, extracting the
    /// backend `message` field when the body carries one.
    pub(crate) fn api_error(status: u16, body: &str) -> PortalError {
        if status == 401 {
            return PortalError::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown")
                    .to_string()
            });
        PortalError::Api { status, message }
    }

    /// Check HTTP response status, consuming the body of failures for
    /// error reporting.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, PortalError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(Self::api_error(status.as_u16(), &body))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, PortalError> {
        let resp = self.http.get(&url).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn post_json<B: serde::Serialize + Sync>(
        &self,
        url: String,
        body: &B,
    ) -> Result<(), PortalError> {
        let resp = self.http.post(&url).json(body).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Authenticate with username (or email) and password. Role checking
    /// against the user's selection happens in the caller, not here.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, PortalError> {
        let resp = self
            .http
            .post(self.api_url("/auth/login"))
            .json(&LoginRequest { username, password })
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    /// Register a new account.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), PortalError> {
        self.post_json(
            self.api_url("/auth/register"),
            &RegisterRequest {
                username,
                email,
                password,
                role,
            },
        )
        .await
    }

    /// Invalidate the session server-side. Callers treat this as
    /// best-effort: the local session is cleared regardless of outcome.
    pub async fn logout(&self) -> Result<(), PortalError> {
        let resp = self.http.get(self.api_url("/auth/logout")).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Request a one-time reset code for the given email.
    pub async fn forgot_password(&self, email: &str) -> Result<(), PortalError> {
        self.post_json(
            self.api_url("/auth/forgot-password"),
            &ForgotPasswordRequest { email },
        )
        .await
    }

    /// Submit the reset code and new password. The password pair must
    /// already have passed local validation; the backend owns code
    /// validity and expiry.
    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<(), PortalError> {
        self.post_json(
            self.api_url("/auth/reset-password"),
            &ResetPasswordRequest {
                email,
                otp,
                new_password,
            },
        )
        .await
    }

    // =========================================================================
    // Customer: profile, devices, plans
    // =========================================================================

    /// Fetch the signed-in customer's profile.
    pub async fn profile(&self) -> Result<CustomerProfile, PortalError> {
        self.get_json(self.api_url("/customer/profile")).await
    }

    /// List the customer's connected devices.
    pub async fn devices(&self) -> Result<Vec<Device>, PortalError> {
        let resp: DevicesResponse = self.get_json(self.api_url("/customer/devices")).await?;
        Ok(resp.devices)
    }

    /// Fetch the usage log for one device.
    pub async fn device_usage(&self, device_id: &str) -> Result<Vec<DeviceUsageLog>, PortalError> {
        let url = format!("{}?deviceId={device_id}", self.api_url("/customer/device-usage"));
        let resp: DeviceUsageResponse = self.get_json(url).await?;
        Ok(resp.usage_logs)
    }

    /// List available subscription plans.
    pub async fn plans(&self) -> Result<Vec<PlanOffer>, PortalError> {
        let resp: PlansResponse = self.get_json(self.api_url("/customer/plans")).await?;
        Ok(resp.plans)
    }

    /// Subscribe to a plan.
    pub async fn select_plan(&self, plan_id: &str) -> Result<(), PortalError> {
        self.post_json(
            self.api_url("/customer/select-plan"),
            &SelectPlanRequest { plan_id },
        )
        .await
    }

    // =========================================================================
    // Tickets
    // =========================================================================

    /// List support tickets (the backend scopes by role: customers see
    /// their own, admins see all).
    pub async fn list_tickets(&self) -> Result<Vec<TicketSummary>, PortalError> {
        let resp: TicketListResponse = self.get_json(self.api_url("/tickets-enhanced/list")).await?;
        Ok(resp.tickets)
    }

    /// Create a new ticket. Empty subject or description is rejected
    /// locally; no request is sent in that case.
    pub async fn create_ticket(&self, subject: &str, description: &str) -> Result<(), PortalError> {
        ticket::validate_new_ticket(subject, description)?;
        self.post_json(
            self.api_url("/tickets-enhanced/create"),
            &CreateTicketRequest {
                subject,
                description,
            },
        )
        .await
    }

    /// Fetch a full ticket conversation thread.
    pub async fn get_ticket(&self, id: &str) -> Result<Option<TicketDetail>, PortalError> {
        let url = format!("{}?id={id}", self.api_url("/tickets-enhanced/get"));
        let resp: TicketGetResponse = self.get_json(url).await?;
        Ok(resp.ticket)
    }

    /// Append a reply to a ticket thread. Does not change ticket status.
    /// An empty message is rejected locally; no request is sent.
    pub async fn reply_ticket(&self, ticket_id: &str, message: &str) -> Result<(), PortalError> {
        ticket::validate_reply(message)?;
        self.post_json(
            self.api_url("/tickets-enhanced/reply"),
            &ReplyRequest { ticket_id, message },
        )
        .await
    }

    /// Set a ticket's status (admin). Transition monotonicity is enforced
    /// by the caller against the ticket's current status.
    pub async fn set_ticket_status(
        &self,
        ticket_id: &str,
        status: TicketStatus,
    ) -> Result<(), PortalError> {
        self.post_json(
            self.api_url("/admin/ticket/status"),
            &TicketStatusRequest { ticket_id, status },
        )
        .await
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// List all customers (admin). A response without a `customers` field
    /// is an error carrying the raw body.
    pub async fn customers(&self) -> Result<Vec<CustomerSummary>, PortalError> {
        let resp = self.http.get(self.api_url("/admin/customers")).send().await?;
        let body = Self::check(resp).await?.text().await?;
        parse_customers(&body)
    }

    /// Fetch the admin detail view of one customer.
    pub async fn customer_detail(&self, customer_id: &str) -> Result<CustomerDetail, PortalError> {
        let url = format!(
            "{}?customerId={customer_id}",
            self.api_url("/admin/customer-detail")
        );
        self.get_json(url).await
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Fetch the unread notification count.
    pub async fn unread_count(&self) -> Result<u64, PortalError> {
        let resp: UnreadCountResponse = self.get_json(self.api_url("/notifications/count")).await?;
        Ok(resp.unread_count)
    }

    /// List recent notifications, newest first.
    pub async fn notifications(&self, limit: u32) -> Result<Vec<Notification>, PortalError> {
        let url = format!("{}?limit={limit}", self.api_url("/notifications/list"));
        let resp: NotificationListResponse = self.get_json(url).await?;
        Ok(resp.notifications)
    }

    /// Mark one notification as read.
    pub async fn mark_read(&self, notification_id: &str) -> Result<(), PortalError> {
        self.post_json(
            self.api_url("/notifications/mark-read"),
            &MarkReadRequest { notification_id },
        )
        .await
    }

    /// Mark every notification as read.
    pub async fn mark_all_read(&self) -> Result<(), PortalError> {
        self.post_json(self.api_url("/notifications/mark-all-read"), &serde_json::json!({}))
            .await
    }

    /// Fetch delivery preferences.
    pub async fn preferences(&self) -> Result<NotificationPreferences, PortalError> {
        let resp = self
            .http
            .get(self.api_url("/notifications/preferences"))
            .send()
            .await?;
        let body = Self::check(resp).await?.text().await?;
        parse_preferences(&body)
    }

    /// Store delivery preferences.
    pub async fn set_preferences(
        &self,
        prefs: &NotificationPreferences,
    ) -> Result<(), PortalError> {
        self.post_json(self.api_url("/notifications/preferences"), prefs).await
    }

    /// Ask the backend to emit a test notification.
    pub async fn send_test_notification(&self) -> Result<(), PortalError> {
        self.post_json(self.api_url("/notifications/test"), &serde_json::json!({}))
            .await
    }

    // =========================================================================
    // Billing
    // =========================================================================

    /// Download the current invoice PDF for a customer, as raw bytes.
    pub async fn download_invoice(&self, customer_id: &str) -> Result<Vec<u8>, PortalError> {
        let url = self.api_url(&format!("/billing/customer/{customer_id}/invoice"));
        let resp = self.http.get(&url).send().await?;
        let bytes = Self::check(resp).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Parse the admin customer list, surfacing a missing `customers` field
/// with the raw body.
pub(crate) fn parse_customers(body: &str) -> Result<Vec<CustomerSummary>, PortalError> {
    let parsed: CustomersResponse =
        serde_json::from_str(body).map_err(|_| PortalError::MissingField {
            field: "customers",
            body: body.to_string(),
        })?;
    parsed.customers.ok_or_else(|| PortalError::MissingField {
        field: "customers",
        body: body.to_string(),
    })
}

/// Parse the preferences envelope, surfacing an absent payload.
pub(crate) fn parse_preferences(body: &str) -> Result<NotificationPreferences, PortalError> {
    let parsed: PreferencesResponse =
        serde_json::from_str(body).map_err(|_| PortalError::MissingField {
            field: "preferences",
            body: body.to_string(),
        })?;
    parsed.preferences.ok_or_else(|| PortalError::MissingField {
        field: "preferences",
        body: body.to_string(),
    })
}
