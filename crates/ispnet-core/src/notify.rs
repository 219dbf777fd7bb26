//! Notification categories, delivery preferences, and timestamp rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification category as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationCategory {
    UsageAlert,
    Payment,
    Ticket,
    Security,
    System,
}

impl NotificationCategory {
    /// Short human label for list output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UsageAlert => "usage",
            Self::Payment => "payment",
            Self::Ticket => "ticket",
            Self::Security => "security",
            Self::System => "system",
        }
    }
}

/// Flat per-channel × per-category delivery preferences.
///
/// Mirrors the backend object one field to one field; the three usage
/// thresholds are plain percentages and their ordering is not validated
/// client-side (the backend accepts them as-is).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_enabled: bool,
    pub email_usage_alerts: bool,
    pub email_payment_reminders: bool,
    pub email_ticket_updates: bool,
    pub email_security_alerts: bool,
    pub email_promotions: bool,

    pub browser_enabled: bool,
    pub browser_usage_alerts: bool,
    pub browser_payment_reminders: bool,
    pub browser_ticket_updates: bool,
    pub browser_security_alerts: bool,

    pub sms_enabled: bool,
    pub sms_critical_only: bool,
    pub sms_usage_alerts: bool,
    pub sms_payment_reminders: bool,
    pub sms_security_alerts: bool,
    #[serde(default)]
    pub phone_number: Option<String>,

    pub usage_alert_threshold1: u8,
    pub usage_alert_threshold2: u8,
    pub usage_alert_threshold3: u8,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_enabled: true,
            email_usage_alerts: true,
            email_payment_reminders: true,
            email_ticket_updates: true,
            email_security_alerts: true,
            email_promotions: false,

            browser_enabled: true,
            browser_usage_alerts: true,
            browser_payment_reminders: true,
            browser_ticket_updates: true,
            browser_security_alerts: true,

            sms_enabled: false,
            sms_critical_only: true,
            sms_usage_alerts: false,
            sms_payment_reminders: false,
            sms_security_alerts: true,
            phone_number: None,

            usage_alert_threshold1: 50,
            usage_alert_threshold2: 75,
            usage_alert_threshold3: 90,
        }
    }
}

/// Render a timestamp relative to `now` ("Just now", "5 minutes ago", ...).
/// Anything older than a week falls back to the calendar date.
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - created_at).num_seconds();
    if secs < 60 {
        return "Just now".into();
    }
    if secs < 3600 {
        return format!("{} minutes ago", secs / 60);
    }
    if secs < 86_400 {
        return format!("{} hours ago", secs / 3600);
    }
    if secs < 604_800 {
        return format!("{} days ago", secs / 86_400);
    }
    created_at.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn category_wire_spelling() {
        let c: NotificationCategory = serde_json::from_str("\"USAGE_ALERT\"").unwrap();
        assert_eq!(c, NotificationCategory::UsageAlert);
        assert_eq!(c.label(), "usage");
    }

    #[test]
    fn preferences_roundtrip_camel_case() {
        let prefs = NotificationPreferences::default();
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"emailUsageAlerts\":true"));
        assert!(json.contains("\"usageAlertThreshold3\":90"));
        let back: NotificationPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn default_thresholds_match_backend_defaults() {
        let prefs = NotificationPreferences::default();
        assert_eq!(
            (
                prefs.usage_alert_threshold1,
                prefs.usage_alert_threshold2,
                prefs.usage_alert_threshold3
            ),
            (50, 75, 90)
        );
        assert!(!prefs.sms_enabled);
    }

    #[test]
    fn time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let at = |secs: i64| now - chrono::Duration::seconds(secs);
        assert_eq!(time_ago(at(30), now), "Just now");
        assert_eq!(time_ago(at(120), now), "2 minutes ago");
        assert_eq!(time_ago(at(7200), now), "2 hours ago");
        assert_eq!(time_ago(at(3 * 86_400), now), "3 days ago");
        assert_eq!(time_ago(at(30 * 86_400), now), "2026-02-08");
    }
}
