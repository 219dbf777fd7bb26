//! Output formatting helpers.

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use ispnet_client::types::{CustomerDetail, Notification, TicketDetail};
use ispnet_core::notify::time_ago;
use ispnet_core::sim::{AlertLevel, BalanceBand};
use ispnet_core::ticket::MessageKind;

/// Truncate a string to at most `max` characters, appending an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Render a usage percentage as a fixed-width bar.
pub fn usage_bar(percent: f64, width: usize) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((percent / 100.0 * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Label for a usage alert level, empty when no alert applies.
pub const fn alert_label(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::None => "",
        AlertLevel::Warning => "WARNING: above 80% of plan allowance",
        AlertLevel::Critical => "CRITICAL: above 90% of plan allowance",
    }
}

/// Label for a balance band.
pub const fn balance_label(band: BalanceBand) -> &'static str {
    match band {
        BalanceBand::Critical => "critically low",
        BalanceBand::Low => "low",
        BalanceBand::Healthy => "healthy",
    }
}

/// Render a backend timestamp relative to `now`, falling back to the raw
/// string when it is not RFC 3339.
pub fn render_timestamp(raw: &str, now: DateTime<Utc>) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| time_ago(t.with_timezone(&Utc), now))
        .unwrap_or_else(|_| raw.to_string())
}

pub fn write_ticket_detail(w: &mut impl Write, ticket: &TicketDetail) -> io::Result<()> {
    writeln!(w, "  Ticket:   {}", ticket.id)?;
    if let Some(subject) = &ticket.subject {
        writeln!(w, "  Subject:  {subject}")?;
    }
    writeln!(w, "  Status:   {}", ticket.status)?;
    if let Some(created) = &ticket.created_at {
        writeln!(w, "  Created:  {created}")?;
    }
    writeln!(w, "  Issue:    {}", ticket.description)?;
    if !ticket.messages.is_empty() {
        writeln!(w)?;
        for msg in &ticket.messages {
            let side = match msg.kind {
                MessageKind::Customer => "customer",
                MessageKind::Admin => "support",
            };
            writeln!(w, "  [{}] {} ({side})", msg.timestamp, msg.sender_name)?;
            writeln!(w, "    {}", msg.message)?;
        }
    }
    Ok(())
}

pub fn write_customer_detail(w: &mut impl Write, c: &CustomerDetail) -> io::Result<()> {
    writeln!(w, "  Username: {}", c.username)?;
    if let Some(name) = &c.full_name {
        writeln!(w, "  Name:     {name}")?;
    }
    writeln!(w, "  Email:    {}", c.email)?;
    if !c.status.is_empty() {
        writeln!(w, "  Status:   {}", c.status)?;
    }
    match &c.plan {
        Some(plan) => {
            writeln!(w, "  Plan:     {} ({} GB, ${:.2}/mo)", plan.name, plan.data_gb, plan.price)?;
            if let Some(start) = &c.plan_start_date {
                writeln!(w, "  Since:    {start}")?;
            }
            if let Some(renewal) = &c.plan_renewal_date {
                writeln!(w, "  Renews:   {renewal}")?;
            }
        }
        None => writeln!(w, "  Plan:     none")?,
    }
    Ok(())
}

pub fn write_notification(
    w: &mut impl Write,
    n: &Notification,
    now: DateTime<Utc>,
) -> io::Result<()> {
    let marker = if n.read { " " } else { "*" };
    writeln!(
        w,
        "{marker} [{:<8}] {}: {} ({})",
        n.category.label(),
        n.title,
        n.message,
        render_timestamp(&n.created_at, now),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ispnet_client::types::{PlanDetail, TicketMessage};
    use ispnet_core::ticket::TicketStatus;

    #[test]
    fn truncate_short_strings_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_long_strings_get_ellipsis() {
        assert_eq!(truncate("hello world", 5), "hell…");
    }

    #[test]
    fn usage_bar_fills_proportionally() {
        assert_eq!(usage_bar(0.0, 10), "[----------]");
        assert_eq!(usage_bar(50.0, 10), "[#####-----]");
        assert_eq!(usage_bar(100.0, 10), "[##########]");
        // Never overflows the width.
        assert_eq!(usage_bar(250.0, 10), "[##########]");
    }

    #[test]
    fn timestamp_falls_back_to_raw() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(render_timestamp("not a date", now), "not a date");
        assert_eq!(
            render_timestamp("2026-03-10T11:58:00Z", now),
            "2 minutes ago"
        );
    }

    #[test]
    fn ticket_detail_renders_thread_in_order() {
        let ticket = TicketDetail {
            id: "t-1".into(),
            subject: Some("No internet".into()),
            description: "Connection drops".into(),
            status: TicketStatus::InProgress,
            created_at: Some("2026-01-05T09:30:00Z".into()),
            messages: vec![
                TicketMessage {
                    sender_name: "alice".into(),
                    kind: MessageKind::Customer,
                    message: "Still down".into(),
                    timestamp: "2026-01-05T10:00:00Z".into(),
                },
                TicketMessage {
                    sender_name: "support".into(),
                    kind: MessageKind::Admin,
                    message: "Looking into it".into(),
                    timestamp: "2026-01-05T11:00:00Z".into(),
                },
            ],
        };
        let mut buf = Vec::new();
        write_ticket_detail(&mut buf, &ticket).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Status:   IN_PROGRESS"));
        let customer = text.find("Still down").unwrap();
        let admin = text.find("Looking into it").unwrap();
        assert!(customer < admin);
        assert!(text.contains("(support)"));
    }

    #[test]
    fn customer_detail_without_plan() {
        let c = CustomerDetail {
            username: "bob".into(),
            email: "b@x.io".into(),
            full_name: None,
            status: "Active".into(),
            plan: None,
            plan_start_date: None,
            plan_renewal_date: None,
        };
        let mut buf = Vec::new();
        write_customer_detail(&mut buf, &c).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Plan:     none"));
    }

    #[test]
    fn customer_detail_with_plan() {
        let c = CustomerDetail {
            username: "bob".into(),
            email: "b@x.io".into(),
            full_name: Some("Bob Example".into()),
            status: "Active".into(),
            plan: Some(PlanDetail {
                name: "Fiber 100".into(),
                data_gb: 100.0,
                price: 49.0,
                description: String::new(),
            }),
            plan_start_date: Some("2025-11-01".into()),
            plan_renewal_date: Some("2026-11-01".into()),
        };
        let mut buf = Vec::new();
        write_customer_detail(&mut buf, &c).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Fiber 100 (100 GB, $49.00/mo)"));
        assert!(text.contains("Renews:   2026-11-01"));
    }

    #[test]
    fn unread_notification_gets_marker() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let n = Notification {
            id: "n-1".into(),
            category: ispnet_core::notify::NotificationCategory::Payment,
            title: "Payment due".into(),
            message: "Invoice pending".into(),
            created_at: "2026-03-10T11:00:00Z".into(),
            read: false,
        };
        let mut buf = Vec::new();
        write_notification(&mut buf, &n, now).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with('*'));
        assert!(text.contains("payment"));
        assert!(text.contains("1 hours ago"));
    }
}
