//! Notification subcommands: count, list, mark read, preferences, watch.
//!
//! `watch` runs the background poller from `ispnet-client` until Ctrl+C;
//! the poller also stops itself when the backend reports the session
//! expired.

use std::io::{self, Write};
use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use ispnet_client::spawn_unread_poller;

use crate::config::CliConfig;
use crate::fmt::write_notification;
use crate::portal;

/// Notification subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum NotifyAction {
    /// Show the unread notification count.
    Count,
    /// List recent notifications, newest first.
    List {
        /// Maximum results.
        #[arg(short, long, default_value = "20")]
        limit: u32,
    },
    /// Mark one notification as read.
    Read {
        /// Notification ID.
        id: String,
    },
    /// Mark every notification as read.
    ReadAll,
    /// Show or change delivery preferences.
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Ask the backend to emit a test notification.
    Test,
    /// Poll the unread count until interrupted.
    Watch {
        /// Poll interval in seconds.
        #[arg(short, long, default_value = "30")]
        interval: u64,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum PrefsAction {
    /// Show current delivery preferences.
    Show,
    /// Change delivery preferences (unset flags keep their stored value).
    Set {
        /// Enable or disable email delivery.
        #[arg(long)]
        email: Option<bool>,
        /// Enable or disable browser delivery.
        #[arg(long)]
        browser: Option<bool>,
        /// Enable or disable SMS delivery.
        #[arg(long)]
        sms: Option<bool>,
        /// Phone number for SMS delivery.
        #[arg(long)]
        phone: Option<String>,
        /// First usage alert threshold (percent).
        #[arg(long)]
        threshold1: Option<u8>,
        /// Second usage alert threshold (percent).
        #[arg(long)]
        threshold2: Option<u8>,
        /// Third usage alert threshold (percent).
        #[arg(long)]
        threshold3: Option<u8>,
    },
}

/// Execute a notification subcommand.
pub async fn run(action: NotifyAction, config: &CliConfig) -> anyhow::Result<()> {
    let client = portal::authed_client(config)?;
    let mut out = io::stdout();
    match action {
        NotifyAction::Count => {
            let count = client.unread_count().await?;
            writeln!(out, "{count} unread notification(s)")?;
        }
        NotifyAction::List { limit } => {
            let notifications = client.notifications(limit).await?;
            if notifications.is_empty() {
                writeln!(out, "No notifications.")?;
                return Ok(());
            }
            let now = Utc::now();
            for n in &notifications {
                write_notification(&mut out, n, now)?;
            }
        }
        NotifyAction::Read { id } => {
            client.mark_read(&id).await?;
            writeln!(out, "Notification {id} marked read.")?;
        }
        NotifyAction::ReadAll => {
            client.mark_all_read().await?;
            writeln!(out, "All notifications marked read.")?;
        }
        NotifyAction::Prefs { action } => return prefs(&client, action).await,
        NotifyAction::Test => {
            client.send_test_notification().await?;
            writeln!(out, "Test notification sent.")?;
        }
        NotifyAction::Watch { interval } => return watch(&client, interval).await,
    }
    Ok(())
}

async fn prefs(client: &ispnet_client::PortalClient, action: PrefsAction) -> anyhow::Result<()> {
    let mut out = io::stdout();
    match action {
        PrefsAction::Show => {
            let prefs = client.preferences().await?;
            let on_off = |b: bool| if b { "on" } else { "off" };
            writeln!(out, "Email:    {}", on_off(prefs.email_enabled))?;
            writeln!(out, "Browser:  {}", on_off(prefs.browser_enabled))?;
            writeln!(out, "SMS:      {}", on_off(prefs.sms_enabled))?;
            if let Some(phone) = &prefs.phone_number {
                writeln!(out, "Phone:    {phone}")?;
            }
            writeln!(
                out,
                "Alerts:   {}% / {}% / {}%",
                prefs.usage_alert_threshold1,
                prefs.usage_alert_threshold2,
                prefs.usage_alert_threshold3,
            )?;
        }
        PrefsAction::Set {
            email,
            browser,
            sms,
            phone,
            threshold1,
            threshold2,
            threshold3,
        } => {
            // Read-modify-write so unset flags keep their stored value.
            let mut prefs = client.preferences().await?;
            if let Some(v) = email {
                prefs.email_enabled = v;
            }
            if let Some(v) = browser {
                prefs.browser_enabled = v;
            }
            if let Some(v) = sms {
                prefs.sms_enabled = v;
            }
            if let Some(v) = phone {
                prefs.phone_number = Some(v);
            }
            if let Some(v) = threshold1 {
                prefs.usage_alert_threshold1 = v;
            }
            if let Some(v) = threshold2 {
                prefs.usage_alert_threshold2 = v;
            }
            if let Some(v) = threshold3 {
                prefs.usage_alert_threshold3 = v;
            }
            client.set_preferences(&prefs).await?;
            writeln!(out, "Preferences saved.")?;
        }
    }
    Ok(())
}

async fn watch(client: &ispnet_client::PortalClient, interval: u64) -> anyhow::Result<()> {
    let mut out = io::stdout();
    let initial = client.unread_count().await?;
    writeln!(out, "{initial} unread notification(s)")?;
    writeln!(out, "Watching every {interval}s (Ctrl+C to stop)")?;

    let cancel = CancellationToken::new();
    let handle = spawn_unread_poller(
        client.clone(),
        Duration::from_secs(interval),
        cancel.clone(),
        |count| {
            let mut out = io::stdout();
            let _ = writeln!(out, "{count} unread notification(s)");
        },
    );

    tokio::signal::ctrl_c().await?;
    cancel.cancel();
    handle.await?;
    Ok(())
}
