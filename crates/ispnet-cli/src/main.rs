//! ISPNET CLI entry point.
//!
//! Parses the command tree, runs the selected command, and handles
//! expired sessions in exactly one place: any command failing with an
//! HTTP 401 clears the stored session before reporting the error.

use std::io::{self, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ispnet_cli::config::CliConfig;
use ispnet_cli::{
    admin_cmd, auth_cmd, billing_cmd, dashboard_cmd, device_cmd, notify_cmd, plan_cmd, portal,
    ticket_cmd,
};

#[derive(Parser, Debug)]
#[command(name = "ispnet")]
#[command(version, about = "ISP portal terminal client", long_about = None)]
struct Cli {
    /// Portal backend URL (overrides the stored configuration).
    #[arg(long, env = "ISPNET_PORTAL_URL")]
    portal: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Account and session management.
    Auth {
        #[command(subcommand)]
        action: auth_cmd::AuthAction,
    },
    /// Account overview and connection analytics.
    Dashboard {
        #[command(subcommand)]
        action: dashboard_cmd::DashboardAction,
    },
    /// Connected devices.
    Device {
        #[command(subcommand)]
        action: device_cmd::DeviceAction,
    },
    /// Subscription plans.
    Plan {
        #[command(subcommand)]
        action: plan_cmd::PlanAction,
    },
    /// Support tickets.
    Ticket {
        #[command(subcommand)]
        action: ticket_cmd::TicketAction,
    },
    /// Notifications and delivery preferences.
    Notify {
        #[command(subcommand)]
        action: notify_cmd::NotifyAction,
    },
    /// Administration: customers and revenue.
    Admin {
        #[command(subcommand)]
        action: admin_cmd::AdminAction,
    },
    /// Invoices.
    Billing {
        #[command(subcommand)]
        action: billing_cmd::BillingAction,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ispnet=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting ispnet CLI");

    let mut config = CliConfig::load();
    if let Some(url) = cli.portal {
        config.portal_url = Some(url);
    }

    let result = dispatch(cli.command, &mut config).await;

    // Single expired-session handler for every command: clear the stored
    // session once, here, instead of per call site.
    if let Err(err) = result {
        if portal::expire_session_if_unauthorized(&err, &mut config) {
            config.save()?;
            let mut out = io::stdout();
            writeln!(out, "Session expired. Please log in again.")?;
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}

async fn dispatch(command: Command, config: &mut CliConfig) -> anyhow::Result<()> {
    match command {
        Command::Auth { action } => auth_cmd::run(action, config).await,
        Command::Dashboard { action } => dashboard_cmd::run(action, config).await,
        Command::Device { action } => device_cmd::run(action, config).await,
        Command::Plan { action } => plan_cmd::run(action, config).await,
        Command::Ticket { action } => ticket_cmd::run(action, config).await,
        Command::Notify { action } => notify_cmd::run(action, config).await,
        Command::Admin { action } => admin_cmd::run(action, config).await,
        Command::Billing { action } => billing_cmd::run(action, config).await,
    }
}
