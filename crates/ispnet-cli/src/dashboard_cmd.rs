//! Dashboard subcommands: overview, usage trend, speed test.
//!
//! Usage figures and speed-test results come from the simulation module,
//! not measurement; output labels them accordingly.

use std::io::{self, Write};

use chrono::Local;

use ispnet_core::sim::{
    self, AlertLevel, UsagePeriod, sample_speed_test, sample_usage, sample_usage_series,
};

use crate::config::CliConfig;
use crate::fmt::{alert_label, balance_label, usage_bar};
use crate::portal;

/// Dashboard subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum DashboardAction {
    /// Account overview: plan, usage, balance, device count.
    Overview,
    /// Usage trend over a window.
    Usage {
        /// Window: daily, weekly, or monthly.
        #[arg(short, long, default_value = "weekly")]
        period: UsagePeriod,
    },
    /// Run a (simulated) connection speed test.
    Speedtest,
}

/// Execute a dashboard subcommand.
pub async fn run(action: DashboardAction, config: &CliConfig) -> anyhow::Result<()> {
    match action {
        DashboardAction::Overview => overview(config).await,
        DashboardAction::Usage { period } => usage(config, period),
        DashboardAction::Speedtest => speedtest(),
    }
}

async fn overview(config: &CliConfig) -> anyhow::Result<()> {
    let session = config.require_session()?;
    let client = portal::authed_client(config)?;
    let profile = client.profile().await?;
    // The device card degrades to zero instead of failing the whole view.
    let device_count = client.devices().await.map(|d| d.len()).unwrap_or(0);

    let mut rng = rand::rng();
    let usage = sample_usage(&mut rng, Some(profile.data_gb));

    let mut out = io::stdout();
    writeln!(out, "Account:  {}", session.username)?;
    writeln!(
        out,
        "Plan:     {}",
        profile.plan_name.as_deref().unwrap_or("none")
    )?;
    writeln!(
        out,
        "Usage:    {} {:.1} / {:.1} GB ({:.1}%, simulated)",
        usage_bar(usage.percent, 20),
        usage.used_gb,
        usage.limit_gb,
        usage.percent,
    )?;
    let alert = sim::usage_alert(usage.percent);
    if alert != AlertLevel::None {
        writeln!(out, "          {}", alert_label(alert))?;
    }
    writeln!(
        out,
        "Balance:  ${:.2} ({})",
        profile.balance,
        balance_label(sim::balance_band(profile.balance)),
    )?;
    writeln!(out, "Devices:  {device_count}")?;
    Ok(())
}

fn usage(config: &CliConfig, period: UsagePeriod) -> anyhow::Result<()> {
    config.require_session()?;
    let mut rng = rand::rng();
    let series = sample_usage_series(&mut rng, period, Local::now());

    let max = series.iter().map(|p| p.gigabytes).fold(f64::MIN, f64::max);
    let mut out = io::stdout();
    writeln!(out, "Usage trend (simulated):")?;
    for point in &series {
        let percent = if max > 0.0 { point.gigabytes / max * 100.0 } else { 0.0 };
        writeln!(
            out,
            "{:>6}  {} {:.2} GB",
            point.label,
            usage_bar(percent, 30),
            point.gigabytes,
        )?;
    }
    Ok(())
}

fn speedtest() -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let result = sample_speed_test(&mut rng);
    let mut out = io::stdout();
    writeln!(out, "Speed test (simulated, no traffic generated):")?;
    writeln!(out, "  Download: {:.2} Mbps", result.download_mbps)?;
    writeln!(out, "  Upload:   {:.2} Mbps", result.upload_mbps)?;
    writeln!(out, "  Ping:     {} ms", result.ping_ms)?;
    writeln!(out, "  Jitter:   {} ms", result.jitter_ms)?;
    Ok(())
}
