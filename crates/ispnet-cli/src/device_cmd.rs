//! Device subcommands: list, usage log.

use std::io::{self, Write};

use crate::config::CliConfig;
use crate::fmt::truncate;
use crate::portal;

/// Device subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum DeviceAction {
    /// List connected devices.
    List,
    /// Show the usage log for one device.
    Usage {
        /// Device ID.
        id: String,
    },
}

/// Execute a device subcommand.
pub async fn run(action: DeviceAction, config: &CliConfig) -> anyhow::Result<()> {
    let client = portal::authed_client(config)?;
    let mut out = io::stdout();
    match action {
        DeviceAction::List => {
            let devices = client.devices().await?;
            if devices.is_empty() {
                writeln!(out, "No devices found.")?;
                return Ok(());
            }
            writeln!(
                out,
                "{:<24} {:<16} {:>10} {:>8} {:<8}",
                "DEVICE", "IP", "DATA (MB)", "MBPS", "STATUS"
            )?;
            for d in &devices {
                writeln!(
                    out,
                    "{:<24} {:<16} {:>10.1} {:>8.1} {:<8}",
                    truncate(&d.device_name, 24),
                    d.ip_address,
                    d.total_data_used_mb,
                    d.average_speed_mbps,
                    d.status,
                )?;
            }
            writeln!(out, "\n{} device(s)", devices.len())?;
        }
        DeviceAction::Usage { id } => {
            let logs = client.device_usage(&id).await?;
            if logs.is_empty() {
                writeln!(out, "No usage recorded for device {id}.")?;
                return Ok(());
            }
            writeln!(out, "{:<24} {:>10} {:<8}", "TIMESTAMP", "DATA (GB)", "STATUS")?;
            for log in &logs {
                writeln!(
                    out,
                    "{:<24} {:>10.2} {:<8}",
                    log.timestamp, log.data_used_gb, log.status,
                )?;
            }
        }
    }
    Ok(())
}
