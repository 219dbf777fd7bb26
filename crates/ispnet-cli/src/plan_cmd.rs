//! Plan subcommands: list offers, subscribe.

use std::io::{self, Write};

use crate::config::CliConfig;
use crate::fmt::truncate;
use crate::portal;

/// Plan subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum PlanAction {
    /// List available subscription plans.
    List,
    /// Subscribe to a plan.
    Select {
        /// Plan ID.
        id: String,
    },
}

/// Execute a plan subcommand.
pub async fn run(action: PlanAction, config: &CliConfig) -> anyhow::Result<()> {
    let client = portal::authed_client(config)?;
    let mut out = io::stdout();
    match action {
        PlanAction::List => {
            let plans = client.plans().await?;
            if plans.is_empty() {
                writeln!(out, "No plans available.")?;
                return Ok(());
            }
            writeln!(
                out,
                "{:<10} {:<20} {:>9} {:>9}  {}",
                "ID", "NAME", "GB", "$/MONTH", "DESCRIPTION"
            )?;
            for p in &plans {
                writeln!(
                    out,
                    "{:<10} {:<20} {:>9.0} {:>9.2}  {}",
                    truncate(&p.id, 10),
                    truncate(&p.name, 20),
                    p.data_gb,
                    p.price_per_month,
                    truncate(&p.description, 40),
                )?;
            }
        }
        PlanAction::Select { id } => {
            client.select_plan(&id).await?;
            writeln!(out, "Subscribed to plan {id}.")?;
        }
    }
    Ok(())
}
