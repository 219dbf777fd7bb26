//! Billing subcommands: invoice download.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;

use ispnet_core::session::Role;

use crate::config::CliConfig;
use crate::portal;

/// Billing subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum BillingAction {
    /// Download the current invoice PDF.
    Invoice {
        /// Customer ID (admins only; defaults to the signed-in customer).
        #[arg(short, long)]
        customer: Option<String>,
        /// Output file (defaults to invoice-<id>-<yyyymm>.pdf).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Execute a billing subcommand.
pub async fn run(action: BillingAction, config: &CliConfig) -> anyhow::Result<()> {
    let session = config.require_session()?;
    match action {
        BillingAction::Invoice { customer, output } => {
            let customer_id = match customer {
                Some(id) => {
                    if session.role != Role::Admin && id != session.user_id {
                        anyhow::bail!("only admins can download another customer's invoice");
                    }
                    id
                }
                None => session.user_id.clone(),
            };

            let client = portal::authed_client(config)?;
            let bytes = client.download_invoice(&customer_id).await?;

            let path = output.unwrap_or_else(|| default_invoice_name(&customer_id).into());
            std::fs::write(&path, &bytes)?;

            let mut out = io::stdout();
            writeln!(out, "Saved {} ({} bytes)", path.display(), bytes.len())?;
        }
    }
    Ok(())
}

/// Default invoice filename: a short customer-id prefix plus the current
/// month stamp.
fn default_invoice_name(customer_id: &str) -> String {
    let prefix: String = customer_id.chars().take(8).collect();
    format!("invoice-{prefix}-{}.pdf", Local::now().format("%Y%m"))
}
