//! Admin subcommands: customer list, customer detail, revenue report.
//!
//! Revenue figures are synthesized from the customer list by
//! `ispnet_core::sim`; output carries a banner saying so.

use std::io::{self, Write};

use chrono::Local;

use ispnet_core::session::Role;
use ispnet_core::sim::{RevenueReport, build_report};

use crate::config::CliConfig;
use crate::fmt::{truncate, write_customer_detail};
use crate::portal;

/// Admin subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum AdminAction {
    /// List all customers.
    Customers,
    /// Show one customer in detail.
    Customer {
        /// Customer ID.
        id: String,
    },
    /// Print the simulated revenue report.
    Revenue,
}

/// Execute an admin subcommand.
pub async fn run(action: AdminAction, config: &CliConfig) -> anyhow::Result<()> {
    let session = config.require_session()?;
    if session.role != Role::Admin {
        anyhow::bail!("admin commands need an admin session (logged in as {})", session.role);
    }
    let client = portal::authed_client(config)?;
    let mut out = io::stdout();
    match action {
        AdminAction::Customers => {
            let customers = client.customers().await?;
            if customers.is_empty() {
                writeln!(out, "No customers found.")?;
                return Ok(());
            }
            writeln!(
                out,
                "{:<16} {:<28} {:<16} {:>14} {:<8}",
                "USERNAME", "EMAIL", "PLAN", "USED/LIMIT GB", "STATUS"
            )?;
            for c in &customers {
                writeln!(
                    out,
                    "{:<16} {:<28} {:<16} {:>6.1}/{:<7.1} {:<8}",
                    truncate(&c.username, 16),
                    truncate(&c.email, 28),
                    truncate(c.plan.as_deref().unwrap_or("No Plan"), 16),
                    c.data_used,
                    c.data_limit,
                    c.status,
                )?;
            }
            let subscribed = customers.iter().filter(|c| c.has_plan()).count();
            writeln!(
                out,
                "\n{} customer(s), {subscribed} subscribed",
                customers.len()
            )?;
        }
        AdminAction::Customer { id } => {
            let detail = client.customer_detail(&id).await?;
            write_customer_detail(&mut out, &detail)?;
        }
        AdminAction::Revenue => {
            let customers = client.customers().await?;
            let mut rng = rand::rng();
            let report = build_report(&mut rng, &customers, Local::now());
            write_revenue_report(&mut out, &report)?;
        }
    }
    Ok(())
}

fn write_revenue_report(w: &mut impl Write, report: &RevenueReport) -> io::Result<()> {
    writeln!(w, "Revenue report (simulated estimates, not billing records)")?;
    writeln!(w)?;
    writeln!(w, "Total revenue:     ${:.2}", report.total_revenue)?;
    writeln!(w, "This month:        ${:.2}", report.month_revenue)?;
    writeln!(w, "Outstanding:       ${:.2}", report.outstanding_total)?;
    writeln!(w, "Invoices:          {}", report.invoice_count)?;

    if !report.plans.is_empty() {
        writeln!(w, "\nBy plan:")?;
        writeln!(
            w,
            "  {:<20} {:>6} {:>10} {:>12} {:>7}",
            "PLAN", "SUBS", "$/UNIT", "TOTAL", "SHARE"
        )?;
        for p in &report.plans {
            writeln!(
                w,
                "  {:<20} {:>6} {:>10.2} {:>12.2} {:>6.1}%",
                truncate(&p.plan, 20),
                p.subscribers,
                p.unit_price,
                p.total,
                p.share_percent,
            )?;
        }
    }

    if !report.outstanding.is_empty() {
        writeln!(w, "\nOutstanding payments:")?;
        for o in &report.outstanding {
            writeln!(
                w,
                "  {:<16} {:<16} ${:>8.2} due {}{}",
                truncate(&o.username, 16),
                truncate(&o.plan, 16),
                o.amount,
                o.due_date,
                if o.overdue { "  OVERDUE" } else { "" },
            )?;
        }
    }

    if !report.payments.is_empty() {
        writeln!(w, "\nRecent payments:")?;
        for p in &report.payments {
            writeln!(
                w,
                "  {} {:<16} {:<13} ${:>8.2} {}",
                p.date,
                truncate(&p.username, 16),
                p.invoice_id,
                p.amount,
                p.method,
            )?;
        }
    }

    writeln!(w, "\nMonthly comparison:")?;
    for m in &report.monthly {
        writeln!(w, "  {:<10} ${:>10.2} {:>+6.1}%", m.month, m.revenue, m.change_percent)?;
    }

    writeln!(w, "\nYearly comparison:")?;
    for y in &report.yearly {
        writeln!(w, "  {} ${:>10.2} {:>+6.1}%", y.year, y.revenue, y.growth_percent)?;
    }

    writeln!(w, "\nInvoice batches:")?;
    for i in &report.invoices {
        writeln!(
            w,
            "  {:<16} {:>4} invoices ${:>10.2}  paid {:>3} pending {:>3}  {}",
            i.month, i.total_invoices, i.total_amount, i.paid, i.pending, i.status,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ispnet_core::account::CustomerSummary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn revenue_report_carries_simulation_banner() {
        let customers = vec![CustomerSummary {
            id: "c1".into(),
            username: "bob".into(),
            email: "b@x.io".into(),
            plan: Some("Fiber 100".into()),
            data_used: 10.0,
            data_limit: 100.0,
            status: "Active".into(),
        }];
        let now = Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let report = build_report(&mut StdRng::seed_from_u64(1), &customers, now);
        let mut buf = Vec::new();
        write_revenue_report(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Revenue report (simulated"));
        assert!(text.contains("Fiber 100"));
        assert!(text.contains("Yearly comparison:"));
    }
}
