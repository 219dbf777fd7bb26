//! Ticket subcommands: list, create, show, reply, close, status.
//!
//! User-facing output uses writeln! to stdout (this is a CLI binary, not debug output).

use std::io::{self, Write};

use ispnet_core::ticket::TicketStatus;

use crate::config::CliConfig;
use crate::fmt::{truncate, write_ticket_detail};
use crate::portal;

/// Ticket subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum TicketAction {
    /// List tickets (customers see their own, admins see all).
    List,
    /// Open a new support ticket.
    Create {
        /// Short subject line.
        #[arg(short, long)]
        subject: String,
        /// Problem description.
        #[arg(short, long)]
        description: String,
    },
    /// Show one ticket with its conversation thread.
    Show {
        /// Ticket ID.
        id: String,
    },
    /// Reply to a ticket thread.
    Reply {
        /// Ticket ID.
        id: String,
        /// Message body.
        #[arg(short, long)]
        message: String,
    },
    /// Mark a ticket resolved.
    Close {
        /// Ticket ID.
        id: String,
    },
    /// Set a ticket's workflow status (admin).
    Status {
        /// Ticket ID.
        id: String,
        /// New status: open, in-progress, or resolved.
        #[arg(short, long)]
        to: TicketStatus,
    },
}

/// Execute a ticket subcommand.
pub async fn run(action: TicketAction, config: &CliConfig) -> anyhow::Result<()> {
    let client = portal::authed_client(config)?;
    let mut out = io::stdout();
    match action {
        TicketAction::List => {
            let tickets = client.list_tickets().await?;
            if tickets.is_empty() {
                writeln!(out, "No tickets found.")?;
                return Ok(());
            }
            writeln!(
                out,
                "{:<10} {:<36} {:<12} {:<5} {}",
                "ID", "SUBJECT", "STATUS", "MSGS", "CREATED"
            )?;
            for t in &tickets {
                let subject = t.subject.as_deref().unwrap_or(&t.description);
                writeln!(
                    out,
                    "{:<10} {:<36} {:<12} {:<5} {}",
                    truncate(&t.id, 10),
                    truncate(subject, 36),
                    t.status,
                    t.message_count,
                    t.created_at,
                )?;
            }
            writeln!(out, "\n{} ticket(s)", tickets.len())?;
        }
        TicketAction::Create {
            subject,
            description,
        } => {
            client.create_ticket(&subject, &description).await?;
            writeln!(out, "Ticket created: {subject}")?;
        }
        TicketAction::Show { id } => match client.get_ticket(&id).await? {
            Some(ticket) => write_ticket_detail(&mut out, &ticket)?,
            None => writeln!(out, "Ticket {id} not found.")?,
        },
        TicketAction::Reply { id, message } => {
            client.reply_ticket(&id, &message).await?;
            writeln!(out, "Reply added to ticket {id}.")?;
        }
        TicketAction::Close { id } => {
            let Some(ticket) = client.get_ticket(&id).await? else {
                writeln!(out, "Ticket {id} not found.")?;
                return Ok(());
            };
            // Closing an already-resolved ticket is a no-op, not an error.
            if ticket.status.is_terminal() {
                writeln!(out, "Ticket {id} is already resolved.")?;
                return Ok(());
            }
            ticket.status.advance_to(TicketStatus::Resolved)?;
            client.set_ticket_status(&id, TicketStatus::Resolved).await?;
            writeln!(out, "Ticket {id} resolved.")?;
        }
        TicketAction::Status { id, to } => {
            let Some(ticket) = client.get_ticket(&id).await? else {
                writeln!(out, "Ticket {id} not found.")?;
                return Ok(());
            };
            // Statuses only move forward; a regression is rejected before
            // any request is sent.
            ticket.status.advance_to(to)?;
            if ticket.status == to {
                writeln!(out, "Ticket {id} is already {to}.")?;
                return Ok(());
            }
            client.set_ticket_status(&id, to).await?;
            writeln!(out, "Ticket {id} moved to {to}.")?;
        }
    }
    Ok(())
}
