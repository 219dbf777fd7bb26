//! Support ticket domain: status machine, message kinds, local validation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Support ticket status.
///
/// Transitions are monotonic (`OPEN → IN_PROGRESS → RESOLVED`); a ticket
/// never reopens on the client. `RESOLVED` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    /// Wire spelling of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(self) -> bool {
        self == Self::Resolved
    }

    /// Check a requested transition, allowing same-status no-ops so that
    /// closing an already-resolved ticket stays idempotent.
    pub fn advance_to(self, next: Self) -> Result<Self> {
        if next >= self {
            Ok(next)
        } else {
            Err(Error::StatusRegression {
                from: self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "OPEN" => Ok(Self::Open),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "RESOLVED" => Ok(Self::Resolved),
            other => Err(format!(
                "unknown status: {other} (expected open, in-progress, or resolved)"
            )),
        }
    }
}

/// Which side of the conversation authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    Customer,
    Admin,
}

/// Validate a new ticket before any network call.
pub fn validate_new_ticket(subject: &str, description: &str) -> Result<()> {
    if subject.trim().is_empty() || description.trim().is_empty() {
        return Err(Error::Validation(
            "both subject and description are required".into(),
        ));
    }
    Ok(())
}

/// Validate a reply body before any network call.
pub fn validate_reply(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        return Err(Error::Validation("reply message is empty".into()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_wire_spelling() {
        let s: TicketStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(s, TicketStatus::InProgress);
        assert_eq!(s.as_str(), "IN_PROGRESS");
    }

    #[test]
    fn status_parses_cli_spelling() {
        assert_eq!("in-progress".parse::<TicketStatus>().unwrap(), TicketStatus::InProgress);
        assert_eq!("RESOLVED".parse::<TicketStatus>().unwrap(), TicketStatus::Resolved);
        assert!("reopened".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn forward_transitions_allowed() {
        assert_eq!(
            TicketStatus::Open.advance_to(TicketStatus::InProgress).unwrap(),
            TicketStatus::InProgress
        );
        assert_eq!(
            TicketStatus::InProgress.advance_to(TicketStatus::Resolved).unwrap(),
            TicketStatus::Resolved
        );
        // Skipping a step is still forward.
        assert!(TicketStatus::Open.advance_to(TicketStatus::Resolved).is_ok());
    }

    #[test]
    fn resolved_is_terminal_and_close_is_idempotent() {
        assert!(TicketStatus::Resolved.is_terminal());
        assert_eq!(
            TicketStatus::Resolved.advance_to(TicketStatus::Resolved).unwrap(),
            TicketStatus::Resolved
        );
    }

    #[test]
    fn status_never_regresses() {
        let err = TicketStatus::Resolved
            .advance_to(TicketStatus::Open)
            .unwrap_err();
        assert!(matches!(err, Error::StatusRegression { .. }));
        assert!(TicketStatus::InProgress.advance_to(TicketStatus::Open).is_err());
    }

    #[test]
    fn empty_subject_or_description_rejected() {
        assert!(validate_new_ticket("", "desc").is_err());
        assert!(validate_new_ticket("subject", "   ").is_err());
        assert!(validate_new_ticket("subject", "desc").is_ok());
    }

    #[test]
    fn blank_reply_rejected() {
        assert!(validate_reply("  \n").is_err());
        assert!(validate_reply("on it").is_ok());
    }
}
