//! Booking status lifecycle.
//!
//! A booking moves through a fixed set of statuses. The transition table
//! below is the single source of truth; the API layer consults it before
//! issuing any status write, and the client uses it to decide which
//! transition controls to render.
//!
//! ```text
//! pending   -> confirmed | cancelled
//! confirmed -> completed | cancelled
//! completed -> (terminal)
//! cancelled -> (terminal)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status of a booking, stored as lowercase text in the `bookings` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// Every booking status, in lifecycle order.
pub const ALL_STATUSES: &[BookingStatus] = &[
    BookingStatus::Pending,
    BookingStatus::Confirmed,
    BookingStatus::Completed,
    BookingStatus::Cancelled,
];

impl BookingStatus {
    /// Stable string representation matching serde's `rename_all = "lowercase"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// The statuses this one may move to. Empty for terminal statuses.
    pub fn allowed_transitions(self) -> &'static [BookingStatus] {
        match self {
            Self::Pending => &[Self::Confirmed, Self::Cancelled],
            Self::Confirmed => &[Self::Completed, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    /// Whether a transition from `self` to `target` is in the allow-list.
    pub fn can_transition_to(self, target: BookingStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// A terminal status admits no further transitions.
    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Unknown booking status '{other}'"
            ))),
        }
    }
}

/// Validate a requested status transition, returning a conflict error with
/// the legal targets if the transition is not in the allow-list.
pub fn ensure_transition(current: BookingStatus, target: BookingStatus) -> Result<(), CoreError> {
    if current.can_transition_to(target) {
        return Ok(());
    }
    let allowed = current
        .allowed_transitions()
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Err(CoreError::Conflict(if allowed.is_empty() {
        format!("Booking status '{current}' is terminal")
    } else {
        format!("Cannot move booking from '{current}' to '{target}'. Allowed: {allowed}")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table_closure() {
        assert_eq!(
            BookingStatus::Pending.allowed_transitions(),
            &[BookingStatus::Confirmed, BookingStatus::Cancelled]
        );
        assert_eq!(
            BookingStatus::Confirmed.allowed_transitions(),
            &[BookingStatus::Completed, BookingStatus::Cancelled]
        );
        assert!(BookingStatus::Completed.allowed_transitions().is_empty());
        assert!(BookingStatus::Cancelled.allowed_transitions().is_empty());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_pending_cannot_skip_to_completed() {
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
        assert!(ensure_transition(BookingStatus::Pending, BookingStatus::Completed).is_err());
    }

    #[test]
    fn test_pending_to_confirmed_allowed() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(ensure_transition(BookingStatus::Pending, BookingStatus::Confirmed).is_ok());
    }

    #[test]
    fn test_no_transition_out_of_terminal() {
        for &status in ALL_STATUSES {
            assert!(!BookingStatus::Completed.can_transition_to(status));
            assert!(!BookingStatus::Cancelled.can_transition_to(status));
        }
    }

    #[test]
    fn test_no_self_transition() {
        for &status in ALL_STATUSES {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_conflict_message_names_allowed_targets() {
        let err = ensure_transition(BookingStatus::Pending, BookingStatus::Completed).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("confirmed"));
        assert!(msg.contains("cancelled"));
    }

    #[test]
    fn test_parse_round_trip() {
        for &status in ALL_STATUSES {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_parse_unknown_rejected() {
        assert!("archived".parse::<BookingStatus>().is_err());
        assert!("".parse::<BookingStatus>().is_err());
        assert!("Pending".parse::<BookingStatus>().is_err());
    }
}
