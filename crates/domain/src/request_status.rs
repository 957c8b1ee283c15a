// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pickup request status tracking and transition logic.
//!
//! This module defines the request lifecycle and the single source of
//! truth for which transitions are permitted. Status strings use the
//! Indonesian forms carried by the production data.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Pickup request lifecycle states.
///
/// The normal flow is submitted → verified → scheduled → collected →
/// completed. A request may be rejected from any non-terminal state.
/// Requests are never hard-deleted; terminal states end the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Submitted by a citizen or guest, awaiting verification.
    Submitted,
    /// Verified by an administrator, awaiting assignment.
    Verified,
    /// An assignment exists for this request.
    Scheduled,
    /// The waste has been picked up by the officer.
    Collected,
    /// The pickup has been confirmed complete.
    Completed,
    /// The request was rejected.
    Rejected,
}

impl RequestStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "diajukan",
            Self::Verified => "diverifikasi",
            Self::Scheduled => "dijadwalkan",
            Self::Collected => "diangkut",
            Self::Completed => "selesai",
            Self::Rejected => "ditolak",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "diajukan" => Ok(Self::Submitted),
            "diverifikasi" => Ok(Self::Verified),
            "dijadwalkan" => Ok(Self::Scheduled),
            "diangkut" => Ok(Self::Collected),
            "selesai" => Ok(Self::Completed),
            "ditolak" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidRequestStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal (cannot transition further).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// Returns true if the assignment engine may act on a request in this
    /// status. Only submitted and verified requests are assignable.
    #[must_use]
    pub const fn is_assignable(&self) -> bool {
        matches!(self, Self::Submitted | Self::Verified)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        // Rejection is reachable from any non-terminal state
        if new_status == Self::Rejected {
            return Ok(());
        }

        // Forward transitions only, one step at a time
        let valid: bool = matches!(
            (self, new_status),
            (Self::Submitted, Self::Verified)
                | (Self::Submitted | Self::Verified, Self::Scheduled)
                | (Self::Scheduled, Self::Collected)
                | (Self::Collected, Self::Completed)
        );

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by status lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const ALL: [RequestStatus; 6] = [
        RequestStatus::Submitted,
        RequestStatus::Verified,
        RequestStatus::Scheduled,
        RequestStatus::Collected,
        RequestStatus::Completed,
        RequestStatus::Rejected,
    ];

    #[test]
    fn test_status_string_round_trip() {
        for status in ALL {
            let s: &str = status.as_str();
            match RequestStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        assert!(RequestStatus::parse_str("pending").is_err());
        assert!(RequestStatus::parse_str("").is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RequestStatus::Submitted.is_terminal());
        assert!(!RequestStatus::Verified.is_terminal());
        assert!(!RequestStatus::Scheduled.is_terminal());
        assert!(!RequestStatus::Collected.is_terminal());
        assert!(RequestStatus::Completed.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_only_submitted_and_verified_are_assignable() {
        assert!(RequestStatus::Submitted.is_assignable());
        assert!(RequestStatus::Verified.is_assignable());
        assert!(!RequestStatus::Scheduled.is_assignable());
        assert!(!RequestStatus::Collected.is_assignable());
        assert!(!RequestStatus::Completed.is_assignable());
        assert!(!RequestStatus::Rejected.is_assignable());
    }

    #[test]
    fn test_forward_transitions() {
        assert!(
            RequestStatus::Submitted
                .validate_transition(RequestStatus::Verified)
                .is_ok()
        );
        assert!(
            RequestStatus::Submitted
                .validate_transition(RequestStatus::Scheduled)
                .is_ok()
        );
        assert!(
            RequestStatus::Verified
                .validate_transition(RequestStatus::Scheduled)
                .is_ok()
        );
        assert!(
            RequestStatus::Scheduled
                .validate_transition(RequestStatus::Collected)
                .is_ok()
        );
        assert!(
            RequestStatus::Collected
                .validate_transition(RequestStatus::Completed)
                .is_ok()
        );
    }

    #[test]
    fn test_rejection_reachable_from_any_non_terminal_state() {
        for status in [
            RequestStatus::Submitted,
            RequestStatus::Verified,
            RequestStatus::Scheduled,
            RequestStatus::Collected,
        ] {
            assert!(status.validate_transition(RequestStatus::Rejected).is_ok());
        }
    }

    #[test]
    fn test_no_skipping_forward() {
        assert!(
            RequestStatus::Submitted
                .validate_transition(RequestStatus::Collected)
                .is_err()
        );
        assert!(
            RequestStatus::Verified
                .validate_transition(RequestStatus::Completed)
                .is_err()
        );
        assert!(
            RequestStatus::Scheduled
                .validate_transition(RequestStatus::Completed)
                .is_err()
        );
    }

    #[test]
    fn test_no_backwards_transitions() {
        assert!(
            RequestStatus::Scheduled
                .validate_transition(RequestStatus::Submitted)
                .is_err()
        );
        assert!(
            RequestStatus::Collected
                .validate_transition(RequestStatus::Verified)
                .is_err()
        );
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        for terminal in [RequestStatus::Completed, RequestStatus::Rejected] {
            for target in ALL {
                assert!(terminal.validate_transition(target).is_err());
            }
        }
    }
}
