// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Status-history types for the Angkut collection dispatch system.
//!
//! Every status transition on a pickup request or complaint produces
//! exactly one history entry. Entries are append-only: they are never
//! mutated or deleted once written.

use angkut_domain::{DomainError, RequestStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the entity performing a status change.
///
/// An actor is any identifiable entity that initiates a transition.
/// System-triggered changes (the assignment engine) carry the system
/// actor; the acting user id is then absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The acting user account, when a human drove the change.
    pub user_id: Option<i64>,
    /// The type of actor (e.g., "admin", "officer", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates an actor for a human-driven change.
    #[must_use]
    pub const fn user(user_id: i64, actor_type: String) -> Self {
        Self {
            user_id: Some(user_id),
            actor_type,
        }
    }

    /// Creates the system actor for engine-driven changes.
    #[must_use]
    pub fn system() -> Self {
        Self {
            user_id: None,
            actor_type: String::from("system"),
        }
    }
}

/// The kind of record a history entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefType {
    /// A pickup request ("pengajuan").
    Request,
    /// A complaint ("pengaduan").
    Complaint,
}

impl RefType {
    /// Returns the string representation of the reference type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "pengajuan",
            Self::Complaint => "pengaduan",
        }
    }
}

impl FromStr for RefType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pengajuan" => Ok(Self::Request),
            "pengaduan" => Ok(Self::Complaint),
            _ => Err(DomainError::InvalidRefType(s.to_string())),
        }
    }
}

/// An immutable record of one status transition.
///
/// Entries capture:
/// - What record changed (`ref_type` + `ref_id`)
/// - The status before and after the transition
/// - A free-text note explaining the change
/// - Who drove it (actor; system actor for engine-driven changes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    /// The kind of record this entry refers to.
    pub ref_type: RefType,
    /// The id of the referred record.
    pub ref_id: i64,
    /// The status before the transition; `None` for the initial status.
    pub previous_status: Option<String>,
    /// The status after the transition.
    pub new_status: String,
    /// Free-text note explaining the change.
    pub note: Option<String>,
    /// The actor who drove the change.
    pub actor: Actor,
}

impl StatusHistoryEntry {
    /// Creates a new history entry.
    ///
    /// Once created, an entry is immutable.
    #[must_use]
    pub const fn new(
        ref_type: RefType,
        ref_id: i64,
        previous_status: Option<String>,
        new_status: String,
        note: Option<String>,
        actor: Actor,
    ) -> Self {
        Self {
            ref_type,
            ref_id,
            previous_status,
            new_status,
            note,
            actor,
        }
    }

    /// Creates a history entry for a pickup request transition.
    #[must_use]
    pub fn for_request(
        ref_id: i64,
        previous_status: Option<RequestStatus>,
        new_status: RequestStatus,
        note: Option<String>,
        actor: Actor,
    ) -> Self {
        Self::new(
            RefType::Request,
            ref_id,
            previous_status.map(|s| s.as_str().to_string()),
            new_status.as_str().to_string(),
            note,
            actor,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_system_actor_has_no_user_id() {
        let actor: Actor = Actor::system();
        assert_eq!(actor.user_id, None);
        assert_eq!(actor.actor_type, "system");
    }

    #[test]
    fn test_user_actor_carries_user_id() {
        let actor: Actor = Actor::user(42, String::from("admin"));
        assert_eq!(actor.user_id, Some(42));
        assert_eq!(actor.actor_type, "admin");
    }

    #[test]
    fn test_ref_type_round_trip() {
        for ref_type in [RefType::Request, RefType::Complaint] {
            let parsed: RefType = ref_type.as_str().parse().unwrap();
            assert_eq!(ref_type, parsed);
        }
    }

    #[test]
    fn test_ref_type_invalid_string() {
        assert!("laporan".parse::<RefType>().is_err());
    }

    #[test]
    fn test_request_entry_uses_status_strings() {
        let entry: StatusHistoryEntry = StatusHistoryEntry::for_request(
            7,
            Some(RequestStatus::Verified),
            RequestStatus::Scheduled,
            Some(String::from("Penugasan otomatis")),
            Actor::system(),
        );

        assert_eq!(entry.ref_type, RefType::Request);
        assert_eq!(entry.ref_id, 7);
        assert_eq!(entry.previous_status.as_deref(), Some("diverifikasi"));
        assert_eq!(entry.new_status, "dijadwalkan");
        assert_eq!(entry.actor, Actor::system());
    }

    #[test]
    fn test_entry_equality() {
        let make = || {
            StatusHistoryEntry::new(
                RefType::Request,
                3,
                None,
                String::from("diajukan"),
                None,
                Actor::system(),
            )
        };
        assert_eq!(make(), make());
    }
}
