// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification port.
//!
//! The engine only triggers notifications; delivery lives outside the
//! core. Calls are fire-and-forget: the committing caller logs failures
//! and never rolls back an assignment because of one.

use serde_json::Value;

/// The notification template to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// An assignment was created for the officer.
    AssignmentCreated,
}

impl NotificationKind {
    /// Returns the template key for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AssignmentCreated => "assignment_created",
        }
    }
}

/// Errors reported by a notification backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The backend could not accept the notification.
    DeliveryFailed(String),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeliveryFailed(msg) => write!(f, "Notification delivery failed: {msg}"),
        }
    }
}

impl std::error::Error for NotifyError {}

/// A notification backend.
///
/// At-least-once delivery is acceptable; retry and backoff are the
/// backend's responsibility, not the engine's.
pub trait Notifier {
    /// Sends a notification to an officer's user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot accept the notification.
    fn notify(
        &self,
        officer_user_id: i64,
        kind: NotificationKind,
        payload: &Value,
    ) -> Result<(), NotifyError>;
}

/// A notifier that discards everything. Useful in tests and batch tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(
        &self,
        _officer_user_id: i64,
        _kind: NotificationKind,
        _payload: &Value,
    ) -> Result<(), NotifyError> {
        Ok(())
    }
}
