// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use angkut::CoreError;
use angkut_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// A stored value could not be decoded into a domain type.
    InvalidStoredValue(String),
    /// The assignment engine rejected the operation.
    Engine(CoreError),
    /// The requested pickup request was not found.
    RequestNotFound(i64),
    /// The requested assignment was not found.
    AssignmentNotFound(i64),
    /// The request's status changed between planning and commit.
    StaleRequestStatus {
        request_id: i64,
        expected: String,
    },
    /// The assignment is not active, so it cannot be completed or cancelled.
    AssignmentNotActive {
        assignment_id: i64,
        status: String,
    },
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InvalidStoredValue(msg) => write!(f, "Invalid stored value: {msg}"),
            Self::Engine(err) => write!(f, "Engine error: {err}"),
            Self::RequestNotFound(id) => write!(f, "Pickup request not found: {id}"),
            Self::AssignmentNotFound(id) => write!(f, "Assignment not found: {id}"),
            Self::StaleRequestStatus {
                request_id,
                expected,
            } => {
                write!(
                    f,
                    "Request {request_id} is no longer in status '{expected}'"
                )
            }
            Self::AssignmentNotActive {
                assignment_id,
                status,
            } => {
                write!(
                    f,
                    "Assignment {assignment_id} with status '{status}' is not active"
                )
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<rusqlite::Error> for PersistenceError {
    fn from(err: rusqlite::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<CoreError> for PersistenceError {
    fn from(err: CoreError) -> Self {
        Self::Engine(err)
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::Engine(CoreError::DomainViolation(err))
    }
}
