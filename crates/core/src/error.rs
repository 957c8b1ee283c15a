// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use angkut_domain::{DomainError, RequestStatus};

/// Errors that can occur while planning an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// `plan_assignment` was invoked on a request whose status does not
    /// permit assignment. This indicates a caller bug, not a skip
    /// condition, and fails loudly.
    RequestNotAssignable {
        /// The request in question.
        request_id: i64,
        /// Its current status.
        status: RequestStatus,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::RequestNotAssignable { request_id, status } => {
                write!(
                    f,
                    "Request {request_id} with status '{}' cannot be assigned",
                    status.as_str()
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
