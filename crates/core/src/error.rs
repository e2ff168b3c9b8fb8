// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::{DomainError, ValidationError};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        Self::DomainViolation(DomainError::Validation(err))
    }
}
