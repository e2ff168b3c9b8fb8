// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use staffdesk::CoreError;
use staffdesk_domain::{DomainError, EntityKind};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A submitted form failed validation. The message is shown inline on the form.
    #[error("{message}")]
    Validation {
        /// A human-readable description of the problem.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A form was submitted or edited while no form of that kind is open.
    #[error("No {expected} form is open")]
    NoOpenForm {
        /// The form kind the caller expected to be open.
        expected: EntityKind,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::Validation(validation) => ApiError::Validation {
            message: validation.to_string(),
        },
        DomainError::RecordNotFound { entity, id } => ApiError::ResourceNotFound {
            resource_type: entity.to_string(),
            message: format!("{entity} {id} does not exist"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
