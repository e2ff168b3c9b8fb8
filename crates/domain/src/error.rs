// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The four kinds of record the system manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A user account.
    Account,
    /// An employee.
    Employee,
    /// A department.
    Department,
    /// An employee request.
    Request,
}

impl EntityKind {
    /// Returns the display name of this entity kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Employee => "Employee",
            Self::Department => "Department",
            Self::Request => "Request",
        }
    }

    /// Returns the message shown when required fields of this entity's form are empty.
    #[must_use]
    pub const fn missing_fields_message(self) -> &'static str {
        match self {
            Self::Account => "First Name, Last Name, and Email are required.",
            Self::Employee | Self::Department | Self::Request => "All fields are required",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted form failed a presence or parse check.
///
/// This is the only user-facing error kind. It is raised before any
/// mutation takes place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more required fields are empty.
    #[error("{}", .entity.missing_fields_message())]
    MissingFields {
        /// The entity whose form was submitted.
        entity: EntityKind,
        /// The names of the empty fields.
        fields: Vec<&'static str>,
    },
    /// A numeric field did not parse to a usable value.
    #[error("Invalid {field}: '{value}' is not a valid number")]
    InvalidNumber {
        /// The field name.
        field: &'static str,
        /// The submitted value.
        value: String,
    },
    /// An enumerated field held a value outside its choices.
    #[error("Invalid {field}: '{value}' is not one of the available options")]
    InvalidChoice {
        /// The field name.
        field: &'static str,
        /// The submitted value.
        value: String,
    },
    /// A date field did not parse as `YYYY-MM-DD`.
    #[error("Invalid {field}: '{value}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The field name.
        field: &'static str,
        /// The submitted value.
        value: String,
    },
    /// A request was submitted without line items.
    #[error("At least one request item is required")]
    NoLineItems,
    /// A request line item has no name.
    #[error("Request item {position} needs a name")]
    LineItemMissingName {
        /// The 1-based position of the item in the submitted list.
        position: usize,
    },
    /// A request line item quantity is missing, unparsable, or below one.
    #[error("Request item {position} needs a quantity of at least 1, got '{value}'")]
    LineItemQuantity {
        /// The 1-based position of the item in the submitted list.
        position: usize,
        /// The submitted quantity.
        value: String,
    },
}

/// Errors raised by domain rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Submitted fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// An edit targeted a record that does not exist.
    #[error("{entity} {id} not found")]
    RecordNotFound {
        /// The entity kind that was looked up.
        entity: EntityKind,
        /// The identifier that was not found.
        id: u32,
    },
}
