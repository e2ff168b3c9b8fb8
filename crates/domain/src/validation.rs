// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{EntityKind, ValidationError};
use crate::records::{AccountFields, DepartmentFields, EmployeeFields, RequestFields};

/// Collects the names of empty required fields into a validation error.
fn require(
    entity: EntityKind,
    checks: &[(&'static str, bool)],
) -> Result<(), ValidationError> {
    let fields: Vec<&'static str> = checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { entity, fields })
    }
}

/// Validates that an account's required fields are present.
///
/// Only first name, last name and email are required; title, role and
/// status always carry a value. Email format and uniqueness are not checked.
///
/// # Errors
///
/// Returns `ValidationError::MissingFields` naming every empty field.
pub fn validate_account_fields(fields: &AccountFields) -> Result<(), ValidationError> {
    require(
        EntityKind::Account,
        &[
            ("first_name", !fields.first_name.is_empty()),
            ("last_name", !fields.last_name.is_empty()),
            ("email", !fields.email.is_empty()),
        ],
    )
}

/// Validates that every employee field is present.
///
/// An identifier of 0 counts as absent. The referenced account and
/// department are not required to exist.
///
/// # Errors
///
/// Returns `ValidationError::MissingFields` naming every empty field.
pub fn validate_employee_fields(fields: &EmployeeFields) -> Result<(), ValidationError> {
    require(
        EntityKind::Employee,
        &[
            ("employee_code", !fields.code.value().is_empty()),
            ("account", fields.account_id.get() != 0),
            ("position", !fields.position.is_empty()),
            ("department", fields.department_id.get() != 0),
        ],
    )
}

/// Validates that a department's name and description are present.
///
/// # Errors
///
/// Returns `ValidationError::MissingFields` naming every empty field.
pub fn validate_department_fields(fields: &DepartmentFields) -> Result<(), ValidationError> {
    require(
        EntityKind::Department,
        &[
            ("name", !fields.name.is_empty()),
            ("description", !fields.description.is_empty()),
        ],
    )
}

/// Validates a request's fields and line items.
///
/// # Errors
///
/// Returns an error if:
/// - The type is empty or the employee identifier is 0
/// - There are no line items
/// - Any line item has no name or a quantity below 1
pub fn validate_request_fields(fields: &RequestFields) -> Result<(), ValidationError> {
    require(
        EntityKind::Request,
        &[
            ("type", !fields.request_type.as_str().is_empty()),
            ("employee", fields.employee_id.get() != 0),
        ],
    )?;

    if fields.items.is_empty() {
        return Err(ValidationError::NoLineItems);
    }

    for (index, item) in fields.items.iter().enumerate() {
        let position: usize = index + 1;
        if item.name.is_empty() {
            return Err(ValidationError::LineItemMissingName { position });
        }
        if item.quantity == 0 {
            return Err(ValidationError::LineItemQuantity {
                position,
                value: item.quantity.to_string(),
            });
        }
    }

    Ok(())
}
