// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Repository, SavedRecord, Store, TransitionResult};
use staffdesk_domain::{
    Account, Department, DomainError, Employee, Record, RecordId, Request,
    validate_account_fields, validate_department_fields, validate_employee_fields,
    validate_request_fields,
};

/// Creates or edits one record in a repository.
///
/// With no target a record is appended under the repository's next
/// identifier. With a target the existing record's fields are overwritten
/// in place; its position and identifier do not change.
fn save<T: Record, F>(
    repository: &mut Repository<T>,
    target: Option<T::Id>,
    fields: F,
    create: fn(T::Id, F) -> T,
    edit: fn(&mut T, F),
) -> Result<SavedRecord, DomainError> {
    let id: T::Id = match target {
        Some(id) => {
            let record: &mut T = repository
                .get_mut(id)
                .ok_or(DomainError::RecordNotFound {
                    entity: T::KIND,
                    id: id.value(),
                })?;
            edit(record, fields);
            id
        }
        None => {
            let id: T::Id = repository.next_id();
            repository.push(create(id, fields));
            id
        }
    };

    Ok(SavedRecord {
        entity: T::KIND,
        id: id.value(),
        created: target.is_none(),
    })
}

/// Applies a command to the current store, producing a new store.
///
/// Fields are validated before anything is written, so a rejected command
/// leaves no trace.
///
/// # Arguments
///
/// * `store` - The current store (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new store and the saved record
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A required field is empty or a request line item is invalid
/// - The command edits a record that does not exist
pub fn apply(store: &Store, command: Command) -> Result<TransitionResult, CoreError> {
    let mut new_store: Store = store.clone();

    let saved: SavedRecord = match command {
        Command::SaveAccount { target, fields } => {
            validate_account_fields(&fields)?;
            save(
                &mut new_store.accounts,
                target,
                fields,
                Account::new,
                Account::apply_fields,
            )?
        }
        Command::SaveEmployee { target, fields } => {
            validate_employee_fields(&fields)?;
            save(
                &mut new_store.employees,
                target,
                fields,
                Employee::new,
                Employee::apply_fields,
            )?
        }
        Command::SaveDepartment { target, fields } => {
            validate_department_fields(&fields)?;
            save(
                &mut new_store.departments,
                target,
                fields,
                Department::new,
                Department::apply_fields,
            )?
        }
        Command::SaveRequest { target, fields } => {
            validate_request_fields(&fields)?;
            save(
                &mut new_store.requests,
                target,
                fields,
                Request::new,
                Request::apply_fields,
            )?
        }
    };

    Ok(TransitionResult { new_store, saved })
}
