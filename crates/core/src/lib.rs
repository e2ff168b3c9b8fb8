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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod seed;
mod state;

#[cfg(test)]
mod tests;

use staffdesk_domain::{Account, DepartmentId, Employee};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{Repository, SavedRecord, Store, TransitionResult};

/// Counts the employees currently assigned to a department.
///
/// The count is derived on every call and never stored, so it always
/// reflects the employees' current department links.
#[must_use]
pub fn employee_count(store: &Store, department_id: DepartmentId) -> usize {
    store
        .employees
        .iter()
        .filter(|employee| employee.department_id == department_id)
        .count()
}

/// Resolves the account linked to an employee.
///
/// Returns `None` for a dangling link.
#[must_use]
pub fn employee_account<'a>(store: &'a Store, employee: &Employee) -> Option<&'a Account> {
    store.accounts.get(employee.account_id)
}
