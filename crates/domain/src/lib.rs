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

mod error;
mod ids;
mod records;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{DomainError, EntityKind, ValidationError};
pub use ids::{AccountId, DepartmentId, EmployeeId, RecordId, RequestId, next_id};
pub use records::{
    Account, AccountFields, Department, DepartmentFields, Employee, EmployeeFields, Record,
    Request, RequestFields,
};
pub use types::{
    EmployeeCode, LineItem, RecordStatus, RequestStatus, RequestType, Role, Title,
    format_iso_date, format_short_date, parse_iso_date,
};
pub use validation::{
    validate_account_fields, validate_department_fields, validate_employee_fields,
    validate_request_fields,
};
