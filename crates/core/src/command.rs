// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::{
    AccountFields, AccountId, DepartmentFields, DepartmentId, EmployeeFields, EmployeeId,
    RequestFields, RequestId,
};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. Every save carries
/// the edit cursor of its form: `None` creates a record, `Some(id)` edits
/// the record with that identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create or edit an account.
    SaveAccount {
        /// The account being edited, if any.
        target: Option<AccountId>,
        /// The submitted fields.
        fields: AccountFields,
    },
    /// Create or edit an employee.
    SaveEmployee {
        /// The employee being edited, if any.
        target: Option<EmployeeId>,
        /// The submitted fields.
        fields: EmployeeFields,
    },
    /// Create or edit a department.
    SaveDepartment {
        /// The department being edited, if any.
        target: Option<DepartmentId>,
        /// The submitted fields.
        fields: DepartmentFields,
    },
    /// Create or edit a request.
    SaveRequest {
        /// The request being edited, if any.
        target: Option<RequestId>,
        /// The submitted fields.
        fields: RequestFields,
    },
}
