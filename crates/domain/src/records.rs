// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::EntityKind;
use crate::ids::{AccountId, DepartmentId, EmployeeId, RecordId, RequestId};
use crate::types::{
    EmployeeCode, LineItem, RecordStatus, RequestStatus, RequestType, Role, Title,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// A stored record addressable by a typed identifier.
pub trait Record: Clone {
    /// The identifier type of this record.
    type Id: RecordId;

    /// The entity kind, used in errors and log fields.
    const KIND: EntityKind;

    /// Returns this record's identifier.
    fn id(&self) -> Self::Id;
}

/// Editable fields of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFields {
    /// Honorific.
    pub title: Title,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address. Unique by convention, not enforced.
    pub email: String,
    /// Privilege level.
    pub role: Role,
    /// Whether the account may be assigned to employees.
    pub status: RecordStatus,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Identifier, immutable after creation.
    pub id: AccountId,
    /// Honorific.
    pub title: Title,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Privilege level.
    pub role: Role,
    /// Active or inactive.
    pub status: RecordStatus,
}

impl Account {
    /// Creates an account from its identifier and fields.
    #[must_use]
    pub fn new(id: AccountId, fields: AccountFields) -> Self {
        Self {
            id,
            title: fields.title,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            role: fields.role,
            status: fields.status,
        }
    }

    /// Overwrites every editable field.
    pub fn apply_fields(&mut self, fields: AccountFields) {
        self.title = fields.title;
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.email = fields.email;
        self.role = fields.role;
        self.status = fields.status;
    }

    /// Returns `first last`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns `email (first last)`, the label used wherever an account is picked or shown.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.email, self.full_name())
    }
}

impl Record for Account {
    type Id = AccountId;
    const KIND: EntityKind = EntityKind::Account;

    fn id(&self) -> AccountId {
        self.id
    }
}

/// Editable fields of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    /// External employee code. Ignored when editing an existing employee.
    pub code: EmployeeCode,
    /// The linked account.
    pub account_id: AccountId,
    /// Job title, free text.
    pub position: String,
    /// The employing department.
    pub department_id: DepartmentId,
    /// Date of hire.
    pub hire_date: Date,
    /// Active or inactive.
    pub status: RecordStatus,
}

/// An employee, linked to an account and a department.
///
/// Neither link is checked for integrity; a link to a missing record
/// renders as `N/A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Internal identifier.
    pub id: EmployeeId,
    /// External employee code.
    pub code: EmployeeCode,
    /// The linked account.
    pub account_id: AccountId,
    /// Job title.
    pub position: String,
    /// The employing department.
    pub department_id: DepartmentId,
    /// Date of hire.
    pub hire_date: Date,
    /// Active or inactive.
    pub status: RecordStatus,
}

impl Employee {
    /// Creates an employee from its identifier and fields.
    #[must_use]
    pub fn new(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            code: fields.code,
            account_id: fields.account_id,
            position: fields.position,
            department_id: fields.department_id,
            hire_date: fields.hire_date,
            status: fields.status,
        }
    }

    /// Overwrites every editable field except the employee code.
    pub fn apply_fields(&mut self, fields: EmployeeFields) {
        self.account_id = fields.account_id;
        self.position = fields.position;
        self.department_id = fields.department_id;
        self.hire_date = fields.hire_date;
        self.status = fields.status;
    }
}

impl Record for Employee {
    type Id = EmployeeId;
    const KIND: EntityKind = EntityKind::Employee;

    fn id(&self) -> EmployeeId {
        self.id
    }
}

/// Editable fields of a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentFields {
    /// Department name.
    pub name: String,
    /// What the department does.
    pub description: String,
}

/// A department. Its employee count is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Identifier.
    pub id: DepartmentId,
    /// Department name.
    pub name: String,
    /// What the department does.
    pub description: String,
}

impl Department {
    /// Creates a department from its identifier and fields.
    #[must_use]
    pub fn new(id: DepartmentId, fields: DepartmentFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
        }
    }

    /// Overwrites every editable field.
    pub fn apply_fields(&mut self, fields: DepartmentFields) {
        self.name = fields.name;
        self.description = fields.description;
    }
}

impl Record for Department {
    type Id = DepartmentId;
    const KIND: EntityKind = EntityKind::Department;

    fn id(&self) -> DepartmentId {
        self.id
    }
}

/// Editable fields of a request. The status is not among them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFields {
    /// The requesting employee.
    pub employee_id: EmployeeId,
    /// What kind of request this is.
    pub request_type: RequestType,
    /// Requested items, in entry order.
    pub items: Vec<LineItem>,
}

/// A request raised on behalf of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Identifier.
    pub id: RequestId,
    /// The requesting employee.
    pub employee_id: EmployeeId,
    /// What kind of request this is.
    pub request_type: RequestType,
    /// Requested items, in entry order.
    pub items: Vec<LineItem>,
    /// Review state.
    pub status: RequestStatus,
}

impl Request {
    /// Creates a new request. New requests are always `Pending`.
    #[must_use]
    pub fn new(id: RequestId, fields: RequestFields) -> Self {
        Self {
            id,
            employee_id: fields.employee_id,
            request_type: fields.request_type,
            items: fields.items,
            status: RequestStatus::Pending,
        }
    }

    /// Overwrites every editable field. The status is kept.
    pub fn apply_fields(&mut self, fields: RequestFields) {
        self.employee_id = fields.employee_id;
        self.request_type = fields.request_type;
        self.items = fields.items;
    }
}

impl Record for Request {
    type Id = RequestId;
    const KIND: EntityKind = EntityKind::Request;

    fn id(&self) -> RequestId {
        self.id
    }
}
