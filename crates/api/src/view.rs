// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List view models.
//!
//! Every function here is a pure projection of the store. Cross references
//! are resolved at render time and degrade to `N/A` when they dangle.

use serde::Serialize;
use staffdesk::{Store, employee_account, employee_count};
use staffdesk_domain::{
    Account, AccountId, Department, DepartmentId, Employee, EmployeeId, RecordStatus, Request,
    RequestId, RequestStatus, format_short_date,
};

/// Shown in place of a cross reference that does not resolve.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown as the only row of an empty request list.
pub const NO_REQUESTS_PLACEHOLDER: &str = "No requests found.";

/// Colour of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    /// Active or approved.
    Success,
    /// Inactive or rejected.
    Danger,
    /// Pending.
    Warning,
}

impl BadgeTone {
    /// Returns the CSS classes of a badge in this tone.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-success",
            Self::Danger => "bg-danger",
            Self::Warning => "bg-warning text-dark",
        }
    }
}

/// A status label with its tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    /// The status text.
    pub label: String,
    /// The badge colour.
    pub tone: BadgeTone,
}

impl StatusBadge {
    fn record(status: RecordStatus) -> Self {
        let tone: BadgeTone = if status.is_active() {
            BadgeTone::Success
        } else {
            BadgeTone::Danger
        };
        Self {
            label: status.to_string(),
            tone,
        }
    }

    fn request(status: RequestStatus) -> Self {
        let tone: BadgeTone = match status {
            RequestStatus::Pending => BadgeTone::Warning,
            RequestStatus::Approved => BadgeTone::Success,
            RequestStatus::Rejected => BadgeTone::Danger,
        };
        Self {
            label: status.to_string(),
            tone,
        }
    }
}

/// One row of the accounts list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRow {
    /// Target of the edit action.
    pub id: AccountId,
    /// The honorific.
    pub title: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Role name.
    pub role: String,
    /// Status badge.
    pub status: StatusBadge,
}

/// One row of the employees list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRow {
    /// Target of the edit and requests actions.
    pub id: EmployeeId,
    /// The employee code.
    pub employee_code: String,
    /// The linked account's email, or `N/A`.
    pub account_email: String,
    /// Position.
    pub position: String,
    /// The department name, or `N/A`.
    pub department_name: String,
    /// Hire date as `M/D/YYYY`.
    pub hire_date: String,
    /// Status badge.
    pub status: StatusBadge,
}

/// One row of the departments list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRow {
    /// Target of the edit action.
    pub id: DepartmentId,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Number of employees currently assigned.
    pub employee_count: usize,
}

/// One row of the requests list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRow {
    /// Target of the edit action.
    pub id: RequestId,
    /// Request type.
    pub request_type: String,
    /// Who asked: `email (first last)`, else the employee code, else `N/A`.
    pub requester: String,
    /// Line items as `name (xquantity)`.
    pub items: Vec<String>,
    /// Status badge.
    pub status: StatusBadge,
}

/// The requests list, which has a placeholder when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum RequestList {
    /// At least one request.
    Rows(Vec<RequestRow>),
    /// No requests; carries the placeholder text.
    Empty(&'static str),
}

/// Renders the accounts list.
#[must_use]
pub fn render_accounts(store: &Store) -> Vec<AccountRow> {
    store.accounts.iter().map(account_row).collect()
}

fn account_row(account: &Account) -> AccountRow {
    AccountRow {
        id: account.id,
        title: account.title.to_string(),
        first_name: account.first_name.clone(),
        last_name: account.last_name.clone(),
        email: account.email.clone(),
        role: account.role.to_string(),
        status: StatusBadge::record(account.status),
    }
}

/// Renders the employees list.
#[must_use]
pub fn render_employees(store: &Store) -> Vec<EmployeeRow> {
    store
        .employees
        .iter()
        .map(|employee| employee_row(store, employee))
        .collect()
}

fn employee_row(store: &Store, employee: &Employee) -> EmployeeRow {
    let account_email: String = employee_account(store, employee).map_or_else(
        || String::from(NOT_AVAILABLE),
        |account| account.email.clone(),
    );
    let department_name: String = store.departments.get(employee.department_id).map_or_else(
        || String::from(NOT_AVAILABLE),
        |department| department.name.clone(),
    );

    EmployeeRow {
        id: employee.id,
        employee_code: employee.code.to_string(),
        account_email,
        position: employee.position.clone(),
        department_name,
        hire_date: format_short_date(employee.hire_date),
        status: StatusBadge::record(employee.status),
    }
}

/// Renders the departments list. Employee counts are recomputed every call.
#[must_use]
pub fn render_departments(store: &Store) -> Vec<DepartmentRow> {
    store
        .departments
        .iter()
        .map(|department: &Department| DepartmentRow {
            id: department.id,
            name: department.name.clone(),
            description: department.description.clone(),
            employee_count: employee_count(store, department.id),
        })
        .collect()
}

/// Renders the requests list.
#[must_use]
pub fn render_requests(store: &Store) -> RequestList {
    if store.requests.is_empty() {
        return RequestList::Empty(NO_REQUESTS_PLACEHOLDER);
    }

    RequestList::Rows(
        store
            .requests
            .iter()
            .map(|request| request_row(store, request))
            .collect(),
    )
}

/// Resolves who filed a request.
#[must_use]
pub fn requester_label(store: &Store, employee_id: EmployeeId) -> String {
    let Some(employee) = store.employees.get(employee_id) else {
        return String::from(NOT_AVAILABLE);
    };

    employee_account(store, employee).map_or_else(
        || employee.code.to_string(),
        Account::display_label,
    )
}

fn request_row(store: &Store, request: &Request) -> RequestRow {
    RequestRow {
        id: request.id,
        request_type: request.request_type.to_string(),
        requester: requester_label(store, request.employee_id),
        items: request.items.iter().map(|item| item.label()).collect(),
        status: StatusBadge::request(request.status),
    }
}
