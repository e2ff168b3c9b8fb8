// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::EntityKind;

/// The top-level views of the application. Exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// The accounts list.
    #[default]
    Accounts,
    /// The employees list.
    Employees,
    /// The departments list.
    Departments,
    /// The requests list.
    Requests,
    /// The account form.
    AccountForm,
    /// The employee form.
    EmployeeForm,
    /// The department form.
    DepartmentForm,
    /// The request form.
    RequestForm,
}

impl Section {
    /// Every section, lists first.
    pub const ALL: [Self; 8] = [
        Self::Accounts,
        Self::Employees,
        Self::Departments,
        Self::Requests,
        Self::AccountForm,
        Self::EmployeeForm,
        Self::DepartmentForm,
        Self::RequestForm,
    ];

    /// Returns the list section of an entity.
    #[must_use]
    pub const fn list_for(entity: EntityKind) -> Self {
        match entity {
            EntityKind::Account => Self::Accounts,
            EntityKind::Employee => Self::Employees,
            EntityKind::Department => Self::Departments,
            EntityKind::Request => Self::Requests,
        }
    }

    /// Returns the form section of an entity.
    #[must_use]
    pub const fn form_for(entity: EntityKind) -> Self {
        match entity {
            EntityKind::Account => Self::AccountForm,
            EntityKind::Employee => Self::EmployeeForm,
            EntityKind::Department => Self::DepartmentForm,
            EntityKind::Request => Self::RequestForm,
        }
    }

    /// Returns the entity this section shows.
    #[must_use]
    pub const fn entity(self) -> EntityKind {
        match self {
            Self::Accounts | Self::AccountForm => EntityKind::Account,
            Self::Employees | Self::EmployeeForm => EntityKind::Employee,
            Self::Departments | Self::DepartmentForm => EntityKind::Department,
            Self::Requests | Self::RequestForm => EntityKind::Request,
        }
    }

    /// Returns whether this is a list section.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::Accounts | Self::Employees | Self::Departments | Self::Requests
        )
    }

    /// Returns the section's identifier as used in logs and page markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Employees => "employees",
            Self::Departments => "departments",
            Self::Requests => "requests",
            Self::AccountForm => "account-form",
            Self::EmployeeForm => "employee-form",
            Self::DepartmentForm => "department-form",
            Self::RequestForm => "request-form",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the visible section. There is no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    visible: Section,
}

impl Navigator {
    /// Creates a navigator showing the accounts list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible: Section::Accounts,
        }
    }

    /// Returns the visible section.
    #[must_use]
    pub const fn visible(&self) -> Section {
        self.visible
    }

    /// Makes `section` the visible one and returns the section it replaced.
    pub const fn show(&mut self, section: Section) -> Section {
        let previous: Section = self.visible;
        self.visible = section;
        previous
    }
}
