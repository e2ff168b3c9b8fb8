// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form sessions.
//!
//! A form is either in create mode (no target) or edit mode (target set).
//! Form values are kept exactly as entered so a rejected submit re-renders
//! what the user typed. Submitting translates the raw values into typed
//! record fields: presence first, then numbers, enumerations and dates.

use serde::Deserialize;
use staffdesk::Store;
use staffdesk_domain::{
    Account, AccountFields, AccountId, Department, DepartmentFields, DepartmentId, Employee,
    EmployeeCode, EmployeeFields, EmployeeId, EntityKind, LineItem, RecordStatus, Request,
    RequestFields, RequestId, RequestType, Role, Title, ValidationError, format_iso_date,
    parse_iso_date,
};

/// Appended to the label of an inactive account kept in the employee form.
pub const INACTIVE_SUFFIX: &str = " [Inactive]";

/// One choice of a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// The submitted value.
    pub value: String,
    /// The shown label.
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    fn plain(value: &str) -> Self {
        Self::new(value, value)
    }
}

/// Builds a form title such as `ADD ACCOUNT` or `EDIT REQUEST`.
#[must_use]
pub fn form_title(entity: EntityKind, editing: bool) -> String {
    let verb: &str = if editing { "EDIT" } else { "ADD" };
    format!("{verb} {}", entity.as_str().to_uppercase())
}

fn require_present(
    entity: EntityKind,
    values: &[(&'static str, &str)],
) -> Result<(), ValidationError> {
    let fields: Vec<&'static str> = values
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { entity, fields })
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

// ============================================================================
// Accounts
// ============================================================================

/// Raw account form values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AccountInput {
    /// Honorific.
    pub title: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: String,
    /// Status.
    pub status: String,
}

impl AccountInput {
    fn defaults() -> Self {
        Self {
            title: Title::default().to_string(),
            role: Role::default().to_string(),
            status: RecordStatus::default().to_string(),
            ..Self::default()
        }
    }

    fn from_record(account: &Account) -> Self {
        Self {
            title: account.title.to_string(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.clone(),
            role: account.role.to_string(),
            status: account.status.to_string(),
        }
    }

    /// Translates the raw values into account fields.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if a required field is empty or a
    /// selection is not one of the offered choices.
    pub fn to_fields(&self) -> Result<AccountFields, ValidationError> {
        require_present(
            EntityKind::Account,
            &[
                ("first_name", self.first_name.as_str()),
                ("last_name", self.last_name.as_str()),
                ("email", self.email.as_str()),
            ],
        )?;

        Ok(AccountFields {
            title: self.title.parse()?,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            role: self.role.parse()?,
            status: self.status.parse()?,
        })
    }
}

/// An open account form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountForm {
    /// The account being edited; `None` when creating.
    pub target: Option<AccountId>,
    /// Current values.
    pub values: AccountInput,
    /// Inline error from the last rejected submit.
    pub error: Option<String>,
}

impl AccountForm {
    /// Opens the form for a new account.
    #[must_use]
    pub fn create() -> Self {
        Self {
            target: None,
            values: AccountInput::defaults(),
            error: None,
        }
    }

    /// Opens the form on an existing account.
    #[must_use]
    pub fn edit(account: &Account) -> Self {
        Self {
            target: Some(account.id),
            values: AccountInput::from_record(account),
            error: None,
        }
    }

    /// Returns the title choices.
    #[must_use]
    pub fn title_options() -> Vec<SelectOption> {
        Title::ALL
            .iter()
            .map(|title| SelectOption::plain(title.as_str()))
            .collect()
    }

    /// Returns the role choices.
    #[must_use]
    pub fn role_options() -> Vec<SelectOption> {
        Role::ALL
            .iter()
            .map(|role| SelectOption::plain(role.as_str()))
            .collect()
    }
}

/// Returns the status choices shared by accounts and employees.
#[must_use]
pub fn status_options() -> Vec<SelectOption> {
    RecordStatus::ALL
        .iter()
        .map(|status| SelectOption::plain(status.as_str()))
        .collect()
}

// ============================================================================
// Employees
// ============================================================================

/// Raw employee form values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeInput {
    /// Employee code; ignored while editing.
    pub employee_code: String,
    /// Selected account id.
    pub account_id: String,
    /// Position.
    pub position: String,
    /// Selected department id.
    pub department_id: String,
    /// Hire date as `YYYY-MM-DD`.
    pub hire_date: String,
    /// Status.
    pub status: String,
}

impl EmployeeInput {
    fn from_record(employee: &Employee) -> Self {
        Self {
            employee_code: employee.code.to_string(),
            account_id: employee.account_id.to_string(),
            position: employee.position.clone(),
            department_id: employee.department_id.to_string(),
            hire_date: format_iso_date(employee.hire_date),
            status: employee.status.to_string(),
        }
    }

    /// Translates the raw values into employee fields.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if a field is empty, an id is not a
    /// number, the hire date is not a date, or the status is unknown.
    pub fn to_fields(&self) -> Result<EmployeeFields, ValidationError> {
        require_present(
            EntityKind::Employee,
            &[
                ("employee_code", self.employee_code.as_str()),
                ("account", self.account_id.as_str()),
                ("position", self.position.as_str()),
                ("department", self.department_id.as_str()),
                ("hire_date", self.hire_date.as_str()),
                ("status", self.status.as_str()),
            ],
        )?;

        Ok(EmployeeFields {
            code: EmployeeCode::new(&self.employee_code),
            account_id: AccountId::new(parse_number("account", &self.account_id)?),
            position: self.position.clone(),
            department_id: DepartmentId::new(parse_number("department", &self.department_id)?),
            hire_date: parse_iso_date("hire_date", &self.hire_date)?,
            status: self.status.parse()?,
        })
    }
}

/// An open employee form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    /// The employee being edited; `None` when creating.
    pub target: Option<EmployeeId>,
    /// Current values.
    pub values: EmployeeInput,
    /// Account choices, fixed when the form opened.
    pub account_options: Vec<SelectOption>,
    /// Department choices, fixed when the form opened.
    pub department_options: Vec<SelectOption>,
    /// Inline error from the last rejected submit.
    pub error: Option<String>,
}

/// Lists the accounts an employee may be linked to.
///
/// Only active accounts are offered, except that an inactive account
/// already assigned to the edited employee is appended with an
/// ` [Inactive]` marker.
#[must_use]
pub fn account_options(store: &Store, assigned: Option<AccountId>) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = store
        .accounts
        .iter()
        .filter(|account| account.status.is_active())
        .map(|account| SelectOption::new(account.id.to_string(), account.display_label()))
        .collect();

    if let Some(account) = assigned.and_then(|id| store.accounts.get(id))
        && !account.status.is_active()
    {
        options.push(SelectOption::new(
            account.id.to_string(),
            format!("{}{INACTIVE_SUFFIX}", account.display_label()),
        ));
    }

    options
}

fn department_options(store: &Store) -> Vec<SelectOption> {
    store
        .departments
        .iter()
        .map(|department: &Department| {
            SelectOption::new(department.id.to_string(), department.name.clone())
        })
        .collect()
}

/// The value a select field submits when nothing was chosen explicitly.
fn first_value(options: &[SelectOption]) -> String {
    options
        .first()
        .map(|option| option.value.clone())
        .unwrap_or_default()
}

impl EmployeeForm {
    /// Opens the form for a new employee with a suggested employee code.
    #[must_use]
    pub fn create(store: &Store) -> Self {
        let account_options: Vec<SelectOption> = account_options(store, None);
        let department_options: Vec<SelectOption> = department_options(store);
        let values: EmployeeInput = EmployeeInput {
            employee_code: EmployeeCode::sequence(store.employees.len() + 1).to_string(),
            account_id: first_value(&account_options),
            position: String::new(),
            department_id: first_value(&department_options),
            hire_date: String::new(),
            status: RecordStatus::default().to_string(),
        };

        Self {
            target: None,
            values,
            account_options,
            department_options,
            error: None,
        }
    }

    /// Opens the form on an existing employee.
    #[must_use]
    pub fn edit(store: &Store, employee: &Employee) -> Self {
        Self {
            target: Some(employee.id),
            values: EmployeeInput::from_record(employee),
            account_options: account_options(store, Some(employee.account_id)),
            department_options: department_options(store),
            error: None,
        }
    }

    /// Returns whether the employee code is read only.
    #[must_use]
    pub const fn code_locked(&self) -> bool {
        self.target.is_some()
    }

    /// Takes over submitted values. A locked employee code is kept.
    pub fn sync(&mut self, mut input: EmployeeInput) {
        if self.code_locked() {
            input.employee_code = std::mem::take(&mut self.values.employee_code);
        }
        self.values = input;
    }
}

// ============================================================================
// Departments
// ============================================================================

/// Raw department form values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DepartmentInput {
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
}

impl DepartmentInput {
    /// Translates the raw values into department fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingFields` if either field is empty.
    pub fn to_fields(&self) -> Result<DepartmentFields, ValidationError> {
        require_present(
            EntityKind::Department,
            &[
                ("name", self.name.as_str()),
                ("description", self.description.as_str()),
            ],
        )?;

        Ok(DepartmentFields {
            name: self.name.clone(),
            description: self.description.clone(),
        })
    }
}

/// An open department form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentForm {
    /// The department being edited; `None` when creating.
    pub target: Option<DepartmentId>,
    /// Current values.
    pub values: DepartmentInput,
    /// Inline error from the last rejected submit.
    pub error: Option<String>,
}

impl DepartmentForm {
    /// Opens the form for a new department.
    #[must_use]
    pub fn create() -> Self {
        Self {
            target: None,
            values: DepartmentInput::default(),
            error: None,
        }
    }

    /// Opens the form on an existing department.
    #[must_use]
    pub fn edit(department: &Department) -> Self {
        Self {
            target: Some(department.id),
            values: DepartmentInput {
                name: department.name.clone(),
                description: department.description.clone(),
            },
            error: None,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// One line item slot of the request form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemSlot {
    /// Display handle used by the remove action. Not necessarily unique.
    pub handle: usize,
    /// Item name as entered.
    pub name: String,
    /// Quantity as entered.
    pub quantity: String,
}

/// The growable list of line item slots.
///
/// A new slot's handle is the number of slots present when it is added.
/// Removing deletes the first slot with the given handle and never
/// renumbers the rest, so after a removal two slots can share a handle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineItemEditor {
    slots: Vec<LineItemSlot>,
}

impl LineItemEditor {
    /// Creates an editor with no slots.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an editor with one slot per existing item.
    #[must_use]
    pub fn from_items(items: &[LineItem]) -> Self {
        let mut editor: Self = Self::new();
        for item in items {
            editor.add(&item.name, &item.quantity.to_string());
        }
        editor
    }

    /// Appends a slot and returns its handle.
    pub fn add(&mut self, name: &str, quantity: &str) -> usize {
        let handle: usize = self.slots.len();
        self.slots.push(LineItemSlot {
            handle,
            name: name.to_string(),
            quantity: quantity.to_string(),
        });
        handle
    }

    /// Appends a blank slot with quantity 1.
    pub fn add_blank(&mut self) -> usize {
        self.add("", "1")
    }

    /// Removes the first slot carrying `handle`. Returns `false` if none does.
    pub fn remove(&mut self, handle: usize) -> bool {
        match self.slots.iter().position(|slot| slot.handle == handle) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces the slots with the ones currently on screen.
    pub fn sync_values(&mut self, slots: Vec<LineItemSlot>) {
        self.slots = slots;
    }

    /// Returns the slots in display order.
    #[must_use]
    pub fn slots(&self) -> &[LineItemSlot] {
        &self.slots
    }

    /// Translates the slots into line items.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if there are no slots, a slot has no
    /// name, or a quantity is not a whole number of at least 1.
    pub fn to_items(&self) -> Result<Vec<LineItem>, ValidationError> {
        if self.slots.is_empty() {
            return Err(ValidationError::NoLineItems);
        }

        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let position: usize = index + 1;
                if slot.name.is_empty() {
                    return Err(ValidationError::LineItemMissingName { position });
                }
                match slot.quantity.trim().parse::<u32>() {
                    Ok(quantity) if quantity >= 1 => Ok(LineItem::new(&slot.name, quantity)),
                    _ => Err(ValidationError::LineItemQuantity {
                        position,
                        value: slot.quantity.clone(),
                    }),
                }
            })
            .collect()
    }
}

/// Raw request form values.
///
/// Line items arrive as repeated `item_handle`, `item_name` and
/// `item_quantity` fields, so the body is read as ordered pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestInput {
    /// Request type.
    pub request_type: String,
    /// Selected employee id.
    pub employee_id: String,
    /// Line item slots in display order.
    pub items: Vec<LineItemSlot>,
}

impl RequestInput {
    /// Builds the input from submitted `(name, value)` pairs.
    ///
    /// The n-th handle, name and quantity form the n-th slot; a missing
    /// piece is taken as empty, and a missing or malformed handle as the
    /// slot's position.
    #[must_use]
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut input: Self = Self::default();
        let mut handles: Vec<&str> = Vec::new();
        let mut names: Vec<&str> = Vec::new();
        let mut quantities: Vec<&str> = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "request_type" => input.request_type.clone_from(value),
                "employee_id" => input.employee_id.clone_from(value),
                "item_handle" => handles.push(value.as_str()),
                "item_name" => names.push(value.as_str()),
                "item_quantity" => quantities.push(value.as_str()),
                _ => {}
            }
        }

        let count: usize = handles.len().max(names.len()).max(quantities.len());
        input.items = (0..count)
            .map(|index| LineItemSlot {
                handle: handles
                    .get(index)
                    .and_then(|handle| handle.parse::<usize>().ok())
                    .unwrap_or(index),
                name: names.get(index).copied().unwrap_or_default().to_string(),
                quantity: quantities.get(index).copied().unwrap_or_default().to_string(),
            })
            .collect();

        input
    }
}

/// An open request form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestForm {
    /// The request being edited; `None` when creating.
    pub target: Option<RequestId>,
    /// Selected request type.
    pub request_type: String,
    /// Selected employee id.
    pub employee_id: String,
    /// Type choices.
    pub type_options: Vec<SelectOption>,
    /// Employee choices, labelled by employee code.
    pub employee_options: Vec<SelectOption>,
    /// Line item slots.
    pub items: LineItemEditor,
    /// Inline error from the last rejected submit.
    pub error: Option<String>,
}

fn employee_options(store: &Store) -> Vec<SelectOption> {
    store
        .employees
        .iter()
        .map(|employee| SelectOption::new(employee.id.to_string(), employee.code.to_string()))
        .collect()
}

fn type_options(current: &RequestType) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = RequestType::OFFERED
        .iter()
        .map(|request_type| SelectOption::plain(request_type.as_str()))
        .collect();
    if let RequestType::Other(name) = current {
        options.push(SelectOption::plain(name));
    }
    options
}

impl RequestForm {
    /// Opens the form for a new request with one blank line item.
    #[must_use]
    pub fn create(store: &Store) -> Self {
        let employee_options: Vec<SelectOption> = employee_options(store);
        let mut items: LineItemEditor = LineItemEditor::new();
        items.add_blank();

        Self {
            target: None,
            request_type: RequestType::default().to_string(),
            employee_id: first_value(&employee_options),
            type_options: type_options(&RequestType::default()),
            employee_options,
            items,
            error: None,
        }
    }

    /// Opens the form on an existing request.
    #[must_use]
    pub fn edit(store: &Store, request: &Request) -> Self {
        Self {
            target: Some(request.id),
            request_type: request.request_type.to_string(),
            employee_id: request.employee_id.to_string(),
            type_options: type_options(&request.request_type),
            employee_options: employee_options(store),
            items: LineItemEditor::from_items(&request.items),
            error: None,
        }
    }

    /// Takes over submitted values, including the line item slots.
    pub fn sync(&mut self, input: RequestInput) {
        self.request_type = input.request_type;
        self.employee_id = input.employee_id;
        self.items.sync_values(input.items);
    }

    /// Translates the current values into request fields.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the type or employee is missing, the
    /// employee id is not a number, or a line item is invalid.
    pub fn to_fields(&self) -> Result<RequestFields, ValidationError> {
        require_present(
            EntityKind::Request,
            &[
                ("type", self.request_type.as_str()),
                ("employee", self.employee_id.as_str()),
            ],
        )?;

        Ok(RequestFields {
            employee_id: EmployeeId::new(parse_number("employee", &self.employee_id)?),
            request_type: RequestType::from(self.request_type.as_str()),
            items: self.items.to_items()?,
        })
    }
}

// ============================================================================
// Sessions
// ============================================================================

/// The one open form, carrying its own edit cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSession {
    /// Account form.
    Account(AccountForm),
    /// Employee form.
    Employee(EmployeeForm),
    /// Department form.
    Department(DepartmentForm),
    /// Request form.
    Request(RequestForm),
}

impl FormSession {
    /// Returns the entity this form edits.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Account(_) => EntityKind::Account,
            Self::Employee(_) => EntityKind::Employee,
            Self::Department(_) => EntityKind::Department,
            Self::Request(_) => EntityKind::Request,
        }
    }

    /// Returns the id of the edited record, or `None` in create mode.
    #[must_use]
    pub fn cursor(&self) -> Option<u32> {
        match self {
            Self::Account(form) => form.target.map(AccountId::get),
            Self::Employee(form) => form.target.map(EmployeeId::get),
            Self::Department(form) => form.target.map(DepartmentId::get),
            Self::Request(form) => form.target.map(RequestId::get),
        }
    }

    /// Returns the form heading.
    #[must_use]
    pub fn title(&self) -> String {
        form_title(self.kind(), self.cursor().is_some())
    }

    /// Returns the inline error, if the last submit was rejected.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Account(form) => form.error.as_deref(),
            Self::Employee(form) => form.error.as_deref(),
            Self::Department(form) => form.error.as_deref(),
            Self::Request(form) => form.error.as_deref(),
        }
    }

    /// Sets the inline error.
    pub fn set_error(&mut self, message: String) {
        let slot: &mut Option<String> = match self {
            Self::Account(form) => &mut form.error,
            Self::Employee(form) => &mut form.error,
            Self::Department(form) => &mut form.error,
            Self::Request(form) => &mut form.error,
        };
        *slot = Some(message);
    }
}
