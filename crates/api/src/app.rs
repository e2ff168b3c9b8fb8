// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The application context.
//!
//! `App` owns the store, the visible section, the open form and the
//! notification area. Every user interaction goes through one of its
//! methods; callers serialize access.

use staffdesk::{Command, CoreError, SavedRecord, Store, TransitionResult, apply};
use staffdesk_domain::{AccountId, DepartmentId, EmployeeId, EntityKind, RequestId, ValidationError};
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::forms::{
    AccountForm, AccountInput, DepartmentForm, DepartmentInput, EmployeeForm, EmployeeInput,
    FormSession, RequestForm, RequestInput,
};
use crate::navigator::{Navigator, Section};
use crate::notification::{Notice, NoticeKind, NoticeTicket, NotificationArea};
use crate::view::{
    AccountRow, DepartmentRow, EmployeeRow, RequestList, render_accounts, render_departments,
    render_employees, render_requests,
};

/// What the visible section currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// The accounts list.
    Accounts(Vec<AccountRow>),
    /// The employees list.
    Employees(Vec<EmployeeRow>),
    /// The departments list.
    Departments(Vec<DepartmentRow>),
    /// The requests list.
    Requests(RequestList),
    /// The open form.
    Form(&'a FormSession),
}

/// The result of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    /// The record that was written.
    pub saved: SavedRecord,
    /// Ticket of the success notification, for scheduling its dismissal.
    pub notice: NoticeTicket,
}

/// The application context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct App {
    store: Store,
    navigator: Navigator,
    form: Option<FormSession>,
    notifications: NotificationArea,
}

impl App {
    /// Creates the application showing the accounts list.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self {
            store,
            navigator: Navigator::new(),
            form: None,
            notifications: NotificationArea::new(),
        }
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the visible section.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.navigator.visible()
    }

    /// Returns the open form.
    #[must_use]
    pub const fn form(&self) -> Option<&FormSession> {
        self.form.as_ref()
    }

    /// Returns the visible notification.
    #[must_use]
    pub const fn notification(&self) -> Option<&Notice> {
        self.notifications.current()
    }

    /// Switches the visible section.
    ///
    /// Any notification is cleared. Switching to a list abandons the open
    /// form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoOpenForm` when switching to a form section whose
    /// form is not open.
    pub fn show_section(&mut self, section: Section) -> Result<(), ApiError> {
        if section.is_list() {
            self.show_list(section.entity());
            return Ok(());
        }

        let open: Option<EntityKind> = self.form.as_ref().map(FormSession::kind);
        if open != Some(section.entity()) {
            return Err(ApiError::NoOpenForm {
                expected: section.entity(),
            });
        }

        self.notifications.clear();
        let previous: Section = self.navigator.show(section);
        debug!(from = %previous, to = %section, "Switched section");
        Ok(())
    }

    fn show_list(&mut self, entity: EntityKind) {
        let section: Section = Section::list_for(entity);
        self.notifications.clear();
        self.form = None;
        let previous: Section = self.navigator.show(section);
        debug!(from = %previous, to = %section, "Switched section");
    }

    fn open_form(&mut self, form: FormSession) {
        let kind: EntityKind = form.kind();
        debug!(entity = %kind, cursor = ?form.cursor(), "Opened form");
        self.form = Some(form);
        self.notifications.clear();
        self.navigator.show(Section::form_for(kind));
    }

    /// Renders the visible section.
    #[must_use]
    pub fn current_view(&self) -> View<'_> {
        match (self.navigator.visible(), self.form.as_ref()) {
            (Section::Employees, _) => View::Employees(render_employees(&self.store)),
            (Section::Departments, _) => View::Departments(render_departments(&self.store)),
            (Section::Requests, _) => View::Requests(render_requests(&self.store)),
            (section, Some(form)) if !section.is_list() => View::Form(form),
            // Form sections are only visible while their form is open.
            _ => View::Accounts(render_accounts(&self.store)),
        }
    }

    // ========================================================================
    // Opening forms
    // ========================================================================

    /// Opens the account form, editing `target` or creating when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if `target` does not exist.
    pub fn open_account_form(&mut self, target: Option<AccountId>) -> Result<(), ApiError> {
        let form: AccountForm = match target {
            Some(id) => AccountForm::edit(
                self.store
                    .accounts
                    .require(id)
                    .map_err(translate_domain_error)?,
            ),
            None => AccountForm::create(),
        };
        self.open_form(FormSession::Account(form));
        Ok(())
    }

    /// Opens the employee form, editing `target` or creating when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if `target` does not exist.
    pub fn open_employee_form(&mut self, target: Option<EmployeeId>) -> Result<(), ApiError> {
        let form: EmployeeForm = match target {
            Some(id) => EmployeeForm::edit(
                &self.store,
                self.store
                    .employees
                    .require(id)
                    .map_err(translate_domain_error)?,
            ),
            None => EmployeeForm::create(&self.store),
        };
        self.open_form(FormSession::Employee(form));
        Ok(())
    }

    /// Opens the department form, editing `target` or creating when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if `target` does not exist.
    pub fn open_department_form(&mut self, target: Option<DepartmentId>) -> Result<(), ApiError> {
        let form: DepartmentForm = match target {
            Some(id) => DepartmentForm::edit(
                self.store
                    .departments
                    .require(id)
                    .map_err(translate_domain_error)?,
            ),
            None => DepartmentForm::create(),
        };
        self.open_form(FormSession::Department(form));
        Ok(())
    }

    /// Opens the request form, editing `target` or creating when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if `target` does not exist.
    pub fn open_request_form(&mut self, target: Option<RequestId>) -> Result<(), ApiError> {
        let form: RequestForm = match target {
            Some(id) => RequestForm::edit(
                &self.store,
                self.store
                    .requests
                    .require(id)
                    .map_err(translate_domain_error)?,
            ),
            None => RequestForm::create(&self.store),
        };
        self.open_form(FormSession::Request(form));
        Ok(())
    }

    // ========================================================================
    // Submitting forms
    // ========================================================================

    /// Submits the open account form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoOpenForm` if no account form is open, or
    /// `ApiError::Validation` if the values are rejected; the message is
    /// also set on the form.
    pub fn save_account(&mut self, input: AccountInput) -> Result<SaveOutcome, ApiError> {
        let Some(FormSession::Account(form)) = self.form.as_mut() else {
            return Err(ApiError::NoOpenForm {
                expected: EntityKind::Account,
            });
        };
        form.values = input;
        let command: Result<Command, ValidationError> =
            form.values.to_fields().map(|fields| Command::SaveAccount {
                target: form.target,
                fields,
            });
        self.commit(command)
    }

    /// Submits the open employee form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoOpenForm` if no employee form is open, or
    /// `ApiError::Validation` if the values are rejected.
    pub fn save_employee(&mut self, input: EmployeeInput) -> Result<SaveOutcome, ApiError> {
        let Some(FormSession::Employee(form)) = self.form.as_mut() else {
            return Err(ApiError::NoOpenForm {
                expected: EntityKind::Employee,
            });
        };
        form.sync(input);
        let command: Result<Command, ValidationError> =
            form.values.to_fields().map(|fields| Command::SaveEmployee {
                target: form.target,
                fields,
            });
        self.commit(command)
    }

    /// Submits the open department form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoOpenForm` if no department form is open, or
    /// `ApiError::Validation` if the values are rejected.
    pub fn save_department(&mut self, input: DepartmentInput) -> Result<SaveOutcome, ApiError> {
        let Some(FormSession::Department(form)) = self.form.as_mut() else {
            return Err(ApiError::NoOpenForm {
                expected: EntityKind::Department,
            });
        };
        form.values = input;
        let command: Result<Command, ValidationError> =
            form.values.to_fields().map(|fields| Command::SaveDepartment {
                target: form.target,
                fields,
            });
        self.commit(command)
    }

    /// Submits the open request form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoOpenForm` if no request form is open, or
    /// `ApiError::Validation` if the values are rejected.
    pub fn save_request(&mut self, input: RequestInput) -> Result<SaveOutcome, ApiError> {
        let form: &mut RequestForm = self.request_form_mut()?;
        form.sync(input);
        let command: Result<Command, ValidationError> =
            form.to_fields().map(|fields| Command::SaveRequest {
                target: form.target,
                fields,
            });
        self.commit(command)
    }

    /// Applies a translated submit to the store.
    ///
    /// On success the form closes, the entity's list is shown and a success
    /// notification appears. On failure the store is untouched and the
    /// message is set on the still-open form.
    fn commit(
        &mut self,
        command: Result<Command, ValidationError>,
    ) -> Result<SaveOutcome, ApiError> {
        let result: Result<TransitionResult, CoreError> = command
            .map_err(CoreError::from)
            .and_then(|command| apply(&self.store, command));

        match result {
            Ok(transition) => {
                let saved: SavedRecord = transition.saved;
                self.store = transition.new_store;
                self.show_list(saved.entity);
                let notice: NoticeTicket = self
                    .notifications
                    .show(NoticeKind::Success, format!("{} saved.", saved.entity));
                info!(
                    entity = %saved.entity,
                    id = saved.id,
                    created = saved.created,
                    store = %self.store.summary(),
                    "Saved record"
                );
                Ok(SaveOutcome { saved, notice })
            }
            Err(err) => {
                let api_err: ApiError = translate_core_error(err);
                warn!(error = %api_err, "Rejected form submit");
                if let Some(form) = self.form.as_mut() {
                    form.set_error(api_err.to_string());
                }
                Err(api_err)
            }
        }
    }

    // ========================================================================
    // Request line items
    // ========================================================================

    fn request_form_mut(&mut self) -> Result<&mut RequestForm, ApiError> {
        match self.form.as_mut() {
            Some(FormSession::Request(form)) => Ok(form),
            _ => Err(ApiError::NoOpenForm {
                expected: EntityKind::Request,
            }),
        }
    }

    /// Keeps the values on screen and appends a blank line item.
    ///
    /// Returns the new slot's handle.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoOpenForm` if no request form is open.
    pub fn add_line_item(&mut self, input: RequestInput) -> Result<usize, ApiError> {
        let form: &mut RequestForm = self.request_form_mut()?;
        form.sync(input);
        let handle: usize = form.items.add_blank();
        debug!(handle, slots = form.items.slots().len(), "Added line item");
        Ok(handle)
    }

    /// Keeps the values on screen and removes the first line item with `handle`.
    ///
    /// Returns whether a slot was removed.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoOpenForm` if no request form is open.
    pub fn remove_line_item(
        &mut self,
        input: RequestInput,
        handle: usize,
    ) -> Result<bool, ApiError> {
        let form: &mut RequestForm = self.request_form_mut()?;
        form.sync(input);
        let removed: bool = form.items.remove(handle);
        debug!(handle, removed, slots = form.items.slots().len(), "Removed line item");
        Ok(removed)
    }

    /// Shows the requests list for an employee's "Requests" action.
    ///
    /// The list is not filtered by employee.
    pub fn view_requests(&mut self, employee: EmployeeId) {
        info!(employee = %employee, "Viewing requests");
        self.show_list(EntityKind::Request);
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Shows a notification and returns the ticket that may dismiss it.
    pub fn notify(&mut self, kind: NoticeKind, message: String) -> NoticeTicket {
        self.notifications.show(kind, message)
    }

    /// Dismisses the notification `ticket` was issued for, if still visible.
    pub fn dismiss_notification(&mut self, ticket: NoticeTicket) -> bool {
        let dismissed: bool = self.notifications.dismiss(ticket);
        if dismissed {
            debug!(generation = ticket.generation(), "Dismissed notification");
        }
        dismissed
    }
}
