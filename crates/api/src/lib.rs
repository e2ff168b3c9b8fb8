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
    clippy::all
)]

//! The interaction layer of Staffdesk: list rendering, form sessions,
//! navigation and notifications, tied together by [`App`].

mod app;
mod error;
mod forms;
mod navigator;
mod notification;
mod view;

#[cfg(test)]
mod tests;

pub use app::{App, SaveOutcome, View};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use forms::{
    AccountForm, AccountInput, DepartmentForm, DepartmentInput, EmployeeForm, EmployeeInput,
    FormSession, INACTIVE_SUFFIX, LineItemEditor, LineItemSlot, RequestForm, RequestInput,
    SelectOption, account_options, form_title, status_options,
};
pub use navigator::{Navigator, Section};
pub use notification::{Notice, NoticeKind, NoticeTicket, NotificationArea};
pub use view::{
    AccountRow, BadgeTone, DepartmentRow, EmployeeRow, NO_REQUESTS_PLACEHOLDER, NOT_AVAILABLE,
    RequestList, RequestRow, StatusBadge, render_accounts, render_departments, render_employees,
    render_requests, requester_label,
};
