// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::{AccountId, EmployeeId, EntityKind};

use crate::tests::helpers::create_test_app;
use crate::{ApiError, App, NoticeKind, RequestList, Section, View};

#[test]
fn test_app_starts_on_accounts() {
    let app: App = create_test_app();
    assert_eq!(app.section(), Section::Accounts);
    assert!(matches!(app.current_view(), View::Accounts(rows) if rows.len() == 3));
}

#[test]
fn test_each_list_section_renders_its_view() {
    let mut app: App = create_test_app();

    app.show_section(Section::Employees).unwrap();
    assert!(matches!(app.current_view(), View::Employees(rows) if rows.len() == 2));

    app.show_section(Section::Departments).unwrap();
    assert!(matches!(app.current_view(), View::Departments(rows) if rows.len() == 2));

    app.show_section(Section::Requests).unwrap();
    assert!(matches!(
        app.current_view(),
        View::Requests(RequestList::Rows(rows)) if rows.len() == 2
    ));
}

#[test]
fn test_navigation_clears_notification() {
    let mut app: App = create_test_app();
    app.notify(NoticeKind::Info, String::from("hello"));
    assert!(app.notification().is_some());

    app.show_section(Section::Departments).unwrap();
    assert!(app.notification().is_none());
}

#[test]
fn test_switching_to_list_abandons_form() {
    let mut app: App = create_test_app();
    app.open_account_form(Some(AccountId::new(1))).unwrap();
    assert_eq!(app.section(), Section::AccountForm);

    app.show_section(Section::Accounts).unwrap();
    assert!(app.form().is_none());
    assert!(matches!(
        app.show_section(Section::AccountForm),
        Err(ApiError::NoOpenForm {
            expected: EntityKind::Account
        })
    ));
}

#[test]
fn test_form_section_requires_matching_form() {
    let mut app: App = create_test_app();
    app.open_department_form(None).unwrap();

    assert!(app.show_section(Section::DepartmentForm).is_ok());
    assert!(matches!(
        app.show_section(Section::RequestForm),
        Err(ApiError::NoOpenForm {
            expected: EntityKind::Request
        })
    ));
    assert_eq!(app.section(), Section::DepartmentForm);
}

#[test]
fn test_view_requests_does_not_filter() {
    let mut app: App = create_test_app();
    app.show_section(Section::Employees).unwrap();

    app.view_requests(EmployeeId::new(1));

    assert_eq!(app.section(), Section::Requests);
    assert!(matches!(
        app.current_view(),
        View::Requests(RequestList::Rows(rows)) if rows.len() == 2
    ));
}

#[test]
fn test_section_mapping() {
    for entity in [
        EntityKind::Account,
        EntityKind::Employee,
        EntityKind::Department,
        EntityKind::Request,
    ] {
        assert!(Section::list_for(entity).is_list());
        assert!(!Section::form_for(entity).is_list());
        assert_eq!(Section::list_for(entity).entity(), entity);
        assert_eq!(Section::form_for(entity).entity(), entity);
    }
    assert_eq!(Section::ALL.iter().filter(|s| s.is_list()).count(), 4);
}
