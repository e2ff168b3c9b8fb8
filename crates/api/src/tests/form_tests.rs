// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk::{Command, Store, apply};
use staffdesk_domain::{
    Account, AccountFields, AccountId, EmployeeId, EntityKind, RecordStatus, RequestFields,
    RequestId, RequestType, ValidationError,
};

use crate::tests::helpers::{create_jane_doe_input, create_test_employee_input, pairs, slot};
use crate::{
    AccountForm, AccountInput, DepartmentInput, EmployeeForm, EmployeeInput, RequestForm,
    RequestInput, SelectOption, account_options, form_title,
};

#[test]
fn test_form_titles() {
    assert_eq!(form_title(EntityKind::Account, false), "ADD ACCOUNT");
    assert_eq!(form_title(EntityKind::Account, true), "EDIT ACCOUNT");
    assert_eq!(form_title(EntityKind::Employee, true), "EDIT EMPLOYEE");
    assert_eq!(form_title(EntityKind::Department, false), "ADD DEPARTMENT");
    assert_eq!(form_title(EntityKind::Request, false), "ADD REQUEST");
}

#[test]
fn test_account_create_defaults() {
    let form: AccountForm = AccountForm::create();
    assert_eq!(form.target, None);
    assert_eq!(form.values.title, "Mr");
    assert_eq!(form.values.role, "User");
    assert_eq!(form.values.status, "Active");
    assert!(form.values.first_name.is_empty());
    assert!(form.values.email.is_empty());
    assert_eq!(form.error, None);
}

#[test]
fn test_account_edit_loads_record() {
    let store: Store = Store::seeded();
    let form: AccountForm = AccountForm::edit(store.accounts.get(AccountId::new(3)).unwrap());
    assert_eq!(form.target, Some(AccountId::new(3)));
    assert_eq!(form.values.title, "Dr");
    assert_eq!(form.values.first_name, "Inactive");
    assert_eq!(form.values.status, "Inactive");
}

#[test]
fn test_account_input_missing_names_every_empty_field() {
    let input: AccountInput = AccountInput {
        first_name: String::new(),
        email: String::new(),
        ..create_jane_doe_input()
    };

    let err: ValidationError = input.to_fields().unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingFields {
            entity: EntityKind::Account,
            fields: vec!["first_name", "email"],
        }
    );
    assert_eq!(
        err.to_string(),
        "First Name, Last Name, and Email are required."
    );
}

#[test]
fn test_account_input_rejects_unknown_role() {
    let input: AccountInput = AccountInput {
        role: String::from("Superuser"),
        ..create_jane_doe_input()
    };
    assert!(matches!(
        input.to_fields(),
        Err(ValidationError::InvalidChoice { field: "role", .. })
    ));
}

#[test]
fn test_account_input_without_choices_is_rejected() {
    let input: AccountInput = AccountInput {
        first_name: String::from("Jane"),
        last_name: String::from("Doe"),
        email: String::from("jane@example.com"),
        ..AccountInput::default()
    };
    assert!(matches!(
        input.to_fields(),
        Err(ValidationError::InvalidChoice { field: "title", .. })
    ));
}

#[test]
fn test_employee_create_suggests_next_code_and_first_choices() {
    let store: Store = Store::seeded();
    let form: EmployeeForm = EmployeeForm::create(&store);

    assert_eq!(form.values.employee_code, "EMP003");
    assert!(!form.code_locked());
    assert_eq!(form.values.status, "Active");
    assert!(form.values.position.is_empty());
    assert!(form.values.hire_date.is_empty());
    assert_eq!(form.values.account_id, "1");
    assert_eq!(form.values.department_id, "1");
}

#[test]
fn test_employee_account_options_hide_inactive_accounts() {
    let store: Store = Store::seeded();
    let options: Vec<SelectOption> = account_options(&store, None);

    let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "admin@example.com (Admin User)",
            "user@example.com (Normal User)"
        ]
    );
}

#[test]
fn test_employee_form_keeps_inactive_assigned_account() {
    let store: Store = Store::seeded();
    let account: &Account = store.accounts.get(AccountId::new(2)).unwrap();
    let fields: AccountFields = AccountFields {
        title: account.title,
        first_name: account.first_name.clone(),
        last_name: account.last_name.clone(),
        email: account.email.clone(),
        role: account.role,
        status: RecordStatus::Inactive,
    };
    let store: Store = apply(
        &store,
        Command::SaveAccount {
            target: Some(AccountId::new(2)),
            fields,
        },
    )
    .unwrap()
    .new_store;

    let form: EmployeeForm =
        EmployeeForm::edit(&store, store.employees.get(EmployeeId::new(2)).unwrap());

    assert!(form.code_locked());
    assert_eq!(
        form.account_options.last().unwrap(),
        &SelectOption {
            value: String::from("2"),
            label: String::from("user@example.com (Normal User) [Inactive]"),
        }
    );
    assert_eq!(form.account_options.len(), 2);
    assert_eq!(form.values.account_id, "2");
    assert_eq!(form.values.department_id, "2");
    assert_eq!(form.values.hire_date, "2025-02-01");
}

#[test]
fn test_employee_sync_keeps_locked_code() {
    let store: Store = Store::seeded();
    let mut form: EmployeeForm =
        EmployeeForm::edit(&store, store.employees.get(EmployeeId::new(1)).unwrap());

    form.sync(EmployeeInput {
        employee_code: String::from("EMP999"),
        ..create_test_employee_input()
    });

    assert_eq!(form.values.employee_code, "EMP001");
    assert_eq!(form.values.position, "Tester");
}

#[test]
fn test_employee_input_empty_hire_date_is_missing() {
    let input: EmployeeInput = EmployeeInput {
        hire_date: String::new(),
        ..create_test_employee_input()
    };
    let err: ValidationError = input.to_fields().unwrap_err();
    assert_eq!(err.to_string(), "All fields are required");
}

#[test]
fn test_employee_input_bad_values() {
    let bad_date: EmployeeInput = EmployeeInput {
        hire_date: String::from("03/01/2025"),
        ..create_test_employee_input()
    };
    assert!(matches!(
        bad_date.to_fields(),
        Err(ValidationError::InvalidDate { .. })
    ));

    let bad_account: EmployeeInput = EmployeeInput {
        account_id: String::from("abc"),
        ..create_test_employee_input()
    };
    assert!(matches!(
        bad_account.to_fields(),
        Err(ValidationError::InvalidNumber {
            field: "account",
            ..
        })
    ));
}

#[test]
fn test_department_input_requires_both_fields() {
    let input: DepartmentInput = DepartmentInput {
        name: String::from("Finance"),
        description: String::new(),
    };
    assert_eq!(
        input.to_fields().unwrap_err().to_string(),
        "All fields are required"
    );
}

#[test]
fn test_request_create_defaults() {
    let store: Store = Store::seeded();
    let form: RequestForm = RequestForm::create(&store);

    assert_eq!(form.request_type, "Equipment");
    assert_eq!(form.employee_id, "1");
    assert_eq!(form.items.slots(), &[slot(0, "", "1")]);
    let codes: Vec<&str> = form
        .employee_options
        .iter()
        .map(|option| option.label.as_str())
        .collect();
    assert_eq!(codes, vec!["EMP001", "EMP002"]);
}

#[test]
fn test_request_edit_loads_items() {
    let store: Store = Store::seeded();
    let form: RequestForm =
        RequestForm::edit(&store, store.requests.get(RequestId::new(2)).unwrap());

    assert_eq!(form.request_type, "Leave");
    assert_eq!(form.employee_id, "1");
    assert_eq!(form.items.slots(), &[slot(0, "Vacation", "5")]);
}

#[test]
fn test_request_form_translates_items() {
    let store: Store = Store::seeded();
    let mut form: RequestForm = RequestForm::create(&store);
    form.sync(RequestInput {
        request_type: String::from("Training"),
        employee_id: String::from("2"),
        items: vec![slot(0, "Course", "3")],
    });

    let fields: RequestFields = form.to_fields().unwrap();
    assert_eq!(
        fields.request_type,
        RequestType::Other(String::from("Training"))
    );
    assert_eq!(fields.employee_id, EmployeeId::new(2));
    assert_eq!(fields.items[0].quantity, 3);
}

#[test]
fn test_request_input_from_pairs_keeps_order() {
    let input: RequestInput = RequestInput::from_pairs(&pairs(&[
        ("request_type", "Equipment"),
        ("employee_id", "2"),
        ("item_handle", "0"),
        ("item_name", "Monitor"),
        ("item_quantity", "2"),
        ("item_handle", "2"),
        ("item_name", "Cable"),
        ("item_quantity", "4"),
    ]));

    assert_eq!(input.request_type, "Equipment");
    assert_eq!(input.employee_id, "2");
    assert_eq!(
        input.items,
        vec![slot(0, "Monitor", "2"), slot(2, "Cable", "4")]
    );
}

#[test]
fn test_request_input_from_pairs_fills_missing_pieces() {
    let input: RequestInput = RequestInput::from_pairs(&pairs(&[
        ("item_name", "Monitor"),
        ("item_name", "Desk"),
        ("item_quantity", "1"),
    ]));

    assert_eq!(input.request_type, "");
    assert_eq!(input.items, vec![slot(0, "Monitor", "1"), slot(1, "Desk", "")]);
}
