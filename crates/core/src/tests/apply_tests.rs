// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_account_fields, create_test_department_fields, create_test_employee_fields,
    create_test_request_fields,
};
use crate::{Command, CoreError, SavedRecord, Store, TransitionResult, apply, employee_count};
use staffdesk_domain::{
    Account, AccountFields, AccountId, DepartmentId, DomainError, Employee, EmployeeCode,
    EmployeeFields, EmployeeId, EntityKind, LineItem, RecordStatus, Request, RequestFields,
    RequestId, RequestStatus, RequestType, Role,
};

#[test]
fn test_create_account_appends_with_next_id() {
    let store: Store = Store::seeded();
    let command: Command = Command::SaveAccount {
        target: None,
        fields: create_test_account_fields(),
    };

    let result: TransitionResult = apply(&store, command).unwrap();

    assert_eq!(result.new_store.accounts.len(), 4);
    let created: &Account = result.new_store.accounts.get(AccountId::new(4)).unwrap();
    assert_eq!(created.first_name, "Jane");
    assert_eq!(created.last_name, "Doe");
    assert_eq!(created.email, "jane@example.com");
    assert_eq!(created.role, Role::User);
    assert_eq!(created.status, RecordStatus::Active);
    assert_eq!(
        result.saved,
        SavedRecord {
            entity: EntityKind::Account,
            id: 4,
            created: true,
        }
    );
}

#[test]
fn test_create_in_empty_store_starts_at_one() {
    let store: Store = Store::new();

    let result: TransitionResult = apply(
        &store,
        Command::SaveDepartment {
            target: None,
            fields: create_test_department_fields(),
        },
    )
    .unwrap();

    assert_eq!(result.saved.id, 1);
    assert_eq!(result.new_store.departments.len(), 1);
}

#[test]
fn test_apply_does_not_touch_the_input_store() {
    let store: Store = Store::seeded();
    let before: Store = store.clone();

    let _result: TransitionResult = apply(
        &store,
        Command::SaveAccount {
            target: None,
            fields: create_test_account_fields(),
        },
    )
    .unwrap();

    assert_eq!(store, before);
}

#[test]
fn test_edit_account_changes_only_the_target() {
    let store: Store = Store::seeded();
    let original: &Account = store.accounts.get(AccountId::new(2)).unwrap();
    let fields: AccountFields = AccountFields {
        title: original.title,
        first_name: original.first_name.clone(),
        last_name: original.last_name.clone(),
        email: original.email.clone(),
        role: original.role,
        status: RecordStatus::Inactive,
    };

    let result: TransitionResult = apply(
        &store,
        Command::SaveAccount {
            target: Some(AccountId::new(2)),
            fields,
        },
    )
    .unwrap();

    let accounts = &result.new_store.accounts;
    assert_eq!(accounts.len(), store.accounts.len());
    assert_eq!(
        accounts.get(AccountId::new(2)).unwrap().status,
        RecordStatus::Inactive
    );
    assert_eq!(
        accounts.get(AccountId::new(1)),
        store.accounts.get(AccountId::new(1))
    );
    assert_eq!(
        accounts.get(AccountId::new(3)),
        store.accounts.get(AccountId::new(3))
    );
    assert!(!result.saved.created);
    assert_eq!(result.new_store.employees, store.employees);
}

#[test]
fn test_edit_keeps_record_position() {
    let store: Store = Store::seeded();

    let result: TransitionResult = apply(
        &store,
        Command::SaveAccount {
            target: Some(AccountId::new(1)),
            fields: create_test_account_fields(),
        },
    )
    .unwrap();

    let ids: Vec<u32> = result
        .new_store
        .accounts
        .iter()
        .map(|account| account.id.get())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_edit_employee_keeps_employee_code() {
    let store: Store = Store::seeded();
    let fields: EmployeeFields = EmployeeFields {
        code: EmployeeCode::new("HACKED"),
        position: String::from("Lead Designer"),
        ..create_test_employee_fields()
    };

    let result: TransitionResult = apply(
        &store,
        Command::SaveEmployee {
            target: Some(EmployeeId::new(2)),
            fields,
        },
    )
    .unwrap();

    let employee: &Employee = result.new_store.employees.get(EmployeeId::new(2)).unwrap();
    assert_eq!(employee.code.value(), "EMP002");
    assert_eq!(employee.position, "Lead Designer");
}

#[test]
fn test_moving_employee_updates_department_counts() {
    let store: Store = Store::seeded();
    assert_eq!(employee_count(&store, DepartmentId::new(1)), 1);
    assert_eq!(employee_count(&store, DepartmentId::new(2)), 1);

    let current: &Employee = store.employees.get(EmployeeId::new(2)).unwrap();
    let fields: EmployeeFields = EmployeeFields {
        code: current.code.clone(),
        account_id: current.account_id,
        position: current.position.clone(),
        department_id: DepartmentId::new(1),
        hire_date: current.hire_date,
        status: current.status,
    };

    let result: TransitionResult = apply(
        &store,
        Command::SaveEmployee {
            target: Some(EmployeeId::new(2)),
            fields,
        },
    )
    .unwrap();

    assert_eq!(employee_count(&result.new_store, DepartmentId::new(1)), 2);
    assert_eq!(employee_count(&result.new_store, DepartmentId::new(2)), 0);
}

#[test]
fn test_create_request_is_forced_pending() {
    let store: Store = Store::seeded();

    let result: TransitionResult = apply(
        &store,
        Command::SaveRequest {
            target: None,
            fields: create_test_request_fields(),
        },
    )
    .unwrap();

    let request: &Request = result.new_store.requests.get(RequestId::new(3)).unwrap();
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.items, vec![LineItem::new("Monitor", 2)]);
    assert_eq!(result.new_store.requests.len(), 3);
}

#[test]
fn test_edit_request_keeps_status() {
    let store: Store = Store::seeded();
    let fields: RequestFields = RequestFields {
        employee_id: EmployeeId::new(1),
        request_type: RequestType::Leave,
        items: vec![LineItem::new("Vacation", 2)],
    };

    let result: TransitionResult = apply(
        &store,
        Command::SaveRequest {
            target: Some(RequestId::new(2)),
            fields,
        },
    )
    .unwrap();

    let request: &Request = result.new_store.requests.get(RequestId::new(2)).unwrap();
    assert_eq!(request.status, RequestStatus::Approved);
    assert_eq!(request.items[0].quantity, 2);
}

#[test]
fn test_edit_of_missing_record_is_not_found() {
    let store: Store = Store::seeded();

    let result: Result<TransitionResult, CoreError> = apply(
        &store,
        Command::SaveEmployee {
            target: Some(EmployeeId::new(99)),
            fields: create_test_employee_fields(),
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::RecordNotFound {
            entity: EntityKind::Employee,
            id: 99,
        })
    );
}

#[test]
fn test_employee_may_reference_missing_account() {
    let store: Store = Store::seeded();
    let fields: EmployeeFields = EmployeeFields {
        account_id: AccountId::new(42),
        ..create_test_employee_fields()
    };

    let result: TransitionResult = apply(
        &store,
        Command::SaveEmployee {
            target: None,
            fields,
        },
    )
    .unwrap();

    assert_eq!(result.saved.id, 3);
    assert_eq!(result.new_store.employees.len(), 3);
}
