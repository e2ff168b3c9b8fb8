// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Store, employee_account, employee_count};
use staffdesk_domain::{
    AccountId, DepartmentId, Employee, EmployeeId, RecordStatus, RequestId, RequestStatus,
};

#[test]
fn test_seeded_store_sizes() {
    let store: Store = Store::seeded();
    assert_eq!(store.accounts.len(), 3);
    assert_eq!(store.employees.len(), 2);
    assert_eq!(store.departments.len(), 2);
    assert_eq!(store.requests.len(), 2);
    assert_eq!(
        store.summary(),
        "accounts=3,employees=2,departments=2,requests=2"
    );
}

#[test]
fn test_seeded_store_has_one_inactive_account() {
    let store: Store = Store::seeded();
    let inactive: Vec<AccountId> = store
        .accounts
        .iter()
        .filter(|account| account.status == RecordStatus::Inactive)
        .map(|account| account.id)
        .collect();
    assert_eq!(inactive, vec![AccountId::new(3)]);
}

#[test]
fn test_seeded_request_statuses() {
    let store: Store = Store::seeded();
    assert_eq!(
        store.requests.get(RequestId::new(1)).unwrap().status,
        RequestStatus::Pending
    );
    assert_eq!(
        store.requests.get(RequestId::new(2)).unwrap().status,
        RequestStatus::Approved
    );
}

#[test]
fn test_next_ids_follow_seed() {
    let store: Store = Store::seeded();
    assert_eq!(store.accounts.next_id(), AccountId::new(4));
    assert_eq!(store.employees.next_id(), EmployeeId::new(3));
    assert_eq!(store.departments.next_id(), DepartmentId::new(3));
    assert_eq!(store.requests.next_id(), RequestId::new(3));
}

#[test]
fn test_employee_count_of_unknown_department_is_zero() {
    let store: Store = Store::seeded();
    assert_eq!(employee_count(&store, DepartmentId::new(9)), 0);
}

#[test]
fn test_employee_account_resolves_and_dangles() {
    let mut store: Store = Store::seeded();
    let employee: Employee = store.employees.get(EmployeeId::new(2)).unwrap().clone();
    assert_eq!(
        employee_account(&store, &employee).unwrap().email,
        "user@example.com"
    );

    store.accounts = crate::Repository::new();
    assert!(employee_account(&store, &employee).is_none());
}

#[test]
fn test_require_reports_missing_record() {
    let store: Store = Store::new();
    assert!(store.accounts.require(AccountId::new(1)).is_err());
}
