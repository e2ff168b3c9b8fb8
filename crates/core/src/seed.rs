// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed records every process starts with.

use staffdesk_domain::{
    Account, AccountId, Department, DepartmentId, Employee, EmployeeCode, EmployeeId, LineItem,
    RecordStatus, Request, RequestId, RequestStatus, RequestType, Role, Title,
};
use time::macros::date;

use crate::state::{Repository, Store};

fn account(
    id: u32,
    title: Title,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: Role,
    status: RecordStatus,
) -> Account {
    Account {
        id: AccountId::new(id),
        title,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        role,
        status,
    }
}

impl Store {
    /// Creates a store holding the seed records: three accounts (one of
    /// them inactive), two employees, two departments and two requests.
    #[must_use]
    pub fn seeded() -> Self {
        let accounts: Vec<Account> = vec![
            account(
                1,
                Title::Mr,
                "Admin",
                "User",
                "admin@example.com",
                Role::Admin,
                RecordStatus::Active,
            ),
            account(
                2,
                Title::Ms,
                "Normal",
                "User",
                "user@example.com",
                Role::User,
                RecordStatus::Active,
            ),
            account(
                3,
                Title::Dr,
                "Inactive",
                "Person",
                "inactive@example.com",
                Role::User,
                RecordStatus::Inactive,
            ),
        ];

        let employees: Vec<Employee> = vec![
            Employee {
                id: EmployeeId::new(1),
                code: EmployeeCode::new("EMP001"),
                account_id: AccountId::new(1),
                position: String::from("Developer"),
                department_id: DepartmentId::new(1),
                hire_date: date!(2025 - 01 - 01),
                status: RecordStatus::Active,
            },
            Employee {
                id: EmployeeId::new(2),
                code: EmployeeCode::new("EMP002"),
                account_id: AccountId::new(2),
                position: String::from("Designer"),
                department_id: DepartmentId::new(2),
                hire_date: date!(2025 - 02 - 01),
                status: RecordStatus::Active,
            },
        ];

        let departments: Vec<Department> = vec![
            Department {
                id: DepartmentId::new(1),
                name: String::from("Engineering"),
                description: String::from("Software development team"),
            },
            Department {
                id: DepartmentId::new(2),
                name: String::from("Marketing"),
                description: String::from("Marketing team"),
            },
        ];

        let requests: Vec<Request> = vec![
            Request {
                id: RequestId::new(1),
                employee_id: EmployeeId::new(2),
                request_type: RequestType::Equipment,
                items: vec![LineItem::new("Laptop", 1)],
                status: RequestStatus::Pending,
            },
            Request {
                id: RequestId::new(2),
                employee_id: EmployeeId::new(1),
                request_type: RequestType::Leave,
                items: vec![LineItem::new("Vacation", 5)],
                status: RequestStatus::Approved,
            },
        ];

        Self {
            accounts: Repository::from_records(accounts),
            employees: Repository::from_records(employees),
            departments: Repository::from_records(departments),
            requests: Repository::from_records(requests),
        }
    }
}
