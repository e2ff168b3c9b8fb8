// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::{
    AccountFields, AccountId, DepartmentFields, DepartmentId, EmployeeCode, EmployeeFields,
    EmployeeId, LineItem, RecordStatus, RequestFields, RequestType, Role, Title,
};
use time::macros::date;

pub fn create_test_account_fields() -> AccountFields {
    AccountFields {
        title: Title::Mr,
        first_name: String::from("Jane"),
        last_name: String::from("Doe"),
        email: String::from("jane@example.com"),
        role: Role::User,
        status: RecordStatus::Active,
    }
}

pub fn create_test_employee_fields() -> EmployeeFields {
    EmployeeFields {
        code: EmployeeCode::new("EMP003"),
        account_id: AccountId::new(1),
        position: String::from("Tester"),
        department_id: DepartmentId::new(1),
        hire_date: date!(2025 - 03 - 01),
        status: RecordStatus::Active,
    }
}

pub fn create_test_department_fields() -> DepartmentFields {
    DepartmentFields {
        name: String::from("Finance"),
        description: String::from("Keeps the books"),
    }
}

pub fn create_test_request_fields() -> RequestFields {
    RequestFields {
        employee_id: EmployeeId::new(1),
        request_type: RequestType::Equipment,
        items: vec![LineItem::new("Monitor", 2)],
    }
}
