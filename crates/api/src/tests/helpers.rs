// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use staffdesk::Store;

use crate::{AccountInput, App, EmployeeInput, LineItemSlot, RequestInput};

pub fn create_test_app() -> App {
    App::new(Store::seeded())
}

pub fn create_jane_doe_input() -> AccountInput {
    AccountInput {
        title: String::from("Mr"),
        first_name: String::from("Jane"),
        last_name: String::from("Doe"),
        email: String::from("jane@example.com"),
        role: String::from("User"),
        status: String::from("Active"),
    }
}

pub fn create_test_employee_input() -> EmployeeInput {
    EmployeeInput {
        employee_code: String::from("EMP003"),
        account_id: String::from("1"),
        position: String::from("Tester"),
        department_id: String::from("1"),
        hire_date: String::from("2025-03-01"),
        status: String::from("Active"),
    }
}

pub fn slot(handle: usize, name: &str, quantity: &str) -> LineItemSlot {
    LineItemSlot {
        handle,
        name: name.to_string(),
        quantity: quantity.to_string(),
    }
}

pub fn create_request_input(employee_id: &str, items: Vec<LineItemSlot>) -> RequestInput {
    RequestInput {
        request_type: String::from("Equipment"),
        employee_id: employee_id.to_string(),
        items,
    }
}

pub fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}
