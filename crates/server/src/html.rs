// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTML rendering of the application's visible state.
//!
//! Every response re-renders the whole page: navigation bar, notification
//! area and the visible section. All record text is escaped.

use staffdesk_api::{
    AccountForm, AccountInput, AccountRow, App, DepartmentForm, DepartmentRow, EmployeeForm,
    EmployeeInput, EmployeeRow, FormSession, Notice, RequestForm, RequestList, RequestRow,
    Section, SelectOption, StatusBadge, View, status_options,
};
use staffdesk_domain::EntityKind;

/// Escapes text for use in element content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out: String = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns the URL path segment of an entity's collection.
#[must_use]
pub const fn collection_path(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Account => "accounts",
        EntityKind::Employee => "employees",
        EntityKind::Department => "departments",
        EntityKind::Request => "requests",
    }
}

const fn plural_label(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Account => "Accounts",
        EntityKind::Employee => "Employees",
        EntityKind::Department => "Departments",
        EntityKind::Request => "Requests",
    }
}

/// Renders the full page for the application's current state.
#[must_use]
pub fn render_page(app: &App) -> String {
    let section: Section = app.section();
    let mut body: String = String::new();
    render_nav(&mut body, section);
    render_notice(&mut body, app.notification());
    body.push_str(&format!(
        "<div class=\"section\" id=\"{}-section\">\n",
        section.as_str()
    ));
    match app.current_view() {
        View::Accounts(rows) => render_accounts(&mut body, &rows),
        View::Employees(rows) => render_employees(&mut body, &rows),
        View::Departments(rows) => render_departments(&mut body, &rows),
        View::Requests(list) => render_requests(&mut body, &list),
        View::Form(form) => render_form(&mut body, form),
    }
    body.push_str("</div>\n");
    layout(&body)
}

/// Renders a page with an error message and a way back.
#[must_use]
pub fn render_error_page(message: &str) -> String {
    let mut body: String = String::new();
    render_nav(&mut body, Section::Accounts);
    body.push_str(&format!(
        "<div class=\"alert alert-danger\">{}</div>\n<a class=\"btn btn-secondary\" href=\"/accounts\">Back</a>\n",
        escape(message)
    ));
    layout(&body)
}

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Staffdesk</title>\n\
<link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\">\n\
</head>\n<body>\n<div class=\"container mt-4\">\n{body}</div>\n</body>\n</html>\n"
    )
}

fn render_nav(out: &mut String, section: Section) {
    out.push_str("<nav class=\"nav nav-pills mb-3\">\n");
    for entity in [
        EntityKind::Account,
        EntityKind::Employee,
        EntityKind::Department,
        EntityKind::Request,
    ] {
        let active: &str = if section.entity() == entity {
            " active"
        } else {
            ""
        };
        out.push_str(&format!(
            "<a class=\"nav-link{active}\" href=\"/{}\">{}</a>\n",
            collection_path(entity),
            plural_label(entity)
        ));
    }
    out.push_str("</nav>\n");
}

fn render_notice(out: &mut String, notice: Option<&Notice>) {
    out.push_str("<div id=\"global-alert-placeholder\">");
    if let Some(notice) = notice {
        out.push_str(&format!(
            "<div class=\"alert {}\">{}</div>",
            notice.kind.css_class(),
            escape(&notice.message)
        ));
    }
    out.push_str("</div>\n");
}

fn badge(status: &StatusBadge) -> String {
    format!(
        "<span class=\"badge {}\">{}</span>",
        status.tone.css_class(),
        escape(&status.label)
    )
}

fn edit_button(entity: EntityKind, id: u32) -> String {
    format!(
        "<a class=\"btn btn-sm btn-primary action-btn\" href=\"/{}/{id}/edit\">Edit</a>",
        collection_path(entity)
    )
}

fn list_header(out: &mut String, entity: EntityKind, columns: &[&str]) {
    out.push_str(&format!(
        "<h2>{}</h2>\n<a class=\"btn btn-success mb-2\" href=\"/{}/new\">Add {}</a>\n",
        plural_label(entity),
        collection_path(entity),
        entity.as_str()
    ));
    out.push_str("<table class=\"table table-striped\">\n<thead><tr>");
    for column in columns {
        out.push_str(&format!("<th>{column}</th>"));
    }
    out.push_str(&format!(
        "</tr></thead>\n<tbody id=\"{}-table-body\">\n",
        collection_path(entity)
    ));
}

const LIST_FOOTER: &str = "</tbody>\n</table>\n";

fn cell(text: &str) -> String {
    format!("<td>{}</td>", escape(text))
}

fn render_accounts(out: &mut String, rows: &[AccountRow]) {
    list_header(
        out,
        EntityKind::Account,
        &["Title", "First Name", "Last Name", "Email", "Role", "Status", "Actions"],
    );
    for row in rows {
        out.push_str(&format!(
            "<tr>{}{}{}{}{}<td>{}</td><td>{}</td></tr>\n",
            cell(&row.title),
            cell(&row.first_name),
            cell(&row.last_name),
            cell(&row.email),
            cell(&row.role),
            badge(&row.status),
            edit_button(EntityKind::Account, row.id.get())
        ));
    }
    out.push_str(LIST_FOOTER);
}

fn render_employees(out: &mut String, rows: &[EmployeeRow]) {
    list_header(
        out,
        EntityKind::Employee,
        &[
            "Employee ID",
            "Account",
            "Position",
            "Department",
            "Hire Date",
            "Status",
            "Actions",
        ],
    );
    for row in rows {
        out.push_str(&format!(
            "<tr>{}{}{}{}{}<td>{}</td><td><a class=\"btn btn-sm btn-info action-btn\" href=\"/employees/{}/requests\">Requests</a> {}</td></tr>\n",
            cell(&row.employee_code),
            cell(&row.account_email),
            cell(&row.position),
            cell(&row.department_name),
            cell(&row.hire_date),
            badge(&row.status),
            row.id,
            edit_button(EntityKind::Employee, row.id.get())
        ));
    }
    out.push_str(LIST_FOOTER);
}

fn render_departments(out: &mut String, rows: &[DepartmentRow]) {
    list_header(
        out,
        EntityKind::Department,
        &["Name", "Description", "Employees", "Actions"],
    );
    for row in rows {
        out.push_str(&format!(
            "<tr>{}{}<td>{}</td><td>{}</td></tr>\n",
            cell(&row.name),
            cell(&row.description),
            row.employee_count,
            edit_button(EntityKind::Department, row.id.get())
        ));
    }
    out.push_str(LIST_FOOTER);
}

fn render_request_row(out: &mut String, row: &RequestRow) {
    let items: String = row
        .items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    out.push_str(&format!(
        "<tr>{}{}<td><ul class=\"list-unstyled\">{items}</ul></td><td>{}</td><td>{}</td></tr>\n",
        cell(&row.request_type),
        cell(&row.requester),
        badge(&row.status),
        edit_button(EntityKind::Request, row.id.get())
    ));
}

fn render_requests(out: &mut String, list: &RequestList) {
    list_header(
        out,
        EntityKind::Request,
        &["Type", "Employee", "Items", "Status", "Actions"],
    );
    match list {
        RequestList::Rows(rows) => {
            for row in rows {
                render_request_row(out, row);
            }
        }
        RequestList::Empty(placeholder) => {
            out.push_str(&format!(
                "<tr><td colspan=\"5\" class=\"text-center text-muted\">{}</td></tr>\n",
                escape(placeholder)
            ));
        }
    }
    out.push_str(LIST_FOOTER);
}

// ============================================================================
// Forms
// ============================================================================

fn text_field(out: &mut String, label: &str, name: &str, input_type: &str, value: &str) {
    out.push_str(&format!(
        "<div class=\"mb-3\"><label class=\"form-label\" for=\"{name}\">{label}</label>\
<input type=\"{input_type}\" class=\"form-control\" id=\"{name}\" name=\"{name}\" value=\"{}\"></div>\n",
        escape(value)
    ));
}

fn readonly_field(out: &mut String, label: &str, name: &str, value: &str) {
    out.push_str(&format!(
        "<div class=\"mb-3\"><label class=\"form-label\" for=\"{name}\">{label}</label>\
<input type=\"text\" class=\"form-control\" id=\"{name}\" name=\"{name}\" value=\"{}\" readonly></div>\n",
        escape(value)
    ));
}

fn select_field(
    out: &mut String,
    label: &str,
    name: &str,
    options: &[SelectOption],
    selected: &str,
) {
    out.push_str(&format!(
        "<div class=\"mb-3\"><label class=\"form-label\" for=\"{name}\">{label}</label>\
<select class=\"form-select\" id=\"{name}\" name=\"{name}\">"
    ));
    for option in options {
        let marker: &str = if option.value == selected {
            " selected"
        } else {
            ""
        };
        out.push_str(&format!(
            "<option value=\"{}\"{marker}>{}</option>",
            escape(&option.value),
            escape(&option.label)
        ));
    }
    out.push_str("</select></div>\n");
}

fn render_form(out: &mut String, form: &FormSession) {
    let entity: EntityKind = form.kind();
    let path: &str = collection_path(entity);
    let prefix: &str = Section::form_for(entity).as_str();

    out.push_str(&format!(
        "<h2 id=\"{prefix}-title\">{}</h2>\n",
        escape(&form.title())
    ));
    if let Some(error) = form.error() {
        out.push_str(&format!(
            "<div class=\"alert alert-danger\" id=\"{prefix}-error\">{}</div>\n",
            escape(error)
        ));
    }
    // Enter in a field fires the first submit button, which must be Save.
    out.push_str(&format!(
        "<form method=\"post\" action=\"/{path}/save\">\n\
<button type=\"submit\" hidden tabindex=\"-1\" aria-hidden=\"true\"></button>\n"
    ));

    match form {
        FormSession::Account(form) => render_account_fields(out, form),
        FormSession::Employee(form) => render_employee_fields(out, form),
        FormSession::Department(form) => render_department_fields(out, form),
        FormSession::Request(form) => render_request_fields(out, form),
    }

    out.push_str(&format!(
        "<button type=\"submit\" class=\"btn btn-primary\">Save</button>\n\
<a class=\"btn btn-secondary\" href=\"/{path}\">Cancel</a>\n</form>\n"
    ));
}

fn render_account_fields(out: &mut String, form: &AccountForm) {
    let values: &AccountInput = &form.values;
    select_field(
        out,
        "Title",
        "title",
        &AccountForm::title_options(),
        &values.title,
    );
    text_field(out, "First Name", "first_name", "text", &values.first_name);
    text_field(out, "Last Name", "last_name", "text", &values.last_name);
    text_field(out, "Email", "email", "email", &values.email);
    select_field(out, "Role", "role", &AccountForm::role_options(), &values.role);
    select_field(out, "Status", "status", &status_options(), &values.status);
}

fn render_employee_fields(out: &mut String, form: &EmployeeForm) {
    let values: &EmployeeInput = &form.values;
    if form.code_locked() {
        readonly_field(out, "Employee ID", "employee_code", &values.employee_code);
    } else {
        text_field(
            out,
            "Employee ID",
            "employee_code",
            "text",
            &values.employee_code,
        );
    }
    select_field(
        out,
        "Account",
        "account_id",
        &form.account_options,
        &values.account_id,
    );
    text_field(out, "Position", "position", "text", &values.position);
    select_field(
        out,
        "Department",
        "department_id",
        &form.department_options,
        &values.department_id,
    );
    text_field(out, "Hire Date", "hire_date", "date", &values.hire_date);
    select_field(out, "Status", "status", &status_options(), &values.status);
}

fn render_department_fields(out: &mut String, form: &DepartmentForm) {
    text_field(out, "Name", "name", "text", &form.values.name);
    out.push_str(&format!(
        "<div class=\"mb-3\"><label class=\"form-label\" for=\"description\">Description</label>\
<textarea class=\"form-control\" id=\"description\" name=\"description\">{}</textarea></div>\n",
        escape(&form.values.description)
    ));
}

fn render_request_fields(out: &mut String, form: &RequestForm) {
    select_field(
        out,
        "Type",
        "request_type",
        &form.type_options,
        &form.request_type,
    );
    select_field(
        out,
        "Employee",
        "employee_id",
        &form.employee_options,
        &form.employee_id,
    );

    out.push_str("<div id=\"request-items\">\n");
    for slot in form.items.slots() {
        out.push_str(&format!(
            "<div class=\"border p-2 mb-2\" id=\"request-item-{handle}\"><div class=\"row\">\
<input type=\"hidden\" name=\"item_handle\" value=\"{handle}\">\
<div class=\"col-md-5\"><label class=\"form-label\">Name</label>\
<input type=\"text\" class=\"form-control request-item-name\" name=\"item_name\" value=\"{}\"></div>\
<div class=\"col-md-5\"><label class=\"form-label\">Quantity</label>\
<input type=\"number\" class=\"form-control request-item-quantity\" name=\"item_quantity\" value=\"{}\" min=\"1\"></div>\
<div class=\"col-md-2 d-flex align-items-end\">\
<button type=\"submit\" class=\"btn btn-danger\" formaction=\"/requests/form/items/{handle}/remove\">Remove</button>\
</div></div></div>\n",
            escape(&slot.name),
            escape(&slot.quantity),
            handle = slot.handle
        ));
    }
    out.push_str(
        "</div>\n<button type=\"submit\" class=\"btn btn-secondary mb-3\" formaction=\"/requests/form/items/add\">Add Item</button>\n",
    );
}
