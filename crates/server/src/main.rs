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
#![allow(clippy::multiple_crate_versions)]

mod html;
mod notices;

use axum::{
    Form, Json, Router,
    extract::{Path, State as AxumState, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use clap::Parser;
use staffdesk::Store;
use staffdesk_api::{
    AccountInput, AccountRow, ApiError, App, DepartmentInput, DepartmentRow, EmployeeInput,
    EmployeeRow, Notice, RequestInput, RequestList, SaveOutcome, Section, render_accounts,
    render_departments, render_employees, render_requests,
};
use staffdesk_domain::{AccountId, DepartmentId, EmployeeId, EntityKind, RequestId};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

use crate::html::{collection_path, render_error_page, render_page};
use crate::notices::NoticeScheduler;

/// Staffdesk Server - HTTP server for the Staffdesk records application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seconds a save notification stays visible
    #[arg(long, default_value_t = 5)]
    notice_ttl_secs: u64,

    /// Start with no records instead of the sample data
    #[arg(long)]
    empty: bool,
}

/// Application state shared across handlers.
///
/// The whole application is a single session guarded by one Mutex.
#[derive(Clone)]
struct AppState {
    /// The records, the visible section and the open form.
    app: Arc<Mutex<App>>,
    /// Dismisses save notifications after a delay.
    notices: Arc<NoticeScheduler>,
}

impl AppState {
    fn new(store: Store, notice_ttl: Duration) -> Self {
        Self {
            app: Arc::new(Mutex::new(App::new(store))),
            notices: Arc::new(NoticeScheduler::new(notice_ttl)),
        }
    }
}

/// HTTP error wrapper that renders an error page.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Html(render_error_page(&self.message))).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::NoOpenForm { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::Validation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
        }
    }
}

impl From<FormRejection> for HttpError {
    fn from(rejection: FormRejection) -> Self {
        warn!(error = %rejection, "Malformed form body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Shows a list section.
///
/// Re-rendering the list that is already visible is not navigation, so a
/// save notification survives the redirect that follows the save.
async fn show_list(
    app_state: &AppState,
    entity: EntityKind,
) -> Result<Html<String>, HttpError> {
    let section: Section = Section::list_for(entity);
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    if app.section() != section {
        app_state.notices.cancel().await;
        app.show_section(section)?;
    }
    Ok(Html(render_page(&app)))
}

async fn handle_accounts(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    info!("Handling accounts page request");
    show_list(&app_state, EntityKind::Account).await
}

async fn handle_employees(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    info!("Handling employees page request");
    show_list(&app_state, EntityKind::Employee).await
}

async fn handle_departments(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    info!("Handling departments page request");
    show_list(&app_state, EntityKind::Department).await
}

async fn handle_requests(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    info!("Handling requests page request");
    show_list(&app_state, EntityKind::Request).await
}

async fn handle_employee_requests(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<u32>,
) -> Html<String> {
    info!(employee = id, "Handling employee requests page request");
    app_state.notices.cancel().await;
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    app.view_requests(EmployeeId::new(id));
    Html(render_page(&app))
}

/// Re-shows the open form of `entity`.
async fn show_form(
    app_state: &AppState,
    entity: EntityKind,
) -> Result<Html<String>, HttpError> {
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    app.show_section(Section::form_for(entity))?;
    app_state.notices.cancel().await;
    Ok(Html(render_page(&app)))
}

async fn handle_account_form(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    show_form(&app_state, EntityKind::Account).await
}

async fn handle_employee_form(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    show_form(&app_state, EntityKind::Employee).await
}

async fn handle_department_form(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    show_form(&app_state, EntityKind::Department).await
}

async fn handle_request_form(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    show_form(&app_state, EntityKind::Request).await
}

// ============================================================================
// Opening forms
// ============================================================================

async fn handle_new_account(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    info!("Handling new account form request");
    app_state.notices.cancel().await;
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    app.open_account_form(None)?;
    Ok(Html(render_page(&app)))
}

async fn handle_edit_account(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<u32>,
) -> Result<Html<String>, HttpError> {
    info!(id, "Handling edit account form request");
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    app.open_account_form(Some(AccountId::new(id)))?;
    app_state.notices.cancel().await;
    Ok(Html(render_page(&app)))
}

async fn handle_new_employee(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    info!("Handling new employee form request");
    app_state.notices.cancel().await;
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    app.open_employee_form(None)?;
    Ok(Html(render_page(&app)))
}

async fn handle_edit_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<u32>,
) -> Result<Html<String>, HttpError> {
    info!(id, "Handling edit employee form request");
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    app.open_employee_form(Some(EmployeeId::new(id)))?;
    app_state.notices.cancel().await;
    Ok(Html(render_page(&app)))
}

async fn handle_new_department(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    info!("Handling new department form request");
    app_state.notices.cancel().await;
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    app.open_department_form(None)?;
    Ok(Html(render_page(&app)))
}

async fn handle_edit_department(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<u32>,
) -> Result<Html<String>, HttpError> {
    info!(id, "Handling edit department form request");
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    app.open_department_form(Some(DepartmentId::new(id)))?;
    app_state.notices.cancel().await;
    Ok(Html(render_page(&app)))
}

async fn handle_new_request(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    info!("Handling new request form request");
    app_state.notices.cancel().await;
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    app.open_request_form(None)?;
    Ok(Html(render_page(&app)))
}

async fn handle_edit_request(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<u32>,
) -> Result<Html<String>, HttpError> {
    info!(id, "Handling edit request form request");
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    app.open_request_form(Some(RequestId::new(id)))?;
    app_state.notices.cancel().await;
    Ok(Html(render_page(&app)))
}

// ============================================================================
// Saving
// ============================================================================

/// Turns the result of a form submit into a response.
///
/// A saved record redirects to its list and schedules the notification's
/// dismissal. A rejected submit re-renders the form with its inline error.
async fn complete_save(
    app_state: &AppState,
    app: MutexGuard<'_, App>,
    result: Result<SaveOutcome, ApiError>,
) -> Result<Response, HttpError> {
    match result {
        Ok(outcome) => {
            drop(app);
            app_state
                .notices
                .schedule(Arc::clone(&app_state.app), outcome.notice)
                .await;
            let location: String = format!("/{}", collection_path(outcome.saved.entity));
            Ok(Redirect::to(&location).into_response())
        }
        Err(ApiError::Validation { .. }) => {
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(render_page(&app))).into_response())
        }
        Err(err) => Err(HttpError::from(err)),
    }
}

async fn handle_save_account(
    AxumState(app_state): AxumState<AppState>,
    form: Result<Form<AccountInput>, FormRejection>,
) -> Result<Response, HttpError> {
    let Form(input) = form?;
    info!(email = %input.email, "Handling save account request");
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    let result: Result<SaveOutcome, ApiError> = app.save_account(input);
    complete_save(&app_state, app, result).await
}

async fn handle_save_employee(
    AxumState(app_state): AxumState<AppState>,
    form: Result<Form<EmployeeInput>, FormRejection>,
) -> Result<Response, HttpError> {
    let Form(input) = form?;
    info!(code = %input.employee_code, "Handling save employee request");
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    let result: Result<SaveOutcome, ApiError> = app.save_employee(input);
    complete_save(&app_state, app, result).await
}

async fn handle_save_department(
    AxumState(app_state): AxumState<AppState>,
    form: Result<Form<DepartmentInput>, FormRejection>,
) -> Result<Response, HttpError> {
    let Form(input) = form?;
    info!(name = %input.name, "Handling save department request");
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    let result: Result<SaveOutcome, ApiError> = app.save_department(input);
    complete_save(&app_state, app, result).await
}

async fn handle_save_request(
    AxumState(app_state): AxumState<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, HttpError> {
    let Form(pairs) = form?;
    let input: RequestInput = RequestInput::from_pairs(&pairs);
    info!(items = input.items.len(), "Handling save request request");
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    let result: Result<SaveOutcome, ApiError> = app.save_request(input);
    complete_save(&app_state, app, result).await
}

// ============================================================================
// Request line items
// ============================================================================

async fn handle_add_line_item(
    AxumState(app_state): AxumState<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Html<String>, HttpError> {
    let Form(pairs) = form?;
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    let handle: usize = app.add_line_item(RequestInput::from_pairs(&pairs))?;
    info!(handle, "Added request line item");
    Ok(Html(render_page(&app)))
}

async fn handle_remove_line_item(
    AxumState(app_state): AxumState<AppState>,
    Path(handle): Path<usize>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Html<String>, HttpError> {
    let Form(pairs) = form?;
    let mut app: MutexGuard<'_, App> = app_state.app.lock().await;
    let removed: bool = app.remove_line_item(RequestInput::from_pairs(&pairs), handle)?;
    info!(handle, removed, "Removed request line item");
    Ok(Html(render_page(&app)))
}

// ============================================================================
// JSON views
// ============================================================================

async fn handle_api_accounts(AxumState(app_state): AxumState<AppState>) -> Json<Vec<AccountRow>> {
    let app: MutexGuard<'_, App> = app_state.app.lock().await;
    Json(render_accounts(app.store()))
}

async fn handle_api_employees(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<EmployeeRow>> {
    let app: MutexGuard<'_, App> = app_state.app.lock().await;
    Json(render_employees(app.store()))
}

async fn handle_api_departments(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<DepartmentRow>> {
    let app: MutexGuard<'_, App> = app_state.app.lock().await;
    Json(render_departments(app.store()))
}

async fn handle_api_requests(AxumState(app_state): AxumState<AppState>) -> Json<RequestList> {
    let app: MutexGuard<'_, App> = app_state.app.lock().await;
    Json(render_requests(app.store()))
}

async fn handle_api_notification(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Option<Notice>> {
    let app: MutexGuard<'_, App> = app_state.app.lock().await;
    Json(app.notification().cloned())
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/accounts") }))
        .route("/accounts", get(handle_accounts))
        .route("/accounts/new", get(handle_new_account))
        .route("/accounts/form", get(handle_account_form))
        .route("/accounts/save", post(handle_save_account))
        .route("/accounts/{id}/edit", get(handle_edit_account))
        .route("/employees", get(handle_employees))
        .route("/employees/new", get(handle_new_employee))
        .route("/employees/form", get(handle_employee_form))
        .route("/employees/save", post(handle_save_employee))
        .route("/employees/{id}/edit", get(handle_edit_employee))
        .route("/employees/{id}/requests", get(handle_employee_requests))
        .route("/departments", get(handle_departments))
        .route("/departments/new", get(handle_new_department))
        .route("/departments/form", get(handle_department_form))
        .route("/departments/save", post(handle_save_department))
        .route("/departments/{id}/edit", get(handle_edit_department))
        .route("/requests", get(handle_requests))
        .route("/requests/new", get(handle_new_request))
        .route("/requests/form", get(handle_request_form))
        .route("/requests/save", post(handle_save_request))
        .route("/requests/{id}/edit", get(handle_edit_request))
        .route("/requests/form/items/add", post(handle_add_line_item))
        .route(
            "/requests/form/items/{handle}/remove",
            post(handle_remove_line_item),
        )
        .route("/api/accounts", get(handle_api_accounts))
        .route("/api/employees", get(handle_api_employees))
        .route("/api/departments", get(handle_api_departments))
        .route("/api/requests", get(handle_api_requests))
        .route("/api/notification", get(handle_api_notification))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Staffdesk Server");

    let store: Store = if args.empty {
        info!("Starting with no records");
        Store::new()
    } else {
        info!("Starting with sample records");
        Store::seeded()
    };
    info!(store = %store.summary(), "Loaded records");

    let app_state: AppState =
        AppState::new(store, Duration::from_secs(args.notice_ttl_secs));

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
