//! HTTP handlers for the taskboard endpoints.
//!
//! This module contains all HTTP handler functions that can be used by both
//! the main application and integration tests.

use std::sync::Arc;

use actix_web::{HttpResponse, error::JsonPayloadError, web};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    DbPool,
    config::Config,
    dtos,
    error::{ApiError, TaskBoardError},
    models,
};

mod health;
mod task;
mod view;

// Re-export handlers for route configuration
pub use health::{health_check, readiness_check};
pub use task::{add_task, delete_task, get_task, list_tasks, replace_task, update_task};
pub use view::index_page;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<Config>,
}

impl AppState {
    /// Get a database connection from the pool. There is no retry: a pool
    /// failure surfaces as a 500 immediately.
    pub async fn conn(&self) -> Result<crate::Conn, ApiError> {
        self.pool
            .get()
            .await
            .map_err(|e| ApiError::from(TaskBoardError::Pool(e.to_string())))
    }
}

/// Health check response showing service and database status.
#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Overall service status: "ok" or "degraded"
    pub status: String,
    /// Database connectivity status: "healthy" or "unhealthy"
    pub database: String,
    /// Total number of connections in the pool
    pub pool_size: usize,
    /// Number of idle (available) connections in the pool
    pub pool_available: usize,
}

// =============================================================================
// OpenAPI Documentation
// =============================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::readiness_check,
        task::list_tasks,
        task::add_task,
        task::get_task,
        task::replace_task,
        task::update_task,
        task::delete_task,
    ),
    components(schemas(
        HealthResponse,
        dtos::NewTaskDto,
        dtos::ReplaceTaskDto,
        dtos::UpdateTaskDto,
        models::Task,
        models::TaskStatus,
    )),
    tags(
        (name = "health", description = "Health and readiness probes. Use GET /health for liveness and GET /ready for readiness."),
        (name = "tasks", description = "Task CRUD. Tasks are created via POST /api/tasks (always starting as `todo`), toggled or edited via PATCH/PUT, and removed via DELETE."),
    ),
    info(
        title = "Taskboard API",
        version = "0.1.0",
        description = "A minimal task-tracking service: one `tasks` table, five CRUD operations, and a built-in browser client at `/`.",
    )
)]
pub struct ApiDoc;

// =============================================================================
// Route Configuration
// =============================================================================

/// Fallback for unknown `/api/*` routes.
async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({"error": "not found"}))
}

/// Map JSON body failures to the shared error shape. Syntax errors (and
/// missing/truncated bodies) become the generic `invalid JSON body` message;
/// data errors keep the serde message, which names the offending field.
fn json_error_handler(err: JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::Deserialize(e)
            if e.classify() == serde_json::error::Category::Data =>
        {
            e.to_string()
        }
        _ => "invalid JSON body".to_string(),
    };
    ApiError::BadRequest(message).into()
}

/// A path id that doesn't parse as an integer can't name any task.
fn path_error_handler(
    _err: actix_web::error::PathError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    ApiError::task_not_found().into()
}

/// Configure all routes for the application.
/// This can be used by both the main application and integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_page))
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check))
        .service(
            web::scope("/api")
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .route("/tasks", web::get().to(list_tasks))
                .route("/tasks", web::post().to(add_task))
                .route("/tasks/{task_id}", web::get().to(get_task))
                .route("/tasks/{task_id}", web::put().to(replace_task))
                .route("/tasks/{task_id}", web::patch().to(update_task))
                .route("/tasks/{task_id}", web::delete().to(delete_task))
                .default_service(web::route().to(api_not_found)),
        )
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}
