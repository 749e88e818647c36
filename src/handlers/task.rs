use actix_web::{HttpResponse, web};

use crate::{db, dtos, error::ApiError, validation};

use super::AppState;

#[utoipa::path(
    get,
    path = "/api/tasks",
    summary = "List tasks",
    description = "Returns all tasks, newest first. Pass `?status=todo` or `?status=done` to filter; any other value is rejected.",
    params(dtos::ListFilterDto),
    responses(
        (status = 200, description = "Array of tasks matching the filter", body = Vec<crate::models::Task>),
        (status = 400, description = "Invalid status filter"),
    ),
    tag = "tasks"
)]
/// List tasks, optionally filtered by status
pub async fn list_tasks(
    state: web::Data<AppState>,
    filter: web::Query<dtos::ListFilterDto>,
) -> actix_web::Result<HttpResponse> {
    let status = validation::validate_status_filter(filter.status.as_deref())
        .map_err(ApiError::from)?;

    let mut conn = state.conn().await?;
    let tasks = db::list_tasks(&mut conn, status)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(tasks))
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    summary = "Create a task",
    description = "Create a task from a title and optional description. The new task always starts as `todo`; a client-supplied `status` is ignored. The title is trimmed before storage.",
    request_body = dtos::NewTaskDto,
    responses(
        (status = 201, description = "The persisted task, including its assigned id and creation timestamp", body = crate::models::Task),
        (status = 400, description = "Invalid title or description"),
    ),
    tag = "tasks"
)]
/// Create a new task
pub async fn add_task(
    state: web::Data<AppState>,
    form: web::Json<dtos::NewTaskDto>,
) -> actix_web::Result<HttpResponse> {
    let new_task = validation::validate_new_task(&form).map_err(ApiError::from)?;

    let mut conn = state.conn().await?;
    let task = db::insert_new_task(&mut conn, new_task)
        .await
        .map_err(ApiError::from)?;

    log::info!("Created task {}", task.id);
    Ok(HttpResponse::Created().json(task))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{task_id}",
    summary = "Get a task",
    params(("task_id" = i32, Path, description = "The id of the task")),
    responses(
        (status = 200, description = "The task", body = crate::models::Task),
        (status = 404, description = "No task with this id"),
    ),
    tag = "tasks"
)]
/// Get a task by id
pub async fn get_task(
    state: web::Data<AppState>,
    task_id: web::Path<i32>,
) -> actix_web::Result<HttpResponse> {
    let mut conn = state.conn().await?;
    let task = db::find_task_by_id(&mut conn, *task_id)
        .await
        .map_err(ApiError::from)?;

    match task {
        Some(t) => Ok(HttpResponse::Ok().json(t)),
        None => Err(ApiError::task_not_found().into()),
    }
}

#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    summary = "Replace a task",
    description = "Overwrite all mutable fields at once. `title`, `description` and `status` are all required here, unlike create and partial update. `id` and `createdAt` are immutable.",
    params(("task_id" = i32, Path, description = "The id of the task")),
    request_body = dtos::ReplaceTaskDto,
    responses(
        (status = 200, description = "The updated task", body = crate::models::Task),
        (status = 400, description = "A field is missing or invalid"),
        (status = 404, description = "No task with this id"),
    ),
    tag = "tasks"
)]
/// Replace all mutable fields of a task
pub async fn replace_task(
    state: web::Data<AppState>,
    task_id: web::Path<i32>,
    form: web::Json<dtos::ReplaceTaskDto>,
) -> actix_web::Result<HttpResponse> {
    let replacement = validation::validate_replace_task(&form).map_err(ApiError::from)?;

    let mut conn = state.conn().await?;
    let task = db::replace_task(&mut conn, *task_id, replacement)
        .await
        .map_err(ApiError::from)?;

    match task {
        Some(t) => Ok(HttpResponse::Ok().json(t)),
        None => Err(ApiError::task_not_found().into()),
    }
}

#[utoipa::path(
    patch,
    path = "/api/tasks/{task_id}",
    summary = "Partially update a task",
    description = "Update any subset of `title`, `description` and `status`. At least one field is required; unknown field names are rejected. Omitted fields keep their stored value.",
    params(("task_id" = i32, Path, description = "The id of the task")),
    request_body = dtos::UpdateTaskDto,
    responses(
        (status = 200, description = "The updated task", body = crate::models::Task),
        (status = 400, description = "Empty field set, unknown field, or invalid value"),
        (status = 404, description = "No task with this id"),
    ),
    tag = "tasks"
)]
/// Update a subset of a task's fields
pub async fn update_task(
    state: web::Data<AppState>,
    task_id: web::Path<i32>,
    form: web::Json<dtos::UpdateTaskDto>,
) -> actix_web::Result<HttpResponse> {
    let changes = validation::validate_update_task(&form).map_err(ApiError::from)?;

    let mut conn = state.conn().await?;
    let task = db::update_task_partial(&mut conn, *task_id, changes)
        .await
        .map_err(ApiError::from)?;

    match task {
        Some(t) => Ok(HttpResponse::Ok().json(t)),
        None => Err(ApiError::task_not_found().into()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    summary = "Delete a task",
    params(("task_id" = i32, Path, description = "The id of the task")),
    responses(
        (status = 204, description = "Task removed"),
        (status = 404, description = "No task with this id"),
    ),
    tag = "tasks"
)]
/// Delete a task
pub async fn delete_task(
    state: web::Data<AppState>,
    task_id: web::Path<i32>,
) -> actix_web::Result<HttpResponse> {
    let mut conn = state.conn().await?;
    let deleted = db::delete_task(&mut conn, *task_id)
        .await
        .map_err(ApiError::from)?;

    if deleted {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::task_not_found().into())
    }
}
