use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input DTO for creating a task via `POST /api/tasks`.
///
/// Only `title` and `description` are read from the body. Tasks always start
/// as `todo`; a client-supplied `status` (or any other extra key) is ignored.
///
/// ## Example
/// ```json
/// {"title": "Buy milk", "description": "2 liters, whole"}
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewTaskDto {
    /// Task title, 1-100 characters after trimming. Required.
    pub title: Option<String>,
    /// Free-form description, at most 500 characters. Defaults to "".
    pub description: Option<String>,
}

/// Input DTO for `PUT /api/tasks/{id}`. All mutable fields are required;
/// unlike create, `status` cannot be omitted here.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReplaceTaskDto {
    /// Task title, 1-100 characters after trimming.
    pub title: Option<String>,
    /// Free-form description, at most 500 characters.
    pub description: Option<String>,
    /// `todo` or `done`.
    pub status: Option<String>,
}

/// Input DTO for `PATCH /api/tasks/{id}`. Any subset of the mutable fields;
/// omitted (or null) fields keep their stored value. Field names outside
/// this set are rejected at deserialization, naming the offending field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTaskDto {
    /// New title, 1-100 characters after trimming.
    pub title: Option<String>,
    /// New description, at most 500 characters.
    pub description: Option<String>,
    /// New status, `todo` or `done`.
    pub status: Option<String>,
}
