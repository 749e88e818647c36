use chrono::Utc;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Identifiable, Queryable, Selectable, Serialize, Deserialize, Debug, ToSchema)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Task {
    /// Assigned by the database, unique and monotonically increasing.
    pub id: i32,
    /// Always stored trimmed, 1-100 characters.
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Set once by the database on insert, never updated.
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<Utc>,
}

/// The full set of mutable fields, used both to insert a task and to
/// replace one wholesale. `id` and `created_at` are assigned by the
/// database and never written through this type.
#[derive(Debug, Clone, Serialize, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Changeset for partial updates. `None` fields keep their stored value.
/// At least one field must be `Some` before this reaches the database.
#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = crate::schema::tasks)]
pub struct TaskChangeset {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskChangeset {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[derive(
    Debug, PartialEq, Serialize, diesel_derive_enum::DbEnum, Deserialize, Clone, Copy, Hash, Eq, ToSchema,
)]
#[db_enum(existing_type_path = "crate::schema::sql_types::TaskStatus")]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Done,
}

impl TaskStatus {
    /// Parse the wire form. Anything but the two exact lowercase values is
    /// rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "todo" => Some(TaskStatus::Todo),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Done => "done",
        }
    }
}
