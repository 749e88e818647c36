use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{
    Conn,
    models::{NewTask, Task, TaskChangeset},
};

use super::DbError;

/// Insert a new task. The database assigns `id` (autoincrementing, so ids
/// are strictly increasing across creations) and `created_at`.
pub async fn insert_new_task(conn: &mut Conn, new_task: NewTask) -> Result<Task, DbError> {
    use crate::schema::tasks::dsl::tasks;

    let task = diesel::insert_into(tasks)
        .values(new_task)
        .returning(Task::as_returning())
        .get_result(conn)
        .await?;
    Ok(task)
}

/// Point lookup by id. Returns None if the task doesn't exist.
pub async fn find_task_by_id(conn: &mut Conn, task_id: i32) -> Result<Option<Task>, DbError> {
    use crate::schema::tasks::dsl::*;

    let task = tasks
        .filter(id.eq(task_id))
        .select(Task::as_select())
        .first(conn)
        .await
        .optional()?;
    Ok(task)
}

/// Overwrite all mutable fields of a task in a single UPDATE.
/// Returns None if the id is absent.
pub async fn replace_task(
    conn: &mut Conn,
    task_id: i32,
    replacement: NewTask,
) -> Result<Option<Task>, DbError> {
    use crate::schema::tasks::dsl::*;

    let task = diesel::update(tasks.filter(id.eq(task_id)))
        .set(replacement)
        .returning(Task::as_returning())
        .get_result(conn)
        .await
        .optional()?;
    Ok(task)
}

/// Apply a partial changeset as a single conditional UPDATE; unsupplied
/// fields keep their stored value. Because this never reads before writing,
/// a delete racing this call cannot resurrect the record. Returns None if
/// the id is absent.
///
/// Callers must supply at least one field; an empty changeset is rejected
/// by the query builder.
pub async fn update_task_partial(
    conn: &mut Conn,
    task_id: i32,
    changes: TaskChangeset,
) -> Result<Option<Task>, DbError> {
    use crate::schema::tasks::dsl::*;

    debug_assert!(!changes.is_empty(), "changeset must carry at least one field");

    let task = diesel::update(tasks.filter(id.eq(task_id)))
        .set(changes)
        .returning(Task::as_returning())
        .get_result(conn)
        .await
        .optional()?;
    Ok(task)
}

/// Remove a task. Returns false if the id was already absent.
pub async fn delete_task(conn: &mut Conn, task_id: i32) -> Result<bool, DbError> {
    use crate::schema::tasks::dsl::*;

    let deleted = diesel::delete(tasks.filter(id.eq(task_id)))
        .execute(conn)
        .await?;
    Ok(deleted > 0)
}
