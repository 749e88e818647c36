use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{
    Conn,
    models::{Task, TaskStatus},
};

use super::DbError;

/// List tasks newest-id-first, optionally filtered by status.
pub async fn list_tasks(
    conn: &mut Conn,
    status_filter: Option<TaskStatus>,
) -> Result<Vec<Task>, DbError> {
    use crate::schema::tasks::dsl::*;

    let result = if let Some(wanted) = status_filter {
        tasks
            .filter(status.eq(wanted))
            .order(id.desc())
            .select(Task::as_select())
            .load(conn)
            .await?
    } else {
        tasks
            .order(id.desc())
            .select(Task::as_select())
            .load(conn)
            .await?
    };
    Ok(result)
}
