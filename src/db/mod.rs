mod task_crud;
mod task_query;

pub(crate) type DbError = crate::error::TaskBoardError;

// Re-exports from task_crud
pub use task_crud::{delete_task, find_task_by_id, insert_new_task, replace_task, update_task_partial};

// Re-exports from task_query
pub use task_query::list_tasks;
