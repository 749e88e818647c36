use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Filter parameters for task listing.
#[derive(Debug, Serialize, Deserialize, Default, IntoParams)]
pub struct ListFilterDto {
    /// Filter by task status, `todo` or `done`. Omit to list all tasks.
    pub status: Option<String>,
}
