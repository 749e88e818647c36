use crate::dtos::{NewTaskDto, ReplaceTaskDto, UpdateTaskDto};
use crate::models::{NewTask, TaskChangeset, TaskStatus};

use super::constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use super::{ValidationError, ValidationResult};

/// Check a title value. Returns the trimmed form to store.
fn check_title(raw: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = raw.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return Err(ValidationError::new("title", "title is required"));
    }
    if trimmed.len() > MAX_TITLE_LEN {
        return Err(ValidationError::new(
            "title",
            "title must be between 1 and 100 characters",
        ));
    }
    Ok(trimmed.to_string())
}

/// Check an optional description. `Ok(None)` means the field was absent.
fn check_description(raw: Option<&str>) -> Result<Option<String>, ValidationError> {
    match raw {
        None => Ok(None),
        Some(value) => {
            if value.len() > MAX_DESCRIPTION_LEN {
                return Err(ValidationError::new(
                    "description",
                    "description must be at most 500 characters",
                ));
            }
            Ok(Some(value.to_string()))
        }
    }
}

/// Check a status value against the two allowed wire forms.
fn check_status(raw: &str) -> Result<TaskStatus, ValidationError> {
    TaskStatus::parse(raw).ok_or_else(|| {
        ValidationError::new("status", "status must be either \"todo\" or \"done\"")
    })
}

/// Validates the create payload and builds the row to insert.
///
/// Status is always forced to `todo`: creation cannot produce a `done` task,
/// regardless of what the client sent.
pub fn validate_new_task(dto: &NewTaskDto) -> ValidationResult<NewTask> {
    let mut errors = Vec::new();

    let title = match check_title(dto.title.as_deref()) {
        Ok(t) => Some(t),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let description = match check_description(dto.description.as_deref()) {
        Ok(d) => Some(d),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (title, description) {
        (Some(title), Some(description)) => Ok(NewTask {
            title,
            description: description.unwrap_or_default(),
            status: TaskStatus::Todo,
        }),
        _ => Err(errors),
    }
}

/// Validates the full-replace payload. All three mutable fields must be
/// present and individually valid; unlike create, `status` cannot be
/// omitted.
pub fn validate_replace_task(dto: &ReplaceTaskDto) -> ValidationResult<NewTask> {
    let mut errors = Vec::new();

    let title = match check_title(dto.title.as_deref()) {
        Ok(t) => Some(t),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let description = match check_description(dto.description.as_deref()) {
        Ok(Some(d)) => Some(d),
        Ok(None) => {
            errors.push(ValidationError::new(
                "description",
                "description is required",
            ));
            None
        }
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let status = match dto.status.as_deref() {
        Some(raw) => match check_status(raw) {
            Ok(s) => Some(s),
            Err(e) => {
                errors.push(e);
                None
            }
        },
        None => {
            errors.push(ValidationError::new(
                "status",
                "status must be either \"todo\" or \"done\"",
            ));
            None
        }
    };

    match (title, description, status) {
        (Some(title), Some(description), Some(status)) => Ok(NewTask {
            title,
            description,
            status,
        }),
        _ => Err(errors),
    }
}

/// Validates the partial-update payload. At least one field must be
/// supplied; each supplied field is checked with the same rule as
/// create/replace. Omitted fields stay `None` in the changeset and keep
/// their stored value.
pub fn validate_update_task(dto: &UpdateTaskDto) -> ValidationResult<TaskChangeset> {
    if dto.title.is_none() && dto.description.is_none() && dto.status.is_none() {
        return Err(vec![ValidationError::new(
            "fields",
            "at least one field is required",
        )]);
    }

    let mut errors = Vec::new();
    let mut changes = TaskChangeset::default();

    if dto.title.is_some() {
        match check_title(dto.title.as_deref()) {
            Ok(t) => changes.title = Some(t),
            Err(e) => errors.push(e),
        }
    }

    if dto.description.is_some() {
        match check_description(dto.description.as_deref()) {
            Ok(d) => changes.description = d,
            Err(e) => errors.push(e),
        }
    }

    if let Some(raw) = dto.status.as_deref() {
        match check_status(raw) {
            Ok(s) => changes.status = Some(s),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors)
    }
}

/// Validates the optional `status` query filter for listing.
pub fn validate_status_filter(raw: Option<&str>) -> ValidationResult<Option<TaskStatus>> {
    match raw {
        None => Ok(None),
        Some(value) => check_status(value).map(Some).map_err(|e| vec![e]),
    }
}
