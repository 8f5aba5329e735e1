//! Field rules shared by every catalogue and hive record.

use crate::error::{DomainError, DomainResult};

pub const CODE_MAX_LEN: usize = 5;
pub const NAME_MAX_LEN: usize = 60;
pub const TEXT_MAX_LEN: usize = 300;

/// Codes are the uniqueness key of every collection, so they may not be blank.
pub fn code(value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation("code cannot be empty"));
    }
    max_len("code", value, CODE_MAX_LEN)
}

pub fn name(value: &str) -> DomainResult<()> {
    max_len("name", value, NAME_MAX_LEN)
}

pub fn text(field: &str, value: &str) -> DomainResult<()> {
    max_len(field, value, TEXT_MAX_LEN)
}

pub fn max_len(field: &str, value: &str, max: usize) -> DomainResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(DomainError::validation(format!(
            "{field} must be at most {max} characters (got {len})"
        )));
    }
    Ok(())
}
