//! Argument assertions shared by the request schema.
use crate::config::DbNamePolicy;
use crate::error::{MilvusError, Result};

/// Fail if `value` is empty.
pub fn arg_not_empty(value: &str, message: &str) -> Result<()> {
    ensure(!value.is_empty(), message)
}

/// Fail if `values` holds no elements.
pub fn not_empty<T>(values: &[T], message: &str) -> Result<()> {
    ensure(!values.is_empty(), message)
}

/// Fail with `message` unless `condition` holds.
pub fn ensure(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(MilvusError::invalid(message))
    }
}

/// Check a database name against the configured policy.
pub fn db_name(value: &str, policy: DbNamePolicy) -> Result<()> {
    match policy {
        DbNamePolicy::Required => arg_not_empty(value, "db name cannot be empty"),
        DbNamePolicy::Optional => Ok(()),
    }
}
