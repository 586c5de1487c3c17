//! Structural validation helpers for inbound JSON payloads.

use serde_json::Value;

use crate::error::ValidationError;

/// Extract a required, non-empty string field from a payload. Absent, null
/// or blank values report the missing-property kind; present values of any
/// other JSON type report the wrong-type kind.
pub fn require_str<'a>(payload: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    match payload.get(field) {
        None | Some(Value::Null) => Err(ValidationError::missing(field)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(ValidationError::missing(field))
            } else {
                Ok(trimmed)
            }
        }
        Some(_) => Err(ValidationError::wrong_type(field)),
    }
}

pub fn max_len(value: &str, field: &str, limit: usize) -> Result<(), ValidationError> {
    if value.chars().count() > limit {
        return Err(ValidationError::invalid(format!(
            "`{field}` too long (max {limit} characters)"
        )));
    }

    Ok(())
}
