pub mod create;
pub mod delete;
pub mod like;

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

use super::payload;

pub const MAX_CONTENT_LEN: usize = 5000;

/// Validated payload for commenting on a thread.
#[derive(Debug, PartialEq)]
pub struct AddComment {
    pub content: String,
}

impl AddComment {
    pub fn parse(payload: &Value) -> Result<Self, ValidationError> {
        let content = payload::require_str(payload, "content")?;
        payload::max_len(content, "content", MAX_CONTENT_LEN)?;

        Ok(Self {
            content: content.to_owned(),
        })
    }
}

/// Identity triple returned after a comment is stored.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}
