pub mod create;
pub mod delete;

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

use super::comment::MAX_CONTENT_LEN;
use super::payload;

/// Validated payload for replying to a comment.
#[derive(Debug, PartialEq)]
pub struct AddReply {
    pub content: String,
}

impl AddReply {
    pub fn parse(payload: &Value) -> Result<Self, ValidationError> {
        let content = payload::require_str(payload, "content")?;
        payload::max_len(content, "content", MAX_CONTENT_LEN)?;

        Ok(Self {
            content: content.to_owned(),
        })
    }
}

/// Identity triple returned after a reply is stored.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}
