pub mod create;
pub mod get;

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

use super::payload;

pub const MAX_TITLE_LEN: usize = 150;
pub const MAX_BODY_LEN: usize = 5000;

/// Validated payload for opening a new thread.
#[derive(Debug, PartialEq)]
pub struct AddThread {
    pub title: String,
    pub body: String,
}

impl AddThread {
    pub fn parse(payload: &Value) -> Result<Self, ValidationError> {
        let title = payload::require_str(payload, "title")?;
        payload::max_len(title, "title", MAX_TITLE_LEN)?;

        let body = payload::require_str(payload, "body")?;
        payload::max_len(body, "body", MAX_BODY_LEN)?;

        Ok(Self {
            title: title.to_owned(),
            body: body.to_owned(),
        })
    }
}

/// Identity triple returned after a thread is stored.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_complete_payload() {
        let parsed = AddThread::parse(&json!({
            "title": "this is new thread",
            "body": "welcome to new thread",
        }))
        .unwrap();

        assert_eq!(parsed.title, "this is new thread");
        assert_eq!(parsed.body, "welcome to new thread");
    }

    #[test]
    fn rejects_missing_and_mistyped_properties() {
        assert_eq!(
            AddThread::parse(&json!({ "body": "welcome" })),
            Err(ValidationError::missing("title"))
        );
        assert_eq!(
            AddThread::parse(&json!({ "title": "hi", "body": 42 })),
            Err(ValidationError::wrong_type("body"))
        );
    }

    #[test]
    fn rejects_an_overlong_title() {
        let payload = json!({ "title": "t".repeat(MAX_TITLE_LEN + 1), "body": "ok" });
        assert!(matches!(
            AddThread::parse(&payload),
            Err(ValidationError::Invalid(_))
        ));
    }
}
