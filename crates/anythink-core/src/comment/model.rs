//! Comment data models

use crate::types::CommentId;
use serde::{Deserialize, Serialize};

/// A stored comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Engine-assigned identifier
    pub id: CommentId,
    /// Comment content
    pub text: String,
    /// Who wrote it
    pub author: String,
}

impl Comment {
    /// Overwrite both mutable fields; the id is left alone
    pub fn apply(&mut self, update: CommentUpdate) {
        self.text = update.text;
        self.author = update.author;
    }
}

/// A validated comment that has not been given an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
    pub author: String,
}

impl NewComment {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Attach the id issued by the storage engine
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            text: self.text,
            author: self.author,
        }
    }
}

/// Replacement values for an existing comment
///
/// Both fields are always written, even when the caller only meant to change one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUpdate {
    pub text: String,
    pub author: String,
}

impl CommentUpdate {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Request body for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPayload {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl CommentPayload {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            author: Some(author.into()),
        }
    }

    /// Absent fields become empty strings so a stored comment never holds a null
    pub fn into_update(self) -> CommentUpdate {
        CommentUpdate {
            text: self.text.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_json_shape() {
        let comment = NewComment::new("hi", "bob").into_comment(CommentId::from("c1"));
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "c1", "text": "hi", "author": "bob" })
        );
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut comment = NewComment::new("hi", "bob").into_comment(CommentId::from("c1"));
        comment.apply(CommentUpdate::new("bye", "alice"));
        assert_eq!(comment.id, CommentId::from("c1"));
        assert_eq!(comment.text, "bye");
        assert_eq!(comment.author, "alice");
    }

    #[test]
    fn test_payload_missing_fields() {
        let payload: CommentPayload = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(payload.text.as_deref(), Some("hi"));
        assert!(payload.author.is_none());

        let payload: CommentPayload = serde_json::from_str(r#"{"author":null}"#).unwrap();
        assert!(payload.text.is_none());
        assert!(payload.author.is_none());
    }

    #[test]
    fn test_payload_into_update_fills_blanks() {
        let payload = CommentPayload {
            text: Some("only text".to_string()),
            author: None,
        };
        assert_eq!(payload.into_update(), CommentUpdate::new("only text", ""));
    }
}
