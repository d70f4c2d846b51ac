//! Create-time validation

use super::model::{CommentPayload, NewComment};
use crate::error::{AnythinkError, Result};

/// Validator for incoming comments
///
/// Only presence is checked: a field must be supplied and non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentValidator;

impl CommentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Names of the required fields that are missing or empty
    pub fn missing_fields(&self, payload: &CommentPayload) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(payload.text.as_deref()) {
            missing.push("text");
        }
        if is_blank(payload.author.as_deref()) {
            missing.push("author");
        }
        missing
    }

    /// Turn a request payload into a comment ready for insertion
    pub fn validate(&self, payload: CommentPayload) -> Result<NewComment> {
        let message = match self.missing_fields(&payload).as_slice() {
            [] => {
                return Ok(NewComment {
                    text: payload.text.unwrap_or_default(),
                    author: payload.author.unwrap_or_default(),
                })
            }
            ["text"] => "Text is required",
            ["author"] => "Author is required",
            _ => "Text and author are required",
        };

        Err(AnythinkError::Validation(message.to_string()))
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid() {
        let validator = CommentValidator::new();
        let new = validator.validate(CommentPayload::new("hi", "bob")).unwrap();
        assert_eq!(new, NewComment::new("hi", "bob"));
    }

    #[test]
    fn test_validate_missing_text() {
        let validator = CommentValidator::new();
        let payload = CommentPayload {
            text: None,
            author: Some("bob".to_string()),
        };
        let err = validator.validate(payload).unwrap_err();
        assert_eq!(err.detail(), "Text is required");
    }

    #[test]
    fn test_validate_empty_author() {
        let validator = CommentValidator::new();
        let err = validator.validate(CommentPayload::new("hi", "")).unwrap_err();
        assert_eq!(err.detail(), "Author is required");
    }

    #[test]
    fn test_validate_both_missing() {
        let validator = CommentValidator::new();
        let err = validator.validate(CommentPayload::default()).unwrap_err();
        assert!(matches!(err, AnythinkError::Validation(_)));
        assert_eq!(err.detail(), "Text and author are required");
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let validator = CommentValidator::new();
        assert!(validator.validate(CommentPayload::new(" ", "bob")).is_ok());
    }
}
