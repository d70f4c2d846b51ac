//! On-disk document format for a single comment

use anythink_core::comment::Comment;
use anythink_core::error::{AnythinkError, Result};
use anythink_core::types::ProtocolVersion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current schema version
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// Comment document with schema version and insertion time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDocument {
    /// Schema version of this document
    pub schema_version: String,
    /// When the engine first stored the comment; drives retrieval order
    pub created_at: DateTime<Utc>,
    /// The comment itself
    pub comment: Comment,
    /// Extra fields for forward compatibility
    #[serde(flatten, default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl CommentDocument {
    /// Wrap a freshly created comment
    pub fn new(comment: Comment) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            created_at: Utc::now(),
            comment,
            extra: HashMap::new(),
        }
    }

    /// Parse schema version
    pub fn parse_version(&self) -> Option<ProtocolVersion> {
        ProtocolVersion::parse(&self.schema_version)
    }

    /// Reject documents written by an incompatible schema
    pub fn ensure_compatible(&self) -> Result<()> {
        let current = ProtocolVersion::default();
        match self.parse_version() {
            Some(version) if version.is_compatible(&current) => Ok(()),
            _ => Err(AnythinkError::UnsupportedSchemaVersion(
                self.schema_version.clone(),
            )),
        }
    }

    /// Get the comment, consuming the document
    pub fn into_comment(self) -> Comment {
        self.comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anythink_core::comment::NewComment;
    use anythink_core::types::CommentId;

    fn document() -> CommentDocument {
        CommentDocument::new(NewComment::new("hi", "bob").into_comment(CommentId::generate()))
    }

    #[test]
    fn test_new_document_is_current() {
        let doc = document();
        assert_eq!(doc.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(doc.ensure_compatible().is_ok());
    }

    #[test]
    fn test_minor_version_accepted() {
        let mut doc = document();
        doc.schema_version = "1.4".to_string();
        assert!(doc.ensure_compatible().is_ok());
    }

    #[test]
    fn test_incompatible_version_rejected() {
        let mut doc = document();
        doc.schema_version = "2.0".to_string();
        assert!(matches!(
            doc.ensure_compatible(),
            Err(AnythinkError::UnsupportedSchemaVersion(_))
        ));

        doc.schema_version = "garbage".to_string();
        assert!(doc.ensure_compatible().is_err());
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let doc = document();
        let mut json = serde_json::to_value(&doc).unwrap();
        json["written_by"] = serde_json::json!("other-tool");

        let parsed: CommentDocument = serde_json::from_value(json).unwrap();
        assert_eq!(
            parsed.extra.get("written_by"),
            Some(&serde_json::json!("other-tool"))
        );
    }
}
