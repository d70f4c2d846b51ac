//! Comment gateway: the four operations over the comment collection

use super::model::{Comment, CommentPayload, CommentUpdate};
use super::store::CommentStore;
use super::validator::CommentValidator;
use crate::error::{AnythinkError, Result};
use crate::types::CommentId;
use std::sync::Arc;
use tracing::{debug, info};

/// Gateway between callers and a comment storage engine
///
/// Holds no state of its own; cloning shares the underlying engine.
#[derive(Clone)]
pub struct CommentGateway {
    /// Storage backend
    store: Arc<dyn CommentStore>,
    validator: CommentValidator,
}

impl CommentGateway {
    /// Create a new gateway over the given storage engine
    pub fn new(store: impl CommentStore + 'static) -> Self {
        Self::with_store(Arc::new(store))
    }

    /// Create a new gateway over shared storage
    pub fn with_store(store: Arc<dyn CommentStore>) -> Self {
        Self {
            store,
            validator: CommentValidator::new(),
        }
    }

    /// All stored comments, in the engine's natural order
    pub fn list(&self) -> Result<Vec<Comment>> {
        self.store.list()
    }

    /// Validate and persist a new comment
    ///
    /// Validation happens before the engine is touched.
    pub fn create(&self, payload: CommentPayload) -> Result<Comment> {
        let new = self.validator.validate(payload)?;
        let comment = self.store.insert(new)?;
        info!("Created comment {}", comment.id);
        Ok(comment)
    }

    /// Remove a comment by id
    pub fn delete(&self, id: &CommentId) -> Result<Comment> {
        let comment = self
            .store
            .remove(id)?
            .ok_or_else(|| AnythinkError::CommentNotFound(id.to_string()))?;
        info!("Deleted comment {}", id);
        Ok(comment)
    }

    /// Overwrite text and author of an existing comment
    pub fn update(&self, id: &CommentId, update: CommentUpdate) -> Result<Comment> {
        let comment = self
            .store
            .replace(id, update)?
            .ok_or_else(|| AnythinkError::CommentNotFound(id.to_string()))?;
        debug!("Updated comment {}", id);
        Ok(comment)
    }

    /// Get total comment count
    pub fn count(&self) -> Result<usize> {
        self.store.count()
    }
}

impl std::fmt::Debug for CommentGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentGateway").finish_non_exhaustive()
    }
}
