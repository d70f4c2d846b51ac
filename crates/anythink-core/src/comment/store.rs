//! Storage engine contract for the comment collection

use super::model::{Comment, CommentUpdate, NewComment};
use crate::error::Result;
use crate::types::CommentId;

/// Trait for comment storage engines
///
/// Engines assign ids, keep each single-document operation atomic and decide
/// the natural retrieval order returned by [`CommentStore::list`].
pub trait CommentStore: Send + Sync {
    /// All comments in natural retrieval order
    fn list(&self) -> Result<Vec<Comment>>;

    /// Persist a new comment and return it with its assigned id
    fn insert(&self, comment: NewComment) -> Result<Comment>;

    /// Remove a comment, returning it if it existed
    fn remove(&self, id: &CommentId) -> Result<Option<Comment>>;

    /// Overwrite text and author, returning the updated comment if it existed
    fn replace(&self, id: &CommentId, update: CommentUpdate) -> Result<Option<Comment>>;

    /// Number of stored comments
    fn count(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }
}
