//! In-memory comment storage

use super::model::{Comment, CommentUpdate, NewComment};
use super::store::CommentStore;
use crate::error::{AnythinkError, Result};
use crate::types::CommentId;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-process storage engine; contents are lost when it is dropped
///
/// Comments are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    comments: RwLock<Vec<Comment>>,
}

impl MemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Comment>>> {
        self.comments
            .read()
            .map_err(|_| AnythinkError::Storage("memory storage lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Comment>>> {
        self.comments
            .write()
            .map_err(|_| AnythinkError::Storage("memory storage lock poisoned".to_string()))
    }
}

impl CommentStore for MemoryStorage {
    fn list(&self) -> Result<Vec<Comment>> {
        Ok(self.read()?.clone())
    }

    fn insert(&self, comment: NewComment) -> Result<Comment> {
        let comment = comment.into_comment(CommentId::generate());
        self.write()?.push(comment.clone());
        Ok(comment)
    }

    fn remove(&self, id: &CommentId) -> Result<Option<Comment>> {
        let mut comments = self.write()?;
        Ok(comments
            .iter()
            .position(|c| &c.id == id)
            .map(|pos| comments.remove(pos)))
    }

    fn replace(&self, id: &CommentId, update: CommentUpdate) -> Result<Option<Comment>> {
        let mut comments = self.write()?;
        Ok(comments.iter_mut().find(|c| &c.id == id).map(|comment| {
            comment.apply(update);
            comment.clone()
        }))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}
