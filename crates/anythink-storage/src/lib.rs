//! anythink-storage - Storage library for anythink
//!
//! This crate provides the file-backed storage engine for comments.

mod comment_store;
mod document;

pub use comment_store::FileSystemStorage;
pub use document::{CommentDocument, CURRENT_SCHEMA_VERSION};
