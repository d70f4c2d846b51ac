//! Comment system module
//!
//! Handles the comment model, create-time validation, the storage contract
//! and the gateway that exposes list/create/delete/update.

pub mod model;
pub mod validator;
pub mod store;
pub mod memory;
pub mod gateway;

pub use model::*;
pub use validator::CommentValidator;
pub use store::CommentStore;
pub use memory::MemoryStorage;
pub use gateway::CommentGateway;
