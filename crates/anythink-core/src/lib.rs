//! anythink-core - Core library for the anythink comments service
//!
//! This crate provides the comment gateway and its storage contract, the
//! configuration model, and the string case-conversion utilities.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod casing;

pub use error::{AnythinkError, ErrorKind, Result};
pub use types::*;
