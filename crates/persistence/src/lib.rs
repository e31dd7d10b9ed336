//! Persistence layer for the client registry.
//!
//! This crate contains:
//! - Database connection management
//! - Schema management (destructive reset)
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - The storage error taxonomy

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;
pub mod schema;

pub use error::StoreError;
