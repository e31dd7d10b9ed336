//! Repository implementations for database operations.

pub mod client;
pub mod phone;

pub use client::{ClientPatch, ClientRepository, ClientSearchFilter, UpdateOutcome};
pub use phone::PhoneRepository;
