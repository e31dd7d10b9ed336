//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod client;
pub mod phone;

pub use client::{ClientEntity, ClientWithPhoneEntity};
pub use phone::PhoneEntity;
