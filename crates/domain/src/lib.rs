//! Domain layer for the client registry.
//!
//! This crate contains the domain models (Client, Phone, ClientWithPhone)
//! shared by the persistence layer and its callers.

pub mod models;
