//! Domain models for the client registry.

pub mod client;
pub mod phone;

pub use client::{Client, ClientWithPhone};
pub use phone::Phone;
