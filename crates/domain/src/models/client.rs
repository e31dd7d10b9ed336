//! Client domain model.

use serde::{Deserialize, Serialize};

/// Represents a client record in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// A client row joined with its phone number, as returned by search.
///
/// `number` is absent when no phone row is linked to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientWithPhone {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub number: Option<i64>,
}
