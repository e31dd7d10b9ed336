//! Phone domain model.

use serde::{Deserialize, Serialize};

/// Represents a phone number attached to a client.
///
/// Numbers are globally unique and bounded to eleven decimal digits by the
/// database check constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub client_id: i32,
    pub number: i64,
}
