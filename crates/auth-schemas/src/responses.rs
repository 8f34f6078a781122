//! Response schemas
//!
//! All response schemas implement `Serialize` for JSON output.

use serde::Serialize;

/// Outbound user payload
///
/// Exactly the identifier and email, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
}
