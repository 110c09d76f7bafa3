//! DTOs exposed by the workation REST endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// JSON body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: NaiveDateTime,
    pub status: u16,
    /// Short reason, e.g. `Not Found` or `Validation Failed`.
    pub error: String,
    pub message: String,
    /// Request path that produced the error.
    pub path: String,
    /// Individual field messages for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}
