// ── Device notifications ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A device-originated alert awaiting acknowledgement.
///
/// Created by the machine, listed via the notifications endpoint, and
/// acknowledged exactly once with one of `response_options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub response_options: Option<Vec<String>>,
    pub timestamp: DateTime<Utc>,
}

/// Acknowledges one notification with the chosen response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgeRequest {
    pub id: String,
    pub response: String,
}
