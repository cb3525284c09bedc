// ── Machine action types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The fixed set of machine actions addressable via `action/{action}`.
///
/// Rendered into the path segment in lowercase (`start`, `stop`, …).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Start,
    Stop,
    Reset,
    Tare,
    Calibration,
}

/// Outcome of a machine action.
///
/// The machine echoes the action it executed and, when the request was
/// not currently allowed, the set of actions that would have been.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub allowed_actions: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_renders_lowercase_path_segment() {
        assert_eq!(ActionType::Start.to_string(), "start");
        assert_eq!(ActionType::Calibration.to_string(), "calibration");
    }

    #[test]
    fn action_response_tolerates_missing_fields() {
        let resp: ActionResponse = serde_json::from_str("{}").expect("parse");
        assert!(resp.action.is_none());
        assert!(resp.allowed_actions.is_none());
    }
}
