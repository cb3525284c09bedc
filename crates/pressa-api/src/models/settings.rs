// ── Machine settings ──

use serde::{Deserialize, Serialize};

/// The machine's full settings mapping.
///
/// Every key has a stable type. Keys introduced by newer firmware land in
/// `extra` rather than failing the parse. Updates are partial: POST a
/// [`SettingsUpdate`] and the machine merges it server-side, answering
/// with the resulting full mapping. Unknown keys in an update are
/// rejected by the machine, not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Minutes of idle time before the boiler pre-heats, 0 to disable.
    pub auto_preheat: u32,
    pub auto_purge_after_shot: bool,
    pub auto_start_shot: bool,
    pub disallow_firmware_flashing: bool,
    pub enable_sounds: bool,
    pub save_debug_shot_data: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Partial settings update; unset fields are left untouched by the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_preheat: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_purge_after_shot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_start_shot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disallow_firmware_flashing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sounds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_debug_shot_data: Option<bool>,
}
