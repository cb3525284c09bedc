// ── Machine-level types ──

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Device information, served by `machine` and pushed on the `info`
/// channel.
///
/// Both maps are loosely typed -- their field sets vary by firmware
/// build, so nothing is modeled explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineInfo {
    #[serde(default)]
    pub software_info: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub esp_info: serde_json::Map<String, serde_json::Value>,
}

/// Progress of an operating-system update, from `machine/OS_update_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsUpdateStatus {
    /// Current phase (`IDLE`, `DOWNLOADING`, `INSTALLING`, …); the set
    /// grows with firmware revisions, so it stays a string.
    pub status: String,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub info: Option<String>,
}

/// The machine's root password, from `machine/root-password`.
///
/// Held as a secret so it never appears in debug output.
#[derive(Debug, Clone, Deserialize)]
pub struct RootPassword {
    pub root_password: SecretString,
}

/// Region grouping for the timezone catalogue endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TimezoneRegionType {
    Countries,
    Cities,
}

/// A firmware image for the multipart upload endpoint.
#[derive(Debug, Clone)]
pub struct FirmwareImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FirmwareImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn machine_info_tolerates_empty_body() {
        let info: MachineInfo = serde_json::from_str("{}").expect("parse");
        assert!(info.software_info.is_empty());
        assert!(info.esp_info.is_empty());
    }

    #[test]
    fn root_password_redacted_in_debug() {
        let pw: RootPassword =
            serde_json::from_value(serde_json::json!({ "root_password": "opensesame" }))
                .expect("parse");
        assert_eq!(pw.root_password.expose_secret(), "opensesame");
        assert!(!format!("{pw:?}").contains("opensesame"));
    }

    #[test]
    fn timezone_region_path_segment() {
        assert_eq!(TimezoneRegionType::Countries.to_string(), "countries");
    }
}
