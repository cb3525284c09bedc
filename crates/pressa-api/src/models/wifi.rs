// ── WiFi configuration and credentials ──

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

/// Whether the machine runs its own access point or joins a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApMode {
    Ap,
    Client,
}

/// Access-point configuration, discriminated by `mode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiConfig {
    pub mode: ApMode,
    #[serde(rename = "apName")]
    pub ap_name: String,
    #[serde(rename = "apPassword")]
    pub ap_password: String,
}

/// Live network state as reported by the machine's OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiSystemStatus {
    pub connected: bool,
    pub connection_name: String,
    pub gateway: String,
    pub routes: Vec<String>,
    pub ips: Vec<String>,
    pub dns: Vec<String>,
    pub mac: String,
    pub hostname: String,
    pub domains: Vec<String>,
}

/// Combined config + live status from `wifi/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiStatus {
    pub config: WifiConfig,
    pub status: WifiSystemStatus,
}

/// One network visible to the machine's radio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiNetwork {
    pub ssid: String,
    pub signal: i32,
    pub rate: i32,
    pub in_use: bool,
}

/// Credentials for joining a network, discriminated by security type.
///
/// A sum type rather than overlapping optional fields: a credential whose
/// `security` tag disagrees with its present fields is unrepresentable,
/// and serialization matches exhaustively. Passwords are exposed only
/// while encoding the connect request.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "security", rename_all = "snake_case")]
pub enum WifiCredentials {
    /// An open network; no secret required.
    Open { ssid: String },
    /// WPA personal (pre-shared key).
    Psk {
        ssid: String,
        #[serde(serialize_with = "expose")]
        password: SecretString,
    },
    /// WPA enterprise (802.1X identity + password).
    Enterprise {
        ssid: String,
        identity: String,
        #[serde(serialize_with = "expose")]
        password: SecretString,
    },
}

impl WifiCredentials {
    pub fn open(ssid: impl Into<String>) -> Self {
        Self::Open { ssid: ssid.into() }
    }

    pub fn psk(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Psk {
            ssid: ssid.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub fn enterprise(
        ssid: impl Into<String>,
        identity: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::Enterprise {
            ssid: ssid.into(),
            identity: identity.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// The network these credentials target.
    pub fn ssid(&self) -> &str {
        match self {
            Self::Open { ssid } | Self::Psk { ssid, .. } | Self::Enterprise { ssid, .. } => ssid,
        }
    }
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}
