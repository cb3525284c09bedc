// WiFi endpoints

use bytes::Bytes;
use serde::Serialize;
use url::Url;

use crate::client::MachineClient;
use crate::error::Error;
use crate::models::{WifiConfig, WifiCredentials, WifiNetwork, WifiStatus};

impl MachineClient {
    /// Current access-point configuration and live network status.
    ///
    /// `GET /api/{v}/wifi/config`
    pub async fn get_wifi_status(&self) -> Result<WifiStatus, Error> {
        self.get_json("fetching WiFi status", "wifi/config").await
    }

    /// Replace the access-point configuration.
    ///
    /// `POST /api/{v}/wifi/config`
    pub async fn set_wifi_config(&self, config: &WifiConfig) -> Result<WifiConfig, Error> {
        self.post_json("setting WiFi config", "wifi/config", config)
            .await
    }

    /// PNG QR code encoding the machine's access point, as raw bytes.
    ///
    /// `GET /api/{v}/wifi/config/qr.png`
    pub async fn get_wifi_qr(&self) -> Result<Bytes, Error> {
        self.get_bytes("fetching WiFi QR code", "wifi/config/qr.png")
            .await
    }

    /// Absolute URL of the QR code image, for embedding without a fetch.
    pub fn wifi_qr_url(&self) -> Url {
        self.api_url("wifi/config/qr.png")
    }

    /// Networks currently visible to the machine's radio.
    ///
    /// `GET /api/{v}/wifi/list`
    pub async fn list_available_wifi(&self) -> Result<Vec<WifiNetwork>, Error> {
        self.get_json("listing WiFi networks", "wifi/list").await
    }

    /// Join a network with the given credentials.
    ///
    /// `POST /api/{v}/wifi/connect`
    pub async fn connect_to_wifi(&self, credentials: &WifiCredentials) -> Result<(), Error> {
        self.post_empty("connecting to WiFi", "wifi/connect", credentials)
            .await
    }

    /// Forget a saved network.
    ///
    /// `POST /api/{v}/wifi/delete`
    pub async fn delete_wifi(&self, ssid: &str) -> Result<(), Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            ssid: &'a str,
        }

        self.post_empty("deleting saved WiFi network", "wifi/delete", &Body { ssid })
            .await
    }
}
