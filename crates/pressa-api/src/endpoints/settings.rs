// Settings endpoints
//
// Updates are partial and merged server-side; both GET and POST answer
// with the full resulting mapping. Unknown keys are the machine's to
// reject, never validated here.

use crate::client::MachineClient;
use crate::error::Error;
use crate::models::{Settings, SettingsUpdate};

impl MachineClient {
    /// Fetch the full settings mapping.
    ///
    /// `GET /api/{v}/settings`
    pub async fn get_settings(&self) -> Result<Settings, Error> {
        self.get_json("fetching settings", "settings").await
    }

    /// Fetch settings scoped to one named key.
    ///
    /// `GET /api/{v}/settings/{name}`
    pub async fn get_setting(&self, name: &str) -> Result<Settings, Error> {
        self.get_json("fetching setting", &format!("settings/{name}"))
            .await
    }

    /// Merge a partial update into the machine's settings.
    ///
    /// `POST /api/{v}/settings`
    pub async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings, Error> {
        self.post_json("updating settings", "settings", update).await
    }
}
