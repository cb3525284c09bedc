// Sound endpoints
//
// Acoustic feedback playback and theming.

use crate::client::MachineClient;
use crate::error::Error;

impl MachineClient {
    /// Play one sound by name.
    ///
    /// `GET /api/{v}/sounds/play/{sound}`
    pub async fn play_sound(&self, sound: &str) -> Result<(), Error> {
        self.get_empty("playing sound", &format!("sounds/play/{sound}"))
            .await
    }

    /// Sound names available in the active theme.
    ///
    /// `GET /api/{v}/sounds/list`
    pub async fn list_sounds(&self) -> Result<Vec<String>, Error> {
        self.get_json("listing sounds", "sounds/list").await
    }

    /// Installed sound themes.
    ///
    /// `GET /api/{v}/sounds/theme/list`
    pub async fn list_sound_themes(&self) -> Result<Vec<String>, Error> {
        self.get_json("listing sound themes", "sounds/theme/list")
            .await
    }

    /// The active sound theme.
    ///
    /// `GET /api/{v}/sounds/theme/get`
    pub async fn get_sound_theme(&self) -> Result<String, Error> {
        self.get_json("fetching sound theme", "sounds/theme/get")
            .await
    }

    /// Activate a sound theme.
    ///
    /// `POST /api/{v}/sounds/theme/set/{theme}`
    pub async fn set_sound_theme(&self, theme: &str) -> Result<(), Error> {
        self.post_bare("setting sound theme", &format!("sounds/theme/set/{theme}"))
            .await
    }
}
