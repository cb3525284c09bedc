// Profile endpoints
//
// Profiles are stored on the machine and addressed by UUID; a loaded or
// saved profile version is identified by its change id.

use bytes::Bytes;
use uuid::Uuid;

use crate::client::MachineClient;
use crate::error::Error;
use crate::models::{FileListing, Profile, ProfileIdent};

impl MachineClient {
    /// List stored profiles by identity.
    ///
    /// `GET /api/{v}/profile/list`
    pub async fn list_profiles(&self) -> Result<Vec<ProfileIdent>, Error> {
        self.get_json("listing profiles", "profile/list").await
    }

    /// Fetch all stored profiles with their full recipe bodies.
    ///
    /// `GET /api/{v}/profile/list?full=true`
    pub async fn fetch_all_profiles(&self) -> Result<Vec<Profile>, Error> {
        self.get_json_with_params(
            "fetching full profiles",
            "profile/list",
            &[("full", "true".to_owned())],
        )
        .await
    }

    /// Persist a profile on the machine.
    ///
    /// `POST /api/{v}/profile/save`
    pub async fn save_profile(&self, profile: &Profile) -> Result<ProfileIdent, Error> {
        self.post_json("saving profile", "profile/save", profile)
            .await
    }

    /// Load a profile from its JSON body without saving it first.
    ///
    /// `POST /api/{v}/profile/load`
    pub async fn load_profile(&self, profile: &Profile) -> Result<ProfileIdent, Error> {
        self.post_json("loading profile", "profile/load", profile)
            .await
    }

    /// Load a stored profile by id.
    ///
    /// `GET /api/{v}/profile/load/{id}`
    pub async fn load_profile_by_id(&self, id: Uuid) -> Result<ProfileIdent, Error> {
        self.get_json("loading profile", &format!("profile/load/{id}"))
            .await
    }

    /// Fetch one stored profile body.
    ///
    /// `GET /api/{v}/profile/get/{id}`
    pub async fn get_profile(&self, id: Uuid) -> Result<Profile, Error> {
        self.get_json("fetching profile", &format!("profile/get/{id}"))
            .await
    }

    /// Delete a stored profile, answering with the deleted version.
    ///
    /// `DELETE /api/{v}/profile/delete/{id}`
    pub async fn delete_profile(&self, id: Uuid) -> Result<ProfileIdent, Error> {
        self.delete_json("deleting profile", &format!("profile/delete/{id}"))
            .await
    }

    /// The most recently brewed profiles.
    ///
    /// `GET /api/{v}/profile/last`
    pub async fn get_last_profiles(&self) -> Result<Vec<ProfileIdent>, Error> {
        self.get_json("fetching last profiles", "profile/last").await
    }

    /// Factory default profiles shipped with the firmware.
    ///
    /// `GET /api/{v}/profile/defaults`
    pub async fn get_default_profiles(&self) -> Result<Vec<Profile>, Error> {
        self.get_json("fetching default profiles", "profile/defaults")
            .await
    }

    /// List the stock profile images.
    ///
    /// `GET /api/{v}/profile/image`
    pub async fn list_default_profile_images(&self) -> Result<Vec<FileListing>, Error> {
        self.get_json("listing profile images", "profile/image")
            .await
    }

    /// Fetch one profile image as raw bytes.
    ///
    /// `GET /api/{v}/profile/image/{name}`
    pub async fn get_profile_image(&self, name: &str) -> Result<Bytes, Error> {
        self.get_bytes("fetching profile image", &format!("profile/image/{name}"))
            .await
    }

    /// Displayable URL for a profile image reference.
    ///
    /// Inline `data:` images and already-prefixed paths pass through
    /// unchanged; bare names are rooted under the image endpoint.
    pub fn profile_image_url(&self, image: &str) -> String {
        if image.starts_with("data:") {
            return image.to_owned();
        }
        let prefix = format!("/api/{}/profile/image/", self.api_version());
        if image.starts_with(&prefix) {
            return image.to_owned();
        }
        format!("{prefix}{image}")
    }
}
