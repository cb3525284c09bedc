// Machine-level endpoints
//
// Device information, firmware/OS updates, clock, display, and the
// timezone catalogue.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::MachineClient;
use crate::error::Error;
use crate::models::{FirmwareImage, MachineInfo, OsUpdateStatus, RootPassword, TimezoneRegionType};

impl MachineClient {
    /// Device information (software build, controller board).
    ///
    /// `GET /api/{v}/machine`
    pub async fn get_device_info(&self) -> Result<MachineInfo, Error> {
        self.get_json("fetching device info", "machine").await
    }

    /// Upload a firmware image.
    ///
    /// `POST /api/{v}/update/firmware` -- the one multipart endpoint;
    /// everything else posts JSON.
    pub async fn update_firmware(&self, image: FirmwareImage) -> Result<(), Error> {
        let part = reqwest::multipart::Part::bytes(image.bytes).file_name(image.file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        self.post_multipart("updating machine firmware", "update/firmware", form)
            .await
    }

    /// Set the display backlight brightness (0-100).
    ///
    /// `POST /api/{v}/machine/backlight`
    pub async fn set_brightness(&self, brightness: u8) -> Result<(), Error> {
        #[derive(Serialize)]
        struct Body {
            brightness: u8,
        }

        self.post_empty("setting backlight brightness", "machine/backlight", &Body { brightness })
            .await
    }

    /// Progress of a running operating-system update.
    ///
    /// `GET /api/{v}/machine/OS_update_status`
    pub async fn get_os_update_status(&self) -> Result<OsUpdateStatus, Error> {
        self.get_json("fetching OS update status", "machine/OS_update_status")
            .await
    }

    /// Set the machine clock.
    ///
    /// `POST /api/{v}/machine/time`
    pub async fn set_time(&self, date_time: DateTime<Utc>) -> Result<(), Error> {
        #[derive(Serialize)]
        struct Body {
            date: String,
        }

        self.post_empty(
            "setting machine time",
            "machine/time",
            &Body {
                date: date_time.to_rfc3339(),
            },
        )
        .await
    }

    /// The machine's root password, for service access.
    ///
    /// `GET /api/{v}/machine/root-password`
    pub async fn get_root_password(&self) -> Result<RootPassword, Error> {
        self.get_json("fetching root password", "machine/root-password")
            .await
    }

    /// Timezone catalogue for the given region grouping.
    ///
    /// `GET /api/{v}/timezones/{type}` with an optional `filter` query.
    ///
    /// Returns loosely-typed JSON because the region map shape differs
    /// between groupings.
    pub async fn get_timezone_region(
        &self,
        region: TimezoneRegionType,
        filter: Option<&str>,
    ) -> Result<serde_json::Value, Error> {
        let path = format!("timezones/{region}");
        match filter {
            Some(f) => {
                self.get_json_with_params(
                    "fetching timezone region",
                    &path,
                    &[("filter", f.to_owned())],
                )
                .await
            }
            None => self.get_json("fetching timezone region", &path).await,
        }
    }
}
