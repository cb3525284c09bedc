// Notification endpoints

use crate::client::MachineClient;
use crate::error::Error;
use crate::models::{AcknowledgeRequest, Notification};

impl MachineClient {
    /// List notifications, filtered by acknowledgement state.
    ///
    /// `GET /api/{v}/notifications?acknowledged={bool}`
    pub async fn get_notifications(&self, acknowledged: bool) -> Result<Vec<Notification>, Error> {
        self.get_json_with_params(
            "listing notifications",
            "notifications",
            &[("acknowledged", acknowledged.to_string())],
        )
        .await
    }

    /// Acknowledge one notification with the chosen response option.
    ///
    /// `POST /api/{v}/notifications/acknowledge`
    pub async fn acknowledge_notification(&self, ack: &AcknowledgeRequest) -> Result<(), Error> {
        self.post_empty("acknowledging notification", "notifications/acknowledge", ack)
            .await
    }
}
