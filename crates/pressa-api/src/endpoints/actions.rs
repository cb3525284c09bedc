// Machine action endpoint

use crate::client::MachineClient;
use crate::error::Error;
use crate::models::{ActionResponse, ActionType};

impl MachineClient {
    /// Execute a machine action (start, stop, tare, …).
    ///
    /// `GET /api/{v}/action/{action}`
    ///
    /// When the action is not currently allowed, the machine answers
    /// with the set of actions that would have been accepted.
    pub async fn execute_action(&self, action: ActionType) -> Result<ActionResponse, Error> {
        self.get_json("executing machine action", &format!("action/{action}"))
            .await
    }
}
