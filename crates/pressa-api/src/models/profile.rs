// ── Profile types ──
//
// Profiles are brewing recipes owned by an external component; this SDK
// references them by identity (`id`, `name`) and carries everything else
// opaquely so recipe-format changes never break the client.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An externally-defined brewing recipe.
///
/// Only the identity fields are modeled; the remainder of the recipe
/// structure travels in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    /// The externally-owned remainder of the recipe.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Identifies a stored or loaded profile version.
///
/// `change_id` is the version token for one specific edit of the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileIdent {
    pub change_id: String,
    pub profile: Profile,
}

/// What happened to a profile, as announced on the `profile` channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileUpdateKind {
    Create,
    Update,
    Delete,
    Load,
}

/// Realtime notification that a profile changed on the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(rename = "type")]
    pub kind: ProfileUpdateKind,
    pub profile_id: Uuid,
    pub change_id: String,
}

/// A named file reference (default profile images, sound files).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    pub name: String,
    pub url: String,
}
