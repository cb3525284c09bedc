// ── Shot history ──
//
// A "shot" is one completed brewing run. The full entry carries the
// per-sample telemetry trace; the listing variant is a strict projection
// of the same entry with `data` nulled, so enumeration stays cheap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::Profile;
use super::telemetry::SensorData;

/// One telemetry sample recorded during a shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotSample {
    /// Milliseconds since the shot started.
    pub time: f64,
    /// Stage the machine was in when the sample was taken.
    #[serde(default)]
    pub status: Option<String>,
    pub sensors: SensorData,
}

/// Identity and metadata shared by both history representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryBaseEntry {
    pub id: Uuid,
    pub time: DateTime<Utc>,
    pub name: String,
    /// Snapshot of the profile the shot was brewed with.
    pub profile: Profile,
}

/// A recorded shot, samples included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub base: HistoryBaseEntry,
    pub data: Vec<ShotSample>,
}

/// Listing projection of a [`HistoryEntry`]: identical identity fields,
/// `data` always null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryListingEntry {
    #[serde(flatten)]
    pub base: HistoryBaseEntry,
    #[serde(default)]
    pub data: Option<Vec<ShotSample>>,
}

/// Sort direction for history searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Search parameters for `POST history`. Posted directly as the JSON
/// body; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoryQuery {
    /// Free-text match against shot and profile names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Restrict to specific shot ids.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

/// Aggregate shot statistics from `history/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_shots: i64,
    #[serde(default)]
    pub by_profile: Vec<ProfileShotCount>,
}

/// Shots brewed per profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileShotCount {
    pub name: String,
    pub count: i64,
}

/// A caller's verdict on a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Like,
    Dislike,
    None,
}

/// Stored rating for one shot, from `history/rating/{shot_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRating {
    pub rating: Rating,
}
