// ── Machine data model ──
//
// Typed entities exchanged with the machine. Every type here is a value
// received from or sent to the device; the client holds no authoritative
// copy and performs no caching or merging. Wire names are preserved via
// serde renames, and types the firmware extends across revisions carry a
// flatten catch-all so nothing is silently dropped.

pub mod action;
pub mod history;
pub mod machine;
pub mod notification;
pub mod profile;
pub mod settings;
pub mod telemetry;
pub mod wifi;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use pressa_api::models::*` gives you everything.

// Actions
pub use action::{ActionResponse, ActionType};

// Profiles
pub use profile::{FileListing, Profile, ProfileIdent, ProfileUpdate, ProfileUpdateKind};

// Settings
pub use settings::{Settings, SettingsUpdate};

// Notifications
pub use notification::{AcknowledgeRequest, Notification};

// WiFi
pub use wifi::{
    ApMode, WifiConfig, WifiCredentials, WifiNetwork, WifiStatus, WifiSystemStatus,
};

// Telemetry (event-stream payloads)
pub use telemetry::{Actuators, Communication, SensorData, StatusData, Temperatures};

// History
pub use history::{
    HistoryBaseEntry, HistoryEntry, HistoryListingEntry, HistoryQuery, HistoryStats,
    ProfileShotCount, Rating, ShotRating, ShotSample, SortOrder,
};

// Machine / firmware
pub use machine::{FirmwareImage, MachineInfo, OsUpdateStatus, RootPassword, TimezoneRegionType};
