// ── Realtime telemetry snapshots ──
//
// Point-in-time value structs pushed over the event stream. They carry no
// identity and are superseded on every tick; nothing here is cached.

use serde::{Deserialize, Serialize};

/// Brew-chamber sensor readings: pressure (bar), flow (ml/s),
/// weight (g), temperature (°C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorData {
    pub p: f64,
    pub f: f64,
    pub w: f64,
    pub t: f64,
}

/// Overall machine state on each tick of the `status` channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusData {
    /// Current state name (`idle`, `heating`, `brewing`, …).
    pub name: String,
    pub sensors: SensorData,
    /// Milliseconds since the current operation started.
    pub time: f64,
    /// Name of the loaded profile.
    pub profile: String,
}

/// Thermal probe readings on the `sensors` channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperatures {
    pub t_ext_1: f64,
    pub t_ext_2: f64,
    pub t_bar_up: f64,
    pub t_bar_mu: f64,
    pub t_bar_md: f64,
    pub t_bar_down: f64,
    pub t_tube: f64,
    pub t_valv: f64,
}

/// Controller-bus counters on the `communication` channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Communication {
    pub p: f64,
    pub a_0: f64,
    pub a_1: f64,
    pub a_2: f64,
    pub a_3: f64,
}

/// Motor and band-heater state on the `actuators` channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actuators {
    pub m_pos: f64,
    pub m_spd: f64,
    pub m_pwr: f64,
    pub m_cur: f64,
    pub bh_pwr: f64,
}
