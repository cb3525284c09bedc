//! # pressa-api
//!
//! Async Rust client for the Pressa espresso machine controller.
//!
//! The machine exposes a versioned JSON REST API plus a realtime event
//! stream; this crate wraps both behind a typed surface:
//!
//! - [`MachineClient`] -- one method per endpoint, each a single
//!   round trip returning either the typed payload or the uniform
//!   [`Error`]. No caching, no retries, no hidden state.
//! - [`EventStream`] -- typed callbacks attached to named realtime
//!   channels ([`events::channel`]), with explicit, idempotent
//!   connect/disconnect.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use pressa_api::{ActionType, MachineClient};
//!
//! let client = MachineClient::new("http://machine.local:8080")?;
//! let settings = client.get_settings().await?;
//! println!("sounds enabled: {}", settings.enable_sounds);
//!
//! client.execute_action(ActionType::Start).await?;
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod events;
pub mod models;
pub mod transport;

pub use client::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, MachineClient};
pub use error::{ApiErrorBody, Error};
pub use events::{EventCallbacks, EventStream};
pub use models::*;
pub use transport::TransportConfig;
