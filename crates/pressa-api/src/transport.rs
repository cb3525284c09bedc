// Transport configuration for building reqwest::Client instances.
//
// The machine speaks plain JSON over HTTP on the local network, so the
// only knobs are timeouts and the default header set. The SDK performs
// no retry or backoff of its own; the transport timeout is the one
// deadline a call has.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::error::Error;

const USER_AGENT: &str = concat!("pressa-api/", env!("CARGO_PKG_VERSION"));

/// Transport configuration for the HTTP side of the client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request deadline. Default: 30s.
    pub timeout: Duration,
    /// Deadline for establishing the TCP connection. Default: 5s.
    pub connect_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// Every request carries `Accept: application/json`; bodies set their
    /// own content type (JSON everywhere except the multipart firmware
    /// upload).
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))
    }
}
