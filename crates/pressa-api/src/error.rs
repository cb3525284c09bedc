// Uniform error type for every machine call.
//
// Callers never see a raw `reqwest::Error` or inspect HTTP status codes:
// every public operation normalizes its outcome into `Error`, carrying the
// operation name and the original cause (response body or transport error).

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Error body the machine sends on failed requests:
/// `{ "error": "...", "description": "...", "data": {...} }`.
///
/// Parsed leniently -- the machine is not strict about conforming to this
/// shape, so a body that doesn't parse is kept verbatim in `raw` with all
/// structured fields unset. `raw` always holds the original body text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// The response body exactly as received.
    #[serde(skip)]
    pub raw: String,
}

impl ApiErrorBody {
    /// Parse a response body, falling back to an unstructured carrier when
    /// the body is not the documented error shape.
    pub(crate) fn from_body(raw: String) -> Self {
        match serde_json::from_str::<Self>(&raw) {
            Ok(parsed) => Self { raw, ..parsed },
            Err(_) => Self {
                raw,
                ..Self::default()
            },
        }
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(desc) = &self.description {
            return write!(f, "{desc}");
        }
        if let Some(err) = &self.error {
            return write!(f, "{err}");
        }
        if self.raw.is_empty() {
            return write!(f, "(empty body)");
        }
        // Unstructured bodies get a bounded preview.
        write!(f, "{}", &self.raw[..self.raw.len().min(200)])
    }
}

/// Top-level error type for the `pressa-api` crate.
///
/// Exactly one error type reaches callers; each variant names the failed
/// operation and keeps the underlying cause intact. No failure is retried
/// -- every error is terminal for that call.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never completed: connection refused, DNS failure,
    /// or a transport-level timeout.
    #[error("{operation}: transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The machine answered with a status other than 200.
    #[error("{operation}: machine returned HTTP {status}: {cause}")]
    Api {
        operation: &'static str,
        status: u16,
        cause: ApiErrorBody,
    },

    /// A 200 response whose body did not match the expected shape.
    #[error("{operation}: could not decode response: {message}")]
    Decode {
        operation: &'static str,
        message: String,
        body: String,
    },

    /// The base URL handed to the client could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed from its configuration.
    #[error("client configuration: {0}")]
    Config(String),

    /// The realtime event stream could not be established.
    #[error("event stream: {0}")]
    EventStream(String),
}

impl Error {
    /// The logical operation that failed, if the error is call-scoped.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Transport { operation, .. }
            | Self::Api { operation, .. }
            | Self::Decode { operation, .. } => Some(operation),
            Self::InvalidUrl(_) | Self::Config(_) | Self::EventStream(_) => None,
        }
    }

    /// The HTTP status the machine answered with, for non-200 responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The machine's error body, for non-200 responses.
    pub fn api_cause(&self) -> Option<&ApiErrorBody> {
        match self {
            Self::Api { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// Returns `true` if the machine reported the target missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
