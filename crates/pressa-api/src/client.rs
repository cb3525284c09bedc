// Machine HTTP client
//
// Wraps `reqwest::Client` with versioned URL construction and uniform
// response handling. All endpoint groups (profiles, wifi, history, etc.)
// are implemented as inherent methods via separate files under
// `endpoints/`, keeping this module focused on transport mechanics.

use bytes::Bytes;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{ApiErrorBody, Error};
use crate::transport::TransportConfig;

/// Base URL used when none is configured: the machine's own display
/// talks to the controller over loopback.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// API version segment used unless overridden per client.
///
/// The whole endpoint catalogue is rooted at `/api/{version}/…`, so
/// repointing a client at a new API revision is a single-value change.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Async client for the machine's REST API.
///
/// Stateless and request-scoped: every call is an independent round trip
/// with no caching, no retries, and no ordering guarantees between
/// concurrent calls. Callers receive either the typed success payload or
/// the single [`Error`] type -- raw transport failures never escape.
pub struct MachineClient {
    http: reqwest::Client,
    base_url: Url,
    api_version: String,
}

impl MachineClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Create a client for the given base URL with default transport
    /// settings.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_transport(base_url, &TransportConfig::default())
    }

    /// Create a client talking to the machine over loopback
    /// ([`DEFAULT_BASE_URL`]).
    pub fn local() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default base URL is valid")
    }

    /// Create a client from an explicit [`TransportConfig`].
    pub fn with_transport(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            http,
            base_url,
            api_version: DEFAULT_API_VERSION.to_owned(),
        })
    }

    /// Repoint the entire endpoint catalogue at a different API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The machine base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The version segment in use.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build `{base}/api/{version}/{path}`.
    ///
    /// A pure function of the client configuration and `path`; endpoint
    /// methods never assemble URLs any other way.
    pub(crate) fn api_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/api/{}/{path}", self.api_version);
        Url::parse(&full).expect("invalid API URL")
    }

    // ── Request helpers ──────────────────────────────────────────────
    //
    // Each helper takes the logical operation name so the uniform error
    // can say what failed. One attempt per call; no retry, no backoff.

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        op: &'static str,
        path: &str,
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(|e| wrap(op, e))?;
        handle_json(op, resp).await
    }

    pub(crate) async fn get_json_with_params<T: DeserializeOwned>(
        &self,
        op: &'static str,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("GET {url} params={params:?}");

        let resp = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| wrap(op, e))?;
        handle_json(op, resp).await
    }

    pub(crate) async fn get_empty(&self, op: &'static str, path: &str) -> Result<(), Error> {
        let url = self.api_url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(|e| wrap(op, e))?;
        handle_empty(op, resp).await
    }

    pub(crate) async fn get_bytes(&self, op: &'static str, path: &str) -> Result<Bytes, Error> {
        let url = self.api_url(path);
        debug!("GET {url} (binary)");

        let resp = self.http.get(url).send().await.map_err(|e| wrap(op, e))?;
        let resp = expect_ok(op, resp).await?;
        resp.bytes().await.map_err(|e| wrap(op, e))
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        op: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| wrap(op, e))?;
        handle_json(op, resp).await
    }

    pub(crate) async fn post_empty<B: Serialize + Sync>(
        &self,
        op: &'static str,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.api_url(path);
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| wrap(op, e))?;
        handle_empty(op, resp).await
    }

    /// POST with no request body (path-parameterized commands).
    pub(crate) async fn post_bare(&self, op: &'static str, path: &str) -> Result<(), Error> {
        let url = self.api_url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).send().await.map_err(|e| wrap(op, e))?;
        handle_empty(op, resp).await
    }

    /// POST a multipart form. The firmware upload is the one endpoint
    /// distinguished from the rest by content type.
    pub(crate) async fn post_multipart(
        &self,
        op: &'static str,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<(), Error> {
        let url = self.api_url(path);
        debug!("POST {url} (multipart)");

        let resp = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| wrap(op, e))?;
        handle_empty(op, resp).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        op: &'static str,
        path: &str,
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await.map_err(|e| wrap(op, e))?;
        handle_json(op, resp).await
    }
}

// ── Response handling ────────────────────────────────────────────────

fn wrap(op: &'static str, source: reqwest::Error) -> Error {
    Error::Transport {
        operation: op,
        source,
    }
}

/// Pass the response through only if the status is exactly 200; anything
/// else becomes `Error::Api` carrying the body as the cause.
async fn expect_ok(op: &'static str, resp: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = resp.status();
    if status == StatusCode::OK {
        return Ok(resp);
    }

    let raw = resp.text().await.unwrap_or_default();
    Err(Error::Api {
        operation: op,
        status: status.as_u16(),
        cause: ApiErrorBody::from_body(raw),
    })
}

async fn handle_json<T: DeserializeOwned>(
    op: &'static str,
    resp: reqwest::Response,
) -> Result<T, Error> {
    let resp = expect_ok(op, resp).await?;
    let body = resp.text().await.map_err(|e| wrap(op, e))?;

    serde_json::from_str(&body).map_err(|e| {
        let preview = &body[..body.len().min(200)];
        Error::Decode {
            operation: op,
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

async fn handle_empty(op: &'static str, resp: reqwest::Response) -> Result<(), Error> {
    expect_ok(op, resp).await.map(|_| ())
}
