// Hand-crafted async HTTP client for the UniFi Site Manager API.
//
// Base URL: https://api.ui.com/v1
// Auth: X-API-KEY header

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types::{Deployment, Device, Envelope, Host, Site};

/// Default base URL for the cloud-hosted Site Manager API.
pub const DEFAULT_BASE_URL: &str = "https://api.ui.com/v1";

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the UniFi Site Manager API.
///
/// Uses API-key authentication and read-only JSON REST endpoints. The
/// client is stateless apart from the key and base URL, so a single
/// instance is safe to share across concurrent calls.
///
/// No request timeout is configured: calls run until the upstream answers
/// or the owning future is dropped (process shutdown cancels in-flight
/// requests that way).
pub struct SiteManagerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SiteManagerClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and API key.
    ///
    /// Injects `X-API-KEY` as a sensitive default header on every request,
    /// alongside `Accept` and `Content-Type: application/json`.
    pub fn new(base_url: &str, api_key: &secrecy::SecretString) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key_value =
            HeaderValue::from_str(api_key.expose_secret()).map_err(|e| Error::Authentication {
                message: format!("invalid API key header value: {e}"),
            })?;
        key_value.set_sensitive(true);
        headers.insert("X-API-KEY", key_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("unimgr/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Parse the base URL and guarantee a trailing slash so that joining
    /// relative paths keeps the version prefix.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── HTTP plumbing ────────────────────────────────────────────────

    /// Join a relative path (e.g. `"sites"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    /// Decode a `{"data": T}` envelope, or surface the error status with
    /// its raw body.
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.as_u16() >= 400 {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body,
            })?;
        Ok(envelope.data)
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Sites ────────────────────────────────────────────────────────

    pub async fn list_sites(&self) -> Result<Vec<Site>, Error> {
        self.get("sites").await
    }

    pub async fn get_site(&self, site_id: &str) -> Result<Site, Error> {
        self.get(&format!("sites/{site_id}")).await
    }

    // ── Hosts ────────────────────────────────────────────────────────

    pub async fn list_hosts(&self) -> Result<Vec<Host>, Error> {
        self.get("hosts").await
    }

    pub async fn get_host(&self, host_id: &str) -> Result<Host, Error> {
        self.get(&format!("hosts/{host_id}")).await
    }

    // ── Devices ──────────────────────────────────────────────────────

    pub async fn list_devices(&self) -> Result<Vec<Device>, Error> {
        self.get("devices").await
    }

    pub async fn get_device(&self, device_id: &str) -> Result<Device, Error> {
        self.get(&format!("devices/{device_id}")).await
    }

    // ── Deployments ──────────────────────────────────────────────────

    pub async fn list_deployments(&self) -> Result<Vec<Deployment>, Error> {
        self.get("deployments").await
    }

    pub async fn get_deployment(&self, deployment_id: &str) -> Result<Deployment, Error> {
        self.get(&format!("deployments/{deployment_id}")).await
    }
}
