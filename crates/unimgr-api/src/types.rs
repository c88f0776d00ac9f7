//! Response types for the UniFi Site Manager API.
//!
//! All types match the JSON responses from `api.ui.com/v1` endpoints.
//! Field names are snake_case on the wire; fields the upstream omits decode
//! to empty strings.

use serde::{Deserialize, Serialize};

// ── Envelope ─────────────────────────────────────────────────────────

/// Response envelope wrapping every Site Manager payload as `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

// ── Sites ────────────────────────────────────────────────────────────

/// A UniFi site — from `GET /v1/sites`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub description: String,
}

// ── Hosts ────────────────────────────────────────────────────────────

/// A console host — from `GET /v1/hosts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
    pub id: String,
    pub name: String,
    /// The site this host belongs to.
    pub site_id: String,
    pub status: String,
}

// ── Devices ──────────────────────────────────────────────────────────

/// A network device — from `GET /v1/devices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub status: String,
    /// The site this device belongs to.
    pub site_id: String,
}

// ── Deployments ──────────────────────────────────────────────────────

/// A deployment — from `GET /v1/deployments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    pub id: String,
    pub name: String,
    pub status: String,
}

// ── Site scoping ─────────────────────────────────────────────────────

/// Records carrying a site reference, filterable by [`filter_by_site`].
pub trait SiteScoped {
    fn site_id(&self) -> &str;
}

impl SiteScoped for Host {
    fn site_id(&self) -> &str {
        &self.site_id
    }
}

impl SiteScoped for Device {
    fn site_id(&self) -> &str {
        &self.site_id
    }
}

/// Keep only the records belonging to `site_id`.
///
/// Exact, case-sensitive match; upstream order is preserved. The Site
/// Manager API has no server-side site filter for these listings, so this
/// scan over the full fetched list is the only filtering that happens.
pub fn filter_by_site<T: SiteScoped>(items: Vec<T>, site_id: &str) -> Vec<T> {
    items.into_iter().filter(|i| i.site_id() == site_id).collect()
}
