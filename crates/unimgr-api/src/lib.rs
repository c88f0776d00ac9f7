// unimgr-api: Async Rust client for the UniFi Site Manager API (api.ui.com)

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, SiteManagerClient};
pub use error::Error;
pub use types::{Deployment, Device, Envelope, Host, Site, SiteScoped, filter_by_site};
