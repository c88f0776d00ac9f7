//! Device tools.

use rmcp::model::CallToolResult;
use serde_json::json;
use unimgr_api::{SiteManagerClient, filter_by_site};

use super::{
    Arguments, ParamSpec, ToolSpec, error_result, json_result, missing_param, required_string,
};

pub const LIST_DEVICES: &str = "list_devices";
pub const GET_DEVICE_DETAILS: &str = "get_device_details";
pub const GET_DEVICES_BY_SITE: &str = "get_devices_by_site";

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: LIST_DEVICES,
        description: "List all network devices across all sites",
        params: &[],
    },
    ToolSpec {
        name: GET_DEVICE_DETAILS,
        description: "Get detailed information about a specific device",
        params: &[ParamSpec::required_string("device_id", "Device ID")],
    },
    ToolSpec {
        name: GET_DEVICES_BY_SITE,
        description: "Get all devices in a specific site",
        params: &[ParamSpec::required_string("site_id", "Site ID")],
    },
];

pub async fn list_devices(client: &SiteManagerClient) -> CallToolResult {
    match client.list_devices().await {
        Ok(devices) => {
            let count = devices.len();
            json_result(&json!({ "devices": devices, "count": count }))
        }
        Err(err) => error_result(format!("Failed to list devices: {err}")),
    }
}

pub async fn get_device_details(client: &SiteManagerClient, args: &Arguments) -> CallToolResult {
    let Some(device_id) = required_string(args, "device_id") else {
        return missing_param("device_id");
    };

    match client.get_device(device_id).await {
        Ok(device) => json_result(&device),
        Err(err) => error_result(format!("Failed to get device details: {err}")),
    }
}

/// Fetches the full device list and scans for the site locally, like
/// [`super::hosts::get_hosts_by_site`].
pub async fn get_devices_by_site(client: &SiteManagerClient, args: &Arguments) -> CallToolResult {
    let Some(site_id) = required_string(args, "site_id") else {
        return missing_param("site_id");
    };

    match client.list_devices().await {
        Ok(devices) => {
            let devices = filter_by_site(devices, site_id);
            let count = devices.len();
            json_result(&json!({ "devices": devices, "count": count, "site_id": site_id }))
        }
        Err(err) => error_result(format!("Failed to get devices for site: {err}")),
    }
}
