//! Host tools.

use rmcp::model::CallToolResult;
use serde_json::json;
use unimgr_api::{SiteManagerClient, filter_by_site};

use super::{
    Arguments, ParamSpec, ToolSpec, error_result, json_result, missing_param, required_string,
};

pub const LIST_HOSTS: &str = "list_hosts";
pub const GET_HOST_DETAILS: &str = "get_host_details";
pub const GET_HOSTS_BY_SITE: &str = "get_hosts_by_site";

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: LIST_HOSTS,
        description: "List all hosts across all sites",
        params: &[],
    },
    ToolSpec {
        name: GET_HOST_DETAILS,
        description: "Get detailed information about a specific host",
        params: &[ParamSpec::required_string("host_id", "Host ID")],
    },
    ToolSpec {
        name: GET_HOSTS_BY_SITE,
        description: "Get all hosts in a specific site",
        params: &[ParamSpec::required_string("site_id", "Site ID")],
    },
];

pub async fn list_hosts(client: &SiteManagerClient) -> CallToolResult {
    match client.list_hosts().await {
        Ok(hosts) => {
            let count = hosts.len();
            json_result(&json!({ "hosts": hosts, "count": count }))
        }
        Err(err) => error_result(format!("Failed to list hosts: {err}")),
    }
}

pub async fn get_host_details(client: &SiteManagerClient, args: &Arguments) -> CallToolResult {
    let Some(host_id) = required_string(args, "host_id") else {
        return missing_param("host_id");
    };

    match client.get_host(host_id).await {
        Ok(host) => json_result(&host),
        Err(err) => error_result(format!("Failed to get host details: {err}")),
    }
}

/// The listing endpoint has no site filter, so this fetches everything and
/// scans for the site locally.
pub async fn get_hosts_by_site(client: &SiteManagerClient, args: &Arguments) -> CallToolResult {
    let Some(site_id) = required_string(args, "site_id") else {
        return missing_param("site_id");
    };

    match client.list_hosts().await {
        Ok(hosts) => {
            let hosts = filter_by_site(hosts, site_id);
            let count = hosts.len();
            json_result(&json!({ "hosts": hosts, "count": count, "site_id": site_id }))
        }
        Err(err) => error_result(format!("Failed to get hosts for site: {err}")),
    }
}
