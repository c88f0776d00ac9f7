//! Site tools.

use rmcp::model::CallToolResult;
use serde_json::json;
use unimgr_api::SiteManagerClient;

use super::{
    Arguments, ParamSpec, ToolSpec, error_result, json_result, missing_param, required_string,
};

pub const LIST_SITES: &str = "list_sites";
pub const GET_SITE_DETAILS: &str = "get_site_details";
pub const GET_SITE_OVERVIEW: &str = "get_site_overview";

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: LIST_SITES,
        description: "List all UniFi sites in the account",
        params: &[],
    },
    ToolSpec {
        name: GET_SITE_DETAILS,
        description: "Get detailed information about a specific site",
        params: &[ParamSpec::required_string("site_id", "Site ID")],
    },
    ToolSpec {
        name: GET_SITE_OVERVIEW,
        description: "Get overview information for a specific site",
        params: &[ParamSpec::required_string("site_id", "Site ID")],
    },
];

pub async fn list_sites(client: &SiteManagerClient) -> CallToolResult {
    match client.list_sites().await {
        Ok(sites) => {
            let count = sites.len();
            json_result(&json!({ "sites": sites, "count": count }))
        }
        Err(err) => error_result(format!("Failed to list sites: {err}")),
    }
}

pub async fn get_site_details(client: &SiteManagerClient, args: &Arguments) -> CallToolResult {
    let Some(site_id) = required_string(args, "site_id") else {
        return missing_param("site_id");
    };

    match client.get_site(site_id).await {
        Ok(site) => json_result(&site),
        Err(err) => error_result(format!("Failed to get site details: {err}")),
    }
}

/// Same fetch as [`get_site_details`], reduced to the identifying subset.
pub async fn get_site_overview(client: &SiteManagerClient, args: &Arguments) -> CallToolResult {
    let Some(site_id) = required_string(args, "site_id") else {
        return missing_param("site_id");
    };

    match client.get_site(site_id).await {
        Ok(site) => json_result(&json!({
            "site_id": site.id,
            "name": site.name,
            "description": site.description,
        })),
        Err(err) => error_result(format!("Failed to get site overview: {err}")),
    }
}
