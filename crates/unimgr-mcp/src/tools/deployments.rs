//! Deployment tools.

use rmcp::model::CallToolResult;
use serde_json::json;
use unimgr_api::SiteManagerClient;

use super::{
    Arguments, ParamSpec, ToolSpec, error_result, json_result, missing_param, required_string,
};

pub const LIST_DEPLOYMENTS: &str = "list_deployments";
pub const GET_DEPLOYMENT_DETAILS: &str = "get_deployment_details";

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: LIST_DEPLOYMENTS,
        description: "List all deployments across all sites",
        params: &[],
    },
    ToolSpec {
        name: GET_DEPLOYMENT_DETAILS,
        description: "Get detailed information about a specific deployment",
        params: &[ParamSpec::required_string("deployment_id", "Deployment ID")],
    },
];

pub async fn list_deployments(client: &SiteManagerClient) -> CallToolResult {
    match client.list_deployments().await {
        Ok(deployments) => {
            let count = deployments.len();
            json_result(&json!({ "deployments": deployments, "count": count }))
        }
        Err(err) => error_result(format!("Failed to list deployments: {err}")),
    }
}

pub async fn get_deployment_details(
    client: &SiteManagerClient,
    args: &Arguments,
) -> CallToolResult {
    let Some(deployment_id) = required_string(args, "deployment_id") else {
        return missing_param("deployment_id");
    };

    match client.get_deployment(deployment_id).await {
        Ok(deployment) => json_result(&deployment),
        Err(err) => error_result(format!("Failed to get deployment details: {err}")),
    }
}
