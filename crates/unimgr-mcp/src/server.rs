//! MCP server handler: tool listing and dispatch.

use std::sync::Arc;

use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServiceExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use unimgr_api::SiteManagerClient;

use crate::tools::{self, Arguments, ToolSpec, deployments, devices, hosts, sites};

/// The MCP-facing server: holds the Site Manager client and routes tool
/// calls to the per-resource handlers.
///
/// All state is immutable, so one instance serves concurrent calls safely.
#[derive(Clone)]
pub struct SiteManagerServer {
    client: Arc<SiteManagerClient>,
}

impl SiteManagerServer {
    pub fn new(client: SiteManagerClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Route a tool call to its handler.
    ///
    /// Handler failures come back as tool-level error results; the only
    /// protocol error produced here is for a tool name we never declared.
    pub async fn dispatch(&self, name: &str, args: &Arguments) -> Result<CallToolResult, McpError> {
        debug!(tool = name, "tool called");

        let client = self.client.as_ref();
        let result = match name {
            sites::LIST_SITES => sites::list_sites(client).await,
            sites::GET_SITE_DETAILS => sites::get_site_details(client, args).await,
            sites::GET_SITE_OVERVIEW => sites::get_site_overview(client, args).await,

            hosts::LIST_HOSTS => hosts::list_hosts(client).await,
            hosts::GET_HOST_DETAILS => hosts::get_host_details(client, args).await,
            hosts::GET_HOSTS_BY_SITE => hosts::get_hosts_by_site(client, args).await,

            devices::LIST_DEVICES => devices::list_devices(client).await,
            devices::GET_DEVICE_DETAILS => devices::get_device_details(client, args).await,
            devices::GET_DEVICES_BY_SITE => devices::get_devices_by_site(client, args).await,

            deployments::LIST_DEPLOYMENTS => deployments::list_deployments(client).await,
            deployments::GET_DEPLOYMENT_DETAILS => {
                deployments::get_deployment_details(client, args).await
            }

            other => {
                return Err(McpError::invalid_params(
                    format!("unknown tool: {other}"),
                    None,
                ));
            }
        };

        Ok(result)
    }
}

impl ServerHandler for SiteManagerServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_owned(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_owned(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Read-only access to UniFi Site Manager resources: \
                 sites, hosts, devices, and deployments."
                    .into(),
            ),
            ..ServerInfo::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: tools::catalog().map(ToolSpec::to_tool).collect(),
            ..ListToolsResult::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request.arguments.unwrap_or_default();
        self.dispatch(request.name.as_ref(), &args).await
    }
}

/// Serve the full MCP protocol over stdin/stdout until the client
/// disconnects or the process-wide shutdown token fires.
pub async fn serve_stdio(
    server: SiteManagerServer,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let service = server.serve(rmcp::transport::stdio()).await?;

    tokio::select! {
        () = shutdown.cancelled() => {
            info!("shutdown requested, stopping stdio transport");
        }
        reason = service.waiting() => {
            let reason = reason?;
            debug!(?reason, "stdio transport closed");
        }
    }

    Ok(())
}
