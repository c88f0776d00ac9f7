// unimgr-mcp: MCP server exposing UniFi Site Manager resources as tools.
//
// The protocol state machine (initialize handshake, framing, envelopes)
// belongs to the rmcp SDK; this crate supplies the tool catalog, the
// handlers behind it, and the two delivery modes (stdio, HTTP stub).

pub mod http;
pub mod server;
pub mod tools;

pub use server::SiteManagerServer;
