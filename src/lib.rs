//! clickup-mcp - ClickUp list tools served over stdio JSON-RPC
//!
//! The binary wires configuration, the HTTP executor and the tool registry
//! together; this library holds the request router and the stdio loop so
//! both can be driven from tests.

pub mod server;

pub use server::{handle_line, route_rpc, serve, RpcResult, SERVER_NAME};
