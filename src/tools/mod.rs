//! MCP tool handlers. Each submodule pairs a request type (deserialized and
//! schema-generated by rmcp) with a `handle_*` function that does the work,
//! so the server impl stays a thin routing layer.

pub mod graph;
pub mod log;
pub mod recent;
pub mod search;
pub mod set_root;
