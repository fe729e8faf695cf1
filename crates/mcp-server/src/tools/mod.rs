//! HaswellOps MCP tool surface.
//!
//! Schemas live apart from the service so the wire shape of each tool stays reviewable on its own.

mod schemas;
mod service;

pub use service::HaswellOpsService;
