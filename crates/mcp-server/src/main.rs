//! HaswellOps MCP Server
//!
//! Lets AI agents dispatch the remote Haswell kernel build over MCP.
//!
//! ## Tools
//!
//! - `build_haswell_kernel` - Run the `build-kernel.yml` workflow for a branch (default: `main`)
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "haswell-ops": {
//!       "command": "haswell-ops-mcp"
//!     }
//!   }
//! }
//! ```
//!
//! The GitHub CLI must already be authenticated (`gh auth login`).

use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod runtime_env;
#[cfg(test)]
mod test_support;
mod tools;

use tools::HaswellOpsService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = runtime_env::load();
    log::info!("Starting HaswellOps MCP server");
    log::debug!(
        "Dispatch target: {} (repo {}, workflow {}; env overrides: {:?})",
        config.target.program.display(),
        config.target.repo,
        config.target.workflow,
        config.applied_env
    );

    let service = HaswellOpsService::new(config.target);
    let server = service
        .serve(stdio())
        .await
        .context("failed to start MCP stdio server")?;

    server.waiting().await.context("MCP server task failed")?;

    log::info!("HaswellOps MCP server stopped");
    Ok(())
}
