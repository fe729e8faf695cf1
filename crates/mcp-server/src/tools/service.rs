use super::schemas::BuildKernelRequest;
use haswell_dispatch::{
    dispatch, BuildRequest, CommandRunner, TokioCommandRunner, WorkflowTarget,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use std::sync::Arc;

pub const SERVER_NAME: &str = "HaswellOps";

/// HaswellOps MCP Service
///
/// Cheap to clone: the workflow target and runner are shared, and every tool call owns its own
/// child process.
#[derive(Clone)]
pub struct HaswellOpsService {
    target: Arc<WorkflowTarget>,
    runner: Arc<dyn CommandRunner>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl HaswellOpsService {
    pub fn new(target: WorkflowTarget) -> Self {
        Self::with_runner(target, Arc::new(TokioCommandRunner))
    }

    pub fn with_runner(target: WorkflowTarget, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            target: Arc::new(target),
            runner,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl HaswellOpsService {
    /// Dispatch the remote kernel build workflow.
    ///
    /// Dispatch failures are returned as text, never as a protocol error.
    #[tool(
        description = "Dispatches a CachyOS BORE kernel build optimized for Haswell. Removes Spectre/Meltdown mitigations but KEEPS USB/FS drivers."
    )]
    pub async fn build_haswell_kernel(
        &self,
        Parameters(request): Parameters<BuildKernelRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request: BuildRequest = request.into();
        let report = dispatch(&*self.runner, &self.target, &request).await;
        Ok(CallToolResult::success(vec![Content::text(report.message())]))
    }
}

#[tool_handler]
impl ServerHandler for HaswellOpsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("HaswellOps dispatches remote kernel builds. Call 'build_haswell_kernel' with an optional 'branch' (default: main). The result only confirms that the workflow was dispatched, not that the build finished.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
