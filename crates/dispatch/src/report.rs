use std::fmt;

use crate::error::DispatchError;
use crate::invocation::{BuildRequest, WorkflowTarget};
use crate::runner::CommandRunner;

pub const SUCCESS_MESSAGE: &str =
    "🚀 Build Dispatched! The cloud is now compiling your Haswell kernel.";
pub const FAILURE_MARKER: &str = "❌ Failed to dispatch build.";
pub const AUTH_HINT: &str = "Ensure 'gh auth login' is active.";

/// Outcome of one dispatch attempt.
///
/// `Succeeded` only means the dispatch command returned 0 locally; the remote build may still
/// fail or never start.
#[derive(Debug)]
pub enum DispatchReport {
    Succeeded,
    Failed(DispatchError),
}

impl DispatchReport {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Text handed back to the tool caller.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DispatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => f.write_str(SUCCESS_MESSAGE),
            Self::Failed(err) => write!(f, "{FAILURE_MARKER} {AUTH_HINT} Error: {err}"),
        }
    }
}

/// Run the build workflow for `request` once and report how the dispatch command ended.
///
/// Never fails: every process outcome, including a missing executable, becomes a report.
pub async fn dispatch<R>(
    runner: &R,
    target: &WorkflowTarget,
    request: &BuildRequest,
) -> DispatchReport
where
    R: CommandRunner + ?Sized,
{
    let invocation = target.invocation(request);
    log::info!("Dispatching kernel build: {invocation}");

    match runner.run(&invocation).await.into_result(&invocation) {
        Ok(stdout) => {
            log::info!("Kernel build dispatched for branch '{}'", request.branch());
            if !stdout.trim().is_empty() {
                log::debug!("{} stdout: {}", target.program.display(), stdout.trim_end());
            }
            DispatchReport::Succeeded
        }
        Err(err) => {
            log::warn!("Kernel build dispatch failed: {err}");
            DispatchReport::Failed(err)
        }
    }
}
