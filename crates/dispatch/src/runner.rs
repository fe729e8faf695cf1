use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use crate::error::{DispatchError, ExitStatusDetail, Result};
use crate::invocation::WorkflowInvocation;

/// Result of running one invocation. Launch failures are data, not errors.
#[derive(Debug)]
pub enum ProcessOutcome {
    Exited {
        /// `None` when the process was terminated by a signal.
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    LaunchFailed(std::io::Error),
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        matches!(self, Self::Exited { code: Some(0), .. })
    }

    /// Collapse into the dispatch error taxonomy. `Ok` carries captured stdout.
    pub fn into_result(self, invocation: &WorkflowInvocation) -> Result<String> {
        match self {
            Self::Exited {
                code: Some(0),
                stdout,
                ..
            } => Ok(stdout),
            Self::Exited {
                code,
                stdout,
                stderr,
            } => Err(DispatchError::Exit {
                command: invocation.to_string(),
                status: ExitStatusDetail::from_code(code),
                detail: failure_detail(&stdout, &stderr),
            }),
            Self::LaunchFailed(source) => Err(DispatchError::Launch {
                command: invocation.to_string(),
                source,
            }),
        }
    }
}

fn failure_detail(stdout: &str, stderr: &str) -> String {
    [stderr, stdout]
        .into_iter()
        .map(str::trim_end)
        .find(|text| !text.trim().is_empty())
        .unwrap_or("(no output)")
        .to_string()
}

/// Executes workflow invocations.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: &WorkflowInvocation) -> ProcessOutcome;
}

/// Runs invocations as child processes and waits for them to exit.
///
/// stdin is null and both output streams are captured: the server's own stdio carries the MCP
/// transport and must never be shared with the child.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, invocation: &WorkflowInvocation) -> ProcessOutcome {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) => ProcessOutcome::Exited {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(err) => ProcessOutcome::LaunchFailed(err),
        }
    }
}
