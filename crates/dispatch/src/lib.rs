//! # Haswell Dispatch
//!
//! Fire-and-forget dispatch of the remote kernel build workflow.
//!
//! ## Flow
//!
//! ```text
//! BuildRequest (branch)
//!     │
//!     ├──> WorkflowTarget::invocation
//!     │      └─> gh workflow run build-kernel.yml --repo … -f branch=… -f opt_level=O3
//!     │
//!     ├──> CommandRunner::run
//!     │      └─> ProcessOutcome (exited / launch failed)
//!     │
//!     └──> DispatchReport
//!            └─> text returned to the MCP caller
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use haswell_dispatch::{dispatch, BuildRequest, TokioCommandRunner, WorkflowTarget};
//!
//! #[tokio::main]
//! async fn main() {
//!     let target = WorkflowTarget::default();
//!     let report = dispatch(&TokioCommandRunner, &target, &BuildRequest::new("main")).await;
//!     println!("{}", report.message());
//! }
//! ```

mod error;
mod invocation;
mod report;
mod runner;

pub use error::{DispatchError, ExitStatusDetail, Result};
pub use invocation::{
    BuildRequest, WorkflowInvocation, WorkflowTarget, DEFAULT_BRANCH, DEFAULT_PROGRAM,
    DEFAULT_REPO, DEFAULT_WORKFLOW, OPT_LEVEL,
};
pub use report::{dispatch, DispatchReport, AUTH_HINT, FAILURE_MARKER, SUCCESS_MESSAGE};
pub use runner::{CommandRunner, ProcessOutcome, TokioCommandRunner};
