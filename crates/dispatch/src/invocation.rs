use std::fmt;
use std::path::PathBuf;

/// Branch built when the caller does not name one.
pub const DEFAULT_BRANCH: &str = "main";
/// Optimization level passed to every build. Not caller-supplied.
pub const OPT_LEVEL: &str = "O3";

pub const DEFAULT_PROGRAM: &str = "gh";
pub const DEFAULT_WORKFLOW: &str = "build-kernel.yml";
pub const DEFAULT_REPO: &str = "schnicklfritz/lite-remote-builder";

/// One kernel build request. Lives for a single tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    branch: String,
}

impl BuildRequest {
    /// The branch is forwarded verbatim; it is handed to the child as a single argv entry, never
    /// through a shell.
    pub fn new(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
        }
    }

    pub fn from_optional(branch: Option<String>) -> Self {
        branch.map(Self::new).unwrap_or_default()
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn opt_level(&self) -> &'static str {
        OPT_LEVEL
    }
}

impl Default for BuildRequest {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCH)
    }
}

/// Where builds are dispatched: the CLI program plus the remote workflow it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowTarget {
    pub program: PathBuf,
    pub workflow: String,
    pub repo: String,
}

impl Default for WorkflowTarget {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            workflow: DEFAULT_WORKFLOW.to_string(),
            repo: DEFAULT_REPO.to_string(),
        }
    }
}

impl WorkflowTarget {
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Build the `workflow run` command line for `request`.
    pub fn invocation(&self, request: &BuildRequest) -> WorkflowInvocation {
        WorkflowInvocation {
            program: self.program.clone(),
            args: vec![
                "workflow".to_string(),
                "run".to_string(),
                self.workflow.clone(),
                "--repo".to_string(),
                self.repo.clone(),
                "-f".to_string(),
                format!("branch={}", request.branch()),
                "-f".to_string(),
                format!("opt_level={}", request.opt_level()),
            ],
        }
    }
}

/// Exact program and argv handed to the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl fmt::Display for WorkflowInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
