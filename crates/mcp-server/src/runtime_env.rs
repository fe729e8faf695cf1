use haswell_dispatch::WorkflowTarget;
use std::env;
use std::path::PathBuf;

/// Overrides the `gh` executable (name resolved via PATH, or an absolute path).
pub const GH_BIN_ENV: &str = "HASWELL_OPS_GH_BIN";

/// Process configuration, resolved once before serving starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub target: WorkflowTarget,
    pub applied_env: Vec<String>,
}

pub fn load() -> RuntimeConfig {
    let mut target = WorkflowTarget::default();
    let mut applied_env = Vec::new();

    if let Some(program) = env_path(GH_BIN_ENV) {
        target = target.with_program(program);
        applied_env.push(GH_BIN_ENV.to_string());
    }

    RuntimeConfig {
        target,
        applied_env,
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    let value = env::var_os(key)?;
    let value = value.to_string_lossy();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
