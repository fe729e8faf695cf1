use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn locate_haswell_ops_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_haswell-ops-mcp") {
        return Ok(PathBuf::from(path));
    }

    // Derive it from the test exe path:
    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/haswell-ops-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("haswell-ops-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/haswell-ops-mcp", "target/release/haswell-ops-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate haswell-ops-mcp binary; build with: cargo build -p haswell-ops-mcp")
}

/// Stand-in for `gh`: appends its argv (one per line, then `@@end`) to `$FAKE_GH_LOG`, prints
/// `$FAKE_GH_STDERR` to stderr and exits with `$FAKE_GH_EXIT` (default 0).
const FAKE_GH: &str = r#"#!/bin/sh
for arg in "$@"; do
  printf '%s\n' "$arg" >> "$FAKE_GH_LOG"
done
printf '%s\n' '@@end' >> "$FAKE_GH_LOG"
if [ -n "$FAKE_GH_STDERR" ]; then
  printf '%s\n' "$FAKE_GH_STDERR" >&2
fi
exit "${FAKE_GH_EXIT:-0}"
"#;

#[cfg(unix)]
pub fn write_fake_gh(dir: &Path) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("gh");
    std::fs::write(&path, FAKE_GH).context("write fake gh")?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .context("chmod fake gh")?;
    Ok(path)
}

/// Invocations recorded by the fake `gh`, each as its argv.
pub fn read_fake_gh_log(log: &Path) -> Result<Vec<Vec<String>>> {
    if !log.exists() {
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(log).context("read fake gh log")?;
    let mut calls = Vec::new();
    let mut current = Vec::new();
    for line in raw.lines() {
        if line == "@@end" {
            calls.push(std::mem::take(&mut current));
        } else {
            current.push(line.to_string());
        }
    }
    Ok(calls)
}
