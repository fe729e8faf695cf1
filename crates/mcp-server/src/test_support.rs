use std::sync::Mutex;

/// Serializes tests that touch process-wide env vars.
#[cfg(test)]
pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());
