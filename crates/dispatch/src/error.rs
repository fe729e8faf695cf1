use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Why a dispatch command did not succeed.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command `{command}` returned {status}: {detail}")]
    Exit {
        command: String,
        status: ExitStatusDetail,
        detail: String,
    },
}

/// Exit status of a process that ran but did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatusDetail {
    Code(i32),
    /// No exit code: the process was terminated by a signal.
    Signal,
}

impl ExitStatusDetail {
    pub fn from_code(code: Option<i32>) -> Self {
        code.map_or(Self::Signal, Self::Code)
    }
}

impl fmt::Display for ExitStatusDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "non-zero exit status {code}"),
            Self::Signal => f.write_str("no exit status (terminated by signal)"),
        }
    }
}
