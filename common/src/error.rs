use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MacError>;

/// Every failure `macshift` knows how to describe.
///
/// Whether a variant ends the process is decided by the caller: the session
/// propagates environment, discovery and mutation errors up to `main`, while
/// read and backup errors are logged and absorbed on the spot.
#[derive(Debug, Error)]
pub enum MacError {
    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("{0}")]
    InsufficientPrivileges(&'static str),

    #[error("Failed to run `{program}`: {source}")]
    CommandLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` {}{}", describe_exit(.code), describe_stderr(.stderr))]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("No network interfaces found.")]
    NoInterfaces,

    #[error("Invalid MAC address: '{0}'")]
    InvalidMac(String),

    #[error("Standard input was closed")]
    InputClosed,

    #[error("Backup file {}: {source}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => String::from("was terminated by a signal"),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
