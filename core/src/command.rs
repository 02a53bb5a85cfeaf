//! Subprocess invocation, isolated behind [`CommandRunner`].
//!
//! Platform drivers never touch [`std::process`] directly, which lets tests
//! replay captured tool output instead of reconfiguring a real NIC.

use std::process::Command;

use macshift_common::error::MacError;
use tracing::debug;

/// What a finished command left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    /// Runs `program` to completion, blocking until it exits.
    ///
    /// Only a failure to launch is an `Err`; a non-zero exit is reported
    /// through [`CommandOutput::code`].
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, MacError>;

    /// Like [`CommandRunner::run`], but a non-zero exit becomes
    /// [`MacError::CommandFailed`] and only stdout is handed back.
    fn run_checked(&self, program: &str, args: &[&str]) -> Result<String, MacError> {
        let output = self.run(program, args)?;
        if output.success() {
            Ok(output.stdout)
        } else {
            Err(MacError::CommandFailed {
                program: program.to_string(),
                code: output.code,
                stderr: output.stderr,
            })
        }
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, MacError> {
        (**self).run(program, args)
    }
}

/// Runs commands on the host through [`std::process::Command`].
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, MacError> {
        debug!("Running `{} {}`", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| MacError::CommandLaunch {
                program: program.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
