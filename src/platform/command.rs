//! External command execution
//!
//! Every power transition boils down to one or two external programs. They are run
//! through [`CommandRunner`] so the controller never touches `std::process` directly.

use std::fmt;
use std::process::{Command, Output, Stdio};
use tracing::{debug, info};

use crate::error::{CommandFailure, PowerError};

/// A program name plus its ordered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self { program: program.to_string(), args: args.iter().map(|a| a.to_string()).collect() }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs external commands to completion
pub trait CommandRunner {
    /// Run `invocation`, returning its combined stdout/stderr on success.
    fn run(&self, invocation: &Invocation) -> Result<String, PowerError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<String, PowerError> {
        (**self).run(invocation)
    }
}

/// Runs commands as child processes of this one
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<String, PowerError> {
        info!("Running `{}`", invocation);

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| PowerError::command_failed(invocation, "", CommandFailure::Launch(e)))?;

        let combined = combined_output(&output);
        if !combined.is_empty() {
            debug!("`{}` output: {}", invocation.program, combined.trim_end());
        }

        if output.status.success() {
            return Ok(combined);
        }

        let cause = match output.status.code() {
            Some(code) => CommandFailure::Exit(code),
            None => CommandFailure::Terminated,
        };
        Err(PowerError::command_failed(invocation, combined, cause))
    }
}

fn combined_output(output: &Output) -> String {
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}
