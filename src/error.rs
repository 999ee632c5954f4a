//! Error types for power operations

use std::io;
use thiserror::Error;

use crate::platform::command::Invocation;

/// Errors surfaced by the platform resolver and the power controller
#[derive(Debug, Error)]
pub enum PowerError {
    #[error("no power implementation for operating system '{os}'")]
    UnsupportedPlatform { os: String },

    #[error("failed to check if current user is root")]
    IdentityLookupFailed {
        #[source]
        source: io::Error,
    },

    #[error("the 'root' user is required for this action (running as '{user}')")]
    InsufficientPrivilege { user: String },

    #[error("`{invocation}` failed")]
    CommandFailed {
        invocation: Invocation,
        output: String,
        #[source]
        cause: CommandFailure,
    },
}

impl PowerError {
    pub fn command_failed(
        invocation: &Invocation,
        output: impl Into<String>,
        cause: CommandFailure,
    ) -> Self {
        Self::CommandFailed { invocation: invocation.clone(), output: output.into(), cause }
    }
}

/// Why an external command did not succeed
#[derive(Debug, Error)]
pub enum CommandFailure {
    #[error("could not be launched")]
    Launch(#[source] io::Error),

    #[error("exited with status {0}")]
    Exit(i32),

    #[error("was terminated by a signal")]
    Terminated,
}
