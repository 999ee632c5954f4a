//! power
//!
//! Puts the machine to sleep, restarts it or powers it off using the native
//! commands of the host operating system.

mod cli;
mod error;
mod platform;

use anyhow::{Context, Result};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Request, UsageError};
use error::PowerError;
use platform::command::CommandRunner;
use platform::identity::Identity;
use platform::{PowerAction, PowerController};

/// Main entry point
fn main() {
    // Initialize logging to stderr
    tracing_subscriber::fmt::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    let code = exit_code(cli::parse(std::env::args().skip(1)), run);
    process::exit(code);
}

/// Map the parsed request and the outcome of the power operation to a process exit code
fn exit_code<F>(parsed: Result<Request, UsageError>, perform: F) -> i32
where
    F: FnOnce(PowerAction) -> Result<()>,
{
    match parsed {
        Err(e) => {
            error!("{}", e);
            eprint!("{}", cli::HELP);
            1
        }
        Ok(Request::Help) => {
            eprint!("{}", cli::HELP);
            0
        }
        Ok(Request::Perform(action)) => match perform(action) {
            Ok(()) => 0,
            Err(e) => {
                error!("{:#}", e);
                1
            }
        },
    }
}

/// Resolve the host controller and perform `action`
fn run(action: PowerAction) -> Result<()> {
    let controller =
        platform::resolve(std::env::consts::OS).context("Failed to resolve power controller")?;
    info!("Using {} power commands", controller.platform());
    execute(&controller, action)
}

fn execute<R, I>(controller: &PowerController<R, I>, action: PowerAction) -> Result<()>
where
    R: CommandRunner,
    I: Identity,
{
    let result = controller.perform(action);

    if let Err(PowerError::CommandFailed { output, .. }) = &result {
        if !output.trim().is_empty() {
            error!("Command output: {}", output.trim_end());
        }
    }

    result.with_context(|| format!("Failed to {action} the machine"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::testing::{FakeIdentity, FakeRunner};

    #[test]
    fn help_and_no_arguments_exit_zero() {
        let perform = |_: PowerAction| -> Result<()> { panic!("nothing should run") };
        assert_eq!(exit_code(cli::parse(["-h"]), perform), 0);
        assert_eq!(exit_code(cli::parse(Vec::<String>::new()), perform), 0);
    }

    #[test]
    fn unknown_flag_exits_one_without_running() {
        let perform = |_: PowerAction| -> Result<()> { panic!("nothing should run") };
        assert_eq!(exit_code(cli::parse(["-x"]), perform), 1);
    }

    #[test]
    fn successful_operation_exits_zero() {
        let runner = FakeRunner::new();
        let controller =
            platform::resolve_with("windows", &runner, FakeIdentity::Unreachable).unwrap();
        let code = exit_code(cli::parse(["-r"]), |action| execute(&controller, action));
        assert_eq!(code, 0);
        assert_eq!(runner.lines(), vec!["shutdown /r"]);
    }

    #[test]
    fn failed_operation_exits_one() {
        let runner = FakeRunner::failing(&["pm-suspend"]);
        let controller =
            platform::resolve_with("linux", &runner, FakeIdentity::User("root")).unwrap();
        let code = exit_code(cli::parse(["-s"]), |action| execute(&controller, action));
        assert_eq!(code, 1);
        assert_eq!(runner.lines(), vec!["systemctl", "systemctl suspend", "pm-suspend"]);
    }

    #[test]
    fn refused_privilege_exits_one() {
        let runner = FakeRunner::new();
        let controller =
            platform::resolve_with("darwin", &runner, FakeIdentity::User("alice")).unwrap();
        let code = exit_code(cli::parse(["-o"]), |action| execute(&controller, action));
        assert_eq!(code, 1);
        assert!(runner.lines().is_empty());
    }
}
