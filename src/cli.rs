//! Command-line flag handling

use thiserror::Error;

use crate::platform::PowerAction;

pub const HELP: &str = "\
power - Manage a machine's power state.

Usage: power [-s | -r | -o | -h]
    -s     Sleep the machine
    -r     Restart the machine
    -o     Power the machine off
    -h     Show this help
";

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Help,
    Perform(PowerAction),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized argument '{0}', please supply valid arguments")]
pub struct UsageError(pub String);

/// Parse the process arguments, program name excluded. Only the first one counts.
pub fn parse<I, S>(args: I) -> Result<Request, UsageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let Some(flag) = args.into_iter().next() else {
        return Ok(Request::Help);
    };

    match flag.as_ref() {
        "-s" => Ok(Request::Perform(PowerAction::Sleep)),
        "-r" => Ok(Request::Perform(PowerAction::Restart)),
        "-o" => Ok(Request::Perform(PowerAction::Shutdown)),
        "-h" => Ok(Request::Help),
        other => Err(UsageError(other.to_string())),
    }
}
