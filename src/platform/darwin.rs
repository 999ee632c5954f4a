//! macOS power commands

use super::command::{CommandRunner, Invocation};
use super::PowerAction;
use crate::error::PowerError;

fn invocation_for(action: PowerAction) -> Invocation {
    match action {
        PowerAction::Restart => Invocation::new("reboot", &[]),
        PowerAction::Shutdown => Invocation::new("shutdown", &["-h", "now"]),
        PowerAction::Sleep => Invocation::new("pmset", &["sleepnow"]),
    }
}

pub(super) fn perform<R: CommandRunner>(runner: &R, action: PowerAction) -> Result<(), PowerError> {
    runner.run(&invocation_for(action))?;
    Ok(())
}
