//! Windows power commands

use super::command::{CommandRunner, Invocation};
use super::PowerAction;
use crate::error::PowerError;

fn invocation_for(action: PowerAction) -> Invocation {
    match action {
        PowerAction::Restart => Invocation::new("shutdown", &["/r"]),
        PowerAction::Shutdown => Invocation::new("shutdown", &["/s"]),
        // Leading 0 clears the hibernate flag, so this is suspend-to-RAM.
        PowerAction::Sleep => Invocation::new("rundll32.exe", &["powrprof.dll,SetSuspendState", "0,1,0"]),
    }
}

pub(super) fn perform<R: CommandRunner>(runner: &R, action: PowerAction) -> Result<(), PowerError> {
    runner.run(&invocation_for(action))?;
    Ok(())
}
