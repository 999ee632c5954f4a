//! Linux power commands
//!
//! Sleep prefers systemd when present, then always falls through to `pm-suspend`.

use tracing::{debug, warn};

use super::command::{CommandRunner, Invocation};
use super::PowerAction;
use crate::error::PowerError;

const SERVICE_MANAGER: &str = "systemctl";
const LEGACY_SUSPEND: &str = "pm-suspend";

pub(super) fn perform<R: CommandRunner>(runner: &R, action: PowerAction) -> Result<(), PowerError> {
    match action {
        PowerAction::Restart => runner.run(&Invocation::new("reboot", &[]))?,
        PowerAction::Shutdown => runner.run(&Invocation::new("poweroff", &[]))?,
        PowerAction::Sleep => return sleep(runner),
    };
    Ok(())
}

fn sleep<R: CommandRunner>(runner: &R) -> Result<(), PowerError> {
    match runner.run(&Invocation::new(SERVICE_MANAGER, &[])) {
        Ok(_) => {
            if let Err(e) = runner.run(&Invocation::new(SERVICE_MANAGER, &["suspend"])) {
                warn!("{SERVICE_MANAGER} suspend failed, continuing with {LEGACY_SUSPEND}: {e}");
            }
        }
        Err(e) => debug!("{SERVICE_MANAGER} unavailable, skipping it: {e}"),
    }

    // Runs even after a successful systemd suspend; its result is the result of the call.
    runner.run(&Invocation::new(LEGACY_SUSPEND, &[]))?;
    Ok(())
}
