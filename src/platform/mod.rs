//! Platform-specific operations
//!
//! Resolves the host operating system to a [`PowerController`] that knows which
//! native commands sleep, restart or power off the machine.

pub mod command;
mod darwin;
pub mod identity;
mod linux;
#[cfg(test)]
pub(crate) mod testing;
mod windows;

use std::fmt;
use tracing::{debug, info};

use crate::error::PowerError;
use command::{CommandRunner, SystemRunner};
use identity::{Identity, SystemIdentity, SUPERUSER};

/// Operating systems with a known set of power commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
}

impl Platform {
    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform.
    pub fn from_os(os: &str) -> Result<Self, PowerError> {
        match os {
            "macos" | "darwin" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            other => Err(PowerError::UnsupportedPlatform { os: other.to_string() }),
        }
    }

    fn requires_superuser(self) -> bool {
        !matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => write!(f, "macOS"),
            Platform::Linux => write!(f, "Linux"),
            Platform::Windows => write!(f, "Windows"),
        }
    }
}

/// Power state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Sleep,
    Restart,
    Shutdown,
}

impl fmt::Display for PowerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerAction::Sleep => write!(f, "sleep"),
            PowerAction::Restart => write!(f, "restart"),
            PowerAction::Shutdown => write!(f, "shutdown"),
        }
    }
}

/// Controls the power state of the machine through its native commands
#[derive(Debug)]
pub struct PowerController<R = SystemRunner, I = SystemIdentity> {
    platform: Platform,
    runner: R,
    identity: I,
}

/// Create the controller for `os` backed by real processes and the real user database
pub fn resolve(os: &str) -> Result<PowerController, PowerError> {
    resolve_with(os, SystemRunner, SystemIdentity)
}

/// Create the controller for `os` with the given collaborators
pub fn resolve_with<R, I>(os: &str, runner: R, identity: I) -> Result<PowerController<R, I>, PowerError>
where
    R: CommandRunner,
    I: Identity,
{
    let platform = Platform::from_os(os)?;
    debug!("Resolved OS '{}' to {} power controller", os, platform);
    Ok(PowerController { platform, runner, identity })
}

impl<R: CommandRunner, I: Identity> PowerController<R, I> {
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Put the machine to sleep
    pub fn sleep(&self) -> Result<(), PowerError> {
        self.execute(PowerAction::Sleep)
    }

    /// Restart the machine
    pub fn restart(&self) -> Result<(), PowerError> {
        self.execute(PowerAction::Restart)
    }

    /// Turn the machine off
    pub fn shutdown(&self) -> Result<(), PowerError> {
        self.execute(PowerAction::Shutdown)
    }

    /// Dispatch `action` to the matching operation
    pub fn perform(&self, action: PowerAction) -> Result<(), PowerError> {
        match action {
            PowerAction::Sleep => self.sleep(),
            PowerAction::Restart => self.restart(),
            PowerAction::Shutdown => self.shutdown(),
        }
    }

    // Never retried.
    fn execute(&self, action: PowerAction) -> Result<(), PowerError> {
        info!("{} requested on {}", action, self.platform);

        if self.platform.requires_superuser() {
            self.require_superuser()?;
        }

        match self.platform {
            Platform::MacOs => darwin::perform(&self.runner, action),
            Platform::Linux => linux::perform(&self.runner, action),
            Platform::Windows => windows::perform(&self.runner, action),
        }
    }

    fn require_superuser(&self) -> Result<(), PowerError> {
        let user = self
            .identity
            .current_username()
            .map_err(|source| PowerError::IdentityLookupFailed { source })?;

        if user != SUPERUSER {
            return Err(PowerError::InsufficientPrivilege { user });
        }

        debug!("Running as {}", SUPERUSER);
        Ok(())
    }
}
