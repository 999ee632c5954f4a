//! Current user lookup for the superuser precheck

use std::io;

/// Name of the account allowed to change power state on macOS and Linux
pub const SUPERUSER: &str = "root";

/// Source of the invoking user's name
pub trait Identity {
    fn current_username(&self) -> io::Result<String>;
}

impl<I: Identity + ?Sized> Identity for &I {
    fn current_username(&self) -> io::Result<String> {
        (**self).current_username()
    }
}

/// Reads the effective user from the system user database
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

#[cfg(unix)]
impl Identity for SystemIdentity {
    fn current_username(&self) -> io::Result<String> {
        use nix::unistd::{geteuid, User};

        let uid = geteuid();
        match User::from_uid(uid).map_err(io::Error::from)? {
            Some(user) => Ok(user.name),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no user database entry for uid {uid}"),
            )),
        }
    }
}

#[cfg(not(unix))]
impl Identity for SystemIdentity {
    fn current_username(&self) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "user lookup is only available on Unix"))
    }
}
