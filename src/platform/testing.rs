//! Test doubles for the command runner and identity seams

use std::cell::RefCell;
use std::io;

use super::command::{CommandRunner, Invocation};
use super::identity::Identity;
use crate::error::{CommandFailure, PowerError};

/// Records every invocation; command lines listed in `failing` exit with status 1
#[derive(Debug, Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    failing: Vec<String>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(lines: &[&str]) -> Self {
        Self { calls: RefCell::default(), failing: lines.iter().map(|l| l.to_string()).collect() }
    }

    /// Command lines run so far, in order
    pub fn lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> Result<String, PowerError> {
        self.calls.borrow_mut().push(invocation.clone());
        if self.failing.contains(&invocation.to_string()) {
            return Err(PowerError::command_failed(invocation, "fake failure", CommandFailure::Exit(1)));
        }
        Ok(String::new())
    }
}

/// Fixed username, a lookup error, or a panic if the precheck should never run
#[derive(Debug)]
pub enum FakeIdentity {
    User(&'static str),
    Broken,
    Unreachable,
}

impl Identity for FakeIdentity {
    fn current_username(&self) -> io::Result<String> {
        match self {
            FakeIdentity::User(name) => Ok(name.to_string()),
            FakeIdentity::Broken => Err(io::Error::new(io::ErrorKind::NotFound, "no passwd entry")),
            FakeIdentity::Unreachable => panic!("identity must not be consulted"),
        }
    }
}
