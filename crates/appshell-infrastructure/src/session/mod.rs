//! Session state
//!
//! Holds the logged-on flag and broadcasts it through a replay-latest
//! [`StateCell`], so an observer attaching after log-on still sees `true`
//! immediately. Transitions are guarded: logging on twice (or off twice)
//! fails the operation instead of silently re-publishing.

use appshell_domain::error::{Error, Result};
use appshell_domain::ports::SessionService;
use appshell_domain::sync::StateCell;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;
use tracing::debug;

/// Session service implementation
pub struct SessionManager {
    logged_on: StateCell<bool>,
    // serializes check-then-publish so a transition is atomic relative to
    // the observable publish
    transition: Mutex<()>,
}

impl SessionManager {
    /// Create a session manager in the logged-off state
    pub fn new() -> Self {
        Self {
            logged_on: StateCell::new(false),
            transition: Mutex::new(()),
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("logged_on", &self.logged_on.get())
            .finish()
    }
}

#[async_trait]
impl SessionService for SessionManager {
    async fn perform_log_on(&self, username: &str, _password: &str) -> Result<()> {
        let _guard = self
            .transition
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.logged_on.get() {
            return Err(Error::session("user is already logged on"));
        }
        // the sample has no account backend; the transition is local
        debug!(username, "logging on");
        self.logged_on.publish(true);
        Ok(())
    }

    async fn perform_log_off(&self) -> Result<()> {
        let _guard = self
            .transition
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !self.logged_on.get() {
            return Err(Error::session("user is already logged off"));
        }
        debug!("logging off");
        self.logged_on.publish(false);
        Ok(())
    }

    fn is_logged_on(&self) -> bool {
        self.logged_on.get()
    }

    fn logged_on(&self) -> watch::Receiver<bool> {
        self.logged_on.subscribe()
    }
}
