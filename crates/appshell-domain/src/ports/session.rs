//! Session Service Port
//!
//! Contract for the logged-on state holder. The state is observable as a
//! replay-latest stream so a page attaching late still learns the current
//! value.

use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::watch;

/// Session state interface
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Log the user on
    ///
    /// Fails with a session error when already logged on. The transition and
    /// its publication are atomic; observers never see an in-between state.
    async fn perform_log_on(&self, username: &str, password: &str) -> Result<()>;

    /// Log the user off
    ///
    /// Fails with a session error when already logged off.
    async fn perform_log_off(&self) -> Result<()>;

    /// Snapshot of the logged-on flag
    fn is_logged_on(&self) -> bool;

    /// Replay-latest stream of the logged-on flag
    fn logged_on(&self) -> watch::Receiver<bool>;
}
