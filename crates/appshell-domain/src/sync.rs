//! Replay-latest state broadcasting
//!
//! [`StateCell`] wraps a tokio watch channel into the publish/subscribe shape
//! the session and network-status streams need: every publish replaces the
//! current value, and a new subscriber immediately observes the latest value
//! instead of waiting for the next publish.

use tokio::sync::watch;

/// A broadcast cell holding one current value
pub struct StateCell<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + Send + Sync + 'static> StateCell<T> {
    /// Create a cell seeded with an initial value
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the current value and notify all subscribers
    ///
    /// Publishing succeeds whether or not anyone is subscribed.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Subscribe to the stream of values
    ///
    /// The receiver starts at the current value; `changed()` resolves on the
    /// next publish after subscription.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCell")
            .field("current", &*self.tx.borrow())
            .field("subscribers", &self.tx.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_sees_latest_value_immediately() {
        let cell = StateCell::new(1u32);
        cell.publish(2);

        let rx = cell.subscribe();
        assert_eq!(*rx.borrow(), 2);
        assert_eq!(cell.get(), 2);
    }

    #[tokio::test]
    async fn publish_notifies_subscribers() {
        let cell = StateCell::new(false);
        let mut rx = cell.subscribe();

        cell.publish(true);
        rx.changed().await.expect("sender alive");
        assert!(*rx.borrow());
    }
}
