//! Versioned state containers owned by the embedding application.
//!
//! A producer publishes whole values; every publish bumps the version.
//! Subscribers always see the latest value: intermediate values published
//! between two reads are skipped. There is no ordering guarantee between
//! concurrent producers, only that the version is strictly increasing.
//!
//! # Example
//!
//! ```
//! use skonto::snapshot::SnapshotStore;
//!
//! let store = SnapshotStore::new(0u32);
//! assert_eq!(store.publish(7), 1);
//! assert_eq!(store.current().value, 7);
//! ```

mod documents;

pub use documents::{DocumentList, TransactionDoc, TransactionDocs};

use tokio::sync::watch;

/// A value together with the version it was published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    /// 0 for the initial value, incremented on every publish.
    pub version: u64,
    pub value: T,
}

/// Holder of the latest published value.
#[derive(Debug)]
pub struct SnapshotStore<T> {
    tx: watch::Sender<Snapshot<T>>,
}

impl<T: Clone> SnapshotStore<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(Snapshot {
            version: 0,
            value: initial,
        });
        Self { tx }
    }

    /// Replace the value. Returns the new version.
    pub fn publish(&self, value: T) -> u64 {
        self.update(|current| *current = value)
    }

    /// Modify the value in place. Returns the new version.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> u64 {
        let mut version = 0;
        self.tx.send_modify(|snapshot| {
            f(&mut snapshot.value);
            snapshot.version += 1;
            version = snapshot.version;
        });
        tracing::trace!(version, "snapshot published");
        version
    }

    /// Modify the value in place if `f` reports a change. Returns the new
    /// version, or `None` when `f` returned `false` and nothing was published.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> Option<u64> {
        let mut version = None;
        self.tx.send_if_modified(|snapshot| {
            if !f(&mut snapshot.value) {
                return false;
            }
            snapshot.version += 1;
            version = Some(snapshot.version);
            true
        });
        if let Some(version) = version {
            tracing::trace!(version, "snapshot published");
        }
        version
    }

    pub fn current(&self) -> Snapshot<T> {
        self.tx.borrow().clone()
    }

    pub fn version(&self) -> u64 {
        self.tx.borrow().version
    }

    /// Observe future publishes. The current value counts as already seen.
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone + Default> Default for SnapshotStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Receiving end of a [`SnapshotStore`].
#[derive(Debug, Clone)]
pub struct Subscription<T> {
    rx: watch::Receiver<Snapshot<T>>,
}

impl<T: Clone> Subscription<T> {
    /// Wait for a publish newer than the last one seen and return the latest
    /// snapshot. `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<Snapshot<T>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Latest snapshot without waiting; marks it as seen.
    pub fn latest(&mut self) -> Snapshot<T> {
        self.rx.borrow_and_update().clone()
    }

    /// Whether a publish happened since the last read.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}
