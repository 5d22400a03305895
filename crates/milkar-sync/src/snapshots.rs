//! Live snapshot subscriptions.
//!
//! A subscription always carries the *whole* collection, never a diff.
//! Backends publish a fresh snapshot after every mutation, and a slow
//! subscriber is allowed to skip intermediate snapshots as long as it
//! eventually observes the latest one. `tokio::sync::watch` gives exactly
//! that conflated last-value semantics, plus detach-on-drop for free.

use std::sync::Arc;

use tokio::sync::watch;

/// Receiving half of a snapshot subscription.
///
/// Dropping the handle detaches it from the publisher; [`Snapshots::cancel`]
/// exists for call sites that want the detach to be visible in the code.
pub struct Snapshots<T> {
    rx: watch::Receiver<Arc<Vec<T>>>,
}

impl<T> Snapshots<T> {
    fn new(rx: watch::Receiver<Arc<Vec<T>>>) -> Self {
        Self { rx }
    }

    /// The latest snapshot, without waiting.
    pub fn current(&self) -> Arc<Vec<T>> {
        self.rx.borrow().clone()
    }

    /// Wait for a snapshot newer than the last one this handle observed.
    ///
    /// Snapshots published while the caller was busy are conflated away;
    /// only the newest is delivered. Returns `None` once the publishing
    /// store is gone. Cancel-safe: an abandoned call loses nothing.
    pub async fn next(&mut self) -> Option<Arc<Vec<T>>> {
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_closed) => None,
        }
    }

    /// Detach from the publisher. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

/// Publishing half, owned by the store backend.
pub struct SnapshotPublisher<T> {
    tx: watch::Sender<Arc<Vec<T>>>,
}

impl<T> SnapshotPublisher<T> {
    /// Create a publisher holding `initial` as the current snapshot.
    pub fn new(initial: Vec<T>) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { tx }
    }

    /// Attach a new subscriber.
    ///
    /// The subscriber sees the current snapshot via [`Snapshots::current`]
    /// right away; its first [`Snapshots::next`] resolves on the first
    /// publish *after* this call.
    pub fn subscribe(&self) -> Snapshots<T> {
        Snapshots::new(self.tx.subscribe())
    }

    /// Replace the current snapshot and wake every subscriber.
    pub fn publish(&self, snapshot: Vec<T>) {
        self.tx.send_replace(Arc::new(snapshot));
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T> Default for SnapshotPublisher<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn current_works_before_any_publish() {
        let publisher = SnapshotPublisher::<u32>::new(vec![1, 2]);
        let sub = publisher.subscribe();

        assert_eq!(*sub.current(), vec![1, 2]);
    }

    #[tokio::test]
    async fn publish_wakes_next() {
        let publisher = SnapshotPublisher::<u32>::default();
        let mut sub = publisher.subscribe();

        publisher.publish(vec![7]);

        assert_eq!(*sub.next().await.unwrap(), vec![7]);
    }

    #[tokio::test]
    async fn slow_subscriber_sees_only_the_latest() {
        let publisher = SnapshotPublisher::<u32>::default();
        let mut sub = publisher.subscribe();

        publisher.publish(vec![1]);
        publisher.publish(vec![2]);
        publisher.publish(vec![3]);

        assert_eq!(*sub.next().await.unwrap(), vec![3]);
    }

    #[tokio::test]
    async fn next_ends_when_publisher_is_dropped() {
        let publisher = SnapshotPublisher::<u32>::default();
        let mut sub = publisher.subscribe();

        drop(publisher);

        assert!(sub.next().await.is_none());
    }

    #[tokio::test]
    async fn cancel_detaches_the_subscriber() {
        let publisher = SnapshotPublisher::<u32>::default();
        let sub = publisher.subscribe();

        assert_eq!(publisher.subscriber_count(), 1);
        sub.cancel();
        assert_eq!(publisher.subscriber_count(), 0);
    }
}
