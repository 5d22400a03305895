//! Settlement and the opportunistic auto-archive sweep.
//!
//! Both paths move an event to the archive with the same two store calls,
//! copy first, delete second. If the delete fails after the copy landed,
//! the event stays live and a retry appends a duplicate archive entry;
//! a duplicate is recoverable, a lost event is not.

use chrono::Utc;
use milkar_shared::settlement::{auto_archive_trigger, ensure_settleable, ArchivedEvent};
use milkar_shared::types::EventId;
use milkar_shared::{Event, Participant};
use milkar_sync::{DocumentStore, Snapshots};
use tracing::{debug, info, warn};

use crate::state::App;
use crate::Result;

impl<S: DocumentStore> App<S> {
    /// Creator-confirmed settlement of a full event.
    ///
    /// Ownership and fullness are both re-checked against the freshly
    /// fetched document, so a stale button press cannot settle an event
    /// that lost a head in the meantime.
    pub async fn settle(&self, id: &EventId, requester: &Participant) -> Result<()> {
        let event = self.store.get_event(id).await?;
        ensure_settleable(&event, &requester.participant_id)?;

        let entry = ArchivedEvent::settled(event, Utc::now());
        self.store.append_archive(&entry).await?;
        self.store.delete_event(id).await?;

        info!(event_id = %id, "event settled");
        Ok(())
    }

    /// Archive every full or stale event in the given snapshot.
    ///
    /// Best-effort by design: a store failure leaves the event live and
    /// is retried on the next snapshot, never surfaced to the user.
    /// Returns how many events were fully moved.
    pub async fn auto_archive_pass(&self, snapshot: &[Event]) -> usize {
        let now = Utc::now();
        let mut moved = 0;

        for event in snapshot {
            let Some(trigger) = auto_archive_trigger(event, now, self.config.expiry_hours) else {
                continue;
            };

            let entry = ArchivedEvent::auto(event.clone(), now);
            if let Err(e) = self.store.append_archive(&entry).await {
                warn!(event_id = %event.id, error = %e, "auto-archive copy failed, will retry");
                continue;
            }
            if let Err(e) = self.store.delete_event(&event.id).await {
                warn!(event_id = %event.id, error = %e, "auto-archive delete failed, will retry");
                continue;
            }

            debug!(event_id = %event.id, %trigger, "auto-archived");
            moved += 1;
        }

        moved
    }

    /// Drive [`App::auto_archive_pass`] from a live subscription until
    /// the store goes away. Spawn this next to the subscribing view.
    pub async fn run_auto_archiver(&self, mut snapshots: Snapshots<Event>) {
        while let Some(snapshot) = snapshots.next().await {
            self.auto_archive_pass(&snapshot).await;
        }
        debug!("auto-archiver stopped: publisher gone");
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use milkar_shared::types::EventId;
    use milkar_shared::{EventDraft, MilkarError, Participant};
    use rust_decimal::Decimal;

    use crate::state::testutil::{asha, ravi, test_app, TestApp};

    /// Host Dinner for `heads` and push it to full via claims + verifies.
    async fn hosted_and_full(harness: &TestApp, creator: &Participant, heads: u32) -> EventId {
        let event = harness
            .app
            .create_event("Dinner", Decimal::from(1000), heads, creator)
            .await
            .unwrap();

        for i in 0..heads {
            let payer = Participant::new(&format!("Payer{i}"), "pay@upi").unwrap();
            harness
                .app
                .claim_paid(&event.id, &payer, "4412", "")
                .await
                .unwrap();
            harness
                .app
                .verify_claim(&event.id, &payer.participant_id, creator)
                .await
                .unwrap();
        }
        event.id
    }

    #[tokio::test]
    async fn settle_moves_a_full_event_to_the_archive() {
        let harness = test_app();
        let creator = asha();
        let id = hosted_and_full(&harness, &creator, 2).await;

        harness.app.settle(&id, &creator).await.unwrap();

        assert!(harness.app.live_events().await.unwrap().is_empty());
        let archive = harness.app.archived().await.unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(archive[0].event.id, id);
        assert!(!archive[0].auto_archived);
    }

    #[tokio::test]
    async fn settle_before_full_is_blocked() {
        let harness = test_app();
        let creator = asha();
        let event = harness
            .app
            .create_event("Dinner", Decimal::from(1000), 4, &creator)
            .await
            .unwrap();

        let err = harness.app.settle(&event.id, &creator).await.unwrap_err();

        assert!(matches!(err, MilkarError::NotFull { verified: 0, required: 4 }));
        assert_eq!(harness.app.live_events().await.unwrap().len(), 1);
        assert!(harness.app.archived().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn settle_by_non_creator_is_blocked() {
        let harness = test_app();
        let creator = asha();
        let id = hosted_and_full(&harness, &creator, 2).await;

        let err = harness.app.settle(&id, &ravi()).await.unwrap_err();

        assert!(matches!(err, MilkarError::Permission(_)));
        assert_eq!(harness.app.live_events().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn copy_precedes_delete() {
        let harness = test_app();
        let creator = asha();
        let id = hosted_and_full(&harness, &creator, 2).await;

        harness.store.set_fail_deletes(true);
        let err = harness.app.settle(&id, &creator).await.unwrap_err();
        assert!(matches!(err, MilkarError::StoreUnavailable(_)));

        // The event is in the archive AND still live: present somewhere,
        // never lost.
        assert_eq!(harness.app.archived().await.unwrap().len(), 1);
        assert_eq!(harness.app.live_events().await.unwrap().len(), 1);

        // Retry once the store recovers: duplicate archive entry is the
        // accepted cost.
        harness.store.set_fail_deletes(false);
        harness.app.settle(&id, &creator).await.unwrap();
        assert_eq!(harness.app.archived().await.unwrap().len(), 2);
        assert!(harness.app.live_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sweep_archives_full_events() {
        let harness = test_app();
        let creator = asha();
        hosted_and_full(&harness, &creator, 2).await;
        // A second, half-paid event must stay live.
        harness
            .app
            .create_event("Trip", Decimal::from(5000), 5, &creator)
            .await
            .unwrap();

        let snapshot = harness.app.live_events().await.unwrap();
        let moved = harness.app.auto_archive_pass(&snapshot).await;

        assert_eq!(moved, 1);
        let live = harness.app.live_events().await.unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].title, "Trip");

        let archive = harness.app.archived().await.unwrap();
        assert_eq!(archive.len(), 1);
        assert!(archive[0].auto_archived);
    }

    #[tokio::test]
    async fn sweep_archives_stale_events() {
        let harness = test_app();
        let stale = EventDraft::new("Old dinner", Decimal::from(400), 2, &asha())
            .unwrap()
            .into_event(EventId::new(), Utc::now() - Duration::hours(49));
        harness.store.seed_event(stale);

        let snapshot = harness.app.live_events().await.unwrap();
        let moved = harness.app.auto_archive_pass(&snapshot).await;

        assert_eq!(moved, 1);
        assert!(harness.app.live_events().await.unwrap().is_empty());
        assert!(harness.app.archived().await.unwrap()[0].auto_archived);
    }

    #[tokio::test]
    async fn sweep_swallows_store_failures_and_retries_later() {
        let harness = test_app();
        let creator = asha();
        hosted_and_full(&harness, &creator, 2).await;

        let snapshot = harness.app.live_events().await.unwrap();
        harness.store.set_offline(true);
        let moved = harness.app.auto_archive_pass(&snapshot).await;
        assert_eq!(moved, 0);

        harness.store.set_offline(false);
        // Event untouched by the failed pass; the next one moves it.
        assert_eq!(harness.app.live_events().await.unwrap().len(), 1);
        let moved = harness.app.auto_archive_pass(&snapshot).await;
        assert_eq!(moved, 1);
    }

    #[tokio::test]
    async fn sweep_runs_off_the_live_subscription() {
        let harness = test_app();
        let creator = asha();

        let sub = harness.app.subscribe_events().await.unwrap();
        let id = hosted_and_full(&harness, &creator, 1).await;

        // One manual turn of the loop body: take the latest snapshot and
        // sweep it.
        let snapshot = sub.current();
        harness.app.auto_archive_pass(&snapshot).await;

        assert!(harness.app.live_events().await.unwrap().is_empty());
        assert_eq!(harness.app.archived().await.unwrap()[0].event.id, id);
        sub.cancel();
    }
}
