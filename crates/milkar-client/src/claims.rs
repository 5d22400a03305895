//! Claiming payments and verifying claims.

use chrono::Utc;
use milkar_shared::types::{EventId, ParticipantId};
use milkar_shared::{ledger, Event, Participant};
use milkar_sync::DocumentStore;
use tracing::info;

use crate::state::App;
use crate::Result;

impl<S: DocumentStore> App<S> {
    /// Self-report a payment on an event. One claim per participant; the
    /// reference suffix is the last digits of the payer's transaction
    /// reference, kept as friction rather than proof.
    pub async fn claim_paid(
        &self,
        id: &EventId,
        claimant: &Participant,
        reference_suffix: &str,
        note: &str,
    ) -> Result<Event> {
        let mut event = self.store.get_event(id).await?;
        ledger::append_claim(&mut event, claimant, reference_suffix, note, Utc::now())?;
        self.store.put_event(&event).await?;

        info!(
            event_id = %id,
            participant_id = %claimant.participant_id,
            "payment claimed"
        );
        Ok(event)
    }

    /// Creator marks a contributor's claim verified. Verifying an already
    /// verified claim changes nothing and writes nothing.
    pub async fn verify_claim(
        &self,
        id: &EventId,
        contributor: &ParticipantId,
        requester: &Participant,
    ) -> Result<Event> {
        let mut event = self.store.get_event(id).await?;
        let flipped = ledger::verify_claim(&mut event, contributor, &requester.participant_id)?;

        if flipped {
            self.store.put_event(&event).await?;
            info!(event_id = %id, contributor = %contributor, "claim verified");
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use milkar_shared::settlement::is_full;
    use milkar_shared::{MilkarError, Participant};
    use rust_decimal::Decimal;

    use crate::state::testutil::{asha, ravi, test_app};

    #[tokio::test]
    async fn claim_lands_unverified() {
        let harness = test_app();
        let event = harness
            .app
            .create_event("Dinner", Decimal::from(1000), 4, &asha())
            .await
            .unwrap();

        let updated = harness
            .app
            .claim_paid(&event.id, &ravi(), "4412", "")
            .await
            .unwrap();

        assert_eq!(updated.contributions.len(), 1);
        assert!(!updated.contributions[0].verified);
        assert_eq!(updated.contributions[0].note, "Paid!");
    }

    #[tokio::test]
    async fn second_claim_from_same_participant_is_rejected() {
        let harness = test_app();
        let event = harness
            .app
            .create_event("Dinner", Decimal::from(1000), 4, &asha())
            .await
            .unwrap();
        let payer = ravi();

        harness
            .app
            .claim_paid(&event.id, &payer, "4412", "")
            .await
            .unwrap();
        let err = harness
            .app
            .claim_paid(&event.id, &payer, "9981", "again")
            .await
            .unwrap_err();

        assert!(matches!(err, MilkarError::DuplicateClaim { .. }));
        let stored = harness.app.live_events().await.unwrap();
        assert_eq!(stored[0].contributions.len(), 1);
    }

    #[tokio::test]
    async fn short_reference_suffix_is_rejected() {
        let harness = test_app();
        let event = harness
            .app
            .create_event("Dinner", Decimal::from(1000), 4, &asha())
            .await
            .unwrap();

        let err = harness
            .app
            .claim_paid(&event.id, &ravi(), "12", "")
            .await
            .unwrap_err();
        assert!(matches!(err, MilkarError::Validation(_)));
    }

    #[tokio::test]
    async fn only_the_creator_verifies() {
        let harness = test_app();
        let creator = asha();
        let payer = ravi();
        let event = harness
            .app
            .create_event("Dinner", Decimal::from(1000), 4, &creator)
            .await
            .unwrap();
        harness
            .app
            .claim_paid(&event.id, &payer, "4412", "")
            .await
            .unwrap();

        let err = harness
            .app
            .verify_claim(&event.id, &payer.participant_id, &payer)
            .await
            .unwrap_err();
        assert!(matches!(err, MilkarError::Permission(_)));

        let verified = harness
            .app
            .verify_claim(&event.id, &payer.participant_id, &creator)
            .await
            .unwrap();
        assert!(verified.contributions[0].verified);
    }

    #[tokio::test]
    async fn verify_twice_is_a_no_op() {
        let harness = test_app();
        let creator = asha();
        let payer = ravi();
        let event = harness
            .app
            .create_event("Dinner", Decimal::from(1000), 4, &creator)
            .await
            .unwrap();
        harness
            .app
            .claim_paid(&event.id, &payer, "4412", "")
            .await
            .unwrap();

        let first = harness
            .app
            .verify_claim(&event.id, &payer.participant_id, &creator)
            .await
            .unwrap();
        let second = harness
            .app
            .verify_claim(&event.id, &payer.participant_id, &creator)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn four_claims_and_four_verifies_fill_the_event() {
        let harness = test_app();
        let creator = asha();
        let event = harness
            .app
            .create_event("Dinner", Decimal::from(1000), 4, &creator)
            .await
            .unwrap();

        let payers: Vec<Participant> = ["Ravi", "Meera", "Dev", "Asha"]
            .iter()
            .map(|name| Participant::new(name, "pay@upi").unwrap())
            .collect();

        for payer in &payers {
            harness
                .app
                .claim_paid(&event.id, payer, "4412", "")
                .await
                .unwrap();
        }

        for (i, payer) in payers.iter().enumerate() {
            let updated = harness
                .app
                .verify_claim(&event.id, &payer.participant_id, &creator)
                .await
                .unwrap();
            // Fullness flips only on the last verify.
            assert_eq!(is_full(&updated), i == 3);
        }
    }
}
