//! Tests for domain_claims

use core_kernel::{Amount, ClaimId, Identity, PolicyId, Timestamp};
use proptest::prelude::*;

use domain_claims::{ClaimError, ClaimEvent, ClaimPayout, ClaimStatus, ClaimStore};

const NOW: Timestamp = Timestamp::from_secs(1_700_000_000);

fn submit(store: &mut ClaimStore, policy: u64, amount: u64) -> ClaimId {
    store
        .submit(PolicyId::new(policy), Identity::new(), Amount::from(amount), "car crash", NOW)
        .0
}

// ============================================================================
// Store Tests
// ============================================================================

mod store_tests {
    use super::*;

    #[test]
    fn test_submit_creates_pending_claim() {
        let mut store = ClaimStore::new();
        let claimant = Identity::new();

        let (id, event) =
            store.submit(PolicyId::new(0), claimant, Amount::from(500), "car crash", NOW);

        let claim = store.get(id).unwrap();
        assert_eq!(id, ClaimId::new(0));
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.claimant, claimant);
        assert_eq!(claim.reason, "car crash");
        assert_eq!(
            event,
            ClaimEvent::ClaimSubmitted {
                claim_id: id,
                policy_id: PolicyId::new(0),
                claimant,
                amount: Amount::from(500),
                reason: "car crash".to_string(),
                timestamp: NOW,
            }
        );
    }

    #[test]
    fn test_ids_are_global_across_policies() {
        let mut store = ClaimStore::new();
        let a0 = submit(&mut store, 0, 10);
        let b0 = submit(&mut store, 1, 10);
        let a1 = submit(&mut store, 0, 10);

        assert_eq!((a0, b0, a1), (ClaimId::new(0), ClaimId::new(1), ClaimId::new(2)));
        assert_eq!(store.ids_for_policy(PolicyId::new(0)), &[ClaimId::new(0), ClaimId::new(2)]);
        assert_eq!(store.ids_for_policy(PolicyId::new(1)), &[ClaimId::new(1)]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_unknown_claim() {
        let mut store = ClaimStore::new();
        assert_eq!(
            store.approve(ClaimId::new(0), NOW),
            Err(ClaimError::ClaimNotFound(ClaimId::new(0)))
        );
    }
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_approve_then_pay() {
        let mut store = ClaimStore::new();
        let id = submit(&mut store, 3, 500);

        let event = store.approve(id, NOW).unwrap();
        assert_eq!(event.event_type(), "ClaimApproved");
        assert_eq!(event.policy_id(), PolicyId::new(3));

        let payout = store.mark_paid(id).unwrap();
        assert_eq!(payout.amount, Amount::from(500));
        assert_eq!(payout.claim_id, id);
        assert_eq!(store.get(id).unwrap().status, ClaimStatus::Paid);
    }

    #[test]
    fn test_reject_is_terminal() {
        let mut store = ClaimStore::new();
        let id = submit(&mut store, 0, 500);

        let event = store.reject(id, "not covered", NOW).unwrap();
        assert!(matches!(
            event,
            ClaimEvent::ClaimRejected { ref reason, .. } if reason == "not covered"
        ));

        assert!(store.approve(id, NOW).is_err());
        assert!(store.reject(id, "again", NOW).is_err());
        assert!(store.mark_paid(id).is_err());
        assert!(ClaimStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_approve_twice_fails() {
        let mut store = ClaimStore::new();
        let id = submit(&mut store, 0, 500);
        store.approve(id, NOW).unwrap();

        assert_eq!(
            store.approve(id, NOW),
            Err(ClaimError::InvalidStatusTransition {
                claim_id: id,
                from: ClaimStatus::Approved,
                to: ClaimStatus::Approved,
            })
        );
    }

    #[test]
    fn test_pay_pending_fails() {
        let mut store = ClaimStore::new();
        let id = submit(&mut store, 0, 500);
        assert!(store.mark_paid(id).is_err());
        assert_eq!(store.get(id).unwrap().status, ClaimStatus::Pending);
    }

    #[test]
    fn test_revert_payout_allows_retry() {
        let mut store = ClaimStore::new();
        let id = submit(&mut store, 0, 500);
        store.approve(id, NOW).unwrap();

        let payout = store.mark_paid(id).unwrap();
        store.revert_payout(&payout).unwrap();
        assert_eq!(store.get(id).unwrap().status, ClaimStatus::Approved);

        assert!(store.mark_paid(id).is_ok());
        assert!(store.mark_paid(id).is_err());
    }

    #[test]
    fn test_payout_event() {
        let payee = Identity::new();
        let payout = ClaimPayout {
            claim_id: ClaimId::new(1),
            policy_id: PolicyId::new(0),
            payee,
            amount: Amount::from(5),
        };
        let event = payout.event(NOW);
        assert_eq!(event.claim_id(), ClaimId::new(1));
        assert_eq!(event.event_type(), "ClaimPaid");
        assert_eq!(event.timestamp(), NOW);
    }

    #[test]
    fn test_store_serializes_with_index() {
        let mut store = ClaimStore::new();
        submit(&mut store, 7, 1);

        let json = serde_json::to_string(&store).unwrap();
        let back: ClaimStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ids_for_policy(PolicyId::new(7)), &[ClaimId::new(0)]);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Action {
    Approve,
    Reject,
    Pay,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Approve), Just(Action::Reject), Just(Action::Pay)]
}

fn rank(status: ClaimStatus) -> u8 {
    match status {
        ClaimStatus::Pending => 0,
        ClaimStatus::Approved | ClaimStatus::Rejected => 1,
        ClaimStatus::Paid => 2,
    }
}

proptest! {
    /// Under any sequence of actions a claim only moves forward, one edge at
    /// a time, and a failed action leaves the status untouched.
    #[test]
    fn status_only_moves_forward(actions in proptest::collection::vec(action_strategy(), 0..20)) {
        let mut store = ClaimStore::new();
        let id = submit(&mut store, 0, 100);

        for action in actions {
            let before = store.get(id).unwrap().status;
            let result = match action {
                Action::Approve => store.approve(id, NOW).map(|_| ()),
                Action::Reject => store.reject(id, "no", NOW).map(|_| ()),
                Action::Pay => store.mark_paid(id).map(|_| ()),
            };
            let after = store.get(id).unwrap().status;

            if result.is_ok() {
                prop_assert!(before.can_transition_to(after));
                prop_assert_eq!(rank(after), rank(before) + 1);
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }
}
