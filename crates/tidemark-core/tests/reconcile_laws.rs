//! Reconciliation law property tests
//!
//! Verifies the guarantees the merge is designed around, for all states and
//! all response sets the caller could legitimately produce:
//!
//! 1. **Refresh idempotence**: refreshing twice with one tracker equals
//!    refreshing once
//! 2. **Commutativity**: independent responses can be folded in either order
//! 3. **Duplication idempotence**: delivering a response twice has the same
//!    effect as delivering it once
//! 4. **Terminal ignores**: a succeeded state absorbs every response
//! 5. **Resolution**: a response for the outstanding tracker resolves the
//!    state regardless of retained history
//! 6. **Stale-ahead no-op**: a response ahead of the outstanding tracker is
//!    ignored
//!
//! Together these let the surrounding system deliver responses in any
//! order, duplicated, without affecting the final state.

use proptest::prelude::*;

use tidemark_core::{Remote, RequestState, Stamped};
use tidemark_testkit::strategies::{request_state, response_script, sim_result};
use tidemark_testkit::{drive, Delivery, SimState};

proptest! {
    #[test]
    fn refresh_is_idempotent(state in request_state(), tracker in 100u64..200) {
        let once = state.refresh(tracker);
        let twice = once.clone().refresh(tracker);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn independent_merges_commute(
        state in request_state(),
        (t1, t2) in (1u64..=50, 1u64..=50),
        r1 in sim_result(),
        r2 in sim_result(),
    ) {
        prop_assume!(t1 != t2);
        let forward = state
            .clone()
            .with_response(t1, r1.clone())
            .with_response(t2, r2.clone());
        let backward = state.with_response(t2, r2).with_response(t1, r1);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn duplicated_delivery_is_idempotent(
        state in request_state(),
        tracker in 1u64..=50,
        result in sim_result(),
    ) {
        let once = state.with_response(tracker, result.clone());
        let twice = once.clone().with_response(tracker, result);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn succeeded_state_absorbs_every_response(
        tracker in 50u64..100,
        value in any::<u32>(),
        response_tracker in 1u64..200,
        result in sim_result(),
    ) {
        let state = SimState::from_success(tracker, value);
        prop_assert_eq!(state.clone().with_response(response_tracker, result), state);
    }

    #[test]
    fn matching_response_resolves_regardless_of_history(
        state in request_state(),
        result in sim_result(),
    ) {
        // Refreshing pins the outstanding tracker while keeping whatever
        // history the state carried.
        let pending = state.refresh(100);
        let retained_success = match &pending {
            RequestState::Pending { last_success, .. } => last_success.clone(),
            _ => unreachable!("refresh always yields a pending state"),
        };
        let resolved = pending.with_response(100, result.clone());
        match result {
            Ok(value) => {
                prop_assert_eq!(resolved, SimState::from_success(100, value));
            }
            Err(error) => {
                prop_assert_eq!(
                    resolved,
                    RequestState::Failed {
                        failure: Stamped::new(100, error),
                        last_success: retained_success,
                    }
                );
            }
        }
    }

    #[test]
    fn responses_ahead_of_outstanding_are_ignored(
        state in request_state(),
        ahead in 101u64..300,
        result in sim_result(),
    ) {
        let pending = state.refresh(100);
        prop_assert_eq!(pending.clone().with_response(ahead, result), pending);
    }

    #[test]
    fn delivery_order_and_duplication_are_invisible(
        script in response_script(20),
        seed in any::<u64>(),
    ) {
        let delivery = Delivery::new(script);
        let baseline = drive(SimState::from_tracker(20), delivery.in_order());
        let shuffled = drive(SimState::from_tracker(20), delivery.shuffled(seed));
        let duplicated = drive(
            SimState::from_tracker(20),
            delivery.duplicated_and_shuffled(seed),
        );
        prop_assert_eq!(&shuffled, &baseline);
        prop_assert_eq!(&duplicated, &baseline);
    }

    #[test]
    fn eq_variant_is_idempotent_under_duplication(
        state in request_state(),
        tracker in 1u64..=50,
        result in sim_result(),
    ) {
        let once = state.with_response_eq(tracker, result.clone());
        let twice = once.clone().with_response_eq(tracker, result);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn adapter_refresh_is_idempotent(
        state in prop_oneof![
            Just(Remote::not_requested()),
            request_state().prop_map(Remote::from),
        ],
        tracker in 100u64..200,
    ) {
        let once = state.refresh(tracker);
        let twice = once.clone().refresh(tracker);
        prop_assert_eq!(once, twice);
    }
}
