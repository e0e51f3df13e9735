//! Proptest strategies for states and response scripts.
//!
//! The generated values respect the caller contract: retained slots are
//! strictly older than the primary tracker, and scripted responses carry
//! unique trackers no newer than the outstanding one. Law suites that want
//! out-of-contract inputs construct them by hand.

use proptest::prelude::*;

use tidemark_core::{RequestState, Stamped};

use crate::delivery::{SimResponse, SimResult, SimState};
use crate::sim::SimFailure;

/// Trackers used for retained history slots.
const HISTORY_TRACKERS: std::ops::Range<u64> = 1..50;

/// Trackers used for the primary fact.
const PRIMARY_TRACKERS: std::ops::Range<u64> = 50..100;

/// An arbitrary simulated failure payload.
pub fn sim_failure() -> impl Strategy<Value = SimFailure> {
    prop_oneof![
        (1u64..5_000).prop_map(SimFailure::timeout),
        proptest::sample::select(vec!["refused", "reset", "unreachable"])
            .prop_map(SimFailure::transport),
    ]
}

/// An arbitrary simulated result.
pub fn sim_result() -> impl Strategy<Value = SimResult<u32>> {
    prop_oneof![any::<u32>().prop_map(Ok), sim_failure().prop_map(Err)]
}

fn success_slot() -> impl Strategy<Value = Option<Stamped<u64, u32>>> {
    proptest::option::of(
        (HISTORY_TRACKERS, any::<u32>()).prop_map(|(tracker, value)| Stamped::new(tracker, value)),
    )
}

fn failure_slot() -> impl Strategy<Value = Option<Stamped<u64, SimFailure>>> {
    proptest::option::of(
        (HISTORY_TRACKERS, sim_failure()).prop_map(|(tracker, error)| Stamped::new(tracker, error)),
    )
}

/// An arbitrary reconciliation state whose retained slots are strictly
/// older than the primary tracker.
pub fn request_state() -> BoxedStrategy<SimState<u32>> {
    prop_oneof![
        (PRIMARY_TRACKERS, failure_slot(), success_slot()).prop_map(
            |(tracker, last_failure, last_success)| RequestState::Pending {
                tracker,
                last_failure,
                last_success,
            }
        ),
        (PRIMARY_TRACKERS, sim_failure(), success_slot()).prop_map(
            |(tracker, error, last_success)| RequestState::Failed {
                failure: Stamped::new(tracker, error),
                last_success,
            }
        ),
        (PRIMARY_TRACKERS, any::<u32>())
            .prop_map(|(tracker, value)| RequestState::from_success(tracker, value)),
    ]
    .boxed()
}

/// A response script with unique trackers, none newer than `outstanding`.
pub fn response_script(outstanding: u64) -> BoxedStrategy<Vec<SimResponse<u32>>> {
    let trackers: Vec<u64> = (1..=outstanding).collect();
    let max_len = trackers.len().min(8);
    proptest::sample::subsequence(trackers, 0..=max_len)
        .prop_flat_map(|trackers| {
            let results = proptest::collection::vec(sim_result(), trackers.len());
            (Just(trackers), results)
                .prop_map(|(trackers, results)| trackers.into_iter().zip(results).collect())
        })
        .boxed()
}
