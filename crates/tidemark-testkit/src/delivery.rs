//! Scripted response delivery with seeded reordering and duplication.
//!
//! Convergence tests need "the same responses, delivered differently". A
//! [`Delivery`] holds the script and hands out deterministic permutations of
//! it, so a failing seed reproduces exactly.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tidemark_core::RequestState;

use crate::sim::SimFailure;

/// Result of one simulated request.
pub type SimResult<A> = Result<A, SimFailure>;

/// One simulated response: the tracker it answers, and its result.
pub type SimResponse<A> = (u64, SimResult<A>);

/// Reconciliation state over simulated trackers and failures.
pub type SimState<A> = RequestState<u64, SimFailure, A>;

/// A scripted set of responses to deliver in various orders.
#[derive(Debug, Clone)]
pub struct Delivery<A> {
    responses: Vec<SimResponse<A>>,
}

impl<A: Clone> Delivery<A> {
    /// Script the given responses.
    pub fn new(responses: Vec<SimResponse<A>>) -> Self {
        Self { responses }
    }

    /// The script exactly as written.
    pub fn in_order(&self) -> Vec<SimResponse<A>> {
        self.responses.clone()
    }

    /// A seeded permutation of the script.
    pub fn shuffled(&self, seed: u64) -> Vec<SimResponse<A>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut responses = self.responses.clone();
        responses.shuffle(&mut rng);
        responses
    }

    /// A seeded permutation of the script with some responses delivered
    /// twice, as a retrying transport might.
    pub fn duplicated_and_shuffled(&self, seed: u64) -> Vec<SimResponse<A>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut responses = self.responses.clone();
        for response in self.responses.iter() {
            if rng.gen_bool(0.5) {
                responses.push(response.clone());
            }
        }
        responses.shuffle(&mut rng);
        responses
    }
}

/// Fold a sequence of responses into a state under the tracker order.
pub fn drive<A>(
    state: SimState<A>,
    responses: impl IntoIterator<Item = SimResponse<A>>,
) -> SimState<A> {
    responses
        .into_iter()
        .fold(state, |state, (tracker, result)| {
            state.with_response(tracker, result)
        })
}
