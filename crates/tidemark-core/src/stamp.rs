//! Tracker-stamped payloads and the retained-slot update rule.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A payload stamped with the tracker of the response that produced it.
///
/// Every retained history slot carries its provenance so consumers can tell
/// which request a displayed value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamped<T, P> {
    /// Tracker of the response that produced this payload.
    pub tracker: T,
    /// The retained payload itself.
    pub payload: P,
}

impl<T, P> Stamped<T, P> {
    /// Stamp a payload with its response tracker.
    pub fn new(tracker: T, payload: P) -> Self {
        Self { tracker, payload }
    }
}

/// Fold an incoming stamped payload into a retained slot.
///
/// An empty slot is always filled. A filled slot is replaced only when the
/// incoming tracker is strictly newer than the retained one; an equal or
/// older incoming tracker leaves the slot untouched, which is what makes
/// repeated delivery of the same response a no-op.
pub(crate) fn update_slot<T, P, F>(
    cmp: &F,
    slot: Option<Stamped<T, P>>,
    incoming: Stamped<T, P>,
) -> Option<Stamped<T, P>>
where
    F: Fn(&T, &T) -> Ordering,
{
    match slot {
        None => Some(incoming),
        Some(held) => {
            if cmp(&held.tracker, &incoming.tracker) == Ordering::Less {
                Some(incoming)
            } else {
                Some(held)
            }
        }
    }
}
