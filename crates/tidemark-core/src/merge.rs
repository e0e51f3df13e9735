//! The response-merge fold.
//!
//! Responses may arrive out of order, duplicated, or for requests that have
//! long since been superseded. The merge folds each `(tracker, result)` pair
//! into the state under a caller-supplied total order over trackers, so that
//! for any set of responses the caller could legitimately produce, delivery
//! order and duplication do not change the final state.
//!
//! The mechanism itself never fails. Out-of-contract inputs (a response
//! whose tracker is ahead of the outstanding request, or an inconsistent
//! comparator) degrade to a silent no-op or an incorrect-but-defined
//! transition rather than an error: a pure fold cannot tell a caller bug
//! from a benign weird ordering, and must not take the host down either way.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::stamp::{update_slot, Stamped};
use crate::state::RequestState;

impl<T, E, A> RequestState<T, E, A> {
    /// Fold an incoming response into the state under the comparator `cmp`.
    ///
    /// While [`Pending`] for tracker `t`:
    /// - a response for `t` resolves the state: success discards all
    ///   retained history, failure carries the last known success forward
    ///   and supersedes any retained failure;
    /// - a response older than `t` lands in the matching retained slot only
    ///   if it is newer than what the slot already holds;
    /// - a response newer than `t` claims to come from a request that was
    ///   never issued and is ignored unchanged.
    ///
    /// While [`Failed`]: success responses go through the retained-slot rule
    /// on the last known success; failure responses are unconditionally
    /// discarded with no order check, since no request is outstanding and a
    /// newer failure could only reach a caller in the wrong state.
    ///
    /// While [`Succeeded`]: every response is ignored. Nothing can be
    /// fresher than the current success and no request is outstanding.
    ///
    /// [`Pending`]: RequestState::Pending
    /// [`Failed`]: RequestState::Failed
    /// [`Succeeded`]: RequestState::Succeeded
    #[must_use]
    pub fn with_response_by<F>(self, cmp: F, tracker: T, result: Result<A, E>) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        match self {
            Self::Pending {
                tracker: current,
                last_failure,
                last_success,
            } => match cmp(&tracker, &current) {
                Ordering::Equal => match result {
                    Ok(value) => Self::Succeeded(Stamped::new(tracker, value)),
                    Err(error) => Self::Failed {
                        failure: Stamped::new(tracker, error),
                        last_success,
                    },
                },
                Ordering::Less => match result {
                    Ok(value) => {
                        trace!("retaining stale success response");
                        Self::Pending {
                            tracker: current,
                            last_failure,
                            last_success: update_slot(
                                &cmp,
                                last_success,
                                Stamped::new(tracker, value),
                            ),
                        }
                    }
                    Err(error) => {
                        trace!("retaining stale failure response");
                        Self::Pending {
                            tracker: current,
                            last_failure: update_slot(
                                &cmp,
                                last_failure,
                                Stamped::new(tracker, error),
                            ),
                            last_success,
                        }
                    }
                },
                Ordering::Greater => {
                    // Either the caller forgot to refresh before producing
                    // this response, or the comparator is broken. Nothing to
                    // validate against, so ignore rather than guess.
                    debug!("response tracker ahead of the outstanding request, ignoring");
                    Self::Pending {
                        tracker: current,
                        last_failure,
                        last_success,
                    }
                }
            },
            Self::Failed {
                failure,
                last_success,
            } => match result {
                Ok(value) => Self::Failed {
                    failure,
                    last_success: update_slot(&cmp, last_success, Stamped::new(tracker, value)),
                },
                Err(_) => {
                    debug!("failure response with no request outstanding, ignoring");
                    Self::Failed {
                        failure,
                        last_success,
                    }
                }
            },
            Self::Succeeded(success) => {
                trace!("response after success, ignoring");
                Self::Succeeded(success)
            }
        }
    }

    /// [`with_response_by`] with the tracker type's own total order.
    ///
    /// [`with_response_by`]: RequestState::with_response_by
    #[must_use]
    pub fn with_response(self, tracker: T, result: Result<A, E>) -> Self
    where
        T: Ord,
    {
        self.with_response_by(T::cmp, tracker, result)
    }

    /// Comparator-free variant of the merge, for callers that can only tell
    /// trackers apart, not rank them.
    ///
    /// While [`Pending`], a response for the outstanding tracker resolves
    /// the state exactly as [`with_response_by`] does; a response for any
    /// other tracker is treated as unconditionally informative and
    /// overwrites the matching retained slot without an is-it-newer check.
    /// Responses received while [`Succeeded`] or [`Failed`] are ignored
    /// entirely. Precision traded for simplicity: without an order, a stale
    /// retained value can be replaced by a staler one.
    ///
    /// [`Pending`]: RequestState::Pending
    /// [`Succeeded`]: RequestState::Succeeded
    /// [`Failed`]: RequestState::Failed
    /// [`with_response_by`]: RequestState::with_response_by
    #[must_use]
    pub fn with_response_eq(self, tracker: T, result: Result<A, E>) -> Self
    where
        T: PartialEq,
    {
        match self {
            Self::Pending {
                tracker: current,
                last_failure,
                last_success,
            } => {
                if tracker == current {
                    match result {
                        Ok(value) => Self::Succeeded(Stamped::new(tracker, value)),
                        Err(error) => Self::Failed {
                            failure: Stamped::new(tracker, error),
                            last_success,
                        },
                    }
                } else {
                    match result {
                        Ok(value) => Self::Pending {
                            tracker: current,
                            last_failure,
                            last_success: Some(Stamped::new(tracker, value)),
                        },
                        Err(error) => Self::Pending {
                            tracker: current,
                            last_failure: Some(Stamped::new(tracker, error)),
                            last_success,
                        },
                    }
                }
            }
            terminal => {
                trace!("response with no request outstanding, ignoring");
                terminal
            }
        }
    }
}
