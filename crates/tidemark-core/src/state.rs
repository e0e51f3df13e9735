//! The reconciliation state for a repeatable remote request.
//!
//! `RequestState` tracks the newest known outcome of an asynchronous,
//! fallible, repeatable operation while retaining the last known success and
//! failure for display continuity. It is a plain value: every transition
//! consumes the state and returns the replacement, so the owning container
//! follows the usual single-owner, copy-on-write discipline of UI state.

use serde::{Deserialize, Serialize};

use crate::stamp::Stamped;

/// State of a repeatable remote request, parametrized over the tracker `T`
/// identifying a request instance, the failure payload `E`, and the success
/// payload `A`.
///
/// Exactly one primary fact is active at a time: a request is in flight, the
/// latest response failed, or the latest response succeeded. The retained
/// slots are auxiliary history and only move through [`refresh`] and the
/// response merge.
///
/// [`refresh`]: RequestState::refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestState<T, E, A> {
    /// A request is in flight, identified by `tracker`.
    ///
    /// `tracker` must denote the newest request the caller has issued; the
    /// merge relies on the caller calling [`refresh`] before producing a
    /// response for a newer tracker.
    ///
    /// [`refresh`]: RequestState::refresh
    Pending {
        /// Tracker of the in-flight request.
        tracker: T,
        /// Last known failure, if any.
        last_failure: Option<Stamped<T, E>>,
        /// Last known success, if any.
        last_success: Option<Stamped<T, A>>,
    },
    /// The latest response failed. The last known success, if any, is
    /// retained; no older failure is, since the new one supersedes it.
    Failed {
        /// The failure that resolved the latest request.
        failure: Stamped<T, E>,
        /// Last known success, if any.
        last_success: Option<Stamped<T, A>>,
    },
    /// The latest response succeeded. No failure is retained: once a request
    /// succeeds, prior failures are irrelevant to display.
    Succeeded(Stamped<T, A>),
}

impl<T, E, A> RequestState<T, E, A> {
    /// State for a freshly issued request with no prior history.
    pub fn from_tracker(tracker: T) -> Self {
        Self::Pending {
            tracker,
            last_failure: None,
            last_success: None,
        }
    }

    /// Seed the state from an already-known success.
    pub fn from_success(tracker: T, value: A) -> Self {
        Self::Succeeded(Stamped::new(tracker, value))
    }

    /// Seed the state from an already-known failure.
    pub fn from_failure(tracker: T, error: E) -> Self {
        Self::Failed {
            failure: Stamped::new(tracker, error),
            last_success: None,
        }
    }

    /// Seed the state from an already-known result, dispatching on whether
    /// it is a success or a failure.
    pub fn from_result(tracker: T, result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::from_success(tracker, value),
            Err(error) => Self::from_failure(tracker, error),
        }
    }

    /// Record that a new request has been issued.
    ///
    /// Always transitions to [`Pending`] for `new_tracker`, carrying the
    /// retained history forward: a previous success stays visible while the
    /// new request is in flight, and a previous failure stays reportable.
    /// Refreshing an already-pending state only swaps the tracker identity,
    /// so refreshing twice with the same tracker equals refreshing once.
    ///
    /// [`Pending`]: RequestState::Pending
    #[must_use]
    pub fn refresh(self, new_tracker: T) -> Self {
        match self {
            Self::Succeeded(success) => Self::Pending {
                tracker: new_tracker,
                last_failure: None,
                last_success: Some(success),
            },
            Self::Failed {
                failure,
                last_success,
            } => Self::Pending {
                tracker: new_tracker,
                last_failure: Some(failure),
                last_success,
            },
            Self::Pending {
                last_failure,
                last_success,
                ..
            } => Self::Pending {
                tracker: new_tracker,
                last_failure,
                last_success,
            },
        }
    }

    /// Whether a request is currently in flight.
    ///
    /// View layers typically use this to decide whether to show a loading
    /// indicator.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// The newest known success value, falling back to the retained slot
    /// while pending or failed.
    pub fn success(&self) -> Option<&A> {
        match self {
            Self::Succeeded(success) => Some(&success.payload),
            Self::Failed { last_success, .. } | Self::Pending { last_success, .. } => {
                last_success.as_ref().map(|s| &s.payload)
            }
        }
    }

    /// The newest known failure, falling back to the retained slot while
    /// pending. A succeeded state reports no failure.
    pub fn failure(&self) -> Option<&E> {
        match self {
            Self::Failed { failure, .. } => Some(&failure.payload),
            Self::Pending { last_failure, .. } => last_failure.as_ref().map(|f| &f.payload),
            Self::Succeeded(_) => None,
        }
    }

    /// Tracker of the primary fact: the in-flight request while pending,
    /// otherwise the request whose response resolved the state.
    pub fn tracker(&self) -> &T {
        match self {
            Self::Pending { tracker, .. } => tracker,
            Self::Failed { failure, .. } => &failure.tracker,
            Self::Succeeded(success) => &success.tracker,
        }
    }
}
