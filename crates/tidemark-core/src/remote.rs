//! Optional adapter lifting the reconciliation state through an
//! "operation never started" case.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::state::RequestState;

/// A [`RequestState`] that may not have been started yet.
///
/// Every operation delegates to the inner state when one is present.
/// Merging a response into a never-started operation is a no-op, and
/// [`refresh`] on one starts it, behaving as [`from_tracker`].
///
/// [`refresh`]: Remote::refresh
/// [`from_tracker`]: Remote::from_tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote<T, E, A>(Option<RequestState<T, E, A>>);

impl<T, E, A> Remote<T, E, A> {
    /// The operation has never been attempted.
    pub const fn not_requested() -> Self {
        Self(None)
    }

    /// Start tracking a freshly issued request with no prior history.
    pub fn from_tracker(tracker: T) -> Self {
        Self(Some(RequestState::from_tracker(tracker)))
    }

    /// Seed from an already-known success.
    pub fn from_success(tracker: T, value: A) -> Self {
        Self(Some(RequestState::from_success(tracker, value)))
    }

    /// Seed from an already-known failure.
    pub fn from_failure(tracker: T, error: E) -> Self {
        Self(Some(RequestState::from_failure(tracker, error)))
    }

    /// Seed from an already-known result.
    pub fn from_result(tracker: T, result: Result<A, E>) -> Self {
        Self(Some(RequestState::from_result(tracker, result)))
    }

    /// Whether the operation has been attempted at least once.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.is_some()
    }

    /// The inner state, if the operation has been attempted.
    pub fn state(&self) -> Option<&RequestState<T, E, A>> {
        self.0.as_ref()
    }

    /// Unwrap into the inner state, if the operation has been attempted.
    pub fn into_state(self) -> Option<RequestState<T, E, A>> {
        self.0
    }

    /// Record that a new request has been issued, starting the operation if
    /// it never was.
    #[must_use]
    pub fn refresh(self, new_tracker: T) -> Self {
        match self.0 {
            None => Self::from_tracker(new_tracker),
            Some(state) => Self(Some(state.refresh(new_tracker))),
        }
    }

    /// Fold a response in under the comparator `cmp`; a no-op if the
    /// operation was never started.
    #[must_use]
    pub fn with_response_by<F>(self, cmp: F, tracker: T, result: Result<A, E>) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        Self(self.0.map(|s| s.with_response_by(cmp, tracker, result)))
    }

    /// [`with_response_by`] with the tracker type's own total order.
    ///
    /// [`with_response_by`]: Remote::with_response_by
    #[must_use]
    pub fn with_response(self, tracker: T, result: Result<A, E>) -> Self
    where
        T: Ord,
    {
        Self(self.0.map(|s| s.with_response(tracker, result)))
    }

    /// Comparator-free merge variant; a no-op if the operation was never
    /// started.
    #[must_use]
    pub fn with_response_eq(self, tracker: T, result: Result<A, E>) -> Self
    where
        T: PartialEq,
    {
        Self(self.0.map(|s| s.with_response_eq(tracker, result)))
    }

    /// Whether a request is currently in flight. Never-started operations
    /// are not pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.0.as_ref().is_some_and(RequestState::is_pending)
    }

    /// The newest known success value, if any.
    pub fn success(&self) -> Option<&A> {
        self.0.as_ref().and_then(RequestState::success)
    }

    /// The newest known failure, if any.
    pub fn failure(&self) -> Option<&E> {
        self.0.as_ref().and_then(RequestState::failure)
    }
}

impl<T, E, A> Default for Remote<T, E, A> {
    fn default() -> Self {
        Self::not_requested()
    }
}

impl<T, E, A> From<RequestState<T, E, A>> for Remote<T, E, A> {
    fn from(state: RequestState<T, E, A>) -> Self {
        Self(Some(state))
    }
}
