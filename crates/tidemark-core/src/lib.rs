//! Tidemark Core - ordering-aware request reconciliation
//!
//! This crate tracks the state of an asynchronous, fallible, repeatable
//! operation (e.g. "fetch the data backing the current view") in the face of
//! out-of-order and duplicated responses, without losing previously obtained
//! results.
//!
//! # Model
//!
//! - [`RequestState`]: the tagged state holding at most one of each: an
//!   outstanding request, a last known failure, a last known success.
//! - Response merge ([`RequestState::with_response_by`] and friends): folds
//!   a `(tracker, result)` pair into the state under a caller-supplied total
//!   order over trackers.
//! - [`RequestState::refresh`]: records that a new request was issued,
//!   carrying retained history forward.
//! - [`Remote`]: the same machine lifted through an "operation never
//!   started" case.
//!
//! # Guarantees
//!
//! For responses the caller could legitimately produce (trackers no newer
//! than the outstanding request), the merge is commutative across
//! independent responses and idempotent under duplicated delivery, so the
//! surrounding system is free to deliver responses in any order, more than
//! once. The machine performs no I/O, scheduling, or retries; it is a pure
//! value transformation invoked by the caller whenever a response arrives or
//! a request is issued.
//!
//! Trackers are opaque here. How they are minted and what makes one newer
//! than another is entirely the caller's business; the merge only ever asks
//! the supplied comparator. An inconsistent comparator degrades to
//! incorrect-but-defined states, never to a panic.

#![forbid(unsafe_code)]

/// Tracker-stamped payloads used by every retained history slot.
pub mod stamp;

/// The reconciliation state, its constructors, refresh, and accessors.
pub mod state;

/// The response-merge fold and its comparator-free variant.
pub mod merge;

/// Optional adapter for operations that may never have started.
pub mod remote;

pub use remote::Remote;
pub use stamp::Stamped;
pub use state::RequestState;
