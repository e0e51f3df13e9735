//! Tidemark Testing Infrastructure
//!
//! Deterministic fixtures for exercising the reconciliation state machine:
//! a monotonic tracker source standing in for the application's request
//! counter, a simulated failure payload standing in for the demo transport's
//! randomized failures, scripted response delivery with seeded reordering
//! and duplication, and proptest strategies for states and response scripts.
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! tidemark-testkit = { path = "../tidemark-testkit" }
//! ```

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod delivery;
pub mod mint;
pub mod sim;
pub mod strategies;

pub use delivery::{drive, Delivery, SimResponse, SimResult, SimState};
pub use mint::TrackerMint;
pub use sim::SimFailure;
