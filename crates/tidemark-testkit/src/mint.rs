//! Monotonic tracker minting.

/// Mints strictly increasing `u64` trackers.
///
/// The state machine leaves tracker generation to the application; in the
/// original demo it is a global request counter. Tests get the same thing
/// here, with the counter owned by the test.
#[derive(Debug, Default, Clone)]
pub struct TrackerMint {
    next: u64,
}

impl TrackerMint {
    /// A mint whose first issued tracker is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next tracker.
    pub fn issue(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    /// The most recently issued tracker, if any.
    pub fn last(&self) -> Option<u64> {
        (self.next > 0).then_some(self.next)
    }
}
