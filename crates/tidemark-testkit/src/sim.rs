//! Simulated failure payloads.

use serde::{Deserialize, Serialize};

/// Failure payload produced by the simulated transport.
///
/// The machine under test treats failures as opaque domain data; these
/// variants just give tests something shaped like what a real transport
/// would report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SimFailure {
    /// The simulated request exceeded its deadline.
    #[error("request timed out after {after_ms}ms")]
    Timeout {
        /// Milliseconds waited before giving up.
        after_ms: u64,
    },
    /// The simulated transport failed outright.
    #[error("transport error: {reason}")]
    Transport {
        /// Short reason code.
        reason: String,
    },
}

impl SimFailure {
    /// A timeout failure.
    pub fn timeout(after_ms: u64) -> Self {
        Self::Timeout { after_ms }
    }

    /// A transport failure.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_render_for_display() {
        assert_eq!(
            SimFailure::timeout(250).to_string(),
            "request timed out after 250ms"
        );
        assert_eq!(
            SimFailure::transport("refused").to_string(),
            "transport error: refused"
        );
    }
}
