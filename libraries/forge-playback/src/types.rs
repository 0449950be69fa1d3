//! Core types for transport control

use serde::{Deserialize, Serialize};

/// Transport state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// No source active, position at the frozen offset
    Stopped,

    /// A source is live and the clock is running
    Playing,

    /// Source torn down mid-buffer, offset frozen at the pause point
    Paused,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_serializes_as_plain_string() {
        let json = serde_json::to_string(&TransportState::Playing).unwrap();
        assert_eq!(json, "\"Playing\"");
    }
}
