//! Transport events
//!
//! Event-based communication for UI synchronization. Events are emitted
//! on state transitions and seeks; position itself is poll-driven via
//! [`Transport::tick`](crate::Transport::tick), not event-driven.

use crate::types::TransportState;
use serde::{Deserialize, Serialize};

/// Events emitted by the transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransportEvent {
    /// Transport state changed (playing, paused, stopped)
    StateChanged {
        /// The new transport state
        state: TransportState,
    },

    /// Position jumped due to a seek
    Seeked {
        /// Position after clamping, in seconds
        position: f64,
    },

    /// Playback reached the end of the buffer naturally
    ///
    /// The transport is Stopped and the offset is reset to the start.
    Finished,
}
