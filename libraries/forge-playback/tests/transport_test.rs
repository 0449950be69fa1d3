//! Integration tests for the playback transport
//!
//! These tests verify real playback scenarios against a recording sink.
//! No shallow tests - every test verifies meaningful behavior.

use forge_core::{AudioBuffer, SampleRate};
use forge_playback::{AudioSink, Result, Transport, TransportClock, TransportEvent, TransportState};
use std::sync::{Arc, Mutex};

// ===== Test Helpers =====

/// One call observed at the sink boundary
#[derive(Debug, Clone, PartialEq)]
enum SinkCall {
    Start { offset: f64 },
    Stop,
}

/// Sink that records every call for later inspection
struct RecordingSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
}

impl RecordingSink {
    fn new(calls: Arc<Mutex<Vec<SinkCall>>>) -> Self {
        Self { calls }
    }
}

impl AudioSink for RecordingSink {
    fn start(&mut self, _buffer: &AudioBuffer, offset: f64) -> Result<()> {
        self.calls.lock().unwrap().push(SinkCall::Start { offset });
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.calls.lock().unwrap().push(SinkCall::Stop);
        Ok(())
    }
}

/// Clock stepped by hand so every test is deterministic
#[derive(Clone)]
struct ManualClock {
    seconds: Arc<Mutex<f64>>,
}

impl ManualClock {
    fn new() -> Self {
        Self {
            seconds: Arc::new(Mutex::new(0.0)),
        }
    }

    fn advance(&self, secs: f64) {
        *self.seconds.lock().unwrap() += secs;
    }
}

impl TransportClock for ManualClock {
    fn now(&self) -> f64 {
        *self.seconds.lock().unwrap()
    }
}

fn create_test_buffer(duration_secs: usize) -> AudioBuffer {
    AudioBuffer::new(
        vec![vec![0.0; duration_secs * 24_000]],
        SampleRate::PODCAST,
    )
}

fn create_test_transport(
    duration_secs: usize,
) -> (Transport, ManualClock, Arc<Mutex<Vec<SinkCall>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let clock = ManualClock::new();
    let mut transport = Transport::with_clock(
        Box::new(RecordingSink::new(calls.clone())),
        Box::new(clock.clone()),
    );
    transport.load(create_test_buffer(duration_secs)).unwrap();
    (transport, clock, calls)
}

/// Offsets of all `start` calls, in order
fn start_offsets(calls: &Arc<Mutex<Vec<SinkCall>>>) -> Vec<f64> {
    calls
        .lock()
        .unwrap()
        .iter()
        .filter_map(|call| match call {
            SinkCall::Start { offset } => Some(*offset),
            SinkCall::Stop => None,
        })
        .collect()
}

/// Largest number of simultaneously live sources the call log implies
fn max_concurrent_sources(calls: &Arc<Mutex<Vec<SinkCall>>>) -> usize {
    let mut live = 0usize;
    let mut max = 0usize;
    for call in calls.lock().unwrap().iter() {
        match call {
            SinkCall::Start { .. } => {
                live += 1;
                max = max.max(live);
            }
            SinkCall::Stop => live = live.saturating_sub(1),
        }
    }
    max
}

// ===== Integration Tests =====

#[test]
fn test_play_pause_resume_workflow() {
    let (mut transport, clock, calls) = create_test_transport(10);

    // Start in stopped state
    assert_eq!(transport.state(), TransportState::Stopped);

    transport.play().unwrap();
    assert_eq!(transport.state(), TransportState::Playing);

    // Pause three seconds in
    clock.advance(3.0);
    transport.pause().unwrap();
    assert_eq!(transport.state(), TransportState::Paused);
    assert!((transport.position() - 3.0).abs() < 1e-9);

    // Time passing while paused does not move the position
    clock.advance(40.0);
    assert!((transport.position() - 3.0).abs() < 1e-9);

    // Resume continues where the pause left off
    transport.play().unwrap();
    clock.advance(2.0);
    assert!((transport.position() - 5.0).abs() < 1e-9);

    assert_eq!(start_offsets(&calls), vec![0.0, 3.0]);
    assert_eq!(max_concurrent_sources(&calls), 1);
}

#[test]
fn test_every_start_is_preceded_by_a_stop() {
    let (mut transport, _clock, calls) = create_test_transport(10);

    transport.play().unwrap();
    transport.seek(7.0).unwrap();
    transport.pause().unwrap();
    transport.play().unwrap();
    transport.stop().unwrap();
    transport.play().unwrap();

    let log = calls.lock().unwrap();
    for (index, call) in log.iter().enumerate() {
        if matches!(call, SinkCall::Start { .. }) {
            assert!(index > 0, "first sink call must be a stop");
            assert_eq!(log[index - 1], SinkCall::Stop);
        }
    }
    drop(log);
    assert_eq!(max_concurrent_sources(&calls), 1);
}

#[test]
fn test_restart_while_playing_does_not_pause() {
    let (mut transport, clock, calls) = create_test_transport(10);

    transport.play().unwrap();
    clock.advance(3.0);
    transport.play().unwrap();

    // A fresh source starts at the current position, still playing
    assert!(transport.is_playing());
    assert_eq!(start_offsets(&calls), vec![0.0, 3.0]);

    // No pause transition was ever observed
    let events = transport.drain_events();
    assert_eq!(
        events,
        vec![TransportEvent::StateChanged {
            state: TransportState::Playing
        }]
    );

    // And the clock arithmetic stayed continuous
    clock.advance(1.0);
    assert!((transport.position() - 4.0).abs() < 1e-9);
}

#[test]
fn test_seek_while_playing_restarts_immediately() {
    let (mut transport, clock, calls) = create_test_transport(10);

    transport.play().unwrap();
    clock.advance(1.0);
    transport.seek(7.0).unwrap();

    assert!(transport.is_playing());
    assert_eq!(start_offsets(&calls), vec![0.0, 7.0]);

    let events = transport.drain_events();
    assert!(
        !events.iter().any(|event| matches!(
            event,
            TransportEvent::StateChanged {
                state: TransportState::Paused
            }
        )),
        "seek while playing must not pass through paused"
    );
    assert!(events.contains(&TransportEvent::Seeked { position: 7.0 }));

    clock.advance(2.0);
    assert!((transport.position() - 9.0).abs() < 1e-9);
}

#[test]
fn test_seek_while_paused_moves_the_resume_point() {
    let (mut transport, clock, calls) = create_test_transport(10);

    transport.play().unwrap();
    clock.advance(2.0);
    transport.pause().unwrap();

    transport.seek(8.0).unwrap();
    assert_eq!(transport.state(), TransportState::Paused);
    assert!((transport.position() - 8.0).abs() < 1e-9);

    transport.play().unwrap();
    clock.advance(1.0);
    assert!((transport.position() - 9.0).abs() < 1e-9);
    assert_eq!(start_offsets(&calls), vec![0.0, 8.0]);
}

#[test]
fn test_seek_events_report_the_clamped_position() {
    let (mut transport, _clock, _calls) = create_test_transport(10);

    transport.seek(transport.duration() + 100.0).unwrap();
    assert_eq!(
        transport.drain_events(),
        vec![TransportEvent::Seeked { position: 10.0 }]
    );

    transport.seek(-5.0).unwrap();
    assert_eq!(
        transport.drain_events(),
        vec![TransportEvent::Seeked { position: 0.0 }]
    );
}

#[test]
fn test_natural_end_resets_to_start_and_can_replay() {
    let (mut transport, clock, calls) = create_test_transport(2);

    transport.play().unwrap();
    clock.advance(2.5);

    // The finishing tick reports the full duration one last time
    let reported = transport.tick().unwrap();
    assert!((reported - 2.0).abs() < 1e-9);
    assert_eq!(transport.state(), TransportState::Stopped);
    assert_eq!(transport.position(), 0.0);

    let events = transport.drain_events();
    assert_eq!(
        events,
        vec![
            TransportEvent::StateChanged {
                state: TransportState::Playing
            },
            TransportEvent::Finished,
            TransportEvent::StateChanged {
                state: TransportState::Stopped
            },
        ]
    );

    // Replaying starts over from the beginning
    transport.play().unwrap();
    clock.advance(0.5);
    assert!((transport.position() - 0.5).abs() < 1e-9);
    assert_eq!(start_offsets(&calls), vec![0.0, 0.0]);
}

#[test]
fn test_load_while_playing_stops_the_source() {
    let (mut transport, clock, calls) = create_test_transport(10);

    transport.play().unwrap();
    clock.advance(1.0);

    transport.load(create_test_buffer(5)).unwrap();
    assert_eq!(transport.state(), TransportState::Stopped);
    assert_eq!(transport.position(), 0.0);
    assert!((transport.duration() - 5.0).abs() < 1e-9);
    assert_eq!(calls.lock().unwrap().last(), Some(&SinkCall::Stop));

    let events = transport.drain_events();
    assert_eq!(
        events,
        vec![
            TransportEvent::StateChanged {
                state: TransportState::Playing
            },
            TransportEvent::StateChanged {
                state: TransportState::Stopped
            },
        ]
    );
}

#[test]
fn test_stop_rewinds_to_the_start() {
    let (mut transport, clock, calls) = create_test_transport(10);

    transport.play().unwrap();
    clock.advance(4.0);
    transport.stop().unwrap();

    assert_eq!(transport.state(), TransportState::Stopped);
    assert_eq!(transport.position(), 0.0);

    transport.play().unwrap();
    assert_eq!(start_offsets(&calls), vec![0.0, 0.0]);
}

#[test]
fn test_pause_when_not_playing_is_a_no_op() {
    let (mut transport, _clock, calls) = create_test_transport(10);

    transport.pause().unwrap();
    assert_eq!(transport.state(), TransportState::Stopped);
    assert!(calls.lock().unwrap().is_empty());
    assert!(!transport.has_pending_events());
}

#[test]
fn test_dropping_the_transport_stops_a_live_source() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    {
        let mut transport = Transport::with_clock(
            Box::new(RecordingSink::new(calls.clone())),
            Box::new(ManualClock::new()),
        );
        transport.load(create_test_buffer(10)).unwrap();
        transport.play().unwrap();
    }
    assert_eq!(calls.lock().unwrap().last(), Some(&SinkCall::Stop));
    assert_eq!(max_concurrent_sources(&calls), 1);
}

#[test]
fn test_dropping_an_idle_transport_leaves_the_sink_alone() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    {
        let mut transport = Transport::with_clock(
            Box::new(RecordingSink::new(calls.clone())),
            Box::new(ManualClock::new()),
        );
        transport.load(create_test_buffer(10)).unwrap();
    }
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_export_is_independent_of_transport_state() {
    let (mut transport, clock, _calls) = create_test_transport(1);

    let stopped_bytes = transport.export_wav().unwrap();
    assert_eq!(stopped_bytes.len(), 44 + 24_000 * 2);

    transport.play().unwrap();
    clock.advance(0.25);
    let playing_bytes = transport.export_wav().unwrap();
    assert_eq!(stopped_bytes, playing_bytes);
}
