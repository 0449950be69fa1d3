//! Interval scheduling
//!
//! A simplified Leitner-style doubling scheme: each success doubles the
//! review interval, any failure resets it. Deliberately simpler than
//! SM-2; the hard reset on failure is part of the contract and must not
//! be smoothed.

use forge_core::SrsState;

/// Milliseconds in one day
pub const DAY_MS: i64 = 86_400_000;

/// Compute the scheduling state after one rating
///
/// `previous` is the card's current state, `None` for a card that has
/// never been reviewed. A success schedules the first review one day out
/// and doubles from there, counting a repetition each time; a failure
/// resets to a one-day interval and zero repetitions. The returned
/// `next_review` is `now_ms` plus the new interval in days.
pub fn schedule(previous: Option<&SrsState>, success: bool, now_ms: i64) -> SrsState {
    let current_interval = previous.map_or(0, |srs| srs.interval);
    let current_repetitions = previous.map_or(0, |srs| srs.repetitions);

    let (interval, repetitions) = if success {
        let interval = if current_interval == 0 {
            1
        } else {
            current_interval.saturating_mul(2)
        };
        (interval, current_repetitions.saturating_add(1))
    } else {
        (1, 0)
    };

    SrsState {
        interval,
        repetitions,
        next_review: now_ms + i64::from(interval) * DAY_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn first_success_schedules_one_day_out() {
        let srs = schedule(None, true, NOW);
        assert_eq!(srs.interval, 1);
        assert_eq!(srs.repetitions, 1);
        assert_eq!(srs.next_review, NOW + DAY_MS);
    }

    #[test]
    fn success_doubles_the_interval() {
        let previous = SrsState {
            interval: 4,
            repetitions: 3,
            next_review: NOW,
        };
        let srs = schedule(Some(&previous), true, NOW);
        assert_eq!(srs.interval, 8);
        assert_eq!(srs.repetitions, 4);
        assert_eq!(srs.next_review, NOW + 8 * DAY_MS);
    }

    #[test]
    fn failure_resets_hard() {
        let previous = SrsState {
            interval: 16,
            repetitions: 5,
            next_review: NOW,
        };
        let srs = schedule(Some(&previous), false, NOW);
        assert_eq!(srs.interval, 1);
        assert_eq!(srs.repetitions, 0);
        assert_eq!(srs.next_review, NOW + DAY_MS);
    }

    #[test]
    fn failure_on_a_new_card_matches_the_reset() {
        let srs = schedule(None, false, NOW);
        assert_eq!(srs.interval, 1);
        assert_eq!(srs.repetitions, 0);
    }

    #[test]
    fn interval_sequence_from_new() {
        let mut srs: Option<SrsState> = None;
        let mut intervals = Vec::new();
        let mut repetitions = Vec::new();
        for _ in 0..5 {
            let next = schedule(srs.as_ref(), true, NOW);
            intervals.push(next.interval);
            repetitions.push(next.repetitions);
            srs = Some(next);
        }
        assert_eq!(intervals, vec![1, 2, 4, 8, 16]);
        assert_eq!(repetitions, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn huge_intervals_do_not_overflow() {
        let previous = SrsState {
            interval: u32::MAX,
            repetitions: u32::MAX,
            next_review: NOW,
        };
        let srs = schedule(Some(&previous), true, NOW);
        assert_eq!(srs.interval, u32::MAX);
        assert_eq!(srs.repetitions, u32::MAX);
    }
}
