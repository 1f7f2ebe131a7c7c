//! Debounce scheduler
//!
//! A small state machine that coalesces bursts of input into one value per
//! pause. It owns no timer: the caller sleeps until [`Debouncer::deadline`]
//! and then calls [`Debouncer::poll`].
//!
//! Ties are resolved in favour of the timer: once `now >= deadline` the
//! pending value has fired, even if nobody polled yet. A `schedule` arriving
//! at that point hands the expired value back before arming the new one, so
//! every armed value fires at most once and none is lost.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Clone, Debug, PartialEq)]
enum DebounceState<T> {
    Idle,
    Armed { deadline: Instant, pending: T },
}

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    state: DebounceState<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the delay from `now`.
    ///
    /// Returns the previously armed value if its deadline had already passed.
    pub fn schedule(&mut self, value: T, now: Instant) -> Option<T> {
        let expired = self.poll(now);
        self.state = DebounceState::Armed {
            deadline: now + self.delay,
            pending: value,
        };
        expired
    }

    /// Take the pending value if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(
            &self.state,
            DebounceState::Armed { deadline, .. } if *deadline <= now
        );
        if due {
            self.cancel()
        } else {
            None
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        match &self.state {
            DebounceState::Armed { deadline, .. } => Some(*deadline),
            DebounceState::Idle => None,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, DebounceState::Armed { .. })
    }

    pub fn cancel(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Armed { pending, .. } => Some(pending),
            DebounceState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_fires_once_with_last_value() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));

        for (offset, value) in [(0, "L"), (50, "Lo"), (100, "Lon"), (150, "Lond")] {
            assert_eq!(debouncer.schedule(value, t0 + ms(offset)), None);
        }

        assert_eq!(debouncer.deadline(), Some(t0 + ms(450)));
        assert_eq!(debouncer.poll(t0 + ms(449)), None);
        assert_eq!(debouncer.poll(t0 + ms(450)), Some("Lond"));
        assert_eq!(debouncer.poll(t0 + ms(451)), None);
        assert!(!debouncer.is_armed());
    }

    #[test]
    fn test_schedule_at_expiry_fires_previous_once() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.schedule("Par", t0);

        let expired = debouncer.schedule("Paris", t0 + ms(300));

        assert_eq!(expired, Some("Par"));
        assert_eq!(debouncer.deadline(), Some(t0 + ms(600)));
        assert_eq!(debouncer.poll(t0 + ms(600)), Some("Paris"));
    }

    #[test]
    fn test_schedule_after_poll_at_expiry_does_not_double_fire() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.schedule("Par", t0);

        assert_eq!(debouncer.poll(t0 + ms(300)), Some("Par"));
        assert_eq!(debouncer.schedule("Paris", t0 + ms(300)), None);
        assert_eq!(debouncer.poll(t0 + ms(599)), None);
    }

    #[test]
    fn test_schedule_just_before_expiry_restarts() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.schedule("Ber", t0);

        assert_eq!(debouncer.schedule("Berl", t0 + ms(299)), None);
        assert_eq!(debouncer.poll(t0 + ms(300)), None);
        assert_eq!(debouncer.poll(t0 + ms(599)), Some("Berl"));
    }

    #[test]
    fn test_cancel_returns_pending() {
        let mut debouncer = Debouncer::new(ms(300));
        assert_eq!(debouncer.cancel(), None);

        debouncer.schedule(7, Instant::now());
        assert_eq!(debouncer.cancel(), Some(7));
        assert_eq!(debouncer.deadline(), None);
    }
}
