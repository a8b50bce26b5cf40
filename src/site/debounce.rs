//! Trailing-edge debounce driven by explicit instants.

use std::time::{Duration, Instant};

/// Coalesces bursts of calls into one firing, `wait` after the last call.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Register a call, pushing the deadline out to `now + wait`.
    pub fn call(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(10);

    #[test]
    fn burst_fires_once_after_last_call() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WAIT);
        for offset in 0..5 {
            debouncer.call(start + Duration::from_millis(offset * 4));
        }
        let last = start + Duration::from_millis(16);
        assert!(!debouncer.poll(last + Duration::from_millis(9)));
        assert!(debouncer.poll(last + WAIT));
        assert!(!debouncer.poll(last + WAIT * 2));
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(WAIT);
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(Instant::now() + WAIT));
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WAIT);
        debouncer.call(start);
        assert!(debouncer.poll(start + WAIT));
        debouncer.call(start + WAIT * 3);
        assert!(debouncer.is_pending());
        assert!(debouncer.poll(start + WAIT * 4));
    }
}
