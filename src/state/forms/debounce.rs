//! Explicit debounce timer
//!
//! The owner feeds it edit instants with [`Debouncer::schedule`] and polls it
//! from the event loop. Each schedule pushes the deadline out again; the
//! timer fires once, `delay` after the last schedule, unless cancelled.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer relative to `now`
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
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

    const DELAY: Duration = Duration::from_millis(1000);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_idle_timer_never_fires() {
        let mut debouncer = Debouncer::new(DELAY);
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(Instant::now() + ms(5000)));
    }

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(start);
        assert!(!debouncer.poll(start + ms(999)));
        assert!(debouncer.poll(start + ms(1000)));
        assert!(!debouncer.poll(start + ms(1001)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_resets_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(start);
        debouncer.schedule(start + ms(600));
        assert!(!debouncer.poll(start + ms(1000)));
        assert!(!debouncer.poll(start + ms(1599)));
        assert!(debouncer.poll(start + ms(1600)));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(start);
        debouncer.cancel();
        assert!(!debouncer.poll(start + ms(2000)));
    }

    #[test]
    fn test_burst_collapses_to_single_fire() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        let mut fired = Vec::new();
        // Five edits 200ms apart, then poll every 50ms for three seconds
        for step in 0..=60u64 {
            let now = start + ms(step * 50);
            if step % 4 == 0 && step <= 16 {
                debouncer.schedule(now);
            }
            if debouncer.poll(now) {
                fired.push(step * 50);
            }
        }
        assert_eq!(fired, vec![1800]);
    }
}
