use std::time::{Duration, Instant};

/// Run/pause state and timing for automatic stepping.
#[derive(Clone, Copy, Debug)]
pub struct Cadence {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Changes the interval, restarting the cycle if running.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if self.is_running() {
            self.start(now);
        }
    }

    /// Applies a new interval from a speed control. Returns true when the
    /// caller should step immediately: running, and the control has settled.
    pub fn retime(&mut self, interval: Duration, now: Instant, settled: bool) -> bool {
        self.set_interval(interval, now);
        self.is_running() && settled
    }

    /// True at most once per interval while running.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(t) if now >= t => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|t| t.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_paused_never_due() {
        let now = Instant::now();
        let mut c = Cadence::new(10 * MS);
        assert!(!c.is_running());
        assert!(!c.due(now + 100 * MS));
        assert_eq!(c.until_due(now), None);
    }

    #[test]
    fn test_due_once_per_interval() {
        let now = Instant::now();
        let mut c = Cadence::new(10 * MS);
        c.start(now);
        assert!(!c.due(now + 5 * MS));
        assert_eq!(c.until_due(now + 5 * MS), Some(5 * MS));
        assert!(c.due(now + 10 * MS));
        assert!(!c.due(now + 15 * MS));
        assert!(c.due(now + 20 * MS));
        c.stop();
        assert!(!c.due(now + 100 * MS));
    }

    #[test]
    fn test_set_interval_restarts() {
        let now = Instant::now();
        let mut c = Cadence::new(100 * MS);
        c.set_interval(50 * MS, now);
        assert!(!c.is_running());
        c.start(now);
        c.set_interval(20 * MS, now + 10 * MS);
        assert!(!c.due(now + 25 * MS));
        assert!(c.due(now + 30 * MS));
    }

    #[test]
    fn test_retime_steps_once_settled() {
        let now = Instant::now();
        let mut c = Cadence::new(100 * MS);
        assert!(!c.retime(50 * MS, now, true));
        c.start(now);
        for i in 1..=3 {
            assert!(!c.retime(i * 10 * MS, now + i * MS, false));
        }
        assert_eq!(c.until_due(now + 3 * MS), Some(30 * MS));
        assert!(c.retime(40 * MS, now + 5 * MS, true));
        assert!(!c.due(now + 44 * MS));
        assert!(c.due(now + 45 * MS));
    }
}
