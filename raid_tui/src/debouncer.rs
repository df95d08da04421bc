//! Debounced recomputation
//!
//! Each edit pushes the deadline back; stats are recomputed once the user has
//! been idle for the configured quiet period.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Timestamp of the last edit that scheduled a recompute
    last_input_time: Option<Instant>,
    /// Whether a recompute is waiting for the quiet period to pass
    pending_execution: bool,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_input_time: None,
            pending_execution: false,
        }
    }

    pub fn schedule_execution(&mut self) {
        self.schedule_at(Instant::now());
    }

    pub fn schedule_at(&mut self, now: Instant) {
        self.last_input_time = Some(now);
        self.pending_execution = true;
    }

    pub fn should_execute_at(&self, now: Instant) -> bool {
        if !self.pending_execution {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => now.saturating_duration_since(last_time) >= self.delay,
            None => false,
        }
    }

    pub fn mark_executed(&mut self) {
        self.pending_execution = false;
        self.last_input_time = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending_execution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_debouncer_never_fires() {
        let debouncer = Debouncer::new(Duration::from_millis(800));
        assert!(!debouncer.has_pending());
        assert!(!debouncer.should_execute_at(Instant::now() + Duration::from_secs(5)));
    }

    #[test]
    fn test_fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(800));
        let start = Instant::now();
        debouncer.schedule_at(start);

        assert!(!debouncer.should_execute_at(start + Duration::from_millis(799)));
        assert!(debouncer.should_execute_at(start + Duration::from_millis(800)));
    }

    #[test]
    fn test_new_input_pushes_deadline_back() {
        let mut debouncer = Debouncer::new(Duration::from_millis(800));
        let start = Instant::now();
        debouncer.schedule_at(start);
        debouncer.schedule_at(start + Duration::from_millis(500));

        assert!(!debouncer.should_execute_at(start + Duration::from_millis(900)));
        assert!(debouncer.should_execute_at(start + Duration::from_millis(1300)));
    }

    #[test]
    fn test_fires_once_per_burst() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        let start = Instant::now();
        debouncer.schedule_at(start);
        let later = start + Duration::from_millis(200);

        assert!(debouncer.should_execute_at(later));
        debouncer.mark_executed();
        assert!(!debouncer.should_execute_at(later));
        assert!(!debouncer.has_pending());
    }
}
