//! Wall-clock gate for progress output.

use std::time::{Duration, Instant};

/// Minimum delay between two progress updates.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(200);

/// Opens at most once per interval.
///
/// Purely cosmetic: nothing but progress output depends on it.
#[derive(Debug, Clone)]
pub struct ProgressGate {
    interval: Duration,
    last: Instant,
}

impl ProgressGate {
    /// Creates a gate whose interval starts now.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// Returns `true` if more than one interval elapsed since it last opened.
    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    /// Same as [`ProgressGate::ready`] with an explicit clock reading.
    pub fn ready_at(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) > self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}

impl Default for ProgressGate {
    fn default() -> Self {
        Self::new(PROGRESS_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_once_per_interval() {
        let start = Instant::now();
        let mut gate = ProgressGate {
            interval: Duration::from_millis(200),
            last: start,
        };

        assert!(!gate.ready_at(start + Duration::from_millis(100)));
        assert!(!gate.ready_at(start + Duration::from_millis(200)));
        assert!(gate.ready_at(start + Duration::from_millis(201)));
        assert!(!gate.ready_at(start + Duration::from_millis(300)));
        assert!(gate.ready_at(start + Duration::from_millis(402)));
    }

    #[test]
    fn clock_going_backwards_keeps_gate_closed() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut gate = ProgressGate {
            interval: Duration::from_millis(10),
            last: start,
        };
        assert!(!gate.ready_at(start - Duration::from_millis(500)));
    }

    #[test]
    fn zero_interval_opens_on_elapsed_time() {
        let mut gate = ProgressGate::new(Duration::ZERO);
        let later = Instant::now() + Duration::from_millis(1);
        assert!(gate.ready_at(later));
    }
}
