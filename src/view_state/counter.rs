use super::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    /// Triggered, waiting for the first frame to stamp the start time
    Armed,
    Running { started_at: Millis },
    Done,
}

/// Counts from 0 up to `target` over `duration` once triggered. A counter
/// only ever runs once.
#[derive(Debug, Clone)]
pub struct Counter {
    target: u64,
    duration: Millis,
    current: u64,
    phase: CounterPhase,
}

impl Counter {
    pub fn new(target: u64, duration: Millis) -> Self {
        Self {
            target,
            duration,
            current: 0,
            phase: CounterPhase::Idle,
        }
    }

    /// Returns true if this call armed the counter.
    pub fn trigger(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Armed;
        true
    }

    pub fn tick(&mut self, now: Millis) -> u64 {
        let started_at = match self.phase {
            CounterPhase::Idle | CounterPhase::Done => return self.current,
            CounterPhase::Armed => {
                self.phase = CounterPhase::Running { started_at: now };
                now
            }
            CounterPhase::Running { started_at } => started_at,
        };
        let elapsed = now.saturating_sub(started_at);
        if elapsed >= self.duration {
            self.current = self.target;
            self.phase = CounterPhase::Done;
        } else {
            let value = u128::from(self.target) * u128::from(elapsed) / u128::from(self.duration);
            self.current = value as u64;
        }
        self.current
    }

    pub fn value(&self) -> u64 {
        self.current
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn started_at(&self) -> Option<Millis> {
        match self.phase {
            CounterPhase::Running { started_at } => Some(started_at),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == CounterPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_triggered() {
        let mut c = Counter::new(10, 2000);
        assert_eq!(c.tick(5000), 0);
        assert_eq!(c.phase(), CounterPhase::Idle);
    }

    #[test]
    fn test_counts_to_exact_target() {
        let mut c = Counter::new(10, 2000);
        assert!(c.trigger());
        assert_eq!(c.tick(1000), 0);
        assert_eq!(c.started_at(), Some(1000));
        assert_eq!(c.tick(1199), 0);
        assert_eq!(c.tick(1200), 1);
        assert_eq!(c.tick(2000), 5);
        assert_eq!(c.tick(2999), 9);
        assert_eq!(c.tick(3000), 10);
        assert!(c.is_done());
        assert_eq!(c.tick(90_000), 10);
    }

    #[test]
    fn test_never_overshoots_or_goes_backwards() {
        let mut c = Counter::new(10, 2000);
        c.trigger();
        let mut last = 0;
        for t in (0..5000).step_by(7) {
            let v = c.tick(t);
            assert!(v <= 10);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(last, 10);
    }

    #[test]
    fn test_does_not_restart() {
        let mut c = Counter::new(3, 100);
        c.trigger();
        c.tick(0);
        c.tick(100);
        assert!(c.is_done());
        assert!(!c.trigger());
        assert_eq!(c.tick(150), 3);
        assert_eq!(c.phase(), CounterPhase::Done);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_frame() {
        let mut c = Counter::new(42, 0);
        c.trigger();
        assert_eq!(c.tick(7), 42);
        assert!(c.is_done());
    }

    #[test]
    fn test_large_targets_do_not_overflow() {
        let mut c = Counter::new(u64::MAX, 2000);
        c.trigger();
        c.tick(0);
        assert_eq!(c.tick(1000), u64::MAX / 2);
        assert_eq!(c.tick(2000), u64::MAX);
    }
}
