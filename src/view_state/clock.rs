use std::cell::Cell;

/// Milliseconds on the host's monotonic clock.
pub type Millis = u64;

pub trait Clock {
    fn now(&self) -> Millis;
}

/// A clock that only moves when told to. Used to drive the view state
/// deterministically.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, by: Millis) -> Millis {
        let next = self.now.get().saturating_add(by);
        self.now.set(next);
        next
    }

    pub fn set(&self, to: Millis) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}
