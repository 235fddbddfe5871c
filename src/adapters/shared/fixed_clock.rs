use crate::ports::ClockPort;
use parking_lot::Mutex;

/// Clock that reports a settable instant.
pub struct FixedClock {
    now: Mutex<f64>,
}

impl FixedClock {
    pub fn new(epoch_ms: f64) -> Self {
        Self {
            now: Mutex::new(epoch_ms),
        }
    }

    pub fn set(&self, epoch_ms: f64) {
        *self.now.lock() = epoch_ms;
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> f64 {
        *self.now.lock()
    }
}
