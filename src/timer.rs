//! Frame timer: elapsed seconds since the previous `tick`, reset each call.

use std::time::Instant;

pub struct Timer {
    last: Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer { last: Instant::now() }
    }

    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        elapsed
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}
