//! Frame timing: turns timestamps into safe simulation deltas

/// Computes the delta between consecutive frame timestamps.
///
/// The first tick yields zero. A timestamp that goes backwards yields zero,
/// and a delta above `max_delta` is clamped, so the simulation never sees a
/// negative or runaway step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    max_delta: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last: None,
            max_delta,
        }
    }

    /// Feed the current timestamp in seconds and get the delta to simulate.
    pub fn tick(&mut self, now: f64) -> f32 {
        if !now.is_finite() {
            log::warn!("ignoring non-finite frame timestamp {now}");
            return 0.0;
        }

        let Some(last) = self.last.replace(now) else {
            return 0.0;
        };

        let delta = (now - last) as f32;
        if delta < 0.0 {
            log::warn!("frame clock went backwards by {:.6}s, skipping step", -delta);
            0.0
        } else if delta > self.max_delta {
            log::warn!(
                "frame delta {:.4}s clamped to {:.4}s",
                delta,
                self.max_delta
            );
            self.max_delta
        } else {
            delta
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
