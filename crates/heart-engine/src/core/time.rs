/// Turns display-refresh timestamps into per-frame delta times.
///
/// Timestamps arrive in milliseconds (as `requestAnimationFrame` reports them);
/// deltas are returned in seconds. The first tick after construction or
/// [`reset`](Self::reset) yields zero.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous tick, in seconds.
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record a new frame timestamp. Returns seconds elapsed since the previous one.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let now = timestamp_ms / 1000.0;
        // Clamp so a timestamp source that steps backwards never yields negative time.
        let dt = self.last.map_or(0.0, |last| (now - last).max(0.0));
        self.last = Some(now);
        dt
    }

    /// Forget the previous timestamp, e.g. after the loop was stopped.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Time of the last tick in seconds, if any.
    pub fn last(&self) -> Option<f64> {
        self.last
    }
}
