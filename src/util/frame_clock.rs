//! Frame timing for the per-frame tick.

use web_time::{Duration, Instant};

/// Frame delta source with FPS smoothing.
///
/// Produces the elapsed time the integrator expects, capped so a stalled
/// frame (backgrounded tab, debugger pause) cannot produce a huge jump.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Largest delta ever reported
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Start a clock that never reports more than `max_delta_secs`.
    #[must_use]
    pub fn new(max_delta_secs: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta: Duration::from_secs_f32(max_delta_secs.max(0.0)),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Mark a frame boundary and return the clamped delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    /// Fold an elapsed duration into the FPS average and clamp it.
    fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_delta).as_secs_f32()
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stalls_are_clamped() {
        let mut clock = FrameClock::new(0.1);
        let stalled = clock.record(Duration::from_secs(3));
        assert!((stalled - 0.1).abs() < 1e-6, "dt = {stalled}");
        let dt = clock.record(Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let mut clock = FrameClock::new(0.1);
        for _ in 0..200 {
            let _ = clock.record(Duration::from_millis(20));
        }
        assert!((clock.fps() - 50.0).abs() < 0.5, "fps = {}", clock.fps());
    }

    #[test]
    fn real_ticks_are_non_negative() {
        let mut clock = FrameClock::new(0.1);
        let dt = clock.tick();
        assert!(dt >= 0.0 && dt < 0.1 + 1e-6);
    }
}
