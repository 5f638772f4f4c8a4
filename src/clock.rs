use std::time::{Duration, Instant};

/// Most frames handed out by a single `tick`, so a long stall (a suspended
/// terminal, a slow redraw) does not fast-forward the snake.
const MAX_CATCH_UP: u32 = 5;
const RATE_WINDOW: Duration = Duration::from_secs(1);

/// Turns wall-clock time into whole simulation frames at a fixed rate.
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    last: Instant,
    lag: Duration,
    window: Duration,
    window_frames: u32,
    rate: f64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        FrameClock {
            period: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
            lag: Duration::ZERO,
            window: Duration::ZERO,
            window_frames: 0,
            rate: 0.0,
        }
    }

    /// Frames owed since the previous call.
    pub fn tick(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        self.advance(elapsed)
    }

    fn advance(&mut self, elapsed: Duration) -> u32 {
        self.lag += elapsed;

        let mut frames = 0;
        while self.lag >= self.period && frames < MAX_CATCH_UP {
            self.lag -= self.period;
            frames += 1;
        }
        if frames == MAX_CATCH_UP {
            self.lag = self.lag.min(self.period);
        }

        self.window += elapsed;
        self.window_frames += frames;
        if self.window >= RATE_WINDOW {
            self.rate = self.window_frames as f64 / self.window.as_secs_f64();
            self.window = Duration::ZERO;
            self.window_frames = 0;
        }

        frames
    }

    /// How long until the next frame is due.
    pub fn until_next_frame(&self) -> Duration {
        let pending = self.lag + self.last.elapsed();
        self.period.saturating_sub(pending)
    }

    /// Frames per second measured over the last full second.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_frames_only() {
        let mut clock = FrameClock::new(10);

        assert_eq!(clock.advance(Duration::from_millis(50)), 0);
        assert_eq!(clock.advance(Duration::from_millis(60)), 1);
        assert_eq!(clock.advance(Duration::from_millis(190)), 2);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut clock = FrameClock::new(10);

        assert_eq!(clock.advance(Duration::from_secs(3)), MAX_CATCH_UP);
        // leftover lag is dropped, at most one more frame is owed
        assert_eq!(clock.advance(Duration::ZERO), 1);
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_rate_over_window() {
        let mut clock = FrameClock::new(20);
        assert_eq!(clock.rate(), 0.0);

        for _ in 0..20 {
            clock.advance(Duration::from_millis(50));
        }
        assert!((clock.rate() - 20.0).abs() < 1e-9);
    }
}
