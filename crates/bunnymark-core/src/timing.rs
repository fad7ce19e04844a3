//! Frame timing: per-frame deltas, interval timers and the FPS counter
//!
//! All timestamps are monotonic `Duration`s since an arbitrary start, so
//! the app can feed `Instant::elapsed()` and tests can feed literals.

use std::time::Duration;

/// Converts successive timestamps into frame deltas in seconds
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    previous: Option<Duration>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the previous tick.
    ///
    /// The first tick yields 0 and a timestamp that went backwards yields 0.
    pub fn tick(&mut self, now: Duration) -> f32 {
        let dt = match self.previous {
            Some(previous) => now.saturating_sub(previous).as_secs_f32(),
            None => 0.0,
        };
        self.previous = Some(now);
        dt
    }
}

/// Fires at most once per `interval`
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    last: Duration,
}

impl RefreshTimer {
    /// Timer whose clock starts at zero, so the first refresh is due once
    /// `interval` has elapsed
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Duration::ZERO,
        }
    }

    /// Returns true and re-arms the timer if at least `interval` has passed
    /// since the last time it fired
    pub fn is_due(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}

/// Counts frames and publishes the count once per interval
#[derive(Debug, Clone)]
pub struct FpsCounter {
    timer: RefreshTimer,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    /// Shown until the first full interval has been measured
    pub const PLACEHOLDER_FPS: u32 = 60;

    pub fn new(interval: Duration) -> Self {
        Self {
            timer: RefreshTimer::new(interval),
            frames: 0,
            fps: Self::PLACEHOLDER_FPS,
        }
    }

    /// Record one frame. Returns the new FPS when a measurement completes.
    pub fn frame(&mut self, now: Duration) -> Option<u32> {
        self.frames += 1;
        if self.timer.is_due(now) {
            self.fps = self.frames;
            self.frames = 0;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last published frames-per-second value
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(ms(5000)), 0.0);
        assert!((clock.tick(ms(5016)) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        clock.tick(ms(100));
        assert_eq!(clock.tick(ms(50)), 0.0);
        // Re-anchored at the earlier timestamp
        assert!((clock.tick(ms(150)) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_refresh_timer_fires_once_per_interval() {
        let mut timer = RefreshTimer::new(ms(1000));
        assert!(!timer.is_due(ms(999)));
        assert!(timer.is_due(ms(1000)));
        assert!(!timer.is_due(ms(1500)));
        assert!(!timer.is_due(ms(1999)));
        assert!(timer.is_due(ms(2000)));
    }

    #[test]
    fn test_fps_counts_frames_in_window() {
        let mut counter = FpsCounter::new(ms(1000));
        assert_eq!(counter.fps(), FpsCounter::PLACEHOLDER_FPS);

        // 30 frames spread over the first second, the 30th lands on 1000ms
        for i in 1..30 {
            assert_eq!(counter.frame(ms(i * 33)), None);
        }
        assert_eq!(counter.frame(ms(1000)), Some(30));
        assert_eq!(counter.fps(), 30);

        for i in 1..=10 {
            counter.frame(ms(1000 + i * 50));
        }
        assert_eq!(counter.fps(), 30);
        assert_eq!(counter.frame(ms(2000)), Some(11));
    }
}
