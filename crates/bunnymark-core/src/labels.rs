//! Amortized HUD label text
//!
//! Formatting and laying out text every frame is wasted work at tens of
//! thousands of sprites, so the FPS and bunny-count strings are rebuilt at
//! most once per refresh interval and cached in between.

use std::time::Duration;

use crate::timing::{FpsCounter, RefreshTimer};

/// Cached overlay strings plus the timers that decide when to rebuild them
#[derive(Debug, Clone)]
pub struct HudLabels {
    fps_counter: FpsCounter,
    count_timer: RefreshTimer,
    fps_text: String,
    count_text: Option<String>,
}

impl HudLabels {
    pub fn new(refresh_interval: Duration) -> Self {
        let fps_counter = FpsCounter::new(refresh_interval);
        let fps_text = format_fps(fps_counter.fps());
        Self {
            fps_counter,
            count_timer: RefreshTimer::new(refresh_interval),
            fps_text,
            count_text: None,
        }
    }

    /// Record a frame and rebuild whichever labels are due.
    ///
    /// Returns true if any label text changed this frame.
    pub fn frame(&mut self, now: Duration, bunny_count: usize) -> bool {
        let mut changed = false;

        if let Some(fps) = self.fps_counter.frame(now) {
            self.fps_text = format_fps(fps);
            changed = true;
        }

        if self.count_timer.is_due(now) {
            self.count_text = Some(format_count(bunny_count));
            changed = true;
        }

        changed
    }

    pub fn fps(&self) -> u32 {
        self.fps_counter.fps()
    }

    pub fn fps_text(&self) -> &str {
        &self.fps_text
    }

    /// Bunny count label, `None` until the first refresh
    pub fn count_text(&self) -> Option<&str> {
        self.count_text.as_deref()
    }
}

fn format_fps(fps: u32) -> String {
    format!("FPS: {fps}")
}

fn format_count(count: usize) -> String {
    format!("Bunnies: {count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_initial_labels() {
        let labels = HudLabels::new(ms(1000));
        assert_eq!(labels.fps_text(), "FPS: 60");
        assert_eq!(labels.count_text(), None);
    }

    #[test]
    fn test_labels_refresh_once_per_interval() {
        let mut labels = HudLabels::new(ms(1000));

        assert!(!labels.frame(ms(16), 1));
        assert!(labels.frame(ms(1000), 1001));
        assert_eq!(labels.fps_text(), "FPS: 2");
        assert_eq!(labels.count_text(), Some("Bunnies: 1001"));

        // Count grows but the cached text holds until the next interval
        assert!(!labels.frame(ms(1500), 2001));
        assert_eq!(labels.count_text(), Some("Bunnies: 1001"));

        assert!(labels.frame(ms(2000), 3001));
        assert_eq!(labels.count_text(), Some("Bunnies: 3001"));
        assert_eq!(labels.fps_text(), "FPS: 2");
    }
}
