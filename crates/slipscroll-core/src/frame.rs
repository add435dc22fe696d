//! Frame clock
//!
//! Fixed-rate tick source for the self-driving render loop. Between frames
//! the loop suspends by sleeping out the remainder of the frame interval,
//! yielding control back to the host.

use std::thread;
use std::time::{Duration, Instant};

/// Cooperative fixed-fps pacer.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    /// Create a clock ticking at `fps`. An fps of 0 falls back to ~60.
    pub fn new(fps: u16) -> Self {
        let interval = if fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / fps as u64)
        };
        Self {
            interval,
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleep out the remainder of the current frame.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_tick {
            let elapsed = now.duration_since(last);
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        } else {
            thread::sleep(self.interval);
        }
        self.last_tick = Some(Instant::now());
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_fps() {
        assert_eq!(FrameClock::new(60).interval(), Duration::from_millis(16));
        assert_eq!(FrameClock::new(50).interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_zero_fps_fallback() {
        assert_eq!(FrameClock::new(0).interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_wait_paces_frames() {
        let mut clock = FrameClock::new(200);
        let start = Instant::now();
        clock.wait();
        clock.wait();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
