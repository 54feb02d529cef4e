//! Platform abstraction layer
//!
//! Handles the parts a windowing backend would supply:
//! - Frame timing ([`FrameClock`])
//! - Discrete keyboard events ([`InputEvent`])

use std::thread;
use std::time::{Duration, Instant};

/// Longest frame the simulation will accept, in seconds
pub const MAX_FRAME_DT: f32 = 0.1;

/// Discrete keyboard events the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or Escape
    Quit,
    /// F5 toggles the bounding-box overlay
    ToggleDebug,
    /// Space fires the player's cannon
    Fire,
    /// Enter restarts after game over
    Confirm,
}

impl InputEvent {
    /// Map a key name to its event
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "q" => Some(InputEvent::Quit),
            "F5" => Some(InputEvent::ToggleDebug),
            " " | "Space" => Some(InputEvent::Fire),
            "Enter" | "Return" => Some(InputEvent::Confirm),
            _ => None,
        }
    }
}

/// Monotonic frame limiter
#[derive(Debug)]
pub struct FrameClock {
    frame_time: Duration,
    last: Instant,
}

impl FrameClock {
    /// `fps_limit` of zero disables the cap
    pub fn new(fps_limit: u32) -> Self {
        let frame_time = if fps_limit == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / fps_limit as f64)
        };
        Self {
            frame_time,
            last: Instant::now(),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Sleep out the rest of the frame and return the seconds since the
    /// previous tick, capped at [`MAX_FRAME_DT`]
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame_time {
            thread::sleep(self.frame_time - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_respects_frame_cap() {
        let mut clock = FrameClock::new(100);
        let dt = clock.tick();
        assert!(dt >= 0.009);
        assert!(dt <= MAX_FRAME_DT);
    }

    #[test]
    fn test_uncapped_clock() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.frame_time(), Duration::ZERO);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(InputEvent::from_key("Enter"), Some(InputEvent::Confirm));
        assert_eq!(InputEvent::from_key(" "), Some(InputEvent::Fire));
        assert_eq!(InputEvent::from_key("F5"), Some(InputEvent::ToggleDebug));
        assert_eq!(InputEvent::from_key("x"), None);
    }
}
