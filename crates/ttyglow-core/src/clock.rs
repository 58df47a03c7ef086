//! Breathing animation driven by the frame counter.
//!
//! Brightness follows a raised cosine over [`CYCLE_FRAMES`] frames, starting
//! at its peak on frame 0 and bottoming out half a cycle later.

use std::f64::consts::TAU;

/// Frames in one full breathing cycle.
pub const CYCLE_FRAMES: u64 = 60;

/// Dimmest brightness the background reaches.
pub const MIN_BRIGHTNESS: f64 = 0.2;

/// Brightest the background gets.
pub const MAX_BRIGHTNESS: f64 = 0.8;

/// Map a frame counter to a brightness in `[MIN_BRIGHTNESS, MAX_BRIGHTNESS]`.
///
/// The counter is reduced modulo [`CYCLE_FRAMES`] before the cosine so that
/// `brightness(f) == brightness(f + CYCLE_FRAMES)` holds exactly.
pub fn brightness(frame: u64) -> f64 {
    let phase = (frame % CYCLE_FRAMES) as f64 / CYCLE_FRAMES as f64;
    let wave = ((TAU * phase).cos() + 1.0) / 2.0;
    MIN_BRIGHTNESS + (MAX_BRIGHTNESS - MIN_BRIGHTNESS) * wave
}

/// Monotonic frame counter owned by the run loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameCounter(u64);

impl FrameCounter {
    pub fn new() -> Self {
        Self(0)
    }

    /// Current frame number.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Brightness for the current frame.
    pub fn brightness(self) -> f64 {
        brightness(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn peak_at_frame_zero() {
        assert!(approx(brightness(0), 0.8));
    }

    #[test]
    fn trough_at_half_cycle() {
        assert!(approx(brightness(30), 0.2));
    }

    #[test]
    fn midpoint_at_quarter_cycle() {
        assert!(approx(brightness(15), 0.5));
        assert!(approx(brightness(45), 0.5));
    }

    #[test]
    fn counter_starts_at_zero_and_advances() {
        let mut counter = FrameCounter::new();
        assert_eq!(counter.get(), 0);
        assert!(approx(counter.brightness(), 0.8));
        for _ in 0..30 {
            counter.advance();
        }
        assert_eq!(counter.get(), 30);
        assert!(approx(counter.brightness(), 0.2));
    }

    #[test]
    fn counter_wraps_instead_of_overflowing() {
        let mut counter = FrameCounter(u64::MAX);
        counter.advance();
        assert_eq!(counter.get(), 0);
    }

    proptest! {
        #[test]
        fn periodic_over_one_cycle(frame in 0u64..u64::MAX - CYCLE_FRAMES) {
            prop_assert_eq!(brightness(frame), brightness(frame + CYCLE_FRAMES));
        }

        #[test]
        fn stays_within_bounds(frame in any::<u64>()) {
            let b = brightness(frame);
            prop_assert!((MIN_BRIGHTNESS - 1e-12..=MAX_BRIGHTNESS + 1e-12).contains(&b));
        }
    }
}
