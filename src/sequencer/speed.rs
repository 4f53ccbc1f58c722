// SPDX-License-Identifier: MPL-2.0
//! Playback speed domain type for the demo timeline.
//!
//! This module provides a type-safe wrapper for the virtual-clock speed
//! multiplier, ensuring it is always within the valid range (0.25x - 4.0x).

use crate::config::{DEFAULT_PLAYBACK_SPEED, MAX_PLAYBACK_SPEED, MIN_PLAYBACK_SPEED};
use std::time::Duration;

/// Timeline speed multiplier, guaranteed to be within 0.25x - 4.0x.
///
/// Speed only scales the virtual clock; it never reorders script steps.
///
/// # Example
///
/// ```
/// use review_flow::sequencer::PlaybackSpeed;
///
/// let speed = PlaybackSpeed::new(2.0);
/// assert_eq!(speed.value(), 2.0);
///
/// // Values outside range are clamped
/// let too_fast = PlaybackSpeed::new(100.0);
/// assert_eq!(too_fast.value(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f32);

impl PlaybackSpeed {
    /// Creates a new playback speed, clamping to valid range.
    #[must_use]
    pub fn new(speed: f32) -> Self {
        Self(speed.clamp(MIN_PLAYBACK_SPEED, MAX_PLAYBACK_SPEED))
    }

    /// Returns the speed value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Scales a wall-clock delta into virtual time.
    #[must_use]
    pub fn scale(self, delta: Duration) -> Duration {
        delta.mul_f32(self.0)
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_SPEED)
    }
}
