//! Spring-driven scalar used for drag emphasis and tilt recovery
//!
//! Gesture handlers only set targets; the frame subscription ticks the
//! springs and views read the interpolated value.

use std::time::Instant;

use iced_anim::Animated;
use iced_anim::spring::Motion;

/// A single animated `f32`
#[derive(Debug)]
pub struct SpringValue {
    animation: Animated<f32>,
}

impl SpringValue {
    /// Quick spring, close to a 200ms settle
    pub fn snappy(initial: f32) -> Self {
        Self {
            animation: Animated::spring(initial, Motion::SNAPPY),
        }
    }

    /// Retarget the spring; a no-op when the target is unchanged
    pub fn set(&mut self, target: f32) {
        if *self.animation.target() != target {
            self.animation.update(target.into());
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        *self.animation.value()
    }

    pub fn target(&self) -> f32 {
        *self.animation.target()
    }

    /// Check if animation is in progress
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

/// On/off emphasis (0.0 = resting, 1.0 = fully emphasized)
#[derive(Debug)]
pub struct Emphasis {
    spring: SpringValue,
}

impl Default for Emphasis {
    fn default() -> Self {
        Self::new()
    }
}

impl Emphasis {
    pub fn new() -> Self {
        Self {
            spring: SpringValue::snappy(0.0),
        }
    }

    /// Go to the emphasized state
    pub fn start(&mut self) {
        self.spring.set(1.0);
    }

    /// Go back to rest
    pub fn stop(&mut self) {
        self.spring.set(0.0);
    }

    pub fn is_on(&self) -> bool {
        self.spring.target() > 0.5
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.spring.value().clamp(0.0, 1.0)
    }

    /// Blend a property between its resting and emphasized values
    pub fn interpolate(&self, rest: f32, emphasized: f32) -> f32 {
        rest + (emphasized - rest) * self.progress()
    }

    pub fn is_animating(&self) -> bool {
        self.spring.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.spring.tick(now);
    }
}
