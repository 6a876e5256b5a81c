//! Linear mapping for the horizontal stagger slider
//!
//! Besides the value itself, a drag produces a transient tilt that the value
//! bubble leans by. Tilt is purely visual and snaps back to zero on release.

use super::BoundedValue;

/// Maximum lean of the value bubble, in degrees
pub const MAX_TILT: f32 = 60.0;

/// Position of `x` along a track of width `width` (0.0 - 1.0)
pub fn track_fraction(x: f32, width: f32) -> f32 {
    if width <= 0.0 || x.is_nan() {
        return 0.0;
    }
    (x / width).clamp(0.0, 1.0)
}

/// Domain value under the pointer
pub fn value_at(x: f32, width: f32, min: f32, max: f32) -> f32 {
    min + track_fraction(x, width) * (max - min)
}

/// Thumb center for `value`, kept fully inside the track
pub fn thumb_position(value: &BoundedValue, width: f32, thumb_radius: f32) -> f32 {
    let raw = width * value.fraction();
    if width <= thumb_radius * 2.0 {
        return width / 2.0;
    }
    raw.clamp(thumb_radius, width - thumb_radius)
}

/// Lean angle for a horizontal pointer velocity (px per update)
pub fn tilt_for_velocity(velocity: f32) -> f32 {
    (-velocity).clamp(-MAX_TILT, MAX_TILT)
}

/// One drag on the stagger slider
#[derive(Debug, Clone, Copy)]
pub struct SlideGesture {
    previous_x: f32,
    tilt: f32,
}

impl SlideGesture {
    /// Start a drag at `x`, which also seeds the velocity tracking
    pub fn begin(x: f32) -> Self {
        tracing::debug!(x, "Slide gesture started");
        Self {
            previous_x: x,
            tilt: 0.0,
        }
    }

    /// Feed the pointer position and update `value`
    pub fn sample(&mut self, value: &mut BoundedValue, x: f32, width: f32) -> f32 {
        let velocity = x - self.previous_x;
        self.tilt = tilt_for_velocity(velocity);
        self.previous_x = x;

        value.set(value_at(x, width, value.min(), value.max()))
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    /// Finish the drag; the caller drops the session, which resets tilt to zero
    pub fn end(self, value: &mut BoundedValue) {
        value.commit();
        tracing::debug!(value = value.get(), "Slide gesture ended");
    }
}
