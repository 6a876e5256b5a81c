//! Angle mapping for the circular dial
//!
//! The dial covers a 270° arc that starts at 12 o'clock and runs clockwise,
//! leaving a 90° gap in the upper-left quadrant. Its value domain is the
//! angle itself, so no scaling happens between the two.

use super::BoundedValue;

/// Arc covered by the dial, in degrees
pub const ARC_DEGREES: f32 = 270.0;

/// Angle of a pointer offset from the dial center, 0° pointing up
///
/// `dx`/`dy` use screen coordinates (y grows downward), so angles grow
/// clockwise. The result lies in `(-90, 270]`.
pub fn pointer_angle(dx: f32, dy: f32) -> f32 {
    dy.atan2(dx).to_degrees() + 90.0
}

/// Map a pointer offset onto the arc
///
/// Samples that fall into the gap are discarded rather than clamped, so the
/// handle can't jump across the gap to the far end.
pub fn map_pointer(dx: f32, dy: f32) -> Option<f32> {
    let angle = pointer_angle(dx, dy);
    (0.0..=ARC_DEGREES).contains(&angle).then_some(angle)
}

/// Unit offset (x, y) from the center to a point on the arc at `degrees`
pub fn arc_direction(degrees: f32) -> (f32, f32) {
    let radians = degrees.to_radians();
    (radians.sin(), -radians.cos())
}

/// One drag on the dial, from press to release
#[derive(Debug, Clone, Copy, Default)]
pub struct DialGesture {
    accepted: u32,
    rejected: u32,
}

impl DialGesture {
    pub fn begin() -> Self {
        tracing::debug!("Dial gesture started");
        Self::default()
    }

    /// Feed a pointer sample, updating `value` when it lands on the arc
    ///
    /// Returns the accepted angle, or `None` when the sample was dropped.
    pub fn sample(&mut self, value: &mut BoundedValue, dx: f32, dy: f32) -> Option<f32> {
        match map_pointer(dx, dy) {
            Some(angle) => {
                self.accepted += 1;
                Some(value.set(angle))
            }
            None => {
                self.rejected += 1;
                None
            }
        }
    }

    /// Finish the drag; the dial value stays where the last valid sample put it
    pub fn end(self, value: &mut BoundedValue) {
        value.commit();
        tracing::debug!(
            accepted = self.accepted,
            rejected = self.rejected,
            value = value.get(),
            "Dial gesture ended"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_cardinal_directions() {
        assert!(approx(pointer_angle(0.0, -100.0), 0.0));
        assert!(approx(pointer_angle(100.0, 0.0), 90.0));
        assert!(approx(pointer_angle(0.0, 100.0), 180.0));
        assert!(approx(pointer_angle(-100.0, 0.0), 270.0));
    }

    #[test]
    fn test_gap_is_rejected() {
        // Upper-left quadrant maps to negative angles
        assert_eq!(map_pointer(-100.0, -100.0), None);
        assert_eq!(map_pointer(-100.0, -1.0), None);
        assert_eq!(map_pointer(-1.0, -100.0), None);
    }

    #[test]
    fn test_arc_direction_round_trips_through_pointer_angle() {
        for degrees in [0.0_f32, 45.0, 90.0, 135.0, 200.0, 269.0] {
            let (x, y) = arc_direction(degrees);
            assert!(approx(pointer_angle(x * 150.0, y * 150.0), degrees), "{degrees}");
        }
    }

    #[test]
    fn test_rejected_sample_keeps_previous_value() {
        let mut value = BoundedValue::with_span(ARC_DEGREES, 180.0);
        let mut gesture = DialGesture::begin();

        assert_eq!(gesture.sample(&mut value, -50.0, -50.0), None);
        assert_eq!(value.get(), 180.0);

        let accepted = gesture.sample(&mut value, 50.0, 0.0);
        assert!(accepted.is_some_and(|a| approx(a, 90.0)));
        assert!(approx(value.get(), 90.0));

        gesture.end(&mut value);
        assert!(approx(value.last_committed(), 90.0));
    }

    mod property_arc_window {
        use super::*;

        #[test]
        fn accepted_angle_is_stored_exactly() {
            let mut value = BoundedValue::with_span(ARC_DEGREES, 0.0);
            let mut gesture = DialGesture::begin();

            for step in 0..360 {
                let radians = (step as f32).to_radians();
                let (dx, dy) = (radians.cos() * 120.0, radians.sin() * 120.0);
                let before = value.get();
                let angle = pointer_angle(dx, dy);

                match gesture.sample(&mut value, dx, dy) {
                    Some(stored) => {
                        assert!((0.0..=ARC_DEGREES).contains(&angle));
                        assert_eq!(stored, angle);
                        assert_eq!(value.get(), angle);
                    }
                    None => {
                        assert!(!(0.0..=ARC_DEGREES).contains(&angle));
                        assert_eq!(value.get(), before);
                    }
                }
            }
        }
    }
}
