//! Bounded scalar value shared by every control
//!
//! Writes are clamped into `[min, max]`; relative steps that would leave
//! the range are rejected instead of clamped.

use std::ops::RangeInclusive;

/// A scalar that can never leave its `[min, max]` domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedValue {
    min: f32,
    max: f32,
    current: f32,
    /// Value at the end of the last drag, base for relative drags
    last_committed: f32,
}

impl BoundedValue {
    /// Create a value in `range`, clamping `initial` into it
    ///
    /// A reversed range is normalized so that `min <= max` holds.
    pub fn new(range: RangeInclusive<f32>, initial: f32) -> Self {
        let (a, b) = range.into_inner();
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let current = clamp_finite(initial, min, max);

        Self {
            min,
            max,
            current,
            last_committed: current,
        }
    }

    /// Domain starting at zero, e.g. `0..=270` for the oven temperature
    pub fn with_span(span: f32, initial: f32) -> Self {
        Self::new(0.0..=span, initial)
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn get(&self) -> f32 {
        self.current
    }

    pub fn last_committed(&self) -> f32 {
        self.last_committed
    }

    /// Position of the current value within the domain (0.0 - 1.0)
    pub fn fraction(&self) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            0.0
        } else {
            (self.current - self.min) / span
        }
    }

    /// Check whether `value` lies inside the domain
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Write a value, clamping it into the domain
    ///
    /// Returns the value actually stored.
    pub fn set(&mut self, value: f32) -> f32 {
        self.current = clamp_finite(value, self.min, self.max);
        self.current
    }

    /// Jump straight to a preset and make it the new drag anchor
    pub fn set_to(&mut self, preset: f32) -> f32 {
        let stored = self.set(preset);
        self.last_committed = stored;
        stored
    }

    /// Add `delta` if the result stays in range, otherwise leave the value alone
    ///
    /// Returns `true` when the step was applied.
    pub fn step_by(&mut self, delta: f32) -> bool {
        let next = self.current + delta;
        if !next.is_finite() || !self.contains(next) {
            return false;
        }
        self.current = next;
        self.last_committed = next;
        true
    }

    /// Anchor the next relative drag at the current value
    pub fn commit(&mut self) {
        self.last_committed = self.current;
    }
}

/// Clamp, mapping NaN onto the lower bound so the invariant survives bad input
fn clamp_finite(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_value_is_clamped() {
        let value = BoundedValue::new(0.0..=270.0, 400.0);
        assert_eq!(value.get(), 270.0);
        assert_eq!(value.last_committed(), 270.0);

        let value = BoundedValue::new(0.0..=270.0, -5.0);
        assert_eq!(value.get(), 0.0);
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        let value = BoundedValue::new(100.0..=0.0, 50.0);
        assert_eq!(value.min(), 0.0);
        assert_eq!(value.max(), 100.0);
        assert_eq!(value.get(), 50.0);
    }

    #[test]
    fn test_set_clamps_out_of_range_writes() {
        let mut value = BoundedValue::with_span(100.0, 10.0);
        assert_eq!(value.set(150.0), 100.0);
        assert_eq!(value.set(-1.0), 0.0);
        assert_eq!(value.set(f32::NAN), 0.0);
        assert_eq!(value.set(f32::INFINITY), 100.0);
    }

    #[test]
    fn test_preset_overrides_prior_value() {
        for prior in [0.0, 42.0, 150.0, 270.0] {
            let mut value = BoundedValue::with_span(270.0, prior);
            value.set_to(150.0);
            assert_eq!(value.get(), 150.0);
            assert_eq!(value.last_committed(), 150.0);
        }
    }

    #[test]
    fn test_step_out_of_range_is_noop() {
        let mut value = BoundedValue::with_span(270.0, 265.0);
        assert!(!value.step_by(10.0));
        assert_eq!(value.get(), 265.0);

        let mut value = BoundedValue::with_span(270.0, 5.0);
        assert!(!value.step_by(-10.0));
        assert_eq!(value.get(), 5.0);
    }

    #[test]
    fn test_step_onto_boundary_is_applied() {
        let mut value = BoundedValue::with_span(270.0, 260.0);
        assert!(value.step_by(10.0));
        assert_eq!(value.get(), 270.0);
    }

    #[test]
    fn test_fraction() {
        let value = BoundedValue::new(50.0..=150.0, 75.0);
        assert_eq!(value.fraction(), 0.25);

        let degenerate = BoundedValue::new(5.0..=5.0, 5.0);
        assert_eq!(degenerate.fraction(), 0.0);
    }

    mod property_step_inverse {
        use super::*;

        #[test]
        fn step_then_inverse_restores_when_both_apply() {
            for start in [0.0_f32, 10.0, 135.0, 260.0, 270.0] {
                for delta in [-10.0_f32, 10.0] {
                    let mut value = BoundedValue::with_span(270.0, start);
                    let first = value.step_by(delta);
                    let second = value.step_by(-delta);

                    if first && second {
                        assert_eq!(value.get(), start, "start={start} delta={delta}");
                    }
                    if !first {
                        // The first step was a no-op, so the inverse moves away
                        assert_eq!(second, value.get() != start);
                    }
                }
            }
        }

        #[test]
        fn invariant_holds_after_any_sequence() {
            let mut value = BoundedValue::with_span(100.0, 50.0);
            for delta in [30.0, 30.0, -200.0, 45.0, 60.0, -5.0, 1000.0] {
                value.step_by(delta);
                assert!(value.contains(value.get()));
            }
        }
    }
}
