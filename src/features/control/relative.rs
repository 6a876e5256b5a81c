//! Relative drag mapping for the vertical dual-mode slider
//!
//! The vertical control only sees translation since the press, so every drag
//! is applied on top of the value committed by the previous drag.

use super::BoundedValue;

/// Temperature span of the vertical control
pub const TEMPERATURE_SPAN: f32 = 270.0;
/// Humidity span of the vertical control
pub const HUMIDITY_SPAN: f32 = 100.0;

/// Which value the vertical control is currently driving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Temperature,
    Humidity,
}

/// Value reached after dragging `translation_y` px from `base`
///
/// Dragging up (negative `translation_y`) increases the value.
pub fn dragged_value(base: f32, translation_y: f32, view_height: f32, span: f32) -> f32 {
    if view_height <= 0.0 || !translation_y.is_finite() {
        return base.clamp(0.0, span);
    }
    let drag_offset = -translation_y;
    let drag_height = drag_offset / view_height;
    (base + drag_height * span).clamp(0.0, span)
}

/// Temperature and humidity multiplexed onto one control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualValue {
    pub temperature: BoundedValue,
    pub humidity: BoundedValue,
    mode: Mode,
}

impl DualValue {
    pub fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature: BoundedValue::with_span(TEMPERATURE_SPAN, temperature),
            humidity: BoundedValue::with_span(HUMIDITY_SPAN, humidity),
            mode: Mode::Temperature,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the driven value; neither value is reset
    ///
    /// Returns `true` when the mode actually changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        tracing::debug!(?mode, "Vertical slider mode switched");
        self.mode = mode;
        true
    }

    pub fn active(&self) -> &BoundedValue {
        match self.mode {
            Mode::Temperature => &self.temperature,
            Mode::Humidity => &self.humidity,
        }
    }

    pub fn active_mut(&mut self) -> &mut BoundedValue {
        match self.mode {
            Mode::Temperature => &mut self.temperature,
            Mode::Humidity => &mut self.humidity,
        }
    }

    /// Active value on the animation surface's 0-100 scale
    pub fn surface_percent(&self) -> f32 {
        self.active().fraction() * 100.0
    }
}

/// One drag on the vertical control
///
/// Each sample drives whichever value is active at that moment, so picking
/// the other mode mid-drag moves the newly selected value from its own
/// committed base.
#[derive(Debug, Clone, Copy)]
pub struct LiftGesture {
    view_height: f32,
}

impl LiftGesture {
    pub fn begin(dual: &DualValue, view_height: f32) -> Self {
        tracing::debug!(mode = ?dual.mode(), view_height, "Lift gesture started");
        Self { view_height }
    }

    /// Apply the translation since the press to the active value
    pub fn sample(&self, dual: &mut DualValue, translation_y: f32) -> f32 {
        let value = dual.active_mut();
        let next = dragged_value(
            value.last_committed(),
            translation_y,
            self.view_height,
            value.span(),
        );
        value.set(next)
    }

    /// Anchor the next drag at the values this one reached
    ///
    /// Both values are committed; one the drag never touched is unchanged.
    pub fn end(self, dual: &mut DualValue) {
        dual.temperature.commit();
        dual.humidity.commit();
        tracing::debug!(
            mode = ?dual.mode(),
            value = dual.active().get(),
            "Lift gesture ended"
        );
    }
}
