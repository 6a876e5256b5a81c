// src/app/state.rs
//! Application state definitions

use iced::time::Instant;

use crate::features::Settings;
use crate::features::control::{
    BoundedValue, ColorRamp, DialGesture, DualValue, LiftGesture, SlideGesture, StateMachineInputs,
};
use crate::ui::animation::{Emphasis, SpringValue};
use crate::ui::components::Screen;

/// Main application state
pub struct App {
    /// Core infrastructure (Settings)
    pub core: CoreState,
    /// Circular dial screen
    pub dial: DialPanel,
    /// Horizontal stagger slider screen
    pub stagger: StaggerPanel,
    /// Vertical dual-mode slider screen
    pub vertical: VerticalPanel,
    /// UI state (Navigation)
    pub ui: UiState,
}

/// Core Infrastructure
pub struct CoreState {
    pub settings: Settings,
}

/// Circular dial state
pub struct DialPanel {
    pub temperature: BoundedValue,
    pub ramp: ColorRamp,
    pub presets: Vec<f32>,
    pub step: f32,
    /// Live drag, `None` between gestures
    pub gesture: Option<DialGesture>,
    /// Drag emphasis: wider track, larger readout
    pub emphasis: Emphasis,
}

impl DialPanel {
    pub fn new(settings: &crate::features::settings::DialSettings) -> Self {
        Self {
            temperature: BoundedValue::with_span(
                crate::features::control::circular::ARC_DEGREES,
                settings.initial_temperature,
            ),
            ramp: ColorRamp::thermostat().with_mode(settings.color_mode),
            presets: settings.presets.clone(),
            step: settings.step,
            gesture: None,
            emphasis: Emphasis::new(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }
}

/// Stagger slider state
pub struct StaggerPanel {
    pub value: BoundedValue,
    pub gesture: Option<SlideGesture>,
    /// Bubble lean in degrees, springs back to 0 on release
    pub tilt: SpringValue,
    /// Bubble visibility
    pub bubble: Emphasis,
}

impl StaggerPanel {
    pub fn new(settings: &crate::features::settings::StaggerSettings) -> Self {
        Self {
            value: BoundedValue::new(settings.min..=settings.max, settings.initial),
            gesture: None,
            tilt: SpringValue::snappy(0.0),
            bubble: Emphasis::new(),
        }
    }
}

/// Vertical dual-mode slider state
pub struct VerticalPanel {
    pub dual: DualValue,
    pub gesture: Option<LiftGesture>,
    /// Animation surface the gauge renders from
    pub surface: StateMachineInputs,
}

impl VerticalPanel {
    pub fn new(settings: &crate::features::settings::VerticalSettings) -> Self {
        Self {
            dual: DualValue::new(settings.initial_temperature, settings.initial_humidity),
            gesture: None,
            surface: StateMachineInputs::vertical_slider(),
        }
    }
}

/// UI State (Navigation)
#[derive(Debug, Default)]
pub struct UiState {
    pub screen: Screen,
}

impl App {
    /// Advance every spring to `now`
    pub fn tick(&mut self, now: Instant) {
        self.dial.emphasis.tick(now);
        self.stagger.tilt.tick(now);
        self.stagger.bubble.tick(now);
    }
}
