// src/app/update/vertical.rs
//! Vertical dual-mode slider message handlers
//!
//! Every change is mirrored onto the animation surface through the sink
//! helpers, so a rejected write never interrupts the gesture.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::control::LiftGesture;
use crate::features::control::sink::{
    INPUT_ACTIVE, INPUT_VALUE, SLOT_HUMIDITY, SLOT_TEMPERATURE, forward_input, forward_text,
};
use crate::utils::{format_humidity, format_temperature};

impl App {
    /// Handle vertical slider messages
    pub fn handle_vertical(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::LiftPressed(view_height) => {
                self.vertical.gesture = Some(LiftGesture::begin(&self.vertical.dual, *view_height));
                forward_input(&mut self.vertical.surface, INPUT_ACTIVE, true);
                Some(Task::none())
            }

            Message::LiftDragged(translation_y) => {
                if let Some(gesture) = self.vertical.gesture {
                    gesture.sample(&mut self.vertical.dual, *translation_y);
                    forward_input(&mut self.vertical.surface, INPUT_ACTIVE, true);
                    self.push_vertical_surface();
                }
                Some(Task::none())
            }

            Message::LiftReleased => {
                if let Some(gesture) = self.vertical.gesture.take() {
                    gesture.end(&mut self.vertical.dual);
                }
                forward_input(&mut self.vertical.surface, INPUT_ACTIVE, false);
                Some(Task::none())
            }

            Message::SelectMode(mode) => {
                if self.vertical.dual.set_mode(*mode) {
                    let percent = self.vertical.dual.surface_percent();
                    forward_input(&mut self.vertical.surface, INPUT_VALUE, percent);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Write the active percent and both readouts to the animation surface
    pub(crate) fn push_vertical_surface(&mut self) {
        let dual = &self.vertical.dual;
        let percent = dual.surface_percent();
        let temperature = format_temperature(dual.temperature.get());
        let humidity = format_humidity(dual.humidity.get());

        let surface = &mut self.vertical.surface;
        forward_input(&mut *surface, INPUT_VALUE, percent);
        forward_text(&mut *surface, SLOT_TEMPERATURE, &temperature);
        forward_text(surface, SLOT_HUMIDITY, &humidity);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Message};
    use crate::features::Settings;
    use crate::features::control::Mode;
    use crate::features::control::sink::{INPUT_VALUE, SLOT_HUMIDITY, SLOT_TEMPERATURE};

    fn percent(app: &App) -> f32 {
        app.vertical.surface.number(INPUT_VALUE).unwrap_or(f32::NAN)
    }

    fn app_with(temperature: f32, humidity: f32) -> App {
        let mut settings = Settings::default();
        settings.vertical.initial_temperature = temperature;
        settings.vertical.initial_humidity = humidity;
        App::with_settings(settings)
    }

    #[test]
    fn test_relative_drag_in_temperature_mode() {
        let mut app = app_with(50.0, 0.0);

        let _ = app.update(Message::LiftPressed(300.0));
        assert!(app.vertical.surface.is_active());

        // 60 px up on a 300 px view is a fifth of the 270° span
        let _ = app.update(Message::LiftDragged(-60.0));
        assert!((app.vertical.dual.temperature.get() - 104.0).abs() < 1e-3);
        assert_eq!(app.vertical.surface.text(SLOT_TEMPERATURE), Some("104°C"));

        let _ = app.update(Message::LiftReleased);
        assert!(!app.vertical.surface.is_active());
        assert!((app.vertical.dual.temperature.last_committed() - 104.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_is_relative_to_last_release() {
        let mut app = app_with(0.0, 0.0);
        let _ = app.update(Message::SelectMode(Mode::Humidity));

        let _ = app.update(Message::LiftPressed(200.0));
        let _ = app.update(Message::LiftDragged(-100.0));
        let _ = app.update(Message::LiftReleased);
        assert_eq!(app.vertical.dual.humidity.get(), 50.0);

        let _ = app.update(Message::LiftPressed(200.0));
        let _ = app.update(Message::LiftDragged(-20.0));
        assert_eq!(app.vertical.dual.humidity.get(), 60.0);
        assert_eq!(app.vertical.surface.text(SLOT_HUMIDITY), Some("60%"));
        assert!((percent(&app) - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_mode_switch_keeps_values_and_updates_surface() {
        let mut app = app_with(135.0, 40.0);

        let _ = app.update(Message::SelectMode(Mode::Humidity));
        assert_eq!(app.vertical.dual.temperature.get(), 135.0);
        assert_eq!(app.vertical.dual.humidity.get(), 40.0);
        assert!((percent(&app) - 40.0).abs() < 1e-3);

        let _ = app.update(Message::SelectMode(Mode::Temperature));
        assert!((percent(&app) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_only_moves_active_value() {
        let mut app = app_with(100.0, 30.0);

        let _ = app.update(Message::LiftPressed(100.0));
        let _ = app.update(Message::LiftDragged(-1000.0));
        let _ = app.update(Message::LiftReleased);

        assert_eq!(app.vertical.dual.temperature.get(), 270.0);
        assert_eq!(app.vertical.dual.humidity.get(), 30.0);
    }

    #[test]
    fn test_mode_switch_during_drag_drives_new_mode() {
        let mut app = app_with(50.0, 20.0);

        let _ = app.update(Message::LiftPressed(300.0));
        let _ = app.update(Message::SelectMode(Mode::Humidity));
        let _ = app.update(Message::LiftDragged(-60.0));

        assert!((app.vertical.dual.humidity.get() - 40.0).abs() < 1e-3);
        assert_eq!(app.vertical.dual.temperature.get(), 50.0);
        assert!((percent(&app) - 40.0).abs() < 1e-3);
        assert_eq!(app.vertical.surface.text(SLOT_HUMIDITY), Some("40%"));

        let _ = app.update(Message::LiftReleased);
        assert!((app.vertical.dual.humidity.last_committed() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_height_keeps_value() {
        let mut app = app_with(80.0, 0.0);
        let _ = app.update(Message::LiftPressed(0.0));
        let _ = app.update(Message::LiftDragged(-50.0));
        assert_eq!(app.vertical.dual.temperature.get(), 80.0);
    }
}
