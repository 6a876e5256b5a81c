// src/app/update/dial.rs
//! Circular dial message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::control::DialGesture;

impl App {
    /// Handle dial, preset and step messages
    pub fn handle_dial(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DialPressed(offset) => {
                let mut gesture = DialGesture::begin();
                gesture.sample(&mut self.dial.temperature, offset.x, offset.y);
                self.dial.gesture = Some(gesture);
                self.dial.emphasis.start();
                Some(Task::none())
            }

            Message::DialDragged(offset) => {
                if let Some(gesture) = self.dial.gesture.as_mut() {
                    gesture.sample(&mut self.dial.temperature, offset.x, offset.y);
                }
                Some(Task::none())
            }

            Message::DialReleased => {
                if let Some(gesture) = self.dial.gesture.take() {
                    gesture.end(&mut self.dial.temperature);
                }
                self.dial.emphasis.stop();
                Some(Task::none())
            }

            Message::PresetSelected(preset) => {
                let stored = self.dial.temperature.set_to(*preset);
                tracing::debug!(preset, stored, "Dial preset selected");
                Some(Task::none())
            }

            Message::StepTemperature(delta) => {
                if !self.dial.temperature.step_by(*delta) {
                    tracing::debug!(
                        delta,
                        value = self.dial.temperature.get(),
                        "Step out of range, ignored"
                    );
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Vector;

    use crate::app::{App, Message};
    use crate::features::Settings;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    #[test]
    fn test_drag_sets_angle() {
        let mut app = app();
        // Straight right of center is 90°
        let _ = app.update(Message::DialPressed(Vector::new(100.0, 0.0)));
        assert!(app.dial.is_dragging());
        assert!((app.dial.temperature.get() - 90.0).abs() < 1e-3);

        // Straight down is 180°
        let _ = app.update(Message::DialDragged(Vector::new(0.0, 100.0)));
        assert!((app.dial.temperature.get() - 180.0).abs() < 1e-3);

        let _ = app.update(Message::DialReleased);
        assert!(!app.dial.is_dragging());
        assert!((app.dial.temperature.last_committed() - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_into_gap_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::DialPressed(Vector::new(-100.0, 0.0)));
        assert!((app.dial.temperature.get() - 270.0).abs() < 1e-3);

        // Upper-left quadrant: outside the arc
        let _ = app.update(Message::DialDragged(Vector::new(-50.0, -50.0)));
        assert!((app.dial.temperature.get() - 270.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_without_press_does_nothing() {
        let mut app = app();
        let before = app.dial.temperature.get();
        let _ = app.update(Message::DialDragged(Vector::new(100.0, 0.0)));
        assert_eq!(app.dial.temperature.get(), before);
    }

    #[test]
    fn test_step_buttons() {
        let mut app = app();
        let _ = app.update(Message::PresetSelected(265.0));

        let _ = app.update(Message::StepTemperature(10.0));
        assert_eq!(app.dial.temperature.get(), 265.0);

        let _ = app.update(Message::StepTemperature(-10.0));
        assert_eq!(app.dial.temperature.get(), 255.0);
    }

    #[test]
    fn test_preset_is_clamped() {
        let mut app = app();
        let _ = app.update(Message::PresetSelected(400.0));
        assert_eq!(app.dial.temperature.get(), 270.0);
        assert_eq!(app.dial.temperature.last_committed(), 270.0);
    }
}
