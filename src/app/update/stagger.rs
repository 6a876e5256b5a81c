// src/app/update/stagger.rs
//! Stagger slider message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::control::SlideGesture;

impl App {
    /// Handle stagger slider messages
    pub fn handle_stagger(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::StaggerPressed(x, width) => {
                let mut gesture = SlideGesture::begin(*x);
                gesture.sample(&mut self.stagger.value, *x, *width);
                self.stagger.tilt.set(gesture.tilt());
                self.stagger.gesture = Some(gesture);
                self.stagger.bubble.start();
                Some(Task::none())
            }

            Message::StaggerDragged(x, width) => {
                if let Some(gesture) = self.stagger.gesture.as_mut() {
                    gesture.sample(&mut self.stagger.value, *x, *width);
                    self.stagger.tilt.set(gesture.tilt());
                }
                Some(Task::none())
            }

            Message::StaggerReleased => {
                if let Some(gesture) = self.stagger.gesture.take() {
                    gesture.end(&mut self.stagger.value);
                }
                self.stagger.tilt.set(0.0);
                self.stagger.bubble.stop();
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Message};
    use crate::features::Settings;

    #[test]
    fn test_press_and_drag_map_position() {
        let mut app = App::with_settings(Settings::default());
        assert_eq!(app.stagger.value.get(), 32.0);

        let _ = app.update(Message::StaggerPressed(50.0, 200.0));
        assert_eq!(app.stagger.value.get(), 25.0);

        let _ = app.update(Message::StaggerDragged(300.0, 200.0));
        assert_eq!(app.stagger.value.get(), 100.0);
    }

    #[test]
    fn test_tilt_follows_velocity_and_resets() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::StaggerPressed(100.0, 200.0));
        assert_eq!(app.stagger.tilt.target(), 0.0);

        let _ = app.update(Message::StaggerDragged(110.0, 200.0));
        assert_eq!(app.stagger.tilt.target(), -10.0);

        let _ = app.update(Message::StaggerDragged(20.0, 200.0));
        assert_eq!(app.stagger.tilt.target(), 60.0);

        let _ = app.update(Message::StaggerReleased);
        assert_eq!(app.stagger.tilt.target(), 0.0);
        assert!(app.stagger.gesture.is_none());
        assert!(!app.stagger.bubble.is_on());
    }

    #[test]
    fn test_zero_width_maps_to_min() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::StaggerPressed(10.0, 0.0));
        assert_eq!(app.stagger.value.get(), 0.0);
    }
}
