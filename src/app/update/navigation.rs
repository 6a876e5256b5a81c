// src/app/update/navigation.rs
//! Navigation and animation frame handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle navigation messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SelectScreen(screen) => {
                if self.ui.screen != *screen {
                    tracing::debug!(?screen, "Switching screen");
                    self.ui.screen = *screen;
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.tick(iced::time::Instant::now());
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
    use crate::ui::components::Screen;

    #[test]
    fn test_select_screen() {
        let mut app = App::with_settings(Settings::default());
        assert_eq!(app.ui.screen, Screen::Dial);

        let _ = app.update(Message::SelectScreen(Screen::Vertical));
        assert_eq!(app.ui.screen, Screen::Vertical);
    }

    #[test]
    fn test_switching_screen_keeps_values() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::PresetSelected(220.0));
        let _ = app.update(Message::SelectScreen(Screen::Stagger));
        let _ = app.update(Message::SelectScreen(Screen::Dial));
        assert_eq!(app.dial.temperature.get(), 220.0);
    }
}
