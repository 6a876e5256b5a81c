//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::{App, CoreState, DialPanel, StaggerPanel, UiState, VerticalPanel};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        (Self::with_settings(settings), Task::none())
    }

    /// Build the state from already loaded settings
    pub fn with_settings(settings: Settings) -> Self {
        let mut app = Self {
            dial: DialPanel::new(&settings.dial),
            stagger: StaggerPanel::new(&settings.stagger),
            vertical: VerticalPanel::new(&settings.vertical),
            core: CoreState { settings },
            ui: UiState::default(),
        };

        // The surface starts empty; give it the initial fill and readouts
        app.push_vertical_surface();

        tracing::info!(
            dial = app.dial.temperature.get(),
            stagger = app.stagger.value.get(),
            color_mode = ?app.dial.ramp.mode(),
            "Controls initialized"
        );
        app
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title showing the active screen
    pub fn title(&self) -> String {
        format!("Thermodial - {}", self.ui.screen.label())
    }

    /// Frame ticks while a spring is settling, nothing otherwise
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let dial_animating = self.dial.emphasis.is_animating();
        let stagger_animating =
            self.stagger.tilt.is_animating() || self.stagger.bubble.is_animating();

        if subscription_logic::needs_animation_subscription(dial_animating, stagger_animating) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(dial_animating: bool, stagger_animating: bool) -> bool {
        dial_animating || stagger_animating
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_frames_only_while_animating {
        use super::*;

        #[test]
        fn idle_needs_no_frames() {
            assert!(!needs_animation_subscription(false, false));
        }

        #[test]
        fn any_screen_animating_needs_frames() {
            assert!(needs_animation_subscription(true, false));
            assert!(needs_animation_subscription(false, true));
            assert!(needs_animation_subscription(true, true));
        }
    }

    mod app_state {
        use crate::app::{App, Message};
        use crate::features::Settings;
        use crate::features::control::sink::{SLOT_HUMIDITY, SLOT_TEMPERATURE};
        use crate::ui::components::Screen;

        #[test]
        fn test_initial_values_from_settings() {
            let app = App::with_settings(Settings::default());
            assert_eq!(app.dial.temperature.get(), 180.0);
            assert_eq!(app.stagger.value.get(), 32.0);
            assert_eq!(app.vertical.dual.temperature.get(), 0.0);
            assert_eq!(app.ui.screen, Screen::Dial);
        }

        #[test]
        fn test_surface_seeded_on_startup() {
            let mut settings = Settings::default();
            settings.vertical.initial_humidity = 45.0;
            let app = App::with_settings(settings);

            assert_eq!(app.vertical.surface.text(SLOT_TEMPERATURE), Some("Off"));
            assert_eq!(app.vertical.surface.text(SLOT_HUMIDITY), Some("45%"));
            assert!(!app.vertical.surface.is_active());
        }

        #[test]
        fn test_idle_app_has_no_animations() {
            let app = App::with_settings(Settings::default());
            assert!(!app.dial.emphasis.is_animating());
            assert!(!app.stagger.tilt.is_animating());
            assert!(!app.stagger.bubble.is_animating());
        }

        #[test]
        fn test_theme_follows_dark_mode() {
            let mut settings = Settings::default();
            settings.display.dark_mode = false;
            let app = App::with_settings(settings);
            assert_eq!(app.theme(), iced::Theme::Light);
        }

        #[test]
        fn test_title_names_screen() {
            let mut app = App::with_settings(Settings::default());
            let _ = app.update(Message::SelectScreen(Screen::Stagger));
            assert_eq!(app.title(), "Thermodial - Stagger");
        }
    }
}
