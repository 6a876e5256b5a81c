//! Screen tab row
//! Pill-shaped tabs switching between the three control screens

use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::app::Message;
use crate::ui::theme::{self, MEDIUM_WEIGHT};

/// Control screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Dial,
    Stagger,
    Vertical,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Dial, Screen::Stagger, Screen::Vertical];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Dial => "Dial",
            Screen::Stagger => "Stagger",
            Screen::Vertical => "Vertical",
        }
    }
}

/// Build the tab row
pub fn view(active: Screen) -> Element<'static, Message> {
    let tabs = row(Screen::ALL.into_iter().map(|screen| {
        button(text(screen.label()).size(14).font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        }))
        .padding(Padding::new(8.0).left(18.0).right(18.0))
        .style(theme::tab_button(screen == active))
        .on_press(Message::SelectScreen(screen))
        .into()
    }))
    .spacing(4)
    .align_y(Alignment::Center);

    container(tabs)
        .padding(4)
        .style(theme::control_card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_labels_unique() {
        let labels: Vec<_> = Screen::ALL.iter().map(Screen::label).collect();
        assert_eq!(labels, ["Dial", "Stagger", "Vertical"]);
        assert_eq!(Screen::default(), Screen::Dial);
    }
}
