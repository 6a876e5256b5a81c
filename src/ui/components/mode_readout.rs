//! Tappable mode readouts for the vertical slider
//!
//! Tapping a readout selects which value the slider drives. The active one is
//! drawn at full contrast, the other dimmed.

use iced::widget::{column, container, mouse_area, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::features::control::Mode;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Caption shown above a mode's readout
pub fn caption(mode: Mode) -> &'static str {
    match mode {
        Mode::Temperature => "Temperature",
        Mode::Humidity => "Humidity",
    }
}

/// Build one readout
///
/// `readout` is the already formatted value (e.g. `"42%"` or `"Off"`).
pub fn view<'a>(mode: Mode, readout: String, selected: bool) -> Element<'a, Message> {
    let color_for = move |theme: &iced::Theme| {
        if selected {
            theme::text_primary(theme)
        } else {
            theme::text_tertiary(theme)
        }
    };

    let content = column![
        text(caption(mode)).size(13).style(move |theme| text::Style {
            color: Some(theme::text_tertiary(theme)),
        }),
        text(readout)
            .size(34)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(move |theme| text::Style {
                color: Some(color_for(theme)),
            }),
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    let card = container(content).padding(12).style(move |theme| {
        if selected {
            theme::control_card(theme)
        } else {
            container::Style::default()
        }
    });

    mouse_area(card)
        .on_press(Message::SelectMode(mode))
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}
