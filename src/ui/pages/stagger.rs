//! Stagger slider page

use iced::widget::{Space, column, container, row, text};
use iced::{Element, Fill, Padding, Theme};

use crate::app::{Message, StaggerPanel};
use crate::ui::primitives::{TiltSlider, view_tilt_slider};
use crate::ui::theme;
use crate::ui::widgets::card_header;

/// Build the stagger page
pub fn view<'a>(panel: &'a StaggerPanel, palette: &Theme) -> Element<'a, Message> {
    let value = panel.value;

    let slider = TiltSlider::new(value, Message::StaggerPressed, Message::StaggerDragged)
        .tilt(panel.tilt.value())
        .bubble(panel.bubble.progress())
        .thumb_fill(theme::card(palette))
        .on_release(Message::StaggerReleased);

    let bound_label = |bound: f32| {
        text(format!("{}", bound as i32))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_tertiary(theme)),
            })
    };

    let card = container(
        column![
            card_header::view(
                "Stagger",
                "Delay between items",
                Some(text(format!("{}", value.get() as i32)).size(15).into()),
            ),
            view_tilt_slider(slider),
            row![
                bound_label(value.min()),
                Space::new().width(Fill),
                bound_label(value.max()),
            ],
        ]
        .spacing(12),
    )
    .padding(Padding::new(20.0))
    .max_width(420)
    .style(theme::control_card);

    container(card).center_x(Fill).into()
}
