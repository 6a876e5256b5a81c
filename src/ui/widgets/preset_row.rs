//! Preset chips and +/- step buttons

use iced::widget::{button, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::ui::theme;

/// Row of preset chips, one per value
pub fn presets<'a, Message: Clone + 'a>(
    values: &[f32],
    on_select: impl Fn(f32) -> Message,
) -> Element<'a, Message> {
    let chips = values.iter().map(|&value| {
        Element::from(
            button(text(format!("{}°", value.round() as i32)).size(15))
                .padding(Padding::new(8.0).left(12.0).right(12.0))
                .style(theme::preset_button)
                .on_press(on_select(value)),
        )
    });

    row(chips).spacing(8).align_y(Alignment::Center).into()
}

/// Wide minus / plus buttons stepping by `step`
pub fn step_buttons<'a, Message: Clone + 'a>(
    step: f32,
    on_step: impl Fn(f32) -> Message,
) -> Element<'a, Message> {
    let step_button = |label: &'static str, delta: f32| {
        button(
            text(label)
                .size(20)
                .width(Fill)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .width(Fill)
        .padding(16)
        .style(theme::step_button)
        .on_press(on_step(delta))
    };

    row![step_button("-", -step), step_button("+", step)]
        .spacing(8)
        .padding(8)
        .into()
}
