//! Circular dial page
//!
//! Temperature ring with a color-graded arc, preset chips and +/- buttons.

use iced::widget::{column, container, text};
use iced::{Alignment, Color, Element, Fill, Padding, Theme};

use crate::app::{DialPanel, Message};
use crate::ui::primitives::{DialRing, view_dial_ring};
use crate::ui::theme;
use crate::ui::widgets::{card_header, preset_row};
use crate::utils::format_temperature;

/// Side length of the dial canvas
const DIAL_SIZE: f32 = 332.0;

/// Build the dial page
pub fn view<'a>(panel: &'a DialPanel, palette: &Theme) -> Element<'a, Message> {
    let temperature = panel.temperature.get();
    let arc_color = theme::to_color(panel.ramp.color_at(temperature));

    let dial = DialRing::new(temperature, Message::DialPressed, Message::DialDragged)
        .label(format_temperature(temperature))
        .arc_color(arc_color)
        .track_width(panel.emphasis.interpolate(20.0, 30.0))
        .label_scale(panel.emphasis.interpolate(1.0, 1.2))
        .track_colors(
            theme::track(palette),
            theme::tick_major(palette),
            theme::tick_minor(palette),
        )
        .knob_colors(theme::text_primary(palette), Color::WHITE, theme::card(palette))
        .on_release(Message::DialReleased);

    let header = card_header::view(
        "Temperature",
        "Cooking mode / Grill",
        Some(
            text(format!("{}°", temperature as i32))
                .size(15)
                .color(arc_color)
                .into(),
        ),
    );

    let card = container(
        column![
            header,
            container(view_dial_ring(dial, DIAL_SIZE)).center_x(Fill),
            container(preset_row::presets(&panel.presets, Message::PresetSelected)).center_x(Fill),
            preset_row::step_buttons(panel.step, Message::StepTemperature),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(Padding::new(20.0))
    .max_width(420)
    .style(theme::control_card);

    container(card).center_x(Fill).into()
}
