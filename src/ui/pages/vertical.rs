//! Vertical dual-mode slider page
//!
//! The gauge draws whatever the animation surface last accepted; the
//! readouts above it pick which value a drag drives.

use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Fill, Padding, Theme};

use crate::app::{Message, VerticalPanel};
use crate::features::control::Mode;
use crate::features::control::sink::{SLOT_HUMIDITY, SLOT_TEMPERATURE};
use crate::ui::components::mode_readout;
use crate::ui::theme;
use crate::ui::widgets::{card_header, vertical_slider};
use crate::utils::{format_humidity, format_temperature};

/// Height of the gauge
const GAUGE_HEIGHT: f32 = 360.0;

/// Build the vertical slider page
pub fn view<'a>(panel: &'a VerticalPanel, palette: &Theme) -> Element<'a, Message> {
    let dual = &panel.dual;
    let surface = &panel.surface;
    let mode = dual.mode();

    let readouts = row![
        mode_readout::view(
            Mode::Humidity,
            format_humidity(dual.humidity.get()),
            mode == Mode::Humidity,
        ),
        mode_readout::view(
            Mode::Temperature,
            format_temperature(dual.temperature.get()),
            mode == Mode::Temperature,
        ),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    let gauge = vertical_slider(surface.fill(), Message::LiftPressed, Message::LiftDragged)
        .active(surface.is_active())
        .height(GAUGE_HEIGHT)
        .colors(
            theme::track(palette),
            theme::tick_minor(palette),
            theme::text_primary(palette),
        )
        .on_release(Message::LiftReleased);

    let slot = match mode {
        Mode::Temperature => SLOT_TEMPERATURE,
        Mode::Humidity => SLOT_HUMIDITY,
    };
    let surface_label = text(surface.text(slot).unwrap_or_default().to_string())
        .size(15)
        .style(|theme| text::Style {
            color: Some(theme::text_tertiary(theme)),
        });

    let card = container(
        column![
            card_header::view("Climate", "Drag up or down to adjust", None),
            container(readouts).center_x(Fill),
            container(gauge).center_x(Fill),
            container(surface_label).center_x(Fill),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(Padding::new(20.0))
    .max_width(420)
    .style(theme::control_card);

    container(card).center_x(Fill).into()
}
