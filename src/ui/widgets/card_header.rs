//! Card header widget
//!
//! Displays a card title with an optional caption underneath, plus an
//! optional trailing element (e.g. a mode readout).
//! This is a reusable widget that does not depend on application-specific types.

use iced::widget::{Space, column, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a card header element
///
/// # Arguments
/// * `title` - The card title text
/// * `caption` - Secondary line under the title, skipped when empty
/// * `trailing` - Optional element aligned to the right edge
pub fn view<'a, Message: 'a>(
    title: &'a str,
    caption: &'a str,
    trailing: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let title_text = text(title)
        .size(22)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let heading: Element<'a, Message> = if caption.is_empty() {
        title_text.into()
    } else {
        column![
            title_text,
            text(caption).size(14).style(|theme| text::Style {
                color: Some(theme::text_tertiary(theme)),
            }),
        ]
        .spacing(2)
        .into()
    };

    let trailing = trailing.unwrap_or_else(|| Space::new().width(0).into());

    row![heading, Space::new().width(Fill), trailing]
        .align_y(Alignment::Center)
        .into()
}
