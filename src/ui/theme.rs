//! Theme system for the control panel
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::widget::{button, container};
use iced::font::Weight;
use iced::{Background, Border, Color, Theme};

use crate::features::control::Rgba;

/// Weight for titles and the large readouts
pub const BOLD_WEIGHT: Weight = Weight::Bold;
/// Weight for tab and chip labels
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0b0b0d);
    pub const CARD: Color = color!(0x18181b);
    pub const TRACK: Color = color!(0x27272b);
    pub const TICK_MAJOR: Color = color!(0x3c3c42);
    pub const TICK_MINOR: Color = color!(0x6b6b72);
    pub const TEXT_TERTIARY: Color = color!(0x8a8a91);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf2f2f4);
    pub const CARD: Color = color!(0xffffff);
    pub const TRACK: Color = color!(0xe4e4e8);
    pub const TICK_MAJOR: Color = color!(0xcacacf);
    pub const TICK_MINOR: Color = color!(0x9a9aa1);
    pub const TEXT_TERTIARY: Color = color!(0x75757c);
    pub const TEXT_PRIMARY: Color = color!(0x141416);
}

/// Window background
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Card background behind each control
pub fn card(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::CARD
    } else {
        light::CARD
    }
}

/// Inactive track of every slider
pub fn track(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TRACK
    } else {
        light::TRACK
    }
}

/// Large tick marks on the dial
pub fn tick_major(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TICK_MAJOR
    } else {
        light::TICK_MAJOR
    }
}

/// Small tick marks on the dial
pub fn tick_minor(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TICK_MINOR
    } else {
        light::TICK_MINOR
    }
}

/// Labels and inactive readouts
pub fn text_tertiary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_TERTIARY
    } else {
        light::TEXT_TERTIARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Convert a control color to an iced color
pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Rounded card around a control
pub fn control_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Preset chip on the dial card
pub fn preset_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.2))),
        text_color: text_primary(theme),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.3))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.4))),
            ..base
        },
        _ => base,
    }
}

/// Wide +/- step button
pub fn step_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(track(theme))),
        text_color: text_primary(theme),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(tick_major(theme))),
            ..base
        },
        _ => base,
    }
}

/// Screen tab - highlighted when selected
pub fn tab_button(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let text_color = if selected {
            text_primary(theme)
        } else {
            text_tertiary(theme)
        };
        let background = match (selected, status) {
            (true, _) => card(theme),
            (false, button::Status::Hovered) => track(theme),
            _ => Color::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
