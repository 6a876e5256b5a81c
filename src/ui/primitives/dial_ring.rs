//! Circular dial primitive
//!
//! A 270° ring drawn with iced's Canvas. The program converts presses and
//! drags into pointer offsets from the ring's center and leaves the mapping
//! to the caller.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use iced::widget::canvas::{
    Action, Frame, Geometry, LineCap, LineDash, Path, Program, Stroke, Text, path::Arc,
};
use iced::widget::Canvas;
use iced::{Color, Element, Event, Pixels, Point, Radians, Rectangle, Renderer, Theme, Vector};
use iced::{mouse, touch};

use crate::features::control::circular::{ARC_DEGREES, arc_direction};

/// Diameter of the handle knob
const HANDLE_SIZE: f32 = 28.0;
/// Ring outline around the knob
const HANDLE_BORDER: f32 = 7.0;
/// Extra distance from the ring that still grabs it
const GRAB_TOLERANCE: f32 = 30.0;
/// Room kept between the widest track and the canvas edge
const EDGE_PADDING: f32 = 16.0;

/// Circular dial configuration
pub struct DialRing<'a, Message> {
    /// Handle angle in degrees (0.0 - 270.0)
    value: f32,
    /// Text drawn in the middle of the ring
    label: String,
    /// Color of the swept arc
    arc_color: Color,
    /// Width of the background track
    track_width: f32,
    /// Scale applied to the label while dragging
    label_scale: f32,
    track_color: Color,
    tick_major_color: Color,
    tick_minor_color: Color,
    text_color: Color,
    knob_color: Color,
    knob_border_color: Color,
    on_press: Box<dyn Fn(Vector) -> Message + 'a>,
    on_drag: Box<dyn Fn(Vector) -> Message + 'a>,
    on_release: Option<Message>,
}

impl<'a, Message> DialRing<'a, Message> {
    pub fn new<P, D>(value: f32, on_press: P, on_drag: D) -> Self
    where
        P: Fn(Vector) -> Message + 'a,
        D: Fn(Vector) -> Message + 'a,
    {
        Self {
            value: value.clamp(0.0, ARC_DEGREES),
            label: String::new(),
            arc_color: Color::WHITE,
            track_width: 20.0,
            label_scale: 1.0,
            track_color: Color::from_rgb(0.15, 0.15, 0.17),
            tick_major_color: Color::from_rgb(0.24, 0.24, 0.26),
            tick_minor_color: Color::from_rgb(0.42, 0.42, 0.45),
            text_color: Color::WHITE,
            knob_color: Color::WHITE,
            knob_border_color: Color::BLACK,
            on_press: Box::new(on_press),
            on_drag: Box::new(on_drag),
            on_release: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn arc_color(mut self, color: Color) -> Self {
        self.arc_color = color;
        self
    }

    pub fn track_width(mut self, width: f32) -> Self {
        self.track_width = width;
        self
    }

    pub fn label_scale(mut self, scale: f32) -> Self {
        self.label_scale = scale;
        self
    }

    /// Track, major tick, minor tick colors
    pub fn track_colors(mut self, track: Color, major: Color, minor: Color) -> Self {
        self.track_color = track;
        self.tick_major_color = major;
        self.tick_minor_color = minor;
        self
    }

    /// Label color, knob fill, knob outline
    pub fn knob_colors(mut self, text: Color, knob: Color, border: Color) -> Self {
        self.text_color = text;
        self.knob_color = knob;
        self.knob_border_color = border;
        self
    }

    pub fn on_release(mut self, message: Message) -> Self {
        self.on_release = Some(message);
        self
    }
}

/// Per-widget interaction state
#[derive(Debug, Clone, Copy, Default)]
pub struct DialState {
    is_dragging: bool,
}

/// Ring radius for a canvas of the given bounds
fn ring_radius(bounds: Rectangle) -> f32 {
    (bounds.width.min(bounds.height) / 2.0 - EDGE_PADDING).max(0.0)
}

/// Arc from 12 o'clock sweeping `degrees` clockwise
fn arc_path(center: Point, radius: f32, degrees: f32) -> Path {
    let start = -std::f32::consts::FRAC_PI_2;
    Path::new(|builder| {
        builder.arc(Arc {
            center,
            radius,
            start_angle: Radians(start),
            end_angle: Radians(start + degrees.to_radians()),
        });
    })
}

impl<Message: Clone> Program<Message> for DialRing<'_, Message> {
    type State = DialState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = ring_radius(bounds);

        // Positions relative to the canvas origin
        let pressed_at = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_in(bounds)
            }
            Event::Touch(touch::Event::FingerPressed { position, .. })
                if bounds.contains(*position) =>
            {
                Some(*position - Vector::new(bounds.x, bounds.y))
            }
            _ => None,
        };

        if let Some(position) = pressed_at {
            let offset = position - center;
            let distance = (offset.x * offset.x + offset.y * offset.y).sqrt();
            if (distance - radius).abs() <= GRAB_TOLERANCE {
                state.is_dragging = true;
                return Some(Action::publish((self.on_press)(offset)).and_capture());
            }
            return None;
        }

        match event {
            Event::Mouse(mouse::Event::CursorMoved { position })
            | Event::Touch(touch::Event::FingerMoved { position, .. })
                if state.is_dragging =>
            {
                let local = *position - Vector::new(bounds.x, bounds.y);
                Some(Action::publish((self.on_drag)(local - center)).and_capture())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. })
                if state.is_dragging =>
            {
                state.is_dragging = false;
                match self.on_release.clone() {
                    Some(message) => Some(Action::publish(message).and_capture()),
                    None => Some(Action::capture()),
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = ring_radius(bounds);
        let full_arc = arc_path(center, radius, ARC_DEGREES);

        // Background track
        frame.stroke(
            &full_arc,
            Stroke::default()
                .with_width(self.track_width)
                .with_color(self.track_color)
                .with_line_cap(LineCap::Round),
        );

        // Large tick dots
        frame.stroke(
            &full_arc,
            Stroke {
                line_dash: LineDash {
                    segments: &[0.5, 81.6],
                    offset: 0,
                },
                ..Stroke::default()
                    .with_width(14.0)
                    .with_color(self.tick_major_color)
                    .with_line_cap(LineCap::Round)
            },
        );

        // Active arc
        if self.value > 0.0 {
            frame.stroke(
                &arc_path(center, radius, self.value),
                Stroke::default()
                    .with_width(20.0)
                    .with_color(self.arc_color)
                    .with_line_cap(LineCap::Round),
            );
        }

        // Small tick dots
        frame.stroke(
            &full_arc,
            Stroke {
                line_dash: LineDash {
                    segments: &[0.5, 15.16],
                    offset: 0,
                },
                ..Stroke::default()
                    .with_width(4.0)
                    .with_color(self.tick_minor_color)
                    .with_line_cap(LineCap::Round)
            },
        );

        frame.fill_text(Text {
            content: self.label.clone(),
            position: center,
            color: self.text_color,
            size: Pixels(54.0 * self.label_scale),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });

        // Handle
        let (dx, dy) = arc_direction(self.value);
        let knob_center = Point::new(center.x + dx * radius, center.y + dy * radius);
        let knob = Path::circle(knob_center, HANDLE_SIZE / 2.0);
        frame.fill(&knob, self.knob_color);
        frame.stroke(
            &knob,
            Stroke::default()
                .with_width(HANDLE_BORDER)
                .with_color(self.knob_border_color),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging {
            return mouse::Interaction::Grabbing;
        }

        let over_ring = cursor.position_in(bounds).is_some_and(|position| {
            let offset = position - Point::new(bounds.width / 2.0, bounds.height / 2.0);
            let distance = (offset.x * offset.x + offset.y * offset.y).sqrt();
            (distance - ring_radius(bounds)).abs() <= GRAB_TOLERANCE
        });

        if over_ring {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Create a dial element of the given size
pub fn view_dial_ring<'a, Message: Clone + 'a>(
    dial: DialRing<'a, Message>,
    size: f32,
) -> Element<'a, Message> {
    Canvas::new(dial).width(size).height(size).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_radius_keeps_padding() {
        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(300.0, 320.0));
        assert_eq!(ring_radius(bounds), 150.0 - EDGE_PADDING);

        let tiny = Rectangle::new(Point::ORIGIN, iced::Size::new(10.0, 10.0));
        assert_eq!(ring_radius(tiny), 0.0);
    }

    fn press(position: Point) -> Event {
        Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position,
        })
    }

    #[test]
    fn test_touch_outside_canvas_is_ignored() {
        let dial = DialRing::new(90.0, |offset| offset, |offset| offset);
        let bounds = Rectangle::new(Point::new(100.0, 100.0), iced::Size::new(300.0, 300.0));
        let mut state = DialState::default();

        // Inside the grab band but 10 px left of the canvas
        let outside = press(Point::new(90.0, 250.0));
        assert!(
            dial.update(&mut state, &outside, bounds, mouse::Cursor::Unavailable)
                .is_none()
        );
        assert!(!state.is_dragging);

        // On the ring's left edge, inside the canvas
        let inside = press(Point::new(100.0 + EDGE_PADDING, 250.0));
        assert!(
            dial.update(&mut state, &inside, bounds, mouse::Cursor::Unavailable)
                .is_some()
        );
        assert!(state.is_dragging);
    }
}
