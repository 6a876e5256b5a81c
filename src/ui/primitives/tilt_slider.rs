//! Horizontal slider primitive with a leaning value bubble
//!
//! While dragging, a bubble above the thumb shows the value and leans against
//! the drag direction. The bubble's tilt and opacity come from the caller so
//! they can be spring-animated.

use iced::widget::Canvas;
use iced::widget::canvas::{Action, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{Color, Element, Event, Length, Pixels, Point, Radians, Rectangle, Renderer, Size};
use iced::{Theme, Vector, mouse, touch};

use crate::features::control::BoundedValue;
use crate::features::control::linear::thumb_position;

/// Radius of the thumb circle
pub const THUMB_RADIUS: f32 = 10.0;
/// Height of the rail
const RAIL_HEIGHT: f32 = 4.0;
/// Space reserved above the rail for the bubble
const BUBBLE_AREA: f32 = 56.0;
const BUBBLE_SIZE: Size = Size::new(48.0, 28.0);

/// Stagger slider configuration
pub struct TiltSlider<'a, Message> {
    value: BoundedValue,
    /// Lean of the bubble in degrees
    tilt: f32,
    /// Bubble visibility (0.0 - 1.0)
    bubble: f32,
    rail_color: Color,
    active_color: Color,
    thumb_fill: Color,
    label_color: Color,
    on_press: Box<dyn Fn(f32, f32) -> Message + 'a>,
    on_drag: Box<dyn Fn(f32, f32) -> Message + 'a>,
    on_release: Option<Message>,
}

impl<'a, Message> TiltSlider<'a, Message> {
    /// `on_press`/`on_drag` receive the pointer x and the track width
    pub fn new<P, D>(value: BoundedValue, on_press: P, on_drag: D) -> Self
    where
        P: Fn(f32, f32) -> Message + 'a,
        D: Fn(f32, f32) -> Message + 'a,
    {
        Self {
            value,
            tilt: 0.0,
            bubble: 0.0,
            rail_color: Color::from_rgb(0.5, 0.5, 0.5),
            active_color: Color::WHITE,
            thumb_fill: Color::BLACK,
            label_color: Color::BLACK,
            on_press: Box::new(on_press),
            on_drag: Box::new(on_drag),
            on_release: None,
        }
    }

    pub fn tilt(mut self, degrees: f32) -> Self {
        self.tilt = degrees;
        self
    }

    pub fn bubble(mut self, visibility: f32) -> Self {
        self.bubble = visibility.clamp(0.0, 1.0);
        self
    }

    pub fn thumb_fill(mut self, color: Color) -> Self {
        self.thumb_fill = color;
        self
    }

    pub fn on_release(mut self, message: Message) -> Self {
        self.on_release = Some(message);
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SliderState {
    is_dragging: bool,
}

impl<Message: Clone> Program<Message> for TiltSlider<'_, Message> {
    type State = SliderState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let origin = Vector::new(bounds.x, bounds.y);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.is_dragging = true;
                Some(Action::publish((self.on_press)(position.x, bounds.width)).and_capture())
            }
            Event::Touch(touch::Event::FingerPressed { position, .. })
                if bounds.contains(*position) =>
            {
                state.is_dragging = true;
                let local = *position - origin;
                Some(Action::publish((self.on_press)(local.x, bounds.width)).and_capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { position })
            | Event::Touch(touch::Event::FingerMoved { position, .. })
                if state.is_dragging =>
            {
                let local = *position - origin;
                Some(Action::publish((self.on_drag)(local.x, bounds.width)).and_capture())
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
        let rail_y = BUBBLE_AREA + (bounds.height - BUBBLE_AREA) / 2.0;
        let thumb_x = thumb_position(&self.value, bounds.width, THUMB_RADIUS);

        // Rail
        frame.fill_rectangle(
            Point::new(0.0, rail_y - RAIL_HEIGHT / 2.0),
            Size::new(bounds.width, RAIL_HEIGHT),
            self.rail_color,
        );

        // Active portion
        frame.fill_rectangle(
            Point::new(0.0, rail_y - RAIL_HEIGHT / 2.0),
            Size::new(thumb_x, RAIL_HEIGHT),
            self.active_color,
        );

        // Thumb
        let thumb = Path::circle(Point::new(thumb_x, rail_y), THUMB_RADIUS);
        frame.fill(&thumb, self.thumb_fill);
        frame.stroke(
            &thumb,
            Stroke::default()
                .with_width(4.0)
                .with_color(self.active_color),
        );

        // Bubble rises from behind the thumb as it fades in
        if self.bubble > 0.0 {
            let lift = 10.0 - 20.0 * self.bubble;
            let bubble_center = Point::new(
                thumb_x,
                rail_y - THUMB_RADIUS - 8.0 - BUBBLE_SIZE.height / 2.0 + lift,
            );
            let alpha = self.bubble;

            frame.with_save(|frame| {
                frame.translate(Vector::new(bubble_center.x, bubble_center.y));
                frame.rotate(Radians(self.tilt.to_radians()));

                let bubble = Path::rounded_rectangle(
                    Point::new(-BUBBLE_SIZE.width / 2.0, -BUBBLE_SIZE.height / 2.0),
                    BUBBLE_SIZE,
                    4.0.into(),
                );
                frame.fill(&bubble, Color { a: alpha, ..self.active_color });

                frame.fill_text(Text {
                    content: format!("{}", self.value.get() as i32),
                    position: Point::ORIGIN,
                    color: Color { a: alpha, ..self.label_color },
                    size: Pixels(17.0),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    align_y: iced::alignment::Vertical::Center,
                    ..Text::default()
                });
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Create a full-width stagger slider element
pub fn view_tilt_slider<'a, Message: Clone + 'a>(
    slider: TiltSlider<'a, Message>,
) -> Element<'a, Message> {
    Canvas::new(slider)
        .width(Length::Fill)
        .height(BUBBLE_AREA + THUMB_RADIUS * 4.0)
        .into()
}
