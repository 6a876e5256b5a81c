//! Vertical gauge widget for the dual-mode slider
//!
//! Reports drags as translation since the press, so the caller can apply
//! them relative to its last committed value. The fill level and active
//! state are inputs; the widget doesn't keep a value of its own.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::{Background, Border, Color, Element, Length, Rectangle, Size, Theme};
use iced::{mouse, touch};

/// A vertical gauge driven by relative drags
pub struct VerticalSlider<'a, Message> {
    /// Fill level (0.0 - 1.0)
    fill: f32,
    /// Whether the animation surface reports an active drag
    active: bool,
    on_press: Box<dyn Fn(f32) -> Message + 'a>,
    on_drag: Box<dyn Fn(f32) -> Message + 'a>,
    on_release: Option<Message>,
    width: Length,
    height: Length,
    grip_height: f32,
    rail_color: Color,
    fill_color: Color,
    fill_color_active: Color,
    grip_color: Color,
}

impl<'a, Message> VerticalSlider<'a, Message> {
    /// Creates a new vertical slider
    ///
    /// `on_press` receives the view height, `on_drag` the vertical
    /// translation since the press (negative when moving up).
    pub fn new<P, D>(fill: f32, on_press: P, on_drag: D) -> Self
    where
        P: Fn(f32) -> Message + 'a,
        D: Fn(f32) -> Message + 'a,
    {
        Self {
            fill: fill.clamp(0.0, 1.0),
            active: false,
            on_press: Box::new(on_press),
            on_drag: Box::new(on_drag),
            on_release: None,
            width: Length::Fixed(120.0),
            height: Length::Fill,
            grip_height: 6.0,
            rail_color: crate::ui::theme::track(&iced::Theme::Dark),
            fill_color: Color::from_rgb(0.85, 0.85, 0.88),
            fill_color_active: Color::WHITE,
            grip_color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn on_release(mut self, message: Message) -> Self {
        self.on_release = Some(message);
        self
    }

    /// Sets the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Rail and fill colors
    pub fn colors(mut self, rail: Color, fill: Color, fill_active: Color) -> Self {
        self.rail_color = rail;
        self.fill_color = fill;
        self.fill_color_active = fill_active;
        self
    }

    fn publish_release(&self, shell: &mut Shell<'_, Message>)
    where
        Message: Clone,
    {
        if let Some(on_release) = self.on_release.clone() {
            shell.publish(on_release);
        }
        shell.capture_event();
    }
}

/// State for the vertical slider
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    /// Pointer y at press time, `None` when idle
    origin_y: Option<f32>,
    /// Finger that started the drag, `None` for the mouse
    finger: Option<touch::Finger>,
}

impl State {
    fn press(&mut self, y: f32, finger: Option<touch::Finger>) {
        self.origin_y = Some(y);
        self.finger = finger;
    }

    /// Press origin, if `finger` (or the mouse, for `None`) owns the drag
    fn origin_for(&self, finger: Option<touch::Finger>) -> Option<f32> {
        self.origin_y.filter(|_| self.finger == finger)
    }

    /// End the drag if `finger` owns it; returns whether it did
    fn release(&mut self, finger: Option<touch::Finger>) -> bool {
        if self.origin_for(finger).is_none() {
            return false;
        }
        self.origin_y = None;
        self.finger = None;
        true
    }
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for VerticalSlider<'a, Message>
where
    Renderer: renderer::Renderer,
    Message: Clone,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);
        let size = limits.resolve(self.width, self.height, Size::ZERO);
        layout::Node::new(size)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.press(position.y, None);
                    shell.publish((self.on_press)(bounds.height));
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position, .. }) => {
                if state.origin_y.is_none() && bounds.contains(*position) {
                    state.press(position.y, Some(*id));
                    shell.publish((self.on_press)(bounds.height));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if let Some(origin_y) = state.origin_for(None) {
                    shell.publish((self.on_drag)(position.y - origin_y));
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position, .. }) => {
                if let Some(origin_y) = state.origin_for(Some(*id)) {
                    shell.publish((self.on_drag)(position.y - origin_y));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.release(None) {
                    self.publish_release(shell);
                }
            }
            Event::Touch(touch::Event::FingerLifted { id, .. })
            | Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if state.release(Some(*id)) {
                    self.publish_release(shell);
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let radius = bounds.width.min(bounds.height) * 0.3;

        // Draw rail
        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border::default().rounded(radius),
                ..Default::default()
            },
            Background::Color(self.rail_color),
        );

        // Fill grows from the bottom; top = max
        let fill_height = bounds.height * self.fill;
        if fill_height > 0.0 {
            let fill_bounds = Rectangle {
                x: bounds.x,
                y: bounds.y + bounds.height - fill_height,
                width: bounds.width,
                height: fill_height,
            };
            let color = if self.active {
                self.fill_color_active
            } else {
                self.fill_color
            };

            renderer.fill_quad(
                renderer::Quad {
                    bounds: fill_bounds,
                    border: Border::default().rounded(radius.min(fill_height / 2.0)),
                    ..Default::default()
                },
                Background::Color(color),
            );
        }

        // Grip bar riding on the fill edge
        let grip_width = bounds.width * 0.3;
        let grip_y = (bounds.y + bounds.height - fill_height - self.grip_height * 2.0)
            .max(bounds.y + self.grip_height);
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: bounds.x + (bounds.width - grip_width) / 2.0,
                    y: grip_y,
                    width: grip_width,
                    height: self.grip_height,
                },
                border: Border::default().rounded(self.grip_height / 2.0),
                ..Default::default()
            },
            Background::Color(self.grip_color),
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.origin_y.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::ResizingVertically
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<VerticalSlider<'a, Message>> for Element<'a, Message, Theme>
where
    Message: Clone + 'a,
{
    fn from(slider: VerticalSlider<'a, Message>) -> Self {
        Element::new(slider)
    }
}

/// Creates a new vertical slider
pub fn vertical_slider<'a, Message>(
    fill: f32,
    on_press: impl Fn(f32) -> Message + 'a,
    on_drag: impl Fn(f32) -> Message + 'a,
) -> VerticalSlider<'a, Message> {
    VerticalSlider::new(fill, on_press, on_drag)
}
