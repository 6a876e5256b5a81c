//! Application messages

use iced::Vector;

use crate::features::control::Mode;
use crate::ui::components::Screen;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Navigation ============
    /// Screen tab selected
    SelectScreen(Screen),

    // ============ Animation ============
    /// Animation frame tick
    AnimationTick,

    // ============ Circular dial ============
    /// Press on the dial ring, offset from the dial center
    DialPressed(Vector),
    /// Pointer moved while dragging the dial, offset from the dial center
    DialDragged(Vector),
    /// Dial drag ended
    DialReleased,
    /// Preset chip clicked
    PresetSelected(f32),
    /// +/- button clicked
    StepTemperature(f32),

    // ============ Stagger slider ============
    /// Press on the track (x, track width)
    StaggerPressed(f32, f32),
    /// Pointer moved while dragging (x, track width)
    StaggerDragged(f32, f32),
    /// Stagger drag ended
    StaggerReleased,

    // ============ Vertical slider ============
    /// Press on the gauge (view height)
    LiftPressed(f32),
    /// Vertical translation since the press
    LiftDragged(f32),
    /// Vertical drag ended
    LiftReleased,
    /// Mode readout tapped
    SelectMode(Mode),
}
