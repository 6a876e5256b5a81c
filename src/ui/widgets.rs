//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types or callback functions
//! - **Composable**: Build on primitives and iced's built-in widgets
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Canvas programs for the dial and stagger slider
//! - **Widgets** (this module): Composable UI patterns
//! - **Components** (`crate::ui::components`): App-specific UI with Message handling

pub mod card_header;
pub mod preset_row;
mod vertical_slider;

pub use vertical_slider::vertical_slider;
