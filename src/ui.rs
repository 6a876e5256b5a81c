//! UI module for the control panel
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Primitives** (`primitives`): Canvas programs for the dial and stagger slider
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): One view per control screen

pub mod animation;
pub mod components;
pub mod pages;
pub mod primitives;
pub mod theme;
pub mod widgets;
