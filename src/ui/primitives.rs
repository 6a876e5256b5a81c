//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own input and rendering
//!
//! # Contents
//!
//! - [`DialRing`] - 270° circular dial using Canvas
//! - [`TiltSlider`] - Horizontal slider with a leaning value bubble

pub mod dial_ring;
pub mod tilt_slider;

pub use dial_ring::{DialRing, view_dial_ring};
pub use tilt_slider::{TiltSlider, view_tilt_slider};
