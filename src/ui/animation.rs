//! Unified animation system
//!
//! Spring animations built on `iced_anim`, ticked by the frame subscription
//! while anything is still moving.
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::Emphasis;
//!
//! let mut drag = Emphasis::new();
//! drag.start();
//! let width = drag.interpolate(20.0, 30.0);
//! ```

mod spring;

pub use spring::{Emphasis, SpringValue};
