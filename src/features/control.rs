//! Bounded control logic - gesture to value mapping without any UI types
//!
//! Every control owns one or more [`BoundedValue`]s and turns a drag into
//! writes on them:
//!
//! - [`circular`] - pointer angle on a 270° arc (oven dial)
//! - [`linear`] - pointer x along a track, plus tilt feedback (stagger slider)
//! - [`relative`] - vertical translation on top of the last committed value
//!
//! [`color`] derives the dial's arc color and [`sink`] forwards the vertical
//! control's state to its animation surface.

mod bounded;
pub mod circular;
pub mod color;
pub mod linear;
pub mod relative;
pub mod sink;

pub use bounded::BoundedValue;
pub use circular::DialGesture;
pub use color::{ColorRamp, ColorStop, FractionMode, Rgba};
pub use linear::SlideGesture;
pub use relative::{DualValue, LiftGesture, Mode};
pub use sink::{AnimationSink, InputValue, SinkError, StateMachineInputs};
