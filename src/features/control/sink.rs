//! Animation-input sink
//!
//! The vertical control doesn't draw its own fill. It writes named inputs
//! (`"value"`, `"isActive?"`) and text slots to an animation surface, which
//! renders from whatever it last accepted. A rejected write is logged and
//! dropped; the control never sees it.

use std::collections::HashMap;

/// Numeric input carrying the 0-100 fill level
pub const INPUT_VALUE: &str = "value";
/// Boolean input raised while a drag is in progress
pub const INPUT_ACTIVE: &str = "isActive?";
/// Text slot showing the formatted temperature
pub const SLOT_TEMPERATURE: &str = "temperature";
/// Text slot showing the formatted humidity
pub const SLOT_HUMIDITY: &str = "humidity";

/// Payload of a named input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputValue {
    Number(f32),
    Bool(bool),
}

impl InputValue {
    fn kind(&self) -> InputKind {
        match self {
            InputValue::Number(_) => InputKind::Number,
            InputValue::Bool(_) => InputKind::Bool,
        }
    }
}

impl From<f32> for InputValue {
    fn from(value: f32) -> Self {
        InputValue::Number(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Bool(value)
    }
}

/// Type an input was declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Number,
    Bool,
}

/// Receiver of animation inputs and text slots
pub trait AnimationSink {
    fn set_input(&mut self, name: &str, value: InputValue) -> Result<(), SinkError>;

    fn set_text_slot(&mut self, slot: &str, text: &str) -> Result<(), SinkError>;
}

/// Write an input, logging and swallowing a rejection
pub fn forward_input(sink: &mut dyn AnimationSink, name: &str, value: impl Into<InputValue>) {
    if let Err(e) = sink.set_input(name, value.into()) {
        tracing::warn!("Animation input write rejected: {}", e);
    }
}

/// Write a text slot, logging and swallowing a rejection
pub fn forward_text(sink: &mut dyn AnimationSink, slot: &str, text: &str) {
    if let Err(e) = sink.set_text_slot(slot, text) {
        tracing::warn!("Animation text slot write rejected: {}", e);
    }
}

/// In-process animation surface state
///
/// Only declared inputs and slots are accepted, mirroring a state machine
/// that exposes a fixed set of inputs.
#[derive(Debug, Clone, Default)]
pub struct StateMachineInputs {
    declared: HashMap<String, InputKind>,
    inputs: HashMap<String, InputValue>,
    slots: HashMap<String, Option<String>>,
}

impl StateMachineInputs {
    /// Surface with the vertical slider's inputs and slots declared
    pub fn vertical_slider() -> Self {
        Self::default()
            .declare(INPUT_VALUE, InputKind::Number)
            .declare(INPUT_ACTIVE, InputKind::Bool)
            .declare_slot(SLOT_TEMPERATURE)
            .declare_slot(SLOT_HUMIDITY)
    }

    pub fn declare(mut self, name: &str, kind: InputKind) -> Self {
        self.declared.insert(name.to_string(), kind);
        self
    }

    pub fn declare_slot(mut self, slot: &str) -> Self {
        self.slots.insert(slot.to_string(), None);
        self
    }

    pub fn number(&self, name: &str) -> Option<f32> {
        match self.inputs.get(name) {
            Some(InputValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.inputs.get(name) {
            Some(InputValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn text(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).and_then(|t| t.as_deref())
    }

    /// Fill level in 0.0 - 1.0, read from the `"value"` input
    pub fn fill(&self) -> f32 {
        (self.number(INPUT_VALUE).unwrap_or(0.0) / 100.0).clamp(0.0, 1.0)
    }

    pub fn is_active(&self) -> bool {
        self.flag(INPUT_ACTIVE).unwrap_or(false)
    }
}

impl AnimationSink for StateMachineInputs {
    fn set_input(&mut self, name: &str, value: InputValue) -> Result<(), SinkError> {
        let expected = *self
            .declared
            .get(name)
            .ok_or_else(|| SinkError::UnknownInput(name.to_string()))?;

        if expected != value.kind() {
            return Err(SinkError::TypeMismatch {
                name: name.to_string(),
                expected,
            });
        }
        if let InputValue::Number(n) = value {
            if !n.is_finite() {
                return Err(SinkError::NotFinite(name.to_string()));
            }
        }

        self.inputs.insert(name.to_string(), value);
        Ok(())
    }

    fn set_text_slot(&mut self, slot: &str, text: &str) -> Result<(), SinkError> {
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or_else(|| SinkError::UnknownSlot(slot.to_string()))?;
        *entry = Some(text.to_string());
        Ok(())
    }
}

/// Sink that accepts and discards everything
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

#[cfg(test)]
impl AnimationSink for NullSink {
    fn set_input(&mut self, _name: &str, _value: InputValue) -> Result<(), SinkError> {
        Ok(())
    }

    fn set_text_slot(&mut self, _slot: &str, _text: &str) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Reasons an animation surface refuses a write
#[derive(Debug, Clone, PartialEq)]
pub enum SinkError {
    UnknownInput(String),
    UnknownSlot(String),
    TypeMismatch { name: String, expected: InputKind },
    NotFinite(String),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::UnknownInput(name) => write!(f, "unknown input '{}'", name),
            SinkError::UnknownSlot(slot) => write!(f, "unknown text slot '{}'", slot),
            SinkError::TypeMismatch { name, expected } => {
                write!(f, "input '{}' expects {:?}", name, expected)
            }
            SinkError::NotFinite(name) => write!(f, "input '{}' got a non-finite number", name),
        }
    }
}

impl std::error::Error for SinkError {}
