//! Utility functions

// ============================================================================
// Readout Formatting
// ============================================================================

/// Values at or below this read as switched off
pub const OFF_THRESHOLD: f32 = 3.0;

/// Format a temperature readout, e.g. `"180°C"` or `"Off"`
///
/// The fractional part is truncated, not rounded.
pub fn format_temperature(value: f32) -> String {
    if value > OFF_THRESHOLD {
        format!("{}°C", value as i32)
    } else {
        "Off".to_string()
    }
}

/// Format a humidity readout, e.g. `"42%"` or `"Off"`
pub fn format_humidity(value: f32) -> String {
    if value > OFF_THRESHOLD {
        format!("{}%", value as i32)
    } else {
        "Off".to_string()
    }
}
