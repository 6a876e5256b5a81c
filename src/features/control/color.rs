//! Piecewise linear color ramp for the dial's active arc
//!
//! The ramp is a list of stops; a value picks the segment it falls into and
//! blends the segment's end colors channel by channel.

use serde::{Deserialize, Serialize};

/// Toolkit-independent RGBA color, channels in 0.0 - 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Blend toward `other`; `fraction` is clamped to 0.0 - 1.0 first
    pub fn interpolate(self, other: Rgba, fraction: f32) -> Rgba {
        let t = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// A threshold in the value domain with its color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub at: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(at: f32, color: Rgba) -> Self {
        Self { at, color }
    }
}

/// How the blend fraction inside a segment is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FractionMode {
    /// Fraction measured from the segment's own start to its end
    #[default]
    SegmentRelative,
    /// Offsets of the first dial release: `t/90`, `(t-90)/90`, `(t-180)/90`
    ///
    /// These don't line up with the segment bounds, so most of the first two
    /// segments render as their end color. Kept for visual compatibility.
    Legacy,
}

/// Colors of the dial ramp
pub mod palette {
    use super::Rgba;

    /// Muted green used below the ramp and as its first stop
    pub const LOW: Rgba = Rgba::from_hex(0x4c6b5c);
    pub const MID: Rgba = Rgba::new(1.0, 0.8, 0.0, 1.0);
    pub const WARM: Rgba = Rgba::from_hex(0xff7a1a);
    pub const HIGH: Rgba = Rgba::new(1.0, 0.176, 0.333, 1.0);
}

/// Ordered color stops plus a fallback for values outside the ramp
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
    default: Rgba,
    mode: FractionMode,
}

impl ColorRamp {
    /// Build a ramp; stops are sorted by threshold
    pub fn new(mut stops: Vec<ColorStop>, default: Rgba) -> Self {
        stops.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self {
            stops,
            default,
            mode: FractionMode::default(),
        }
    }

    /// The dial's ramp: green at 135, yellow at 180, orange at 210, pink at 270
    pub fn thermostat() -> Self {
        Self::new(
            vec![
                ColorStop::new(135.0, palette::LOW),
                ColorStop::new(180.0, palette::MID),
                ColorStop::new(210.0, palette::WARM),
                ColorStop::new(270.0, palette::HIGH),
            ],
            palette::LOW,
        )
    }

    pub fn with_mode(mut self, mode: FractionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> FractionMode {
        self.mode
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color for `value`
    ///
    /// Segments are half-open except the last, which includes its end stop.
    pub fn color_at(&self, value: f32) -> Rgba {
        let Some(index) = self.segment_index(value) else {
            return self.default;
        };
        let start = self.stops[index];
        let end = self.stops[index + 1];

        let fraction = match self.mode {
            FractionMode::SegmentRelative => {
                let width = end.at - start.at;
                if width <= 0.0 {
                    1.0
                } else {
                    (value - start.at) / width
                }
            }
            FractionMode::Legacy => (value - 90.0 * index as f32) / 90.0,
        };

        start.color.interpolate(end.color, fraction)
    }

    fn segment_index(&self, value: f32) -> Option<usize> {
        let count = self.stops.len().checked_sub(1)?;
        (0..count).find(|&i| {
            let start = self.stops[i].at;
            let end = self.stops[i + 1].at;
            let last = i + 1 == count;
            value >= start && (value < end || (last && value <= end))
        })
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::thermostat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Rgba, b: Rgba) -> bool {
        [(a.r, b.r), (a.g, b.g), (a.b, b.b), (a.a, b.a)]
            .iter()
            .all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_interpolate_clamps_fraction() {
        let black = Rgba::new(0.0, 0.0, 0.0, 1.0);
        let white = Rgba::new(1.0, 1.0, 1.0, 0.0);
        assert_eq!(black.interpolate(white, -3.0), black);
        assert_eq!(black.interpolate(white, 7.0), white);
        assert_eq!(black.interpolate(white, f32::NAN), black);
        assert!(approx(
            black.interpolate(white, 0.25),
            Rgba::new(0.25, 0.25, 0.25, 0.75)
        ));
    }

    #[test]
    fn test_scenarios() {
        let ramp = ColorRamp::thermostat();
        assert!(approx(ramp.color_at(180.0), palette::MID));
        assert!(approx(ramp.color_at(135.0), palette::LOW));
        assert_eq!(ramp.color_at(90.0), palette::LOW);
        assert_eq!(ramp.color_at(300.0), palette::LOW);
        assert!(approx(ramp.color_at(270.0), palette::HIGH));
    }

    #[test]
    fn test_stops_are_sorted() {
        let ramp = ColorRamp::new(
            vec![
                ColorStop::new(10.0, palette::HIGH),
                ColorStop::new(0.0, palette::LOW),
            ],
            palette::MID,
        );
        assert_eq!(ramp.stops()[0].at, 0.0);
        assert!(approx(ramp.color_at(0.0), palette::LOW));
        assert!(approx(ramp.color_at(10.0), palette::HIGH));
    }

    #[test]
    fn test_single_stop_ramp_uses_default() {
        let ramp = ColorRamp::new(vec![ColorStop::new(5.0, palette::HIGH)], palette::MID);
        assert_eq!(ramp.color_at(5.0), palette::MID);
    }

    #[test]
    fn test_legacy_offsets_are_verbatim() {
        let ramp = ColorRamp::thermostat().with_mode(FractionMode::Legacy);

        // 135/90 clamps to 1.0, so the first segment starts out fully yellow
        assert!(approx(ramp.color_at(135.0), palette::MID));
        // (180 - 90) / 90 = 1.0 in the second segment
        assert!(approx(ramp.color_at(180.0), palette::WARM));
        // (225 - 180) / 90 = 0.5 in the third segment
        assert!(approx(
            ramp.color_at(225.0),
            palette::WARM.interpolate(palette::HIGH, 0.5)
        ));
        assert_eq!(ramp.color_at(100.0), palette::LOW);
    }

    mod property_stops {
        use super::*;

        #[test]
        fn boundaries_hit_stop_colors_exactly() {
            let ramp = ColorRamp::thermostat();
            for stop in ramp.stops() {
                assert!(approx(ramp.color_at(stop.at), stop.color), "at={}", stop.at);
            }
        }

        #[test]
        fn channels_are_monotonic_between_stops() {
            let ramp = ColorRamp::thermostat();
            for pair in ramp.stops().windows(2) {
                let (start, end) = (pair[0], pair[1]);
                let channel = |c: Rgba| [c.r, c.g, c.b, c.a];
                let direction: Vec<f32> = channel(end.color)
                    .iter()
                    .zip(channel(start.color).iter())
                    .map(|(e, s)| (e - s).signum())
                    .collect();

                let mut previous = channel(start.color);
                for step in 1..100 {
                    let value = start.at + (end.at - start.at) * step as f32 / 100.0;
                    let current = channel(ramp.color_at(value));
                    for i in 0..4 {
                        let delta = (current[i] - previous[i]) * direction[i];
                        assert!(delta >= -1e-5, "value={value} channel={i}");
                    }
                    previous = current;
                }
            }
        }
    }
}
