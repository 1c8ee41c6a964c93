use serde::{Serialize, Serializer};
use std::fmt;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS named colors used by the marker ramp and the fixed fallbacks.
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const TEAL: Rgb = Rgb::new(0, 128, 128);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const CHARTREUSE: Rgb = Rgb::new(127, 255, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const DARK_RED: Rgb = Rgb::new(139, 0, 0);
    pub const GREY: Rgb = Rgb::new(128, 128, 128);
    pub const LIME: Rgb = Rgb::new(0, 255, 0);

    /// Channel-wise linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// `rgb(r, g, b)` form, accepted by Leaflet path styles.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
