//! Color domain selection per measurement type.
//!
//! Every reading type maps onto six numeric breakpoints and the same
//! seven-color ramp. The breakpoints depend only on the type string.

use crate::color::Rgb;

/// Number of breakpoints in every domain.
pub const DOMAIN_LEN: usize = 6;

/// Delay before a changed reading type recomputes its domain.
pub const DOMAIN_DEBOUNCE_MS: i32 = 300;

/// Marker ramp, low to high.
pub const RAMP: [Rgb; 7] = [
    Rgb::BLUE,
    Rgb::TEAL,
    Rgb::GREEN,
    Rgb::CHARTREUSE,
    Rgb::YELLOW,
    Rgb::ORANGE,
    Rgb::RED,
];

/// Which family of reading a type string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingKind {
    /// Aerosol optical depth and its standard deviations
    OpticalDepth,
    /// Water vapor column and air mass
    WaterAirMass,
    /// Angstrom exponent
    Angstrom,
    Other,
}

impl ReadingKind {
    /// First match wins, in the order the variants are declared.
    pub fn classify(reading: &str) -> Self {
        if reading.contains("std") || reading.contains("aod") {
            ReadingKind::OpticalDepth
        } else if reading.contains("water") || reading.contains("air_mass") {
            ReadingKind::WaterAirMass
        } else if reading.contains("angstrom") {
            ReadingKind::Angstrom
        } else {
            ReadingKind::Other
        }
    }

    fn step(self) -> f64 {
        match self {
            ReadingKind::OpticalDepth => 0.1,
            ReadingKind::WaterAirMass => 1.0,
            ReadingKind::Angstrom => 2.0 / 5.0,
            ReadingKind::Other => 1.0 / 6.0,
        }
    }

    /// Water/air mass breakpoints are whole numbers and skip the rounding.
    fn rounds(self) -> bool {
        self != ReadingKind::WaterAirMass
    }
}

/// Six breakpoints plus the ramp they index into.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDomain {
    pub kind: ReadingKind,
    pub breakpoints: [f64; DOMAIN_LEN],
    pub ramp: [Rgb; 7],
}

impl ColorDomain {
    pub fn for_reading(reading: &str) -> Self {
        let kind = ReadingKind::classify(reading);
        let mut breakpoints = [0.0; DOMAIN_LEN];
        for (i, point) in breakpoints.iter_mut().enumerate() {
            let raw = i as f64 * kind.step();
            *point = if kind.rounds() { round_one_decimal(raw) } else { raw };
        }
        Self {
            kind,
            breakpoints,
            ramp: RAMP,
        }
    }

    /// Largest in-range value; anything above is drawn out of range.
    pub fn max_value(&self) -> f64 {
        self.breakpoints[DOMAIN_LEN - 1]
    }
}

// `1/6` steps collapse to 0.2, 0.3, 0.5, ... after this.
fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optical_depth_domain() {
        for reading in ["aod_500nm", "std_440nm", "std_water_vapor_CM"] {
            let domain = ColorDomain::for_reading(reading);
            assert_eq!(domain.breakpoints, [0.0, 0.1, 0.2, 0.3, 0.4, 0.5], "{reading}");
            assert_eq!(domain.max_value(), 0.5);
        }
    }

    #[test]
    fn test_water_and_air_mass_domain() {
        for reading in ["water_vapor_CM", "air_mass"] {
            let domain = ColorDomain::for_reading(reading);
            assert_eq!(domain.breakpoints, [0.0, 1.0, 2.0, 3.0, 4.0, 5.0], "{reading}");
        }
    }

    #[test]
    fn test_angstrom_domain() {
        let domain = ColorDomain::for_reading("angstrom_exponent_440_870");
        assert_eq!(domain.breakpoints, [0.0, 0.4, 0.8, 1.2, 1.6, 2.0]);
        assert_eq!(domain.max_value(), 2.0);
    }

    #[test]
    fn test_fallback_domain_rounds_sixths() {
        let domain = ColorDomain::for_reading("number_of_observations");
        assert_eq!(domain.kind, ReadingKind::Other);
        assert_eq!(domain.breakpoints, [0.0, 0.2, 0.3, 0.5, 0.7, 0.8]);
    }

    #[test]
    fn test_ramp_is_fixed() {
        let a = ColorDomain::for_reading("aod_340nm");
        let b = ColorDomain::for_reading("");
        assert_eq!(a.ramp, b.ramp);
        assert_eq!(a.ramp[0], Rgb::BLUE);
        assert_eq!(a.ramp[6], Rgb::RED);
    }
}
