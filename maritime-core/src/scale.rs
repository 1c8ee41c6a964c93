use crate::color::Rgb;
use crate::domain::{ColorDomain, DOMAIN_LEN};

/// Fill opacity for markers with a value.
pub const VALUE_FILL_OPACITY: f64 = 0.9;
/// Fill opacity for markers without one.
pub const NO_DATA_FILL_OPACITY: f64 = 0.6;

/// Result of resolving a reading against a domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerColor {
    Scaled(Rgb),
    OutOfRange,
    NoData,
}

impl MarkerColor {
    pub fn rgb(self) -> Rgb {
        match self {
            MarkerColor::Scaled(rgb) => rgb,
            MarkerColor::OutOfRange => Rgb::DARK_RED,
            MarkerColor::NoData => Rgb::GREY,
        }
    }

    pub fn default_fill_opacity(self) -> f64 {
        match self {
            MarkerColor::NoData => NO_DATA_FILL_OPACITY,
            _ => VALUE_FILL_OPACITY,
        }
    }
}

/// Piecewise-linear map from a domain's breakpoints onto its ramp.
///
/// Breakpoint `i` maps to ramp color `i`. The domain has one fewer
/// breakpoint than the ramp has colors, so the last ramp color is never
/// reached; values above the last breakpoint resolve to `OutOfRange`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: ColorDomain,
}

impl ColorScale {
    pub fn new(domain: ColorDomain) -> Self {
        Self { domain }
    }

    pub fn for_reading(reading: &str) -> Self {
        Self::new(ColorDomain::for_reading(reading))
    }

    pub fn domain(&self) -> &ColorDomain {
        &self.domain
    }

    pub fn resolve(&self, value: Option<f64>) -> MarkerColor {
        let Some(v) = value.filter(|v| !v.is_nan()) else {
            return MarkerColor::NoData;
        };
        if v < 0.0 {
            MarkerColor::NoData
        } else if v > self.domain.max_value() {
            MarkerColor::OutOfRange
        } else {
            MarkerColor::Scaled(self.interpolate(v))
        }
    }

    fn interpolate(&self, v: f64) -> Rgb {
        let points = &self.domain.breakpoints;
        let ramp = &self.domain.ramp;
        // index of the segment [points[i], points[i + 1]] holding v
        let i = points[1..DOMAIN_LEN - 1]
            .iter()
            .take_while(|&&p| p <= v)
            .count();
        let (lo, hi) = (points[i], points[i + 1]);
        let t = if hi > lo { (v - lo) / (hi - lo) } else { 0.0 };
        ramp[i].lerp(ramp[i + 1], t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aod() -> ColorScale {
        ColorScale::for_reading("aod_500nm")
    }

    #[test]
    fn test_breakpoints_hit_ramp_colors() {
        let scale = aod();
        assert_eq!(scale.resolve(Some(0.0)), MarkerColor::Scaled(Rgb::BLUE));
        assert_eq!(scale.resolve(Some(0.1)), MarkerColor::Scaled(Rgb::TEAL));
        assert_eq!(scale.resolve(Some(0.3)), MarkerColor::Scaled(Rgb::CHARTREUSE));
        assert_eq!(scale.resolve(Some(0.5)), MarkerColor::Scaled(Rgb::ORANGE));
    }

    #[test]
    fn test_value_between_breakpoints() {
        let scale = ColorScale::for_reading("water_vapor_CM");
        // halfway between yellow (4.0) and orange (5.0)
        let MarkerColor::Scaled(rgb) = scale.resolve(Some(4.5)) else {
            panic!("expected a scaled color");
        };
        assert_eq!(rgb, Rgb::new(255, 210, 0));
        assert!(rgb.g < Rgb::YELLOW.g && rgb.g > Rgb::ORANGE.g);
    }

    #[test]
    fn test_interpolation_is_monotonic_within_segment() {
        let scale = ColorScale::for_reading("angstrom_exponent_440_870");
        let mut last_g = 0;
        for step in 0..=8 {
            let v = 0.8 + f64::from(step) * 0.05;
            let rgb = scale.resolve(Some(v)).rgb();
            // green -> chartreuse: red channel rises, green channel rises
            assert!(rgb.g >= last_g, "{v}");
            last_g = rgb.g;
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(aod().resolve(Some(0.51)), MarkerColor::OutOfRange);
        assert_eq!(aod().resolve(Some(3.0)).rgb(), Rgb::DARK_RED);
    }

    #[test]
    fn test_no_data() {
        assert_eq!(aod().resolve(None), MarkerColor::NoData);
        assert_eq!(aod().resolve(Some(-999.0)), MarkerColor::NoData);
        assert_eq!(aod().resolve(Some(f64::NAN)), MarkerColor::NoData);
        assert_eq!(MarkerColor::NoData.rgb(), Rgb::GREY);
        assert_eq!(MarkerColor::NoData.default_fill_opacity(), NO_DATA_FILL_OPACITY);
        assert_eq!(MarkerColor::OutOfRange.default_fill_opacity(), VALUE_FILL_OPACITY);
    }
}
