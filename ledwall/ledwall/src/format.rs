//! Text formatting of millimeter values for display.
//!
//! Rounding is done on `Decimal` values so that halves round away from zero regardless of how the
//! millimeter value is represented as a float.

use ledwall_units::Unit;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown for values in a display unit.
pub const UNIT_DECIMAL_PLACES: u32 = 2;

/// Differences smaller than this, in millimeters, are shown as an exact match.
pub const EXACT_MATCH_MM: f64 = 0.01;

/// Ratio errors, in percent, at or below this are not worth mentioning.
pub const NEGLIGIBLE_RATIO_ERROR: f64 = 0.1;
/// Ratio errors, in percent, above this are a poor fit.
pub const POOR_RATIO_ERROR: f64 = 5.0;

fn rounded(value: Decimal, decimal_places: u32) -> String {
    let value = value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", decimal_places as usize, value)
}

fn rounded_f64(value: f64, decimal_places: u32) -> String {
    match Decimal::from_f64(value) {
        Some(value) => rounded(value, decimal_places),
        None => format!("{:.*}", decimal_places as usize, value),
    }
}

/// The value in `unit`, without the unit name, e.g. '10.00'
pub fn value_in_unit(mm: f64, unit: Unit) -> String {
    match Decimal::from_f64(mm) {
        Some(mm) => rounded(unit.from_canonical_decimal(mm), UNIT_DECIMAL_PLACES),
        None => format!("{:.*}", UNIT_DECIMAL_PLACES as usize, unit.from_canonical(mm)),
    }
}

/// e.g. '10.00 ft'
pub fn format_in_unit(mm: f64, unit: Unit) -> String {
    format!("{} {}", value_in_unit(mm, unit), unit.display_name())
}

/// Metric rendering, e.g. '1.15 m' or '562.5 mm'
pub fn format_dimension(mm: f64) -> String {
    if mm >= 1000.0 {
        let meters = Decimal::from_f64(mm).map(|mm| mm / Decimal::ONE_THOUSAND);
        match meters {
            Some(meters) => format!("{} m", rounded(meters, 2)),
            None => format!("{:.2} m", mm / 1000.0),
        }
    } else {
        format!("{} mm", rounded_f64(mm, 1))
    }
}

/// How an actual length compares to the target length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionDifference {
    ExactMatch,
    /// Larger than the target by this many millimeters
    Over(f64),
    /// Smaller than the target by this many millimeters
    Under(f64),
}

impl DimensionDifference {
    pub fn between(target_mm: f64, actual_mm: f64) -> Self {
        let difference = actual_mm - target_mm;
        if difference.abs() < EXACT_MATCH_MM {
            DimensionDifference::ExactMatch
        } else if difference > 0.0 {
            DimensionDifference::Over(difference)
        } else {
            DimensionDifference::Under(-difference)
        }
    }

    /// e.g. '+1.00 ft (+304.8 mm)', '-0.50 m (-500.0 mm)' or 'exact match'
    pub fn describe(&self, unit: Unit) -> String {
        let (sign, mm) = match self {
            DimensionDifference::ExactMatch => return "exact match".to_string(),
            DimensionDifference::Over(mm) => ('+', *mm),
            DimensionDifference::Under(mm) => ('-', *mm),
        };

        format!(
            "{sign}{} ({sign}{} mm)",
            format_in_unit(mm, unit),
            rounded_f64(mm, 1)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioFit {
    Exact,
    Approximate,
    Off,
}

impl RatioFit {
    pub fn from_error(ratio_error: f64) -> Self {
        if ratio_error <= NEGLIGIBLE_RATIO_ERROR {
            RatioFit::Exact
        } else if ratio_error <= POOR_RATIO_ERROR {
            RatioFit::Approximate
        } else {
            RatioFit::Off
        }
    }
}

/// e.g. '~1.2% off' or '8.3% off', `None` when the error is negligible.
pub fn ratio_error_label(ratio_error: f64) -> Option<String> {
    match RatioFit::from_error(ratio_error) {
        RatioFit::Exact => None,
        RatioFit::Approximate => Some(format!("~{}% off", rounded_f64(ratio_error, 1))),
        RatioFit::Off => Some(format!("{}% off", rounded_f64(ratio_error, 1))),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(3048.0, Unit::Feet, "10.00 ft")]
    #[case(1000.0, Unit::Inches, "39.37 in")]
    #[case(1147.3474844178636, Unit::Meters, "1.15 m")]
    #[case(5.0, Unit::Meters, "0.01 m")]
    #[case(254.0, Unit::Inches, "10.00 in")]
    fn test_format_in_unit(#[case] mm: f64, #[case] unit: Unit, #[case] expected: &str) {
        assert_eq!(format_in_unit(mm, unit), expected);
    }

    #[rstest]
    #[case(562.5, "562.5 mm")]
    #[case(100.0, "100.0 mm")]
    #[case(1000.0, "1.00 m")]
    #[case(1005.0, "1.01 m")]
    #[case(1147.3474844178636, "1.15 m")]
    #[case(100_000.0, "100.00 m")]
    fn test_format_dimension(#[case] mm: f64, #[case] expected: &str) {
        assert_eq!(format_dimension(mm), expected);
    }

    #[rstest]
    #[case(3048.0, 3048.005, DimensionDifference::ExactMatch)]
    #[case(3048.0, 3048.0, DimensionDifference::ExactMatch)]
    #[case(1000.0, 1500.0, DimensionDifference::Over(500.0))]
    #[case(1000.0, 750.0, DimensionDifference::Under(250.0))]
    fn test_dimension_difference(#[case] target: f64, #[case] actual: f64, #[case] expected: DimensionDifference) {
        assert_eq!(DimensionDifference::between(target, actual), expected);
    }

    #[rstest]
    #[case(DimensionDifference::ExactMatch, Unit::Feet, "exact match")]
    #[case(DimensionDifference::Over(304.8), Unit::Feet, "+1.00 ft (+304.8 mm)")]
    #[case(DimensionDifference::Under(500.0), Unit::Meters, "-0.50 m (-500.0 mm)")]
    fn test_describe_difference(#[case] difference: DimensionDifference, #[case] unit: Unit, #[case] expected: &str) {
        assert_eq!(difference.describe(unit), expected);
    }

    #[rstest]
    #[case(0.0, RatioFit::Exact)]
    #[case(0.1, RatioFit::Exact)]
    #[case(0.11, RatioFit::Approximate)]
    #[case(5.0, RatioFit::Approximate)]
    #[case(5.01, RatioFit::Off)]
    fn test_ratio_fit(#[case] ratio_error: f64, #[case] expected: RatioFit) {
        assert_eq!(RatioFit::from_error(ratio_error), expected);
    }

    #[rstest]
    #[case(0.05, None)]
    #[case(1.25, Some("~1.3% off"))]
    #[case(8.333, Some("8.3% off"))]
    fn test_ratio_error_label(#[case] ratio_error: f64, #[case] expected: Option<&str>) {
        assert_eq!(ratio_error_label(ratio_error).as_deref(), expected);
    }
}
