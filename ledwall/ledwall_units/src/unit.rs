use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display units a user can enter screen dimensions in.
///
/// All geometry is calculated in millimeters, the canonical unit, these are only used at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// Inches (1 inch = 25.4 mm)
    Inches,
    /// Feet (1 foot = 12 inches = 304.8 mm)
    Feet,
    /// Meters (1 m = 1000 mm)
    Meters,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Inches, Unit::Feet, Unit::Meters];

    /// Returns the number of millimeters in one unit of this unit
    fn mm_per_unit(&self) -> Decimal {
        match self {
            Unit::Inches => dec!(25.4),
            Unit::Feet => dec!(304.8),
            Unit::Meters => dec!(1000),
        }
    }

    fn mm_per_unit_f64(&self) -> f64 {
        match self {
            Unit::Inches => 25.4,
            Unit::Feet => 304.8,
            Unit::Meters => 1000.0,
        }
    }

    /// Convert a value in this unit to millimeters.
    ///
    /// No rounding is applied, formatting is the caller's concern.
    pub fn to_canonical(&self, value: f64) -> f64 {
        value * self.mm_per_unit_f64()
    }

    /// Convert millimeters to a value in this unit.
    pub fn from_canonical(&self, mm: f64) -> f64 {
        mm / self.mm_per_unit_f64()
    }

    /// Convert a Decimal millimeter value to this unit
    pub fn from_canonical_decimal(&self, mm: Decimal) -> Decimal {
        mm / self.mm_per_unit()
    }

    /// Calculate the scale factor to convert from this unit to another unit
    pub fn scale_f64_for(&self, to: Unit) -> f64 {
        self.mm_per_unit_f64() / to.mm_per_unit_f64()
    }

    /// Re-express a value entered in this unit in another unit, e.g. when the display unit is switched.
    pub fn convert(&self, value: f64, to: Unit) -> f64 {
        value * self.scale_f64_for(to)
    }

    /// Get a display string for this unit
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Feet => "ft",
            Unit::Meters => "m",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Inches => f.write_str("inches"),
            Unit::Feet => f.write_str("feet"),
            Unit::Meters => f.write_str("meters"),
        }
    }
}



// Helper function to check if two f64 values are approximately equal
#[cfg(test)]
fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
