use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use ledwall_units::Unit;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// Minimum target size, in millimeters, for both width and height.
pub const MIN_TARGET_MM: f64 = 100.0;
/// Maximum target size, in millimeters, for both width and height. (100 meters)
pub const MAX_TARGET_MM: f64 = 100_000.0;

/// Identifies which geometric quantity an entered value represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Width,
    Height,
    Diagonal,
    /// Width / height, unitless.
    Ratio,
}

impl Display for InputField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::Width => f.write_str("width"),
            InputField::Height => f.write_str("height"),
            InputField::Diagonal => f.write_str("diagonal"),
            InputField::Ratio => f.write_str("ratio"),
        }
    }
}

/// Entered values, lengths are in the display unit passed to [`resolve`].
pub type InputValues = BTreeMap<InputField, f64>;

/// A fully specified target screen, lengths in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGeometry {
    pub width: f64,
    pub height: f64,
    pub diagonal: f64,
    pub ratio: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionError {
    #[error("Insufficient inputs, at least two positive values are required. found: {found}")]
    InsufficientInputs { found: usize },
    #[error("Unsupported combination of inputs, exactly two are required. fields: {}", join_fields(.fields))]
    UnsupportedCombination { fields: Vec<InputField> },
    #[error("Inconsistent geometry, the diagonal must be larger than the {side_field}. diagonal: {diagonal} mm, {side_field}: {side} mm")]
    InconsistentGeometry {
        side_field: InputField,
        diagonal: f64,
        side: f64,
    },
    #[error("Numeric failure, the derived geometry is not finite")]
    NumericFailure,
    #[error("Out of range, width and height must be between {MIN_TARGET_MM} mm and {MAX_TARGET_MM} mm. width: {width:.1} mm, height: {height:.1} mm")]
    OutOfRange { width: f64, height: f64 },
}

fn join_fields(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Complete the target geometry from exactly two entered values.
///
/// Values that are missing, zero, negative or NaN are treated as absent. Width, height and diagonal are
/// converted from `unit` to millimeters, the ratio is used as-is.
pub fn resolve(inputs: &InputValues, unit: Unit) -> Result<ResolvedGeometry, ResolutionError> {
    let present = inputs
        .iter()
        .filter(|(_field, value)| **value > 0.0)
        .map(|(field, value)| (*field, *value))
        .collect::<BTreeMap<_, _>>();

    trace!("resolve. present: {:?}, unit: {:?}", present, unit);

    if present.len() < 2 {
        return Err(ResolutionError::InsufficientInputs {
            found: present.len(),
        });
    }

    let length = |field: InputField| {
        present
            .get(&field)
            .map(|value| unit.to_canonical(*value))
    };

    let width = length(InputField::Width);
    let height = length(InputField::Height);
    let diagonal = length(InputField::Diagonal);
    let ratio = present
        .get(&InputField::Ratio)
        .copied();

    let geometry = match (width, height, diagonal, ratio) {
        (Some(w), None, None, Some(r)) => {
            let h = w / r;
            ResolvedGeometry {
                width: w,
                height: h,
                diagonal: w.hypot(h),
                ratio: r,
            }
        }
        (None, Some(h), None, Some(r)) => {
            let w = h * r;
            ResolvedGeometry {
                width: w,
                height: h,
                diagonal: w.hypot(h),
                ratio: r,
            }
        }
        (None, None, Some(d), Some(r)) => {
            let h = d / (1.0 + r * r).sqrt();
            ResolvedGeometry {
                width: h * r,
                height: h,
                diagonal: d,
                ratio: r,
            }
        }
        (Some(w), Some(h), None, None) => ResolvedGeometry {
            width: w,
            height: h,
            diagonal: w.hypot(h),
            ratio: w / h,
        },
        (Some(w), None, Some(d), None) => {
            if d <= w {
                return Err(ResolutionError::InconsistentGeometry {
                    side_field: InputField::Width,
                    diagonal: d,
                    side: w,
                });
            }
            let h = (d * d - w * w).sqrt();
            ResolvedGeometry {
                width: w,
                height: h,
                diagonal: d,
                ratio: w / h,
            }
        }
        (None, Some(h), Some(d), None) => {
            if d <= h {
                return Err(ResolutionError::InconsistentGeometry {
                    side_field: InputField::Height,
                    diagonal: d,
                    side: h,
                });
            }
            let w = (d * d - h * h).sqrt();
            ResolvedGeometry {
                width: w,
                height: h,
                diagonal: d,
                ratio: w / h,
            }
        }
        _ => {
            return Err(ResolutionError::UnsupportedCombination {
                fields: present.into_keys().collect(),
            });
        }
    };

    if !geometry.is_finite() {
        return Err(ResolutionError::NumericFailure);
    }

    let in_range = |value: f64| (MIN_TARGET_MM..=MAX_TARGET_MM).contains(&value);
    if !in_range(geometry.width) || !in_range(geometry.height) {
        return Err(ResolutionError::OutOfRange {
            width: geometry.width,
            height: geometry.height,
        });
    }

    debug!("resolved geometry: {:?}", geometry);

    Ok(geometry)
}

impl ResolvedGeometry {
    fn is_finite(&self) -> bool {
        [self.width, self.height, self.diagonal, self.ratio]
            .iter()
            .all(|value| value.is_finite())
    }
}
