use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rectangular display cabinet, the tile LED walls are built from.
///
/// The ratio is always derived from the size, it cannot be configured independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CabinetDefinition")]
pub struct CabinetType {
    name: String,
    width_mm: f64,
    height_mm: f64,
    ratio: f64,
}

/// Serialized form, without the derived ratio
#[derive(Deserialize)]
struct CabinetDefinition {
    name: String,
    width_mm: f64,
    height_mm: f64,
}

impl TryFrom<CabinetDefinition> for CabinetType {
    type Error = CabinetError;

    fn try_from(value: CabinetDefinition) -> Result<Self, Self::Error> {
        CabinetType::try_new(value.name, value.width_mm, value.height_mm)
    }
}

impl CabinetType {
    pub fn try_new(name: impl Into<String>, width_mm: f64, height_mm: f64) -> Result<Self, CabinetError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CabinetError::MissingName);
        }

        let valid = |value: f64| value.is_finite() && value > 0.0;
        if !valid(width_mm) || !valid(height_mm) {
            return Err(CabinetError::InvalidSize {
                name,
                width_mm,
                height_mm,
            });
        }

        Ok(Self {
            name,
            width_mm,
            height_mm,
            ratio: width_mm / height_mm,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    /// width / height
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// e.g. '16:9 (600×337.5 mm)'
    pub fn label(&self) -> String {
        format!("{} ({}×{} mm)", self.name, self.width_mm, self.height_mm)
    }
}

impl Display for CabinetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CabinetError {
    #[error("Missing cabinet name")]
    MissingName,
    #[error("Invalid cabinet size, width and height must be positive. name: '{name}', width: {width_mm} mm, height: {height_mm} mm")]
    InvalidSize {
        name: String,
        width_mm: f64,
        height_mm: f64,
    },
}

/// The built-in catalog, in presentation order.
pub fn default_catalog() -> Vec<CabinetType> {
    vec![
        CabinetType {
            name: "16:9".to_string(),
            width_mm: 600.0,
            height_mm: 337.5,
            ratio: 600.0 / 337.5,
        },
        CabinetType {
            name: "1:1".to_string(),
            width_mm: 500.0,
            height_mm: 500.0,
            ratio: 1.0,
        },
    ]
}
