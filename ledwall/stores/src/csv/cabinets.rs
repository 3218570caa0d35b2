use std::collections::HashMap;

use anyhow::{Context, Error, anyhow};
use ledwall::CabinetType;

// Cabinet CSV field names
pub const FIELD_NAME: &str = "Name";
pub const FIELD_WIDTH_MM: &str = "WidthMm";
pub const FIELD_HEIGHT_MM: &str = "HeightMm";

pub fn get_cabinet_headers() -> Vec<String> {
    vec![FIELD_NAME.into(), FIELD_WIDTH_MM.into(), FIELD_HEIGHT_MM.into()]
}

pub fn build_cabinet_from_field_map(fields: &HashMap<String, String>) -> Result<CabinetType, Error> {
    let name = fields
        .get(FIELD_NAME)
        .map(|name| name.trim().to_string())
        .unwrap_or_default();

    let size = |field: &str| -> Result<f64, Error> {
        let value = fields
            .get(field)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| anyhow!("Missing field. field: {}", field))?;

        value
            .parse::<f64>()
            .with_context(|| format!("Invalid number. field: {}, value: '{}'", field, value))
    };

    let width_mm = size(FIELD_WIDTH_MM)?;
    let height_mm = size(FIELD_HEIGHT_MM)?;

    Ok(CabinetType::try_new(name, width_mm, height_mm)?)
}
