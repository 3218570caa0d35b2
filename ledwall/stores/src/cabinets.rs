use std::collections::HashMap;

use anyhow::{Context, Error, bail};
use ledwall::CabinetType;
use tracing::{Level, info};
use util::source::Source;

use crate::csv::cabinets::{build_cabinet_from_field_map, get_cabinet_headers};

pub type CabinetsSource = Source;

/// Load an ordered cabinet catalog from a CSV file with 'Name', 'WidthMm' and 'HeightMm' columns.
#[tracing::instrument(level = Level::DEBUG)]
pub fn load_cabinets(source: &CabinetsSource) -> Result<Vec<CabinetType>, Error> {
    info!("Loading cabinets. source: {}", source);

    let path = source.path();

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .with_context(|| format!("Error reading cabinets. file: {}", path.display()))?;

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();

    let missing_headers = get_cabinet_headers()
        .into_iter()
        .filter(|required| !headers.contains(required))
        .collect::<Vec<_>>();
    if !missing_headers.is_empty() {
        bail!(
            "Missing cabinet columns. file: {}, columns: {}",
            path.display(),
            missing_headers.join(", ")
        );
    }

    let mut cabinets = Vec::new();

    for (index, result) in reader
        .records()
        .enumerate()
    {
        let record = result?;

        let field_map: HashMap<String, String> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.clone(), record.get(i).unwrap_or("").to_string()))
            .collect();

        // row 1 is the header row
        let cabinet = build_cabinet_from_field_map(&field_map)
            .with_context(|| format!("Invalid cabinet. file: {}, row: {}", path.display(), index + 2))?;
        cabinets.push(cabinet);
    }

    if cabinets.is_empty() {
        bail!("Empty cabinet catalog. file: {}", path.display());
    }

    info!("Loaded cabinets. count: {}", cabinets.len());

    Ok(cabinets)
}
