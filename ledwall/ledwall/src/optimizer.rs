use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cabinet::CabinetType;
use crate::geometry::ResolvedGeometry;

/// How many columns either side of the estimate are evaluated.
pub const COLUMN_SEARCH_RADIUS: u32 = 3;

/// Absolute tolerance used to decide that an exact row count is a whole number.
pub const INTEGER_ROWS_EPSILON: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// Row count rounded down, the wall fits within the target height
    Lower,
    /// Row count rounded up, the wall is at least the target height
    Upper,
}

/// One candidate grid of cabinets, sizes in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub columns: u32,
    pub rows: u32,
    pub total_width: f64,
    pub total_height: f64,
    pub diagonal: f64,
    pub ratio: f64,
    /// Percentage deviation of `ratio` from the target ratio
    pub ratio_error: f64,
    pub kind: CandidateKind,
}

impl ScreenConfig {
    fn new(cabinet: &CabinetType, columns: u32, rows: u32, kind: CandidateKind, target_ratio: f64) -> Self {
        let total_width = columns as f64 * cabinet.width_mm();
        let total_height = rows as f64 * cabinet.height_mm();
        let ratio = total_width / total_height;
        let ratio_error = if target_ratio > 0.0 {
            (ratio - target_ratio).abs() / target_ratio * 100.0
        } else {
            0.0
        };

        Self {
            columns,
            rows,
            total_width,
            total_height,
            diagonal: total_width.hypot(total_height),
            ratio,
            ratio_error,
            kind,
        }
    }

    pub fn cabinet_count(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub cabinet: CabinetType,
    pub lower: Option<ScreenConfig>,
    pub upper: Option<ScreenConfig>,
}

impl CalculationResult {
    /// The candidates that exist, lower first.
    pub fn candidates(&self) -> impl Iterator<Item = &ScreenConfig> {
        self.lower
            .iter()
            .chain(self.upper.iter())
    }
}

/// Find the best lower and upper grid for each cabinet in the catalog.
///
/// The results are in catalog order, one per cabinet. A candidate is `None` when its row count is zero.
pub fn optimize(geometry: &ResolvedGeometry, catalog: &[CabinetType]) -> Vec<CalculationResult> {
    catalog
        .iter()
        .map(|cabinet| optimize_cabinet(geometry, cabinet))
        .collect()
}

fn optimize_cabinet(geometry: &ResolvedGeometry, cabinet: &CabinetType) -> CalculationResult {
    let exact_rows = geometry.height / cabinet.height_mm();
    let (lower_rows, upper_rows) = row_counts(exact_rows);

    trace!(
        "cabinet: {}, exact_rows: {}, lower_rows: {}, upper_rows: {}",
        cabinet.name(),
        exact_rows,
        lower_rows,
        upper_rows
    );

    let candidate = |rows: u32, kind: CandidateKind| {
        if rows == 0 {
            return None;
        }
        let columns = best_columns(geometry.ratio, rows, cabinet);
        if columns == 0 {
            return None;
        }
        Some(ScreenConfig::new(cabinet, columns, rows, kind, geometry.ratio))
    };

    let result = CalculationResult {
        cabinet: cabinet.clone(),
        lower: candidate(lower_rows, CandidateKind::Lower),
        upper: candidate(upper_rows, CandidateKind::Upper),
    };

    debug!(
        "cabinet: {}, lower: {:?}, upper: {:?}",
        cabinet.name(),
        result
            .lower
            .as_ref()
            .map(|config| (config.columns, config.rows)),
        result
            .upper
            .as_ref()
            .map(|config| (config.columns, config.rows))
    );

    result
}

/// Returns the `(lower, upper)` row counts for an exact, fractional, row count.
///
/// When `exact_rows` is effectively a whole number the upper count is one more than it, so the two
/// candidates never collapse into the same grid. Counts saturate at `u32::MAX`.
pub fn row_counts(exact_rows: f64) -> (u32, u32) {
    let lower = exact_rows.floor() as u32;

    let nearest = exact_rows.round();
    let upper = if (exact_rows - nearest).abs() < INTEGER_ROWS_EPSILON {
        (nearest as u32).saturating_add(1)
    } else {
        exact_rows.ceil() as u32
    };

    (lower, upper)
}

/// The column count, for a fixed row count, whose ratio is closest to `target_ratio`.
///
/// Only the columns within [`COLUMN_SEARCH_RADIUS`] of the estimate are evaluated, ties go to the fewest
/// columns. The result is at least 1.
pub fn best_columns(target_ratio: f64, rows: u32, cabinet: &CabinetType) -> u32 {
    let rows_height = rows as f64 * cabinet.height_mm();
    let estimate = (target_ratio * rows_height / cabinet.width_mm())
        .round()
        .max(0.0) as u32;

    let first = estimate
        .saturating_sub(COLUMN_SEARCH_RADIUS)
        .max(1);
    let last = estimate.saturating_add(COLUMN_SEARCH_RADIUS);

    let mut best = estimate.max(1);
    let mut best_error = f64::INFINITY;
    for columns in first..=last {
        let error = (columns as f64 * cabinet.width_mm() / rows_height - target_ratio).abs();
        if error < best_error {
            best_error = error;
            best = columns;
        }
    }

    best
}
