use std::fmt::Write;

use ledwall::format::{DimensionDifference, format_dimension, format_in_unit, ratio_error_label};
use ledwall::ratio::ratio_label;
use ledwall::{CabinetType, CalculationResult, CandidateKind, InputField, ResolvedGeometry, ScreenConfig, Unit};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct CalculationReport {
    pub(crate) unit: Unit,
    pub(crate) entered: Vec<InputField>,
    pub(crate) target: ResolvedGeometry,
    pub(crate) results: Vec<CalculationResult>,
}

fn describe_ratio(ratio: f64) -> String {
    match ratio_label(ratio) {
        Some(label) => format!("{:.3} ({})", ratio, label),
        None => format!("{:.3}", ratio),
    }
}

/// The length in the display unit, followed by its metric form unless the display unit is metric already.
fn describe_length(mm: f64, unit: Unit) -> String {
    match unit {
        Unit::Meters => format_in_unit(mm, unit),
        _ => format!("{} ({})", format_in_unit(mm, unit), format_dimension(mm)),
    }
}

fn describe_size(width_mm: f64, height_mm: f64, unit: Unit) -> String {
    let size = format!("{} × {}", format_in_unit(width_mm, unit), format_in_unit(height_mm, unit));
    match unit {
        Unit::Meters => size,
        _ => format!("{} ({} × {})", size, format_dimension(width_mm), format_dimension(height_mm)),
    }
}

impl CalculationReport {
    pub(crate) fn render_text(&self) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let unit = self.unit;
        let target = &self.target;

        let entered = self
            .entered
            .iter()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(out, "Target (entered: {})", entered)?;
        writeln!(out, "  Width:    {}", describe_length(target.width, unit))?;
        writeln!(out, "  Height:   {}", describe_length(target.height, unit))?;
        writeln!(out, "  Diagonal: {}", describe_length(target.diagonal, unit))?;
        writeln!(out, "  Ratio:    {}", describe_ratio(target.ratio))?;

        for result in &self.results {
            writeln!(out)?;
            writeln!(out, "Cabinet {}", result.cabinet.label())?;
            self.render_candidate(&mut out, &result.cabinet, CandidateKind::Lower, result.lower.as_ref())?;
            self.render_candidate(&mut out, &result.cabinet, CandidateKind::Upper, result.upper.as_ref())?;
        }

        Ok(out)
    }

    fn render_candidate(
        &self,
        out: &mut String,
        cabinet: &CabinetType,
        kind: CandidateKind,
        config: Option<&ScreenConfig>,
    ) -> std::fmt::Result {
        let name = match kind {
            CandidateKind::Lower => "Lower",
            CandidateKind::Upper => "Upper",
        };

        let Some(config) = config else {
            return writeln!(
                out,
                "  {}: none, the target is less than one {} cabinet high",
                name,
                cabinet.name()
            );
        };

        let unit = self.unit;
        let target = &self.target;

        writeln!(
            out,
            "  {}: {} × {} = {} cabinets",
            name,
            config.columns,
            config.rows,
            config.cabinet_count()
        )?;
        writeln!(
            out,
            "    Size:     {}",
            describe_size(config.total_width, config.total_height, unit)
        )?;
        writeln!(out, "    Diagonal: {}", describe_length(config.diagonal, unit))?;

        let mut ratio = describe_ratio(config.ratio);
        if self
            .entered
            .contains(&InputField::Ratio)
        {
            write!(ratio, ", target {:.3}", target.ratio)?;
        }
        if let Some(error) = ratio_error_label(config.ratio_error) {
            write!(ratio, ", {}", error)?;
        }
        writeln!(out, "    Ratio:    {}", ratio)?;

        writeln!(
            out,
            "    Width:    {}",
            DimensionDifference::between(target.width, config.total_width).describe(unit)
        )?;
        writeln!(
            out,
            "    Height:   {}",
            DimensionDifference::between(target.height, config.total_height).describe(unit)
        )
    }
}

pub(crate) fn render_cabinets(catalog: &[CabinetType]) -> String {
    catalog
        .iter()
        .map(|cabinet| format!("{}, ratio {}\n", cabinet.label(), describe_ratio(cabinet.ratio())))
        .collect()
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use ledwall::{InputValues, default_catalog, optimize, resolve};

    use super::*;

    fn report(values: &[(InputField, f64)], unit: Unit) -> CalculationReport {
        let inputs = values
            .iter()
            .copied()
            .collect::<InputValues>();
        let target = resolve(&inputs, unit).unwrap();

        CalculationReport {
            unit,
            entered: inputs.into_keys().collect(),
            target,
            results: optimize(&target, &default_catalog()),
        }
    }

    #[test]
    fn render_exact_fit() {
        // given
        let report = report(&[(InputField::Width, 1.8), (InputField::Height, 1.0125)], Unit::Meters);

        // when
        let text = report.render_text().unwrap();

        // then
        assert_eq!(text, indoc! {"
            Target (entered: width, height)
              Width:    1.80 m
              Height:   1.01 m
              Diagonal: 2.07 m
              Ratio:    1.778 (16:9)

            Cabinet 16:9 (600×337.5 mm)
              Lower: 3 × 3 = 9 cabinets
                Size:     1.80 m × 1.01 m
                Diagonal: 2.07 m
                Ratio:    1.778 (16:9)
                Width:    exact match
                Height:   exact match
              Upper: 4 × 4 = 16 cabinets
                Size:     2.40 m × 1.35 m
                Diagonal: 2.75 m
                Ratio:    1.778 (16:9)
                Width:    +0.60 m (+600.0 mm)
                Height:   +0.34 m (+337.5 mm)

            Cabinet 1:1 (500×500 mm)
              Lower: 4 × 2 = 8 cabinets
                Size:     2.00 m × 1.00 m
                Diagonal: 2.24 m
                Ratio:    2.000 (2:1), 12.5% off
                Width:    +0.20 m (+200.0 mm)
                Height:   -0.01 m (-12.5 mm)
              Upper: 5 × 3 = 15 cabinets
                Size:     2.50 m × 1.50 m
                Diagonal: 2.92 m
                Ratio:    1.667 (5:3), 6.2% off
                Width:    +0.70 m (+700.0 mm)
                Height:   +0.49 m (+487.5 mm)
        "});
    }

    #[test]
    fn render_target_ratio_when_entered() {
        // given
        let report = report(&[(InputField::Width, 4.0), (InputField::Ratio, 4.0 / 3.0)], Unit::Meters);

        // when
        let text = report.render_text().unwrap();

        // then
        assert!(text.starts_with("Target (entered: width, ratio)\n"), "text: {}", text);
        assert!(text.contains("    Ratio:    1.333 (4:3), target 1.333\n"), "text: {}", text);
    }

    #[test]
    fn render_metric_form_only_for_other_units() {
        // given
        let feet = report(&[(InputField::Width, 10.0), (InputField::Ratio, 16.0 / 9.0)], Unit::Feet);
        let meters = report(&[(InputField::Width, 3.048), (InputField::Ratio, 16.0 / 9.0)], Unit::Meters);

        // when
        let feet_text = feet.render_text().unwrap();
        let meters_text = meters.render_text().unwrap();

        // then
        assert!(feet_text.contains("  Width:    10.00 ft (3.05 m)
"), "text: {}", feet_text);
        assert!(
            feet_text.contains("    Size:     9.84 ft × 5.54 ft (3.00 m × 1.69 m)
"),
            "text: {}",
            feet_text
        );

        assert!(meters_text.contains("  Width:    3.05 m
"), "text: {}", meters_text);
        assert!(meters_text.contains("    Size:     3.00 m × 1.69 m
"), "text: {}", meters_text);
    }

    #[test]
    fn render_missing_lower_candidate() {
        // given, shorter than one 1:1 cabinet
        let report = report(&[(InputField::Width, 1.0), (InputField::Height, 0.4)], Unit::Meters);

        // when
        let text = report.render_text().unwrap();

        // then
        assert!(
            text.contains("  Lower: none, the target is less than one 1:1 cabinet high\n"),
            "text: {}",
            text
        );
    }

    #[test]
    fn cabinets() {
        assert_eq!(render_cabinets(&default_catalog()), indoc! {"
            16:9 (600×337.5 mm), ratio 1.778 (16:9)
            1:1 (500×500 mm), ratio 1.000 (1:1)
        "});
    }
}
