use num_rational::Ratio;
use num_traits::ToPrimitive;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresetRatio {
    pub label: &'static str,
    pub value: f64,
}

/// Commonly requested screen ratios, in the order they are offered to the user.
pub const PRESET_RATIOS: [PresetRatio; 9] = [
    PresetRatio {
        label: "16:9",
        value: 16.0 / 9.0,
    },
    PresetRatio {
        label: "32:9",
        value: 32.0 / 9.0,
    },
    PresetRatio {
        label: "4:3",
        value: 4.0 / 3.0,
    },
    PresetRatio {
        label: "24:9",
        value: 24.0 / 9.0,
    },
    PresetRatio {
        label: "9:16",
        value: 9.0 / 16.0,
    },
    PresetRatio {
        label: "16:10",
        value: 16.0 / 10.0,
    },
    PresetRatio {
        label: "2.40:1",
        value: 2.40,
    },
    PresetRatio {
        label: "16:18",
        value: 16.0 / 18.0,
    },
    PresetRatio {
        label: "48:9",
        value: 48.0 / 9.0,
    },
];

/// Largest denominator considered when describing a ratio as a fraction.
const MAX_LABEL_DENOMINATOR: i64 = 32;
/// Relative tolerance for a fraction to describe a ratio.
const LABEL_TOLERANCE: f64 = 1e-3;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatioParseError {
    #[error("Invalid ratio. Required format: '<WIDTH>:<HEIGHT>', a preset or a decimal, found: '{0}'")]
    Invalid(String),
    #[error("Ratio must be positive, found: '{0}'")]
    NonPositive(String),
}

/// Parses a ratio given as a preset label (e.g. '16:9'), as '<WIDTH>:<HEIGHT>' (e.g. '2.40:1') or as a
/// decimal (e.g. '1.778').
pub fn parse_ratio(text: &str) -> Result<f64, RatioParseError> {
    let text = text.trim();

    if let Some(preset) = PRESET_RATIOS
        .iter()
        .find(|preset| preset.label == text)
    {
        return Ok(preset.value);
    }

    let parse = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| RatioParseError::Invalid(text.to_string()))
    };

    let value = match text.split_once(':') {
        Some((width, height)) => {
            let width = parse(width)?;
            let height = parse(height)?;
            if !(width > 0.0 && height > 0.0) {
                return Err(RatioParseError::NonPositive(text.to_string()));
            }
            width / height
        }
        None => parse(text)?,
    };

    if !value.is_finite() {
        return Err(RatioParseError::Invalid(text.to_string()));
    }
    if value <= 0.0 {
        return Err(RatioParseError::NonPositive(text.to_string()));
    }

    Ok(value)
}

/// The simplest fraction, with a small denominator, that is within 0.1% of `value`.
pub fn approximate_ratio(value: f64) -> Option<Ratio<i64>> {
    if !(value.is_finite() && value > 0.0) {
        return None;
    }

    (1..=MAX_LABEL_DENOMINATOR).find_map(|denominator| {
        let numerator = (value * denominator as f64).round() as i64;
        if numerator == 0 {
            return None;
        }

        // This automatically simplifies the result
        let candidate = Ratio::new(numerator, denominator);
        let error = (candidate.to_f64()? - value).abs() / value;

        (error < LABEL_TOLERANCE).then_some(candidate)
    })
}

/// e.g. '16:9', `None` if the ratio cannot be described by a simple fraction.
pub fn ratio_label(value: f64) -> Option<String> {
    approximate_ratio(value).map(|ratio| format!("{}:{}", ratio.numer(), ratio.denom()))
}


#[cfg(test)]
mod ratio_label_tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(16.0 / 9.0, Some("16:9"))]
    #[case(1.0, Some("1:1"))]
    #[case(9.0 / 16.0, Some("9:16"))]
    #[case(4.0 / 3.0, Some("4:3"))]
    #[case(2.4, Some("12:5"))]
    #[case(24.0 / 9.0, Some("8:3"))]
    #[case(1.7778, Some("16:9"))]
    #[case(std::f64::consts::PI, Some("22:7"))]
    #[case(0.01, None)]
    #[case(0.0, None)]
    #[case(f64::NAN, None)]
    fn test_ratio_label(#[case] value: f64, #[case] expected: Option<&str>) {
        assert_eq!(ratio_label(value).as_deref(), expected);
    }

    #[test]
    fn approximate_ratio_is_reduced() {
        let ratio = approximate_ratio(3600.0 / 1350.0).unwrap();

        assert_eq!(ratio.numer(), &8);
        assert_eq!(ratio.denom(), &3);
    }
}
