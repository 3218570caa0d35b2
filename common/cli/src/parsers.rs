use ledwall::ratio::parse_ratio;

/// Parses a ratio, e.g. '16:9', '2.40:1' or '1.778'
pub fn ratio_parser(s: &str) -> Result<f64, String> {
    parse_ratio(s).map_err(|error| error.to_string())
}

/// Parses a length in the display unit.
///
/// Zero and negative values are accepted here, they are treated as 'not entered' when the geometry is
/// resolved.
pub fn length_parser(s: &str) -> Result<f64, String> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("Failed to parse length '{}': {}", s, e))?;

    if !value.is_finite() {
        return Err(format!("Length must be a finite number, found: '{}'", s));
    }

    Ok(value)
}
