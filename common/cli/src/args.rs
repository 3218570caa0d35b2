use clap::ValueEnum;
use ledwall::Unit;

/// Args decouple of CLI arg handling requirements from the internal data structures

#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "lower")]
pub enum UnitArg {
    Inches,
    Feet,
    Meters,
}

impl From<UnitArg> for Unit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::Inches => Self::Inches,
            UnitArg::Feet => Self::Feet,
            UnitArg::Meters => Self::Meters,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum OutputFormatArg {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("inches", Unit::Inches)]
    #[case("feet", Unit::Feet)]
    #[case("meters", Unit::Meters)]
    fn unit_arg_names(#[case] name: &str, #[case] expected: Unit) {
        let arg = UnitArg::from_str(name, false).unwrap();

        assert_eq!(Unit::from(arg), expected);
    }

    #[test]
    fn output_format_names() {
        assert_eq!(OutputFormatArg::from_str("json", false), Ok(OutputFormatArg::Json));
        assert_eq!(OutputFormatArg::default(), OutputFormatArg::Text);
    }
}
