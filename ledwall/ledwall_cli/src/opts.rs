use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::{OutputFormatArg, UnitArg};
use cli::parsers::{length_parser, ratio_parser};
use ledwall::{InputField, InputValues};

#[derive(Parser, Debug)]
#[command(name = "ledwall_cli")]
#[command(bin_name = "ledwall_cli")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub(crate) trace: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Calculate the best cabinet grids for a screen, given any two of width, height, diagonal and ratio
    Calculate {
        /// Unit of the width, height and diagonal
        #[arg(long, value_enum)]
        unit: UnitArg,

        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormatArg::Text)]
        format: OutputFormatArg,
    },
    /// Convert a length from one unit to another
    Convert {
        /// The length to convert
        value: f64,

        #[arg(long, value_enum)]
        from: UnitArg,

        #[arg(long, value_enum)]
        to: UnitArg,
    },
    /// List the predefined screen ratios
    Ratios,
    /// List the cabinet catalog
    Cabinets {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[derive(Debug, Args)]
pub(crate) struct TargetArgs {
    /// Screen width
    #[arg(long, value_parser = length_parser, allow_negative_numbers = true)]
    pub(crate) width: Option<f64>,

    /// Screen height
    #[arg(long, value_parser = length_parser, allow_negative_numbers = true)]
    pub(crate) height: Option<f64>,

    /// Screen diagonal
    #[arg(long, value_parser = length_parser, allow_negative_numbers = true)]
    pub(crate) diagonal: Option<f64>,

    /// Screen ratio (width / height), e.g. '16:9', '2.40:1' or '1.778'
    #[arg(long, value_parser = ratio_parser)]
    pub(crate) ratio: Option<f64>,
}

impl TargetArgs {
    pub(crate) fn input_values(&self) -> InputValues {
        [
            (InputField::Width, self.width),
            (InputField::Height, self.height),
            (InputField::Diagonal, self.diagonal),
            (InputField::Ratio, self.ratio),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Cabinet catalog CSV file, with 'Name', 'WidthMm' and 'HeightMm' columns, defaults to the built-in catalog
    #[arg(long, value_name = "FILE", env = "LEDWALL_CATALOG")]
    pub(crate) catalog: Option<PathBuf>,
}
