use anyhow::Context;
use clap::Parser;
use cli::args::OutputFormatArg;
use ledwall::ratio::PRESET_RATIOS;
use ledwall::{CabinetType, Unit, default_catalog, optimize, resolve};
use stores::cabinets::load_cabinets;
use tracing::{debug, info};
use util::source::Source;

use crate::opts::{CatalogArgs, Command, Opts};
use crate::report::{CalculationReport, render_cabinets};

mod opts;
mod report;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX)?;

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    match opts.command {
        Command::Calculate {
            unit,
            target,
            catalog,
            format,
        } => {
            let unit = Unit::from(unit);
            let inputs = target.input_values();
            debug!("calculate. unit: {}, inputs: {:?}", unit, inputs);

            let catalog = load_catalog(&catalog)?;

            let target = resolve(&inputs, unit)?;
            let results = optimize(&target, &catalog);

            let report = CalculationReport {
                unit,
                entered: inputs.into_keys().collect(),
                target,
                results,
            };

            match format {
                OutputFormatArg::Text => print!("{}", report.render_text()?),
                OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Convert {
            value,
            from,
            to,
        } => {
            let (from, to) = (Unit::from(from), Unit::from(to));
            let converted = from.convert(value, to);
            debug!("convert. value: {}, from: {}, to: {}, result: {}", value, from, to, converted);

            println!(
                "{} {} = {:.4} {}",
                value,
                from.display_name(),
                converted,
                to.display_name()
            );
        }
        Command::Ratios => {
            for preset in PRESET_RATIOS {
                println!("{:<7} {:.3}", preset.label, preset.value);
            }
        }
        Command::Cabinets {
            catalog,
        } => {
            let catalog = load_catalog(&catalog)?;
            print!("{}", render_cabinets(&catalog));
        }
    }

    Ok(())
}

fn load_catalog(args: &CatalogArgs) -> anyhow::Result<Vec<CabinetType>> {
    match &args.catalog {
        Some(path) => {
            let source = Source::try_from_path(path.clone())
                .with_context(|| format!("Unable to use cabinet catalog. file: {}", path.display()))?;
            load_cabinets(&source)
        }
        None => {
            info!("Using the built-in cabinet catalog");
            Ok(default_catalog())
        }
    }
}
