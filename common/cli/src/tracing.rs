use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing::level_filters::LevelFilter;
use tracing::trace;
use tracing_log::AsTrace;

/// Configure the global tracing subscriber.
///
/// With a trace file everything, up to TRACE level, is written to the file. Otherwise the verbosity flags
/// control what is written to stderr.
pub fn configure_tracing(trace: Option<PathBuf>, verbosity: Verbosity<InfoLevel>) -> anyhow::Result<()> {
    match trace {
        Some(path) => {
            let trace_file = File::create(&path)?;

            let subscriber = tracing_subscriber::fmt()
                .with_max_level(LevelFilter::TRACE)
                .with_ansi(false)
                .with_writer(Mutex::new(trace_file))
                .finish();

            tracing::subscriber::set_global_default(subscriber)?;

            trace!("Tracing to file. path: {}", path.display());
        }
        None => {
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(
                    verbosity
                        .log_level_filter()
                        .as_trace(),
                )
                .with_writer(std::io::stderr)
                .finish();

            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}
