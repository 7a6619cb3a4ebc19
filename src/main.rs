mod config;
mod error;
mod models;
mod operations;

use config::TrackerConfig;
use error::PromptError;
use operations::calculate::compute_metrics;
use operations::collect::collect_record;
use operations::prompt::{Console, Tone};
use operations::report::{build_report, opening_banner, write_report};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let config = TrackerConfig::detect();
    let mut console = Console::new(io::stdin().lock(), io::stdout(), config.use_color);

    match run(&mut console, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "fuel audit aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// Diagnostics go to stderr so they never interleave with the prompts.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &TrackerConfig,
) -> Result<(), PromptError> {
    write_report(console, &opening_banner())?;

    let record = collect_record(console, config)?;
    let metrics = compute_metrics(&record);

    if metrics.efficiency.is_none() {
        console.blank_line()?;
        console.write_line(
            Tone::Warning,
            "WARNING: No fuel expenses recorded. Efficiency cannot be calculated.",
        )?;
    }

    console.blank_line()?;
    write_report(console, &build_report(&record, &metrics, config))?;

    console.blank_line()?;
    console.write_line(Tone::Plain, "Press Enter to exit...")?;
    // End of input is as good as a keypress here.
    console.read_line()?;
    Ok(())
}
