use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use libsfr::{report::DEFAULT_TOP, FrequencyReporter, ReportOptions};
use tracing_subscriber::EnvFilter;

/// Writes a ranked stem frequency report for each pre-stemmed text file.
#[derive(Debug, clap::Parser)]
#[command(version)]
struct Args {
    /// Input files; directories are searched for `.txt` files
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Number of ranked stems per report
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let reporter = FrequencyReporter::from_paths(args.paths)
        .with_options(ReportOptions { top: args.top });
    let file_count = reporter.files().len();
    if file_count == 0 {
        bail!("no input files found");
    }

    let results = reporter.run_with_progress(|i, result| match result {
        Ok(processed) => println!(
            "{}/{} {} -> {} ({} words, {} unique)",
            i + 1,
            file_count,
            processed.input.display(),
            processed.output.display(),
            processed.stats.total_words(),
            processed.stats.unique_words()
        ),
        Err(err) => tracing::error!("{err}"),
    });

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        bail!("{failed} of {file_count} files could not be processed");
    }
    Ok(())
}
