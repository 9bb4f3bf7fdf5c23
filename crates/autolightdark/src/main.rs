//! CLI entry point for autolightdark.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use autolightdark::{build, BuildConfig, ConfigOverrides};
use clap::Parser;

/// Generate light, dark and auto variants of a static site.
///
/// With no arguments, reads the site from the current directory and writes
/// it to `build/`, deleting any previous build first.
#[derive(Parser, Debug)]
#[command(name = "autolightdark", version)]
struct Cli {
    /// Site root to read from
    #[arg(long, value_name = "DIR")]
    source: Option<PathBuf>,

    /// Output directory (relative paths are taken from the site root)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// YAML configuration file [default: <source>/autolightdark.yaml if present]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log every file written
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = BuildConfig::resolve(ConfigOverrides {
        source_dir: cli.source,
        build_dir: cli.out,
        config_file: cli.config,
    })
    .context("failed to load configuration")?;

    let report = build(&config)
        .with_context(|| format!("build of {} failed", config.source_dir.display()))?;

    tracing::info!(
        html = report.html_sources,
        css = report.css_sources,
        copied = report.copied_files,
        written = report.variants_written,
        build_dir = %config.build_path().display(),
        "Build finished"
    );
    Ok(())
}

fn setup_tracing(verbose: bool, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "autolightdark={level},autolightdark_rewrite={level},warn",
            level = default_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
