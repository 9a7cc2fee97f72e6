use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use iconset::{GenerateOptions, ValidationWarning, SIZE_PLAN};
use tracing::{debug, error, info, warn};

/// Generate every iOS/iPadOS app icon size from a single square image.
#[derive(Debug, Parser)]
#[command(
    name = "iconsmith",
    version,
    about = "Generate an AppIcon.appiconset from a single 1024x1024 image"
)]
struct Args {
    /// Path to the source image (1024x1024 PNG or JPEG, ideally with transparency).
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory (default: AppIcon.appiconset_<timestamp> beside the source).
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Downscale sources larger than 1024x1024 (upscaling is never done).
    #[arg(short, long)]
    auto_scale: bool,

    /// Prefix for generated filenames, producing <PREFIX>_<size>.png.
    #[arg(long, value_name = "NAME", default_value = "")]
    prefix: String,

    /// Enable debug output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));

    let options = GenerateOptions {
        auto_scale: args.auto_scale,
        prefix: args.prefix.clone(),
    };

    let report = iconset::generate(&args.input, &output_dir, &options)
        .with_context(|| format!("failed to generate icons from {}", args.input.display()))?;

    for warning in &report.warnings {
        match warning {
            ValidationWarning::NoAlphaChannel => warn!(
                "source image has no transparency; iOS icons are usually authored on a transparent background"
            ),
        }
    }

    for entry in &report.written {
        debug!("generated {}", entry.filename);
    }
    for failure in &report.failed {
        error!("failed to generate {}: {}", failure.filename, failure.reason);
    }

    info!(
        "generated {}/{} icons in {}",
        report.written.len(),
        SIZE_PLAN.len(),
        report.output_dir.display()
    );
    info!("manifest: {}", report.manifest_path.display());

    Ok(report.all_succeeded())
}

fn default_output_dir(input: &Path) -> PathBuf {
    let dir_name = format!("AppIcon.appiconset_{}", Utc::now().timestamp());
    match input.parent() {
        Some(parent) => parent.join(dir_name),
        None => PathBuf::from(dir_name),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}
