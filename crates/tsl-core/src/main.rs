//! tsl-core - Time-Series Label Preparation
//!
//! Command-line entry point for the conversion toolkit:
//! - `W2L`: raw dataset export to the canonical label format, with optional
//!   downsampling, rescaling and window aggregation
//! - `S2L`: annotation-tool JSON export to the canonical label format
//! - `CPY`: row-aligned label copy between existing files

use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tsl_core::convert;
use tsl_core::error::format_error_human;
use tsl_core::exit_codes::ExitCode;
use tsl_core::logging::{init_logging, LogConfig, LogLevel};
use tsl_core::model::{ConversionJob, PipelineConfig};

/// Convert between CSV formats relating to time-series anomaly labeling
#[derive(Parser)]
#[command(name = "tsl-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Raw dataset export to label format (optionally downsample/scale/mean)
    #[command(name = "W2L")]
    W2l(W2lArgs),

    /// Annotation-tool export to label format
    #[command(name = "S2L")]
    S2l(S2lArgs),

    /// Copy per-row labels from an existing label file
    #[command(name = "CPY")]
    Cpy(CpyArgs),
}

#[derive(Args, Debug)]
struct W2lArgs {
    /// Dataset input CSV file
    #[arg(short, long)]
    data: PathBuf,

    /// Output CSV path
    #[arg(short, long)]
    output: PathBuf,

    /// Column name to extract
    #[arg(short, long, default_value = "value")]
    column: String,

    /// Threshold for downsampling
    #[arg(short, long)]
    threshold: Option<usize>,

    /// Scale the data by a scalar
    #[arg(short, long)]
    scale: Option<f64>,

    /// Take the mean of the data by <time>, e.g. 30s, 5m, 1h, 2d
    #[arg(short, long)]
    mean: Option<String>,
}

#[derive(Args, Debug)]
struct S2lArgs {
    /// Dataset input CSV file
    #[arg(short, long)]
    data: PathBuf,

    /// Label input file (annotation-tool JSON export)
    #[arg(short, long)]
    labels: PathBuf,

    /// Output CSV path
    #[arg(short, long)]
    output: PathBuf,

    /// Column name to extract
    #[arg(short, long, default_value = "value")]
    column: String,

    /// Annotation label set id to extract
    #[arg(short = 'i', long)]
    labelid: i64,
}

#[derive(Args, Debug)]
struct CpyArgs {
    /// Dataset input CSV file
    #[arg(short, long)]
    data: PathBuf,

    /// Label source file
    #[arg(short, long)]
    source: PathBuf,

    /// Output CSV path
    #[arg(short, long)]
    output: PathBuf,
}

impl Commands {
    fn into_job(self) -> ConversionJob {
        match self {
            Commands::W2l(args) => ConversionJob::RawToLabel {
                data: args.data,
                output: args.output,
                column: args.column,
                pipeline: PipelineConfig {
                    threshold: args.threshold,
                    scale: args.scale,
                    window: args.mean,
                },
            },
            Commands::S2l(args) => ConversionJob::AnnotationToLabel {
                data: args.data,
                labels: args.labels,
                output: args.output,
                column: args.column,
                label_id: args.labelid,
            },
            Commands::Cpy(args) => ConversionJob::CopyLabel {
                data: args.data,
                source: args.source,
                output: args.output,
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: LogLevel::from_flags(cli.global.verbose, cli.global.quiet),
        ansi: !cli.global.no_color,
    };
    init_logging(&log_config);

    let use_color = !cli.global.no_color && std::io::stderr().is_terminal();
    let job = cli.command.into_job();

    let exit_code = match convert::run(&job) {
        Ok(rows) => {
            tracing::info!(rows, "conversion complete");
            ExitCode::Clean
        }
        Err(err) => {
            tracing::error!(category = %err.category(), "conversion failed");
            eprintln!("{}", format_error_human(&err, use_color));
            ExitCode::Failure
        }
    };

    std::process::exit(exit_code.as_i32());
}
