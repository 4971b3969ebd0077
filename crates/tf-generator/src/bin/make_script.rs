//! CLI for generating template-family descriptors and driver scripts.
//!
//! # Usage
//!
//! ```bash
//! # FooOpt0.txt .. FooOpt4.txt and MakeFoo.bat in the current directory
//! cargo run -p tf-generator --bin tf-make-script -- --module Foo --maxparam 4
//!
//! # Shell script into gen/, executed natively, JSON summary on stdout
//! cargo run -p tf-generator --bin tf-make-script -- \
//!     --module Foo --maxparam 4 -o gen --dialect shell --engine ssr --run --report json
//! ```

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tf_generator::{Args, GenerationReport, ReportFormat, ScriptGenerator};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so a JSON report on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let generator = ScriptGenerator::new(args.config());

    match generator.generate_and_run(&args.module, args.max_arity()).await {
        Ok(report) => print_report(&report, args.report),
        Err(e) => {
            error!(module = %args.module, "generation failed: {}", e);
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &GenerationReport, format: ReportFormat) -> ExitCode {
    match format {
        ReportFormat::Text => {
            print!("{}", report.format_summary());
            ExitCode::SUCCESS
        }
        ReportFormat::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Print the error and its full cause chain.
fn report_error(e: &dyn Error) {
    eprintln!("Error: {}", e);
    let mut source = e.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
