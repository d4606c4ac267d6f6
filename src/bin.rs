//! Binary entry point for `bloodlink-triage`.
//!
//! This module provides the command-line interface with options for the
//! configuration file path and logging verbosity, plus one subcommand per view.
//! It initializes logging and configuration, then hands off to the library.

use bloodlink_triage::{
    base::{config::Config, types::Void},
    runtime::Command,
};
use clap::Parser;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Bloodlink-triage – symptom checker and dashboard for blood-donation coordination.
///
/// Configuration can come from `config.toml` or `BLOODLINK_*` environment variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the app will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// The view to open.
    #[command(subcommand)]
    command: Command,
}

/// Main entry point for the bloodlink-triage binary.
///
/// Loads configuration, sets up logging based on verbosity, and runs the command.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Span open/close lines would interleave with the chat, so only show them when asked.

    let span_events = if args.verbose > 0 { FmtSpan::NEW | FmtSpan::CLOSE } else { FmtSpan::NONE };

    // Prepare the log layer.

    let log = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .with_span_events(span_events);

    // Prepare the otlp layer, if enabled.

    let otel = if config.otlp_enabled {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("bloodlink-triage");

        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(log).init();

    bloodlink_triage::start(config, args.command).await
}
