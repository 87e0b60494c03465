use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use scip_structure::{Settings, SettingsOverrides};

#[derive(Parser, Debug)]
#[command(name = "scip-structure", version, about)]
struct Args {
    /// Path to the input SCIP index file [default: index.scip]
    #[arg(long)]
    input: Option<PathBuf>,

    /// Path to the output JSON file [default: structure.json]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Directory that document paths in the index are relative to
    #[arg(long)]
    source_root: Option<PathBuf>,

    /// Optional TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        },
    };

    init_logging(&settings, args.log_file.as_deref());
    debug!("Settings: {settings:?}");

    match scip_structure::run(&settings) {
        Ok(stats) => {
            info!("Run finished: {stats}");
            println!("Successfully generated {} with {} code elements", settings.output.display(), stats.emitted);
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        },
    }
}

fn load_settings(args: &Args) -> Result<Settings, scip_structure::ConvertError> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    Ok(settings.with_overrides(SettingsOverrides {
        input: args.input.clone(),
        output: args.output.clone(),
        source_root: args.source_root.clone(),
        verbose: args.verbose,
    }))
}

fn init_logging(
    settings: &Settings,
    log_file: Option<&std::path::Path>,
) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(settings.logging.filter_directive()));

    let file_layer = log_file.map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("scip-structure.log")),
        );
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(EnvFilter::new(settings.logging.filter_directive()))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}
