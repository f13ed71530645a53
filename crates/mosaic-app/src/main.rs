mod cli;
mod commands;
mod state;

use std::process::ExitCode;

use mosaic_common::Result;
use mosaic_config::MosaicConfig;
use mosaic_workspace::MosaicSettings;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

const DEFAULT_LOG_DIRECTIVE: &str = "mosaic=info";

/// Install the global subscriber. Logs go to stderr; stdout carries
/// command output.
fn init_logging(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>())
    {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args, config: &MosaicConfig) -> Result<String> {
    let settings = MosaicSettings::from(config);
    match args.command {
        Command::Balance { ids } => commands::balance(&ids, &settings),
        Command::Reconcile { state, windows, write } => {
            let props = state::load_state(&state)?;
            let outcome = commands::reconcile(props, &windows, settings)?;
            if write {
                state::save_state(&state, &outcome.props)?;
            }
            Ok(outcome.report)
        }
        Command::Render { state, width, height } => {
            let props = state::load_state(&state)?;
            Ok(commands::render(props, width, height, settings))
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first: its logging level feeds the subscriber.
    let loaded = mosaic_config::load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => format!("mosaic={}", config.logging.level.as_filter()),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        MosaicConfig::default()
    });

    match run(args, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("mosaic: {e}");
            ExitCode::FAILURE
        }
    }
}
