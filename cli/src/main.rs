//! CLI entrypoint for newsdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use newsdesk_application::{
    GenerateNewsInput, GenerateNewsUseCase, GenerationLogger, NoProgress, ProgressNotifier,
    RunSummary,
};
use newsdesk_domain::ModelPreferenceList;
use newsdesk_infrastructure::{
    ApiKey, ConfigError, ConfigLoader, FileConfig, FsRecordStore, GeminiTextGenerator,
    JsonlGenerationLogger, TokioWaiter,
};
use newsdesk_presentation::{
    Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting newsdesk");

    let config = load_config(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    let progress: Box<dyn ProgressNotifier> = if cli.quiet || cli.output == OutputFormat::Json {
        Box::new(NoProgress)
    } else if cli.spinner {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let print_header = !cli.quiet && cli.output == OutputFormat::Text;
    let summary = run(
        &config,
        |name| std::env::var(name).ok(),
        progress.as_ref(),
        |models| {
            if print_header {
                println!("{}", ConsoleFormatter::format_header(models));
            }
        },
    )
    .await?;

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format_summary(&summary),
        OutputFormat::Json => ConsoleFormatter::format_json(&summary),
    };
    println!("{}", output);

    Ok(())
}

/// Validate the configuration, read the credential through `lookup` and run
/// the pipeline.
///
/// Nothing touches the input or output directories before the credential
/// has been found. `on_ready` sees the model order right before the run.
async fn run(
    config: &FileConfig,
    lookup: impl Fn(&str) -> Option<String>,
    progress: &dyn ProgressNotifier,
    on_ready: impl FnOnce(&ModelPreferenceList),
) -> Result<RunSummary> {
    let issues = config.validate();
    if !issues.is_empty() {
        return Err(ConfigError::invalid(&issues).into());
    }

    let api_key = ApiKey::from_lookup(&config.gemini.api_key_env, lookup)?;

    let models = config.models.preference_list()?;
    let courtesy_delay = config.pipeline.courtesy_delay();

    // === Dependency Injection ===
    let generator = Arc::new(
        GeminiTextGenerator::new(api_key, &config.gemini.settings())
            .context("Failed to create Gemini client")?,
    );
    let store = Arc::new(FsRecordStore::new(
        &config.pipeline.input_dir,
        &config.pipeline.output_dir,
        &config.pipeline.input_extension,
    ));

    let mut use_case = GenerateNewsUseCase::new(generator, store, Arc::new(TokioWaiter));
    if let Some(logger) = generation_logger(config) {
        use_case = use_case.with_logger(logger);
    }

    on_ready(&models);

    let input = GenerateNewsInput::new(models).with_courtesy_delay(courtesy_delay);
    Ok(use_case.execute_with_progress(input, progress).await?)
}

/// Merge file/env configuration with command-line overrides.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).map_err(ConfigError::from)?
    };

    if let Some(dir) = &cli.input_dir {
        config.pipeline.input_dir = dir.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.pipeline.output_dir = dir.clone();
    }
    if let Some(ms) = cli.delay_ms {
        config.pipeline.courtesy_delay_ms = ms;
    }
    if !cli.model.is_empty() {
        config.models.preference = cli.model.clone();
    }
    if let Some(path) = &cli.generation_log {
        config.logging.generation_log = Some(path.clone());
    }

    Ok(config)
}

fn generation_logger(config: &FileConfig) -> Option<Arc<dyn GenerationLogger>> {
    let path = config.logging.generation_log.as_ref()?;
    match JsonlGenerationLogger::open(path) {
        Some(logger) => {
            info!("Writing generation log to {}", logger.path().display());
            Some(Arc::new(logger))
        }
        None => {
            warn!("Continuing without generation log");
            None
        }
    }
}
