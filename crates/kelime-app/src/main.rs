use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use kelime_config::Config;
use kelime_core::run_pipeline;
use kelime_dictionary::FreeDictionaryClient;
use kelime_translator::MyMemoryTranslator;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use self::cli::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(args.log_json || env::var("KELIME_LOG_JSON").is_ok_and(|v| v == "1"));

    ExitCode::from(exit_status(&run(&args).await))
}

/// Process exit status for the outcome of a run; any fatal error is non-zero
fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("Enrichment failed: {e:#}");
            eprintln!("kelime: {e:#}");
            1
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.resolve_config().context("Failed to load configuration")?;
    log_config(&config);

    let timeout = config.network.timeout();
    let dictionary = FreeDictionaryClient::with_timeout(config.dictionary.base_url.clone(), timeout)
        .context("Failed to build dictionary client")?;
    let translator = MyMemoryTranslator::with_timeout(config.translator.base_url.clone(), timeout)
        .context("Failed to build translation client")?;

    let summary = run_pipeline(&config, Arc::new(dictionary), Arc::new(translator))
        .await
        .context("Enrichment batch aborted")?;

    tracing::info!(
        "Processed {} entries; improved dataset at {}, backup at {}",
        summary.total,
        summary.output_path.display(),
        summary.backup_path.display()
    );
    Ok(())
}

fn init_tracing(json: bool) {
    // `kelime` prefixes every workspace crate target
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kelime=info"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(atty::is(atty::Stream::Stderr)),
            )
            .init();
    }
}

fn log_config(config: &Config) {
    tracing::info!("Source dataset: {}", config.dataset.source.display());
    tracing::info!("Improved dataset: {}", config.dataset.output_path().display());
    tracing::debug!("Dictionary service: {}", config.dictionary.base_url);
    tracing::debug!(
        "Translation service: {} ({})",
        config.translator.base_url,
        config.translator.langpair()
    );
}
