use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;

use ci_herald::config;
use ci_herald::context::RunContext;
use ci_herald::run;
use ci_herald::webhook::WebhookClient;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to YAML config file (defaults to ./herald.yaml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Path to the captured job log; overrides the config file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Webhook endpoint; overrides the config file
    #[arg(long)]
    webhook_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("run failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = config::load(args.config.as_deref())?;
    if let Some(path) = args.log_file {
        cfg.log.file = Some(path.to_string_lossy().into_owned());
    }
    if let Some(url) = args.webhook_url {
        cfg.webhook.url = url;
    }

    let ctx = RunContext::from_env();
    let webhook = WebhookClient::new(
        &cfg.webhook.url,
        Duration::from_secs(cfg.webhook.timeout_seconds),
    )?;

    run::execute(&cfg, &ctx, &webhook).await
}
