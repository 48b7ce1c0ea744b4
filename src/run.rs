//! Single-shot pipeline: acquire, classify, deliver.

use anyhow::{Context, Result};
use chrono::Utc;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::acquire;
use crate::classify;
use crate::config::Config;
use crate::context::RunContext;
use crate::model::NotificationPayload;
use crate::webhook::WebhookService;

/// Execute one run end to end. Acquisition degradation is not a failure;
/// delivery failure is, and carries the webhook's response for diagnostics.
pub async fn execute(cfg: &Config, ctx: &RunContext, webhook: &dyn WebhookService) -> Result<()> {
    info!(repository = %ctx.repository, branch = %ctx.branch, "analyzing workflow log");

    let step_summary = env::var_os("GITHUB_STEP_SUMMARY").map(PathBuf::from);
    let sources = acquire::sources(
        cfg.log.file.as_deref().map(Path::new),
        step_summary.as_deref(),
    );
    let content = acquire::acquire(&sources);

    let analysis = classify::classify(content.as_deref());
    info!(status = analysis.status.as_str(), "classification complete");

    let payload = NotificationPayload::new(&analysis, ctx, Utc::now());

    info!("sending notification to webhook");
    webhook
        .deliver(&payload)
        .await
        .context("failed to deliver notification")?;
    info!("notification delivered");

    Ok(())
}
