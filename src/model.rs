//! Wire-format payload delivered to the webhook.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{Classification, Status};
use crate::context::RunContext;

/// One notification event, built once per run. Field names follow the
/// webhook's camelCase wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub status: Status,
    pub has_error: bool,
    pub repository: String,
    pub workflow: String,
    pub branch: String,
    pub actor: String,
    pub commit: String,
    pub run_url: String,
    pub summary: String,
    pub timestamp: String,
    pub emoji: String,
    pub status_text: String,
}

impl NotificationPayload {
    pub fn new(analysis: &Classification, ctx: &RunContext, now: DateTime<Utc>) -> Self {
        Self {
            status: analysis.status,
            has_error: analysis.has_error,
            repository: ctx.repository.clone(),
            workflow: ctx.workflow.clone(),
            branch: ctx.branch.clone(),
            actor: ctx.actor.clone(),
            commit: ctx.commit.clone(),
            run_url: ctx.run_url.clone(),
            summary: analysis.summary.clone(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            emoji: if analysis.has_error { "🚨" } else { "✅" }.to_string(),
            status_text: if analysis.has_error { "FAILED" } else { "SUCCESS" }.to_string(),
        }
    }
}
