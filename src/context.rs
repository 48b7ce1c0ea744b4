//! CI run metadata gathered from the host environment.

use serde::Deserialize;
use std::env;
use std::fs;
use tracing::warn;

const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Pass-through values describing the run being reported on. Construction
/// never fails; missing pieces degrade to placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub repository: String,
    pub workflow: String,
    pub branch: String,
    pub actor: String,
    pub commit: String,
    pub run_url: String,
}

/// Subset of the workflow event payload we care about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadCommit {
    pub message: Option<String>,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitAuthor {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    head_commit: Option<HeadCommit>,
}

impl RunContext {
    /// Build the context from `GITHUB_*` variables and the event payload
    /// file, when present.
    pub fn from_env() -> Self {
        let head_commit = env::var_os("GITHUB_EVENT_PATH")
            .and_then(|path| match fs::read_to_string(&path) {
                Ok(raw) => match serde_json::from_str::<EventPayload>(&raw) {
                    Ok(event) => event.head_commit,
                    Err(err) => {
                        warn!(%err, "event payload is not valid JSON");
                        None
                    }
                },
                Err(err) => {
                    warn!(%err, "failed to read event payload");
                    None
                }
            });

        Self::from_parts(
            var("GITHUB_REPOSITORY"),
            var("GITHUB_WORKFLOW"),
            var("GITHUB_REF"),
            var("GITHUB_ACTOR"),
            var("GITHUB_RUN_ID"),
            var("GITHUB_SERVER_URL"),
            head_commit,
        )
    }

    pub fn from_parts(
        repository: Option<String>,
        workflow: Option<String>,
        git_ref: Option<String>,
        actor: Option<String>,
        run_id: Option<String>,
        server_url: Option<String>,
        head_commit: Option<HeadCommit>,
    ) -> Self {
        let repository = repository.unwrap_or_else(|| "unknown".to_string());
        let workflow = workflow.unwrap_or_else(|| "unknown".to_string());
        let actor = actor.unwrap_or_else(|| "unknown".to_string());

        let git_ref = git_ref.unwrap_or_default();
        let branch = git_ref
            .strip_prefix("refs/heads/")
            .unwrap_or(&git_ref)
            .to_string();

        let head_commit = head_commit.unwrap_or_default();
        let commit = head_commit
            .message
            .as_deref()
            .and_then(|m| m.lines().next())
            .unwrap_or("No commit message")
            .to_string();
        let commit_author = head_commit
            .author
            .and_then(|a| a.name)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| actor.clone());

        let server_url = server_url.unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let run_id = run_id.unwrap_or_else(|| "unknown".to_string());
        let run_url = format!("{server_url}/{repository}/actions/runs/{run_id}");

        Self {
            repository,
            workflow,
            branch,
            actor: commit_author,
            commit,
            run_url,
        }
    }
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
