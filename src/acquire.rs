//! Log acquisition from an ordered list of file sources.
//!
//! Sources are tried in priority order; the first one that reads to
//! non-whitespace content wins. Read failures degrade to the next source,
//! acquisition itself never errors.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One place a job log may be read from.
#[derive(Debug, Clone)]
pub struct LogSource {
    pub name: &'static str,
    pub path: Option<PathBuf>,
}

/// Build the source list: the captured log file first, then the step
/// summary file the CI host points at.
pub fn sources(primary: Option<&Path>, step_summary: Option<&Path>) -> Vec<LogSource> {
    vec![
        LogSource {
            name: "log file",
            path: primary.map(Path::to_path_buf),
        },
        LogSource {
            name: "step summary",
            path: step_summary.map(Path::to_path_buf),
        },
    ]
}

/// Return the first non-whitespace log content found, else `None`.
/// `None` means "no log available" and is distinct from empty content.
pub fn acquire(sources: &[LogSource]) -> Option<String> {
    for source in sources {
        let Some(path) = source.path.as_deref() else {
            continue;
        };
        if !path.exists() {
            continue;
        }
        match fs::read_to_string(path) {
            Ok(content) if !content.trim().is_empty() => {
                info!(source = source.name, path = %path.display(), "acquired log content");
                return Some(content);
            }
            Ok(_) => {}
            Err(err) => {
                warn!(source = source.name, path = %path.display(), %err, "failed to read log source");
            }
        }
    }
    None
}
