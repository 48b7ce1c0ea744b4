//! Keyword-based log classifier.
//!
//! The classifier scans the raw log text for a fixed set of lowercase
//! substrings and produces a success/failed/unknown verdict plus a short
//! human-readable summary built from the first matching lines.

use serde::{Deserialize, Serialize};

/// Substrings that mark a log line as an error indicator. Matched
/// case-insensitively against the lowercased log text.
pub const ERROR_PATTERNS: [&str; 10] = [
    "error:",
    "failed",
    "failure",
    "exception",
    "fatal",
    "cannot",
    "unable to",
    "denied",
    "not found",
    "invalid",
];

/// Maximum number of matching lines carried into the summary.
const SUMMARY_LINE_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Unknown,
    Failed,
    Success,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Unknown => "unknown",
            Status::Failed => "failed",
            Status::Success => "success",
        }
    }
}

/// Verdict for one log. `status == Failed` iff `has_error`; `Unknown` is
/// reserved for absent or whitespace-only content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub has_error: bool,
    pub status: Status,
    pub summary: String,
}

/// Classify log content. Pure: the verdict depends only on the input text.
pub fn classify(content: Option<&str>) -> Classification {
    let Some(log) = content.filter(|c| !c.trim().is_empty()) else {
        return Classification {
            has_error: false,
            status: Status::Unknown,
            summary: "No log content available".to_string(),
        };
    };

    let log_lower = log.to_lowercase();
    let has_error = ERROR_PATTERNS
        .iter()
        .any(|pattern| log_lower.contains(pattern));

    if !has_error {
        return Classification {
            has_error: false,
            status: Status::Success,
            summary: "Workflow completed successfully".to_string(),
        };
    }

    // Second pass over the original text so the summary keeps the lines'
    // original casing and order of appearance.
    let error_lines: Vec<&str> = log
        .lines()
        .filter(|line| {
            let line_lower = line.to_lowercase();
            ERROR_PATTERNS
                .iter()
                .any(|pattern| line_lower.contains(pattern))
        })
        .take(SUMMARY_LINE_LIMIT)
        .collect();

    let summary = if error_lines.is_empty() {
        "Errors detected in logs".to_string()
    } else {
        error_lines.join("\n")
    };

    Classification {
        has_error: true,
        status: Status::Failed,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_content_is_unknown() {
        let result = classify(None);
        assert!(!result.has_error);
        assert_eq!(result.status, Status::Unknown);
        assert_eq!(result.summary, "No log content available");
    }

    #[test]
    fn whitespace_only_content_is_unknown() {
        let result = classify(Some("  \n\t \n"));
        assert!(!result.has_error);
        assert_eq!(result.status, Status::Unknown);
        assert_eq!(result.summary, "No log content available");
    }

    #[test]
    fn clean_log_is_success() {
        let result = classify(Some("Build succeeded\nAll tests passed"));
        assert!(!result.has_error);
        assert_eq!(result.status, Status::Success);
        assert_eq!(result.summary, "Workflow completed successfully");
    }

    #[test]
    fn each_pattern_triggers_failed() {
        for pattern in ERROR_PATTERNS {
            let log = format!("step output\nsomething {pattern} here\ndone");
            let result = classify(Some(&log));
            assert!(result.has_error, "pattern {pattern:?} not detected");
            assert_eq!(result.status, Status::Failed);
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = classify(Some("FATAL: disk full"));
        assert!(result.has_error);
        assert_eq!(result.summary, "FATAL: disk full");
    }

    #[test]
    fn summary_keeps_first_five_matching_lines_in_order() {
        let log = (1..=8)
            .map(|i| format!("line {i}: error: boom"))
            .collect::<Vec<_>>()
            .join("\n");
        let result = classify(Some(&log));
        let expected: Vec<String> = (1..=5).map(|i| format!("line {i}: error: boom")).collect();
        assert_eq!(result.summary, expected.join("\n"));
    }

    #[test]
    fn summary_skips_non_matching_lines() {
        let log = "Step 3: error: compilation failed\nStep 4: done";
        let result = classify(Some(log));
        assert!(result.has_error);
        assert_eq!(result.summary, "Step 3: error: compilation failed");
    }

    #[test]
    fn classify_is_idempotent() {
        let log = Some("error: once");
        assert_eq!(classify(log), classify(log));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Failed).unwrap(), "\"failed\"");
        assert_eq!(
            serde_json::to_string(&Status::Unknown).unwrap(),
            "\"unknown\""
        );
        assert_eq!(Status::Success.as_str(), "success");
    }
}
