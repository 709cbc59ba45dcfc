//! Classification of generation failures

use serde::{Deserialize, Serialize};

/// Markers that identify a usage-limit failure, matched case-insensitively.
const QUOTA_MARKERS: &[&str] = &["429", "quota", "rate limit"];

/// How a failed generation attempt is classified
///
/// Both kinds advance the fallback chain to the next model; the
/// classification only changes how the failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The service refused the call because a usage limit was hit
    QuotaExceeded,
    /// Any other failure
    Other,
}

impl FailureKind {
    /// Classify a human-readable failure message.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        if QUOTA_MARKERS.iter().any(|marker| lower.contains(marker)) {
            FailureKind::QuotaExceeded
        } else {
            FailureKind::Other
        }
    }

    pub fn is_quota(&self) -> bool {
        matches!(self, FailureKind::QuotaExceeded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::QuotaExceeded => "quota_exceeded",
            FailureKind::Other => "other",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
