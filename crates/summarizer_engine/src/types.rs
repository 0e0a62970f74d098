use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Error surfaced by the API client. `message` is user-facing and shown
/// verbatim by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Transport-level failure: the backend could not be reached at all.
    pub(crate) fn connectivity(base_url: &str) -> Self {
        Self::new(
            FailureKind::Connectivity,
            format!(
                "Unable to connect to the server. Please make sure the backend is running on {base_url}"
            ),
        )
    }

    /// Failure status from a reachable backend. The server-supplied detail
    /// wins; otherwise a generic status-code message.
    pub(crate) fn http(status: u16, detail: Option<String>) -> Self {
        let message = detail.unwrap_or_else(|| format!("HTTP error, status {status}"));
        Self::new(FailureKind::HttpStatus(status), message)
    }

    pub fn is_connectivity(&self) -> bool {
        self.kind == FailureKind::Connectivity
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// DNS/connection/timeout failure before any HTTP response.
    Connectivity,
    /// Backend responded with a non-2xx status.
    HttpStatus(u16),
    /// A staged file could not be read or encoded for upload.
    FileRead,
    /// 2xx response whose body did not parse as a summary.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Connectivity => write!(f, "connectivity failure"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::FileRead => write!(f, "file read failure"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}

/// Successful `/summarize` response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub statistics: Option<SummaryStatistics>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub original_length: u64,
    pub summary_length: u64,
    pub compression_ratio: f64,
}

/// One file to read from disk and attach to the multipart submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFile {
    pub name: String,
    pub path: PathBuf,
    pub mime: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    HealthChecked(Result<(), ApiError>),
    SubmitFinished(Result<SummaryResponse, ApiError>),
}
