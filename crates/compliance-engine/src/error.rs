use thiserror::Error;

/// Failures outside the analyzer: fetching, content type, storage.
///
/// These are reported as a failed scan, never folded into a zero score.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Timed out fetching {url} after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("{url} did not return HTML (content type: {content_type})")]
    NotHtml { url: String, content_type: String },

    #[error("Scan store error: {0}")]
    Store(String),
}
