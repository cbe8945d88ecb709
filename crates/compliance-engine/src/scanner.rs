//! Scan pipeline around the analyzer
//!
//! The analyzer never touches the network or storage. Fetching and caching
//! are collaborators behind the [`PageSource`] and [`ScanStore`] traits; this
//! module only sequences them: normalize, cache lookup, fetch, analyze, save.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use shared_types::{AnalysisResult, ScanReport};
use tracing::{debug, error, info, instrument, warn};

use crate::config::ScannerConfig;
use crate::error::ScanError;
use crate::html::parse_page;
use crate::ComplianceAnalyzer;

/// Normalize a user-supplied URL: default to https, drop trailing slashes
pub fn normalize_url(raw: &str) -> Result<String, ScanError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidUrl("URL is required".to_string()));
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let normalized = with_scheme.trim_end_matches('/');
    if normalized.ends_with(':') {
        return Err(ScanError::InvalidUrl(raw.to_string()));
    }
    Ok(normalized.to_string())
}

/// Fetch adapter: returns the raw HTML for a URL
pub trait PageSource {
    fn fetch_html(&self, url: &str, config: &ScannerConfig) -> Result<String, ScanError>;
}

/// Content types the analyzer accepts
fn is_html_content_type(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    media_type == "text/html" || media_type == "application/xhtml+xml"
}

/// Serves one local file for whatever URL is scanned
///
/// Files that are not UTF-8 or contain no markup at all are rejected as
/// non-HTML content.
#[derive(Debug, Clone)]
pub struct FilePageSource {
    path: PathBuf,
}

impl FilePageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FilePageSource {
    fn fetch_html(&self, url: &str, _config: &ScannerConfig) -> Result<String, ScanError> {
        let bytes = fs::read(&self.path).map_err(|e| ScanError::Fetch {
            url: url.to_string(),
            reason: format!("{}: {}", self.path.display(), e),
        })?;

        let content = String::from_utf8(bytes).map_err(|_| ScanError::NotHtml {
            url: url.to_string(),
            content_type: "application/octet-stream".to_string(),
        })?;

        if !content.trim().is_empty() && !content.contains('<') {
            return Err(ScanError::NotHtml {
                url: url.to_string(),
                content_type: "text/plain".to_string(),
            });
        }
        Ok(content)
    }
}

/// A canned response served by [`StaticPageSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticResponse {
    pub content_type: String,
    pub body: String,
    pub latency: Duration, // compared against the configured fetch timeout
}

impl StaticResponse {
    pub fn html(body: &str) -> Self {
        Self {
            content_type: "text/html; charset=utf-8".to_string(),
            body: body.to_string(),
            latency: Duration::ZERO,
        }
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

/// In-memory responses keyed by normalized URL
#[derive(Debug, Clone, Default)]
pub struct StaticPageSource {
    pages: HashMap<String, StaticResponse>,
}

impl StaticPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, html: &str) -> Self {
        self.with_response(url, StaticResponse::html(html))
    }

    pub fn with_response(mut self, url: &str, response: StaticResponse) -> Self {
        self.pages.insert(url.to_string(), response);
        self
    }
}

impl PageSource for StaticPageSource {
    fn fetch_html(&self, url: &str, config: &ScannerConfig) -> Result<String, ScanError> {
        let response = self.pages.get(url).ok_or_else(|| ScanError::Fetch {
            url: url.to_string(),
            reason: "no such page".to_string(),
        })?;

        if response.latency > config.timeout() {
            return Err(ScanError::Timeout {
                url: url.to_string(),
                seconds: config.timeout_seconds,
            });
        }
        if !is_html_content_type(&response.content_type) {
            return Err(ScanError::NotHtml {
                url: url.to_string(),
                content_type: response.content_type.clone(),
            });
        }
        Ok(response.body.clone())
    }
}

/// A persisted analysis
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StoredScan {
    pub url: String,
    pub result: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

/// Storage adapter for finished scans
pub trait ScanStore {
    /// Most recent scan of `url` created after `since`
    fn find_fresh(&self, url: &str, since: DateTime<Utc>) -> Result<Option<StoredScan>, ScanError>;

    fn save(&self, scan: StoredScan) -> Result<(), ScanError>;
}

#[derive(Debug, Default)]
pub struct MemoryScanStore {
    scans: Mutex<Vec<StoredScan>>,
}

impl MemoryScanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scans.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScanStore for MemoryScanStore {
    fn find_fresh(&self, url: &str, since: DateTime<Utc>) -> Result<Option<StoredScan>, ScanError> {
        let scans = self
            .scans
            .lock()
            .map_err(|_| ScanError::Store("scan store lock poisoned".to_string()))?;
        Ok(scans
            .iter()
            .filter(|s| s.url == url && s.created_at > since)
            .max_by_key(|s| s.created_at)
            .cloned())
    }

    fn save(&self, scan: StoredScan) -> Result<(), ScanError> {
        self.scans
            .lock()
            .map_err(|_| ScanError::Store("scan store lock poisoned".to_string()))?
            .push(scan);
        Ok(())
    }
}

/// Orchestrates one scan over a page source and a store
pub struct Scanner<P, S> {
    source: P,
    store: S,
    analyzer: ComplianceAnalyzer,
    config: ScannerConfig,
}

impl<P: PageSource, S: ScanStore> Scanner<P, S> {
    pub fn new(source: P, store: S, config: ScannerConfig) -> Self {
        Self {
            source,
            store,
            analyzer: ComplianceAnalyzer::new(),
            config,
        }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scan(&self, url: &str) -> Result<ScanReport, ScanError> {
        self.scan_at(url, Utc::now())
    }

    /// Scan as of `now`; a stored scan younger than the cache TTL is reused
    #[instrument(skip(self, now))]
    pub fn scan_at(&self, url: &str, now: DateTime<Utc>) -> Result<ScanReport, ScanError> {
        let url = normalize_url(url)?;
        let since = now - self.config.cache_ttl();

        match self.store.find_fresh(&url, since) {
            Ok(Some(cached)) => {
                debug!("Cache hit for {} (scanned {})", url, cached.created_at);
                return Ok(self.analyzer.report(&url, &cached.result));
            }
            Ok(None) => {}
            Err(e) => warn!("Cache lookup failed for {}: {}", url, e),
        }

        let html = self.source.fetch_html(&url, &self.config).map_err(|e| {
            error!("Failed to scan URL {}: {}", url, e);
            e
        })?;

        let page = parse_page(&html);
        let result = self.analyzer.analyze(&page, &url);

        self.store.save(StoredScan {
            url: url.clone(),
            result: result.clone(),
            created_at: now,
        })?;

        info!(
            "Scanned {}: score={} jurisdiction={}",
            url, result.score, result.jurisdiction
        );
        Ok(self.analyzer.report(&url, &result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use shared_types::{Jurisdiction, RiskLevel};

    const COMPLIANT_PAGE: &str = r#"<html><body>
        <div class="cookie-consent">We use cookies</div>
        <a href="/privacy">Privacy Policy</a>
        <a href="/terms">Terms of Service</a>
        <a href="mailto:hello@example.com">Email us</a>
    </body></html>"#;

    fn scanner(source: StaticPageSource) -> Scanner<StaticPageSource, MemoryScanStore> {
        Scanner::new(source, MemoryScanStore::new(), ScannerConfig::default())
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
        assert_eq!(normalize_url(" http://example.com/// ").unwrap(), "http://example.com");
        assert_eq!(
            normalize_url("https://example.com/path/").unwrap(),
            "https://example.com/path"
        );
        assert!(matches!(normalize_url("   "), Err(ScanError::InvalidUrl(_))));
        assert!(matches!(normalize_url("https://"), Err(ScanError::InvalidUrl(_))));
    }

    #[test]
    fn test_scan_analyzes_and_stores() {
        let s = scanner(StaticPageSource::new().with_page("https://example.com", COMPLIANT_PAGE));
        let report = s.scan("example.com/").unwrap();

        assert_eq!(report.url, "https://example.com");
        assert_eq!(report.score, 100);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.jurisdiction, Jurisdiction::Global);
        assert_eq!(s.store().len(), 1);
    }

    #[test]
    fn test_fetch_failure_is_an_error_not_a_zero_score() {
        let s = scanner(StaticPageSource::new());
        let err = s.scan("https://missing.example").unwrap_err();
        assert!(matches!(err, ScanError::Fetch { .. }));
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_fresh_scan_is_served_from_store() {
        let s = scanner(StaticPageSource::new().with_page("https://example.com", COMPLIANT_PAGE));
        let now = Utc::now();
        s.scan_at("https://example.com", now).unwrap();
        s.scan_at("https://example.com", now + ChronoDuration::hours(1)).unwrap();
        assert_eq!(s.store().len(), 1);
    }

    #[test]
    fn test_stale_scan_is_refreshed() {
        let s = scanner(StaticPageSource::new().with_page("https://example.com", COMPLIANT_PAGE));
        let now = Utc::now();
        s.scan_at("https://example.com", now).unwrap();
        s.scan_at("https://example.com", now + ChronoDuration::hours(25)).unwrap();
        assert_eq!(s.store().len(), 2);
    }

    #[test]
    fn test_slow_response_times_out() {
        let source = StaticPageSource::new().with_response(
            "https://slow.example",
            StaticResponse::html("<p>late</p>").with_latency(Duration::from_secs(20)),
        );
        let s = scanner(source);

        let err = s.scan("https://slow.example").unwrap_err();
        assert!(matches!(err, ScanError::Timeout { seconds: 15, .. }));
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_configured_timeout_is_honored() {
        let source = StaticPageSource::new().with_response(
            "https://slow.example",
            StaticResponse::html("<p>late</p>").with_latency(Duration::from_secs(20)),
        );
        let config = ScannerConfig {
            timeout_seconds: 30,
            ..ScannerConfig::default()
        };
        let s = Scanner::new(source, MemoryScanStore::new(), config);
        assert!(s.scan("https://slow.example").is_ok());
    }

    #[test]
    fn test_non_html_response_is_rejected() {
        let source = StaticPageSource::new()
            .with_response(
                "https://example.com/data",
                StaticResponse::html("{}").with_content_type("application/json"),
            )
            .with_response(
                "https://example.com/page",
                StaticResponse::html("<p>ok</p>").with_content_type("TEXT/HTML; charset=UTF-8"),
            );
        let s = scanner(source);

        let err = s.scan("https://example.com/data").unwrap_err();
        match err {
            ScanError::NotHtml { content_type, .. } => assert_eq!(content_type, "application/json"),
            other => panic!("expected NotHtml, got {:?}", other),
        }
        assert!(s.scan("https://example.com/page").is_ok());
        assert_eq!(s.store().len(), 1);
    }

    #[test]
    fn test_file_source_rejects_non_markup() {
        let dir = std::env::temp_dir().join(format!("scan-file-source-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let config = ScannerConfig::default();

        let text = dir.join("notes.txt");
        fs::write(&text, "just some notes").unwrap();
        let err = FilePageSource::new(&text)
            .fetch_html("https://example.com", &config)
            .unwrap_err();
        assert!(matches!(err, ScanError::NotHtml { .. }));

        let binary = dir.join("logo.png");
        fs::write(&binary, [0x89, b'P', b'N', b'G', 0xff, 0xfe]).unwrap();
        let err = FilePageSource::new(&binary)
            .fetch_html("https://example.com", &config)
            .unwrap_err();
        assert!(err.to_string().contains("application/octet-stream"));

        let page = dir.join("page.html");
        fs::write(&page, "<p>Hello</p>").unwrap();
        let html = FilePageSource::new(&page)
            .fetch_html("https://example.com", &config)
            .unwrap();
        assert_eq!(html, "<p>Hello</p>");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FilePageSource::new("/nonexistent/page.html");
        let err = source
            .fetch_html("https://example.com", &ScannerConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to fetch https://example.com"));
    }
}
