//! Website legal-compliance analyzer
//!
//! Runs a fixed battery of ten weighted checks over a parsed HTML page
//! (privacy policy, cookie consent, tracker disclosure, HTTPS, accessibility
//! basics, ...) and tags the result with a best-guess jurisdiction.
//!
//! The analyzer is pure: no I/O, no clock, no shared state. The same page
//! and URL always produce the same [`AnalysisResult`].

pub mod config;
pub mod error;
pub mod html;
pub mod jurisdiction;
pub mod patterns;
pub mod recommendations;
pub mod rules;
pub mod scanner;
pub mod scoring;
pub mod signals;

use shared_types::{AnalysisResult, Details, IssueRecord, ParsedPage, ScanReport};
use tracing::debug;

pub use config::ScannerConfig;
pub use error::ScanError;
pub use html::parse_page;
pub use jurisdiction::detect_jurisdiction;
pub use rules::{CheckContext, CHECKS};
pub use scanner::{
    normalize_url, FilePageSource, MemoryScanStore, PageSource, ScanStore, Scanner,
    StaticPageSource, StaticResponse, StoredScan,
};

/// ComplianceAnalyzer entry point
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceAnalyzer;

impl ComplianceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a parsed page fetched from `url`
    pub fn analyze(&self, page: &ParsedPage, url: &str) -> AnalysisResult {
        let ctx = CheckContext::new(page, url);

        let (issues, mut details) = CHECKS.iter().fold(
            (Vec::with_capacity(CHECKS.len()), Details::new()),
            |(mut issues, mut details), check| {
                let (issue, outcome) = check.run(&ctx);
                debug!("{}: passed={}", issue.code, issue.passed);
                for (key, value) in outcome.details {
                    details.insert(key.to_string(), value);
                }
                issues.push(issue);
                (issues, details)
            },
        );

        let score = scoring::score(&issues);
        let jurisdiction = detect_jurisdiction(page, url);
        details.insert("detectedJurisdiction".to_string(), jurisdiction.code().into());

        debug!("Analyzed {}: score={} jurisdiction={}", url, score, jurisdiction);

        AnalysisResult {
            score,
            issues,
            details,
            jurisdiction,
        }
    }

    /// Parse raw HTML and analyze it
    pub fn analyze_html(&self, html: &str, url: &str) -> AnalysisResult {
        self.analyze(&parse_page(html), url)
    }

    /// Caller-facing report with recommendations and risk level
    pub fn report(&self, url: &str, result: &AnalysisResult) -> ScanReport {
        ScanReport {
            url: url.to_string(),
            score: result.score,
            issues: result.issues.clone(),
            recommendations: recommendations::recommendations(&result.issues),
            jurisdiction: result.jurisdiction,
            risk_level: scoring::risk_level(result.score),
        }
    }

    /// Issues that did not pass, for quick inspection
    pub fn failed<'a>(&self, result: &'a AnalysisResult) -> Vec<&'a IssueRecord> {
        result.failed_issues().collect()
    }
}
