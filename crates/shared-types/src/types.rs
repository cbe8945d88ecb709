use std::collections::BTreeMap;

use crate::jurisdiction::Jurisdiction;

/// One element of a parsed HTML document, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageElement {
    pub tag: String, // lower-cased tag name
    pub attributes: BTreeMap<String, String>,
    pub text: String, // whitespace-collapsed link text, `<a>` only
    pub script_body: Option<String>, // raw inline body, `<script>` only
}

impl PageElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_lowercase(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_script_body(mut self, body: &str) -> Self {
        self.script_body = Some(body.to_string());
        self
    }

    /// Attribute lookup; names are stored lower-cased
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

/// Read-only view of a fetched page handed to the analyzer
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParsedPage {
    pub elements: Vec<PageElement>,
    pub markup: String,    // full serialized document
    pub body_text: String, // visible text of <body>
}

impl ParsedPage {
    pub fn new(elements: Vec<PageElement>, markup: String, body_text: String) -> Self {
        Self {
            elements,
            markup,
            body_text,
        }
    }

    /// Anchors that carry an `href` attribute
    pub fn links(&self) -> impl Iterator<Item = &PageElement> {
        self.elements
            .iter()
            .filter(|e| e.is("a") && e.attr("href").is_some())
    }

    pub fn scripts(&self) -> impl Iterator<Item = &PageElement> {
        self.elements.iter().filter(|e| e.is("script"))
    }

    pub fn forms(&self) -> impl Iterator<Item = &PageElement> {
        self.elements.iter().filter(|e| e.is("form"))
    }

    pub fn images(&self) -> impl Iterator<Item = &PageElement> {
        self.elements.iter().filter(|e| e.is("img"))
    }
}

/// Outcome of a single compliance check
///
/// Field names and order are part of the stored scan format.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IssueRecord {
    pub code: String, // e.g., "MISSING_PRIVACY_POLICY"
    pub title: String,
    pub description: String,
    pub severity: u32, // point weight
    pub passed: bool,
}

/// Raw signal recorded alongside the issues for audit/debugging
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Flag(bool),
    Count(u64),
    Text(String),
}

impl From<bool> for DetailValue {
    fn from(value: bool) -> Self {
        DetailValue::Flag(value)
    }
}

impl From<u64> for DetailValue {
    fn from(value: u64) -> Self {
        DetailValue::Count(value)
    }
}

impl From<usize> for DetailValue {
    fn from(value: usize) -> Self {
        DetailValue::Count(value as u64)
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        DetailValue::Text(value.to_string())
    }
}

/// Sorted so that serialized output is stable between runs
pub type Details = BTreeMap<String, DetailValue>;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub score: u8, // 0..=100
    pub issues: Vec<IssueRecord>,
    pub details: Details,
    pub jurisdiction: Jurisdiction,
}

impl AnalysisResult {
    pub fn failed_issues(&self) -> impl Iterator<Item = &IssueRecord> {
        self.issues.iter().filter(|i| !i.passed)
    }

    pub fn earned_weight(&self) -> u32 {
        self.issues
            .iter()
            .filter(|i| i.passed)
            .map(|i| i.severity)
            .sum()
    }

    pub fn total_weight(&self) -> u32 {
        self.issues.iter().map(|i| i.severity).sum()
    }

    pub fn detail(&self, key: &str) -> Option<&DetailValue> {
        self.details.get(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => RiskLevel::Low,
            50..=79 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

/// Caller-facing scan response
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub url: String,
    pub score: u8,
    pub issues: Vec<IssueRecord>,
    pub recommendations: Vec<String>,
    pub jurisdiction: Jurisdiction,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(code: &str, severity: u32, passed: bool) -> IssueRecord {
        IssueRecord {
            code: code.to_string(),
            title: String::new(),
            description: String::new(),
            severity,
            passed,
        }
    }

    #[test]
    fn test_page_selectors() {
        let page = ParsedPage::new(
            vec![
                PageElement::new("A").with_attr("HREF", "/privacy"),
                PageElement::new("a").with_text("no href"),
                PageElement::new("script").with_script_body("var x = 1;"),
                PageElement::new("img").with_attr("alt", "Logo"),
                PageElement::new("form"),
            ],
            String::new(),
            String::new(),
        );

        assert_eq!(page.links().count(), 1);
        assert_eq!(page.links().next().unwrap().attr("href"), Some("/privacy"));
        assert_eq!(page.scripts().count(), 1);
        assert_eq!(page.images().count(), 1);
        assert_eq!(page.forms().count(), 1);
    }

    #[test]
    fn test_issue_serializes_with_stored_field_names() {
        let json = serde_json::to_string(&issue("NO_HTTPS", 10, false)).unwrap();
        assert_eq!(
            json,
            r#"{"code":"NO_HTTPS","title":"","description":"","severity":10,"passed":false}"#
        );
    }

    #[test]
    fn test_detail_values_serialize_untagged() {
        let mut details = Details::new();
        details.insert("hasTerms".into(), true.into());
        details.insert("totalImages".into(), 3usize.into());
        details.insert("detectedJurisdiction".into(), "GLOBAL".into());

        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(
            json,
            r#"{"detectedJurisdiction":"GLOBAL","hasTerms":true,"totalImages":3}"#
        );
    }

    #[test]
    fn test_report_uses_camel_case_keys() {
        let report = ScanReport {
            url: "https://example.com".to_string(),
            score: 52,
            issues: Vec::new(),
            recommendations: Vec::new(),
            jurisdiction: Jurisdiction::Global,
            risk_level: RiskLevel::Medium,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["riskLevel"], "MEDIUM");
        assert!(json.get("risk_level").is_none());
        assert_eq!(json["jurisdiction"], "GLOBAL");
    }

    #[test]
    fn test_weights() {
        let result = AnalysisResult {
            score: 0,
            issues: vec![issue("A", 15, true), issue("B", 10, false)],
            details: Details::new(),
            jurisdiction: Jurisdiction::Global,
        };
        assert_eq!(result.earned_weight(), 15);
        assert_eq!(result.total_weight(), 25);
        assert_eq!(result.failed_issues().count(), 1);
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(80), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(79), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(0), RiskLevel::High);
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"MEDIUM\"");
    }
}
