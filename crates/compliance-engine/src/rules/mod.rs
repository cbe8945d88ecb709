//! The compliance check battery
//!
//! Checks run in the fixed order of [`CHECKS`]. Each one is a pure function
//! of the page and URL; the engine folds their outcomes into issues, details
//! and a score.

pub mod accessibility;
pub mod contact;
pub mod cookies;
pub mod disclosure;
pub mod transport;

use shared_types::{DetailValue, IssueRecord, ParsedPage};

/// Inputs every check sees
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub page: &'a ParsedPage,
    pub url: &'a str,
}

impl<'a> CheckContext<'a> {
    pub fn new(page: &'a ParsedPage, url: &'a str) -> Self {
        Self { page, url }
    }
}

/// Pass/fail plus the raw signals behind the decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub passed: bool,
    pub details: Vec<(&'static str, DetailValue)>,
}

impl CheckOutcome {
    pub fn new(passed: bool) -> Self {
        Self {
            passed,
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, key: &'static str, value: impl Into<DetailValue>) -> Self {
        self.details.push((key, value.into()));
        self
    }
}

/// A single weighted rule
pub struct Check {
    pub code: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: u32,
    pub evaluate: fn(&CheckContext<'_>) -> CheckOutcome,
}

impl Check {
    pub fn run(&self, ctx: &CheckContext<'_>) -> (IssueRecord, CheckOutcome) {
        let outcome = (self.evaluate)(ctx);
        let issue = IssueRecord {
            code: self.code.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            severity: self.severity,
            passed: outcome.passed,
        };
        (issue, outcome)
    }
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("code", &self.code)
            .field("severity", &self.severity)
            .finish()
    }
}

pub const MISSING_PRIVACY_POLICY: &str = "MISSING_PRIVACY_POLICY";
pub const MISSING_TERMS: &str = "MISSING_TERMS";
pub const MISSING_COOKIE_CONSENT: &str = "MISSING_COOKIE_CONSENT";
pub const NO_CONTACT_INFO: &str = "NO_CONTACT_INFO";
pub const THIRD_PARTY_COOKIES: &str = "THIRD_PARTY_COOKIES";
pub const NO_HTTPS: &str = "NO_HTTPS";
pub const MISSING_COOKIE_POLICY: &str = "MISSING_COOKIE_POLICY";
pub const NO_DATA_COLLECTION_DISCLOSURE: &str = "NO_DATA_COLLECTION_DISCLOSURE";
pub const NO_OPT_OUT: &str = "NO_OPT_OUT";
pub const NO_ACCESSIBILITY_BASICS: &str = "NO_ACCESSIBILITY_BASICS";

/// All checks, in report order. Severities sum to 100.
pub static CHECKS: [Check; 10] = [
    Check {
        code: MISSING_PRIVACY_POLICY,
        title: "Missing Privacy Policy",
        description: "Your website does not have a visible Privacy Policy link. Required by GDPR, CCPA, and most data protection laws.",
        severity: 15,
        evaluate: disclosure::check_privacy_policy,
    },
    Check {
        code: MISSING_TERMS,
        title: "Missing Terms of Service",
        description: "No Terms of Service or Terms and Conditions link was found on your website.",
        severity: 10,
        evaluate: disclosure::check_terms,
    },
    Check {
        code: MISSING_COOKIE_CONSENT,
        title: "Missing Cookie Consent Banner",
        description: "No cookie consent mechanism detected. GDPR requires explicit consent before setting non-essential cookies.",
        severity: 15,
        evaluate: cookies::check_cookie_consent,
    },
    Check {
        code: NO_CONTACT_INFO,
        title: "No Contact Information",
        description: "No visible contact email, form, or address found. Most regulations require users to be able to contact you.",
        severity: 8,
        evaluate: contact::check_contact_info,
    },
    Check {
        code: THIRD_PARTY_COOKIES,
        title: "Third-Party Tracking Without Disclosure",
        description: "Third-party scripts (analytics, ads, pixels) detected but not disclosed in a privacy or cookie policy.",
        severity: 12,
        evaluate: cookies::check_third_party_tracking,
    },
    Check {
        code: NO_HTTPS,
        title: "Not Using HTTPS",
        description: "Your website is not served over HTTPS. Unencrypted connections put user data at risk.",
        severity: 10,
        evaluate: transport::check_https,
    },
    Check {
        code: MISSING_COOKIE_POLICY,
        title: "Missing Cookie Policy",
        description: "Cookies are being set but no separate Cookie Policy page was found.",
        severity: 8,
        evaluate: cookies::check_cookie_policy,
    },
    Check {
        code: NO_DATA_COLLECTION_DISCLOSURE,
        title: "No Data Collection Disclosure",
        description: "Forms collecting user data found but no disclosure about what data is collected or how it's used.",
        severity: 10,
        evaluate: disclosure::check_data_collection,
    },
    Check {
        code: NO_OPT_OUT,
        title: "No Opt-Out Mechanism",
        description: "No unsubscribe or opt-out mechanism found for marketing communications.",
        severity: 7,
        evaluate: disclosure::check_opt_out,
    },
    Check {
        code: NO_ACCESSIBILITY_BASICS,
        title: "Missing Basic Accessibility",
        description: "Basic accessibility features (alt text on images) are missing from key elements.",
        severity: 5,
        evaluate: accessibility::check_accessibility,
    },
];

pub fn find_check(code: &str) -> Option<&'static Check> {
    CHECKS.iter().find(|c| c.code == code)
}
