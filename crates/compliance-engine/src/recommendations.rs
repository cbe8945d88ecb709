// Remediation advice for failed checks
use shared_types::IssueRecord;

use crate::rules::{
    MISSING_COOKIE_CONSENT, MISSING_PRIVACY_POLICY, MISSING_TERMS, NO_CONTACT_INFO, NO_HTTPS,
    THIRD_PARTY_COOKIES,
};

/// Fixed advice per issue code; codes without an entry fall back to the title
pub const RECOMMENDATIONS: &[(&str, &str)] = &[
    (MISSING_PRIVACY_POLICY, "Generate a Privacy Policy tailored to your website"),
    (MISSING_TERMS, "Create Terms of Service to protect your business"),
    (MISSING_COOKIE_CONSENT, "Add a Cookie Consent banner and Cookie Policy"),
    (NO_CONTACT_INFO, "Add visible contact information to your website"),
    (THIRD_PARTY_COOKIES, "Disclose third-party tracking in your Privacy Policy"),
    (NO_HTTPS, "Enable HTTPS/SSL for your website"),
];

pub fn recommendation_for(issue: &IssueRecord) -> String {
    RECOMMENDATIONS
        .iter()
        .find(|(code, _)| *code == issue.code)
        .map(|(_, text)| text.to_string())
        .unwrap_or_else(|| format!("Address: {}", issue.title))
}

/// One recommendation per failed issue, in issue order
pub fn recommendations(issues: &[IssueRecord]) -> Vec<String> {
    issues
        .iter()
        .filter(|i| !i.passed)
        .map(recommendation_for)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn issue(code: &str, title: &str, passed: bool) -> IssueRecord {
        IssueRecord {
            code: code.to_string(),
            title: title.to_string(),
            description: String::new(),
            severity: 1,
            passed,
        }
    }

    #[test]
    fn test_only_failed_issues_in_order() {
        let issues = vec![
            issue("NO_HTTPS", "Not Using HTTPS", false),
            issue("MISSING_TERMS", "Missing Terms of Service", true),
            issue("MISSING_PRIVACY_POLICY", "Missing Privacy Policy", false),
        ];
        assert_eq!(
            recommendations(&issues),
            vec![
                "Enable HTTPS/SSL for your website".to_string(),
                "Generate a Privacy Policy tailored to your website".to_string(),
            ]
        );
    }

    #[test]
    fn test_fallback_uses_title() {
        let rec = recommendation_for(&issue("NO_OPT_OUT", "No Opt-Out Mechanism", false));
        assert_eq!(rec, "Address: No Opt-Out Mechanism");
    }
}
