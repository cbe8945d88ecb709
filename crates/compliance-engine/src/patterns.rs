//! Keyword tables and matchers for privacy/legal signals in page markup
//!
//! Every table is plain data: a new locale or tracker vendor is one more
//! fragment in the relevant list. Fragments are regex snippets joined into a
//! single case-insensitive alternation per set.

use lazy_static::lazy_static;
use regex::Regex;

/// Privacy policy references (EN/ES/DE/FR/PT)
pub const PRIVACY_FRAGMENTS: &[&str] = &[
    "privacy",
    "privacidad",
    "datenschutz",
    "confidentialit",
    "privacidade",
    "politique.*confidentialit",
];

/// Terms of service references
pub const TERMS_FRAGMENTS: &[&str] = &[
    "terms",
    "condiciones",
    "nutzungsbedingungen",
    "conditions.*utilisation",
    "termos",
];

/// Cookie consent widgets and consent-management vendors
pub const COOKIE_BANNER_FRAGMENTS: &[&str] = &[
    "cookie-consent",
    "cookie-banner",
    "cookie-notice",
    "cookieconsent",
    "cc-window",
    "gdpr",
    "onetrust",
    "cookiebot",
    "quantcast",
];

/// Contact keywords, mailto links and email-shaped substrings
pub const CONTACT_FRAGMENTS: &[&str] = &[
    "contact",
    "contacto",
    "kontakt",
    "mailto:",
    r"@[a-z0-9.-]+\.[a-z]{2,}",
];

/// Analytics and advertising script signatures
pub const TRACKER_FRAGMENTS: &[&str] = &[
    "google-analytics",
    "googletagmanager",
    "gtag",
    "fbq",
    "facebook.*pixel",
    "hotjar",
    "mixpanel",
    r"segment\.com",
    r"analytics\.js",
];

/// Opt-out wording, matched as plain substrings
pub const OPT_OUT_KEYWORDS: &[&str] = &["unsubscribe", "opt-out", "opt out", "darse de baja"];

/// A cookie policy link mentions "cookie" plus one of these
pub const COOKIE_POLICY_KEYWORDS: &[&str] = &["polic", "politic"];

/// Named pattern sets used by the checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternSet {
    PrivacyPolicy,
    Terms,
    CookieBanner,
    Contact,
    Tracker,
}

impl PatternSet {
    pub fn fragments(&self) -> &'static [&'static str] {
        match self {
            PatternSet::PrivacyPolicy => PRIVACY_FRAGMENTS,
            PatternSet::Terms => TERMS_FRAGMENTS,
            PatternSet::CookieBanner => COOKIE_BANNER_FRAGMENTS,
            PatternSet::Contact => CONTACT_FRAGMENTS,
            PatternSet::Tracker => TRACKER_FRAGMENTS,
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            PatternSet::PrivacyPolicy => &PRIVACY_PATTERN,
            PatternSet::Terms => &TERMS_PATTERN,
            PatternSet::CookieBanner => &COOKIE_BANNER_PATTERN,
            PatternSet::Contact => &CONTACT_PATTERN,
            PatternSet::Tracker => &TRACKER_PATTERN,
        }
    }

    /// Case-insensitive search anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }
}

fn compile(fragments: &[&str]) -> Regex {
    Regex::new(&format!("(?i)({})", fragments.join("|"))).unwrap()
}

lazy_static! {
    static ref PRIVACY_PATTERN: Regex = compile(PRIVACY_FRAGMENTS);
    static ref TERMS_PATTERN: Regex = compile(TERMS_FRAGMENTS);
    static ref COOKIE_BANNER_PATTERN: Regex = compile(COOKIE_BANNER_FRAGMENTS);
    static ref CONTACT_PATTERN: Regex = compile(CONTACT_FRAGMENTS);
    static ref TRACKER_PATTERN: Regex = compile(TRACKER_FRAGMENTS);
}

/// Check if text contains any of the keywords (case-insensitive substring)
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let text_lower = text.to_lowercase();
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}

/// "cookie" together with a policy token, e.g. `/cookie-policy`, `/politica-de-cookies`
pub fn mentions_cookie_policy(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    text_lower.contains("cookie") && contains_any(&text_lower, COOKIE_POLICY_KEYWORDS)
}

pub fn mentions_opt_out(text: &str) -> bool {
    contains_any(text, OPT_OUT_KEYWORDS)
}
