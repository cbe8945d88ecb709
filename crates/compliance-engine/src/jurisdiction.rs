//! Best-effort jurisdiction inference for a scanned site
//!
//! Two ordered rule lists, first match wins:
//! 1. Country-code TLD of the URL host
//! 2. Regulation keywords in the page markup
//!
//! Anything else is `Global`. An unparsable URL skips stage 1 silently.

use shared_types::{Jurisdiction, ParsedPage};
use url::Url;

/// Multi-label public suffixes that are matched as a whole
pub const COMPOUND_SUFFIXES: &[&str] = &["co.uk", "com.br", "com.au"];

/// EU member-state ccTLDs plus `.eu`
pub const EU_TLDS: &[&str] = &[
    "de", "fr", "es", "it", "nl", "be", "at", "pt", "pl", "se", "fi", "dk", "ie", "gr", "cz", "ro",
    "hu", "bg", "hr", "sk", "si", "lt", "lv", "ee", "cy", "lu", "mt", "eu",
];

/// Stage 1: TLD → jurisdiction
pub const TLD_RULES: &[(&[&str], Jurisdiction)] = &[
    (EU_TLDS, Jurisdiction::EuGdpr),
    (&["uk", "co.uk"], Jurisdiction::UkDpa),
    (&["br", "com.br"], Jurisdiction::BrLgpd),
    (&["ca"], Jurisdiction::CaPipeda),
    (&["au", "com.au"], Jurisdiction::AuPrivacy),
];

/// Stage 2: lower-cased markup keywords → jurisdiction
pub const KEYWORD_RULES: &[(&[&str], Jurisdiction)] = &[
    (&["gdpr", "rgpd", "dsgvo"], Jurisdiction::EuGdpr),
    (&["ccpa", "california"], Jurisdiction::UsCcpa),
    (&["lgpd"], Jurisdiction::BrLgpd),
];

/// Extract the TLD (or a known compound suffix) from a URL's host
///
/// Returns `None` for unparsable URLs, hosts without a dot and IP addresses.
pub fn extract_tld(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = match parsed.host()? {
        url::Host::Domain(domain) => domain.trim_end_matches('.').to_lowercase(),
        url::Host::Ipv4(_) | url::Host::Ipv6(_) => return None,
    };

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() < 2 {
        return None;
    }

    if labels.len() >= 3 {
        let compound = format!("{}.{}", labels[labels.len() - 2], labels[labels.len() - 1]);
        if COMPOUND_SUFFIXES.contains(&compound.as_str()) {
            return Some(compound);
        }
    }

    labels.last().map(|tld| tld.to_string())
}

pub fn jurisdiction_from_tld(tld: &str) -> Option<Jurisdiction> {
    TLD_RULES
        .iter()
        .find(|(tlds, _)| tlds.contains(&tld))
        .map(|(_, jurisdiction)| *jurisdiction)
}

pub fn jurisdiction_from_keywords(markup: &str) -> Option<Jurisdiction> {
    let markup_lower = markup.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| markup_lower.contains(k)))
        .map(|(_, jurisdiction)| *jurisdiction)
}

/// Detect the most likely jurisdiction for a page
pub fn detect_jurisdiction(page: &ParsedPage, url: &str) -> Jurisdiction {
    extract_tld(url)
        .and_then(|tld| jurisdiction_from_tld(&tld))
        .or_else(|| jurisdiction_from_keywords(&page.markup))
        .unwrap_or(Jurisdiction::Global)
}
