//! Raw page signals shared by the checks
//!
//! Each helper is a pure function of the page (and URL). Checks that depend
//! on another check's signal call the helper again rather than reading
//! state from an earlier check.

use shared_types::ParsedPage;

use crate::patterns::{mentions_cookie_policy, mentions_opt_out, PatternSet};

/// Any anchor whose href or visible text matches the pattern set
pub fn has_matching_link(page: &ParsedPage, set: PatternSet) -> bool {
    page.links().any(|link| {
        let href = link.attr("href").unwrap_or_default();
        set.is_match(href) || set.is_match(&link.text)
    })
}

pub fn has_privacy_link(page: &ParsedPage) -> bool {
    has_matching_link(page, PatternSet::PrivacyPolicy)
}

pub fn has_terms_link(page: &ParsedPage) -> bool {
    has_matching_link(page, PatternSet::Terms)
}

pub fn has_cookie_banner(page: &ParsedPage) -> bool {
    PatternSet::CookieBanner.is_match(&page.markup)
}

pub fn has_contact_info(page: &ParsedPage) -> bool {
    PatternSet::Contact.is_match(&page.markup) || has_matching_link(page, PatternSet::Contact)
}

/// Tracker signature in any script `src` or inline body
pub fn has_trackers(page: &ParsedPage) -> bool {
    page.scripts().any(|script| {
        let src = script.attr("src").unwrap_or_default();
        let inline = script.script_body.as_deref().unwrap_or_default();
        PatternSet::Tracker.is_match(src) || PatternSet::Tracker.is_match(inline)
    })
}

/// Trackers are considered disclosed by a privacy policy link or a consent banner
pub fn trackers_disclosed(page: &ParsedPage) -> bool {
    has_trackers(page) && (has_privacy_link(page) || has_cookie_banner(page))
}

pub fn has_cookie_policy_link(page: &ParsedPage) -> bool {
    page.links().any(|link| {
        let href = link.attr("href").unwrap_or_default();
        mentions_cookie_policy(href) || mentions_cookie_policy(&link.text)
    })
}

pub fn is_https(url: &str) -> bool {
    url.starts_with("https://")
}

pub fn has_forms(page: &ParsedPage) -> bool {
    page.forms().next().is_some()
}

pub fn has_opt_out(page: &ParsedPage) -> bool {
    mentions_opt_out(&page.markup)
}

/// Image counts for the accessibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageStats {
    pub total: usize,
    pub with_alt: usize,
}

impl ImageStats {
    pub fn collect(page: &ParsedPage) -> Self {
        page.images().fold(Self::default(), |mut stats, img| {
            stats.total += 1;
            if img.attr("alt").is_some_and(|alt| !alt.trim().is_empty()) {
                stats.with_alt += 1;
            }
            stats
        })
    }

    /// No images, or strictly more than half carry non-blank alt text
    pub fn is_acceptable(&self) -> bool {
        self.total == 0 || self.with_alt * 2 > self.total
    }
}
