//! Cookie consent, tracker disclosure and cookie policy checks
//!
//! Tracker detection only looks at `<script>` tags (src and inline body).
//! A tracker counts as disclosed when the page links a privacy policy or
//! shows a consent banner.

use crate::rules::{CheckContext, CheckOutcome};
use crate::signals::{has_cookie_banner, has_cookie_policy_link, has_trackers, trackers_disclosed};

pub fn check_cookie_consent(ctx: &CheckContext<'_>) -> CheckOutcome {
    let has_consent = has_cookie_banner(ctx.page);
    CheckOutcome::new(has_consent).with_detail("hasCookieConsent", has_consent)
}

/// Fails only for trackers that nothing on the page discloses
pub fn check_third_party_tracking(ctx: &CheckContext<'_>) -> CheckOutcome {
    let has_trackers = has_trackers(ctx.page);
    let disclosed = trackers_disclosed(ctx.page);
    let undisclosed = has_trackers && !disclosed;

    CheckOutcome::new(!undisclosed)
        .with_detail("hasTrackers", has_trackers)
        .with_detail("trackersDisclosed", disclosed)
}

/// A dedicated cookie policy link, or no trackers at all.
///
/// First-party cookies are not detected, so a tracker-free page passes
/// even without any cookie policy.
pub fn check_cookie_policy(ctx: &CheckContext<'_>) -> CheckOutcome {
    let has_policy = has_cookie_policy_link(ctx.page);
    let passed = has_policy || !has_trackers(ctx.page);
    CheckOutcome::new(passed).with_detail("hasCookiePolicy", has_policy)
}
