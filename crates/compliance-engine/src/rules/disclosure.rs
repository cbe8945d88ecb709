// Policy links and data-collection disclosure
use crate::rules::{CheckContext, CheckOutcome};
use crate::signals::{has_forms, has_opt_out, has_privacy_link, has_terms_link};

/// Passes when any link points at a privacy policy
pub fn check_privacy_policy(ctx: &CheckContext<'_>) -> CheckOutcome {
    let has_privacy = has_privacy_link(ctx.page);
    CheckOutcome::new(has_privacy).with_detail("hasPrivacyPolicy", has_privacy)
}

pub fn check_terms(ctx: &CheckContext<'_>) -> CheckOutcome {
    let has_terms = has_terms_link(ctx.page);
    CheckOutcome::new(has_terms).with_detail("hasTerms", has_terms)
}

/// Forms collect personal data; a privacy policy must cover them
pub fn check_data_collection(ctx: &CheckContext<'_>) -> CheckOutcome {
    let has_forms = has_forms(ctx.page);
    let passed = !has_forms || has_privacy_link(ctx.page);
    CheckOutcome::new(passed).with_detail("hasForms", has_forms)
}

/// Without forms there is nothing to opt out of
pub fn check_opt_out(ctx: &CheckContext<'_>) -> CheckOutcome {
    let has_opt_out = has_opt_out(ctx.page);
    let passed = has_opt_out || !has_forms(ctx.page);
    CheckOutcome::new(passed).with_detail("hasOptOut", has_opt_out)
}
