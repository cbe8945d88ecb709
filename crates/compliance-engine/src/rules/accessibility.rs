//! Basic accessibility: alt text coverage on images (WCAG 1.1.1)

use crate::rules::{CheckContext, CheckOutcome};
use crate::signals::ImageStats;

/// Passes with no images, or when more than half have non-blank alt text
pub fn check_accessibility(ctx: &CheckContext<'_>) -> CheckOutcome {
    let stats = ImageStats::collect(ctx.page);
    CheckOutcome::new(stats.is_acceptable())
        .with_detail("totalImages", stats.total)
        .with_detail("imagesWithAlt", stats.with_alt)
}
