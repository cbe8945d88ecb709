use crate::rules::{CheckContext, CheckOutcome};
use crate::signals::is_https;

/// The scanned URL itself must use the https scheme
pub fn check_https(ctx: &CheckContext<'_>) -> CheckOutcome {
    let https = is_https(ctx.url);
    CheckOutcome::new(https).with_detail("isHttps", https)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ParsedPage;

    #[test]
    fn test_https_scheme() {
        let page = ParsedPage::default();
        assert!(check_https(&CheckContext::new(&page, "https://example.com")).passed);
        assert!(!check_https(&CheckContext::new(&page, "http://example.com")).passed);
        assert!(!check_https(&CheckContext::new(&page, "example.com")).passed);
    }
}
