use crate::rules::{CheckContext, CheckOutcome};
use crate::signals::has_contact_info;

/// Email address, mailto link or a "contact" page anywhere on the page
pub fn check_contact_info(ctx: &CheckContext<'_>) -> CheckOutcome {
    let has_contact = has_contact_info(ctx.page);
    CheckOutcome::new(has_contact).with_detail("hasContactInfo", has_contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{PageElement, ParsedPage};

    #[test]
    fn test_mailto_link() {
        let page = ParsedPage::new(
            vec![PageElement::new("a").with_attr("href", "mailto:hi@shop.example")],
            String::new(),
            String::new(),
        );
        assert!(check_contact_info(&CheckContext::new(&page, "")).passed);
    }

    #[test]
    fn test_contacto_keyword_in_markup() {
        let page = ParsedPage::new(vec![], "<h2>Contacto</h2>".to_string(), String::new());
        assert!(check_contact_info(&CheckContext::new(&page, "")).passed);
    }

    #[test]
    fn test_missing_contact() {
        let page = ParsedPage::new(vec![], "<h1>Welcome</h1>".to_string(), String::new());
        assert!(!check_contact_info(&CheckContext::new(&page, "")).passed);
    }
}
