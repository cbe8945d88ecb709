//! HTML adapter: turns raw markup into the analyzer's `ParsedPage`
//!
//! Parsing never fails; html5ever repairs malformed input the same way a
//! browser would. Only static markup is inspected, scripts are not run.

use scraper::{ElementRef, Html};
use shared_types::{PageElement, ParsedPage};

/// Tags whose text content is not visible to a reader
const HIDDEN_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Only link text is matched per element; everything else reads `body_text`
const TEXT_TAGS: &[&str] = &["a"];

/// Parse an HTML document into a flat, document-ordered element list
pub fn parse_page(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    let elements: Vec<PageElement> = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .map(to_page_element)
        .collect();

    let body_text = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "body")
        .map(visible_text)
        .unwrap_or_default();

    ParsedPage::new(elements, document.html(), body_text)
}

fn to_page_element(element: ElementRef<'_>) -> PageElement {
    let value = element.value();
    let tag = value.name().to_lowercase();

    let mut page_element = PageElement::new(&tag);
    if TEXT_TAGS.contains(&tag.as_str()) {
        page_element = page_element.with_text(&visible_text(element));
    }
    for (name, attr_value) in value.attrs() {
        page_element = page_element.with_attr(name, attr_value);
    }

    if tag == "script" {
        let body: String = element.text().collect();
        page_element = page_element.with_script_body(&body);
    }

    page_element
}

/// Descendant text with script/style bodies skipped and whitespace collapsed
fn visible_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();

    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .map(|parent| HIDDEN_TEXT_TAGS.contains(&parent.name()))
            .unwrap_or(false);
        if !hidden {
            raw.push_str(text);
        }
    }

    collapse_whitespace(&raw)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
