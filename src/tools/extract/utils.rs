use scraper::{ElementRef, Html};

use crate::selectors::{BODY_SELECTOR, DESCRIPTION_SELECTOR_LIST, META_SELECTOR};
use crate::tools::clean::clean;
use crate::tools::types::Metadata;

use super::filters::{is_valid_description_with, is_valid_text_block_with, DescriptionFilter};
use super::types::{DescriptionMatch, DescriptionSource};

/// Meta keys in order of authority: standard, Open Graph, Twitter card.
const META_DESCRIPTION_KEYS: [&str; 3] =
    ["description", "og:description", "twitter:description"];

/// Leaf elements whose text is never page copy.
const SKIPPED_TAGS: [&str; 7] = ["script", "style", "noscript", "template", "title", "svg", "button"];

/// Collect `(name|property, content)` pairs from every meta tag, in document order.
pub(super) fn scrape_metadata_tags(doc: &Html) -> Metadata {
    doc.select(&META_SELECTOR)
        .filter_map(|el| {
            let key = el
                .value()
                .attr("name")
                .or_else(|| el.value().attr("property"))?;
            let content = el.value().attr("content")?;
            Some((key.to_string(), content.to_string()))
        })
        .collect()
}

/// First meta description that passes the lenient filter.
pub(super) fn from_meta_tags(doc: &Html, filter: &DescriptionFilter) -> Option<DescriptionMatch> {
    let metadata = scrape_metadata_tags(doc);
    for key in META_DESCRIPTION_KEYS {
        for (k, v) in &metadata {
            if !k.eq_ignore_ascii_case(key) {
                continue;
            }
            let text = clean(v);
            if is_valid_description_with(&text, true, filter) {
                return Some(DescriptionMatch {
                    text,
                    source: DescriptionSource::Meta { key: key.to_string() },
                });
            }
        }
    }
    None
}

/// First element matched by the description selectors whose text passes the strict filter.
pub(super) fn from_selectors(doc: &Html, filter: &DescriptionFilter) -> Option<DescriptionMatch> {
    for (selector_str, selector) in DESCRIPTION_SELECTOR_LIST.iter() {
        for el in doc.select(selector) {
            let text = element_text(&el);
            if is_valid_description_with(&text, false, filter) {
                return Some(DescriptionMatch {
                    text,
                    source: DescriptionSource::Selector {
                        selector: selector_str.to_string(),
                    },
                });
            }
        }
    }
    None
}

/// First leaf element of the body whose text reads like a sentence.
pub(super) fn from_text_blocks(doc: &Html, filter: &DescriptionFilter) -> Option<DescriptionMatch> {
    let root = doc
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| doc.root_element());

    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(is_text_leaf)
        .map(|el| element_text(&el))
        .find(|text| is_valid_text_block_with(text, filter))
        .map(|text| DescriptionMatch {
            text,
            source: DescriptionSource::TextBlock,
        })
}

/// Element with no element children that is not script/style/etc.
fn is_text_leaf(el: &ElementRef) -> bool {
    let name = el.value().name();
    if SKIPPED_TAGS.iter().any(|t| name.eq_ignore_ascii_case(t)) {
        return false;
    }
    !el.children().any(|child| child.value().is_element())
}

/// Cleaned text content; text nodes are joined with spaces so adjacent inline
/// elements do not glue words together.
pub(super) fn element_text(el: &ElementRef) -> String {
    clean(&el.text().collect::<Vec<_>>().join(" "))
}
