mod filters;
mod tests;
pub mod types;
mod utils;

pub use filters::*;
pub use types::*;
use utils::*;

use scraper::Html;

/// Extract a human-readable token description from a page, with default length bounds.
///
/// Returns `None` when no candidate survives filtering. Pure: the same HTML
/// always yields the same answer.
///
/// # Examples
/// ```
/// use pumpscrape::tools::extract::extract_description;
///
/// let html = r#"<html><head>
///     <meta name="description" content="The first cat coin on Solana">
/// </head><body></body></html>"#;
/// assert_eq!(extract_description(html).as_deref(), Some("The first cat coin on Solana"));
/// ```
pub fn extract_description(html: &str) -> Option<String> {
    extract_description_with(html, &DescriptionFilter::default())
}

/// Extract a description using the given length bounds.
pub fn extract_description_with(html: &str, filter: &DescriptionFilter) -> Option<String> {
    extract_description_match(html, filter).map(|m| m.text)
}

/// Extract a description and report which strategy found it.
///
/// Strategies run in order of authority and stop at the first acceptable text:
/// 1. meta tags (`description`, `og:description`, `twitter:description`), lenient filter
/// 2. description/about selectors and main-content paragraphs, strict filter
/// 3. leaf text elements of the body that read like a sentence
pub fn extract_description_match(html: &str, filter: &DescriptionFilter) -> Option<DescriptionMatch> {
    let doc = Html::parse_document(html);

    from_meta_tags(&doc, filter)
        .or_else(|| from_selectors(&doc, filter))
        .or_else(|| from_text_blocks(&doc, filter))
}
