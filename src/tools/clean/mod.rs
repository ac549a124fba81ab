mod tests;
mod utils;

use utils::*;

/// Clean text scraped from a page.
///
/// Performs the following operations in order:
/// 1. Normalize Unicode to NFC (canonical composition)
/// 2. Remove zero-width characters
/// 3. Remove control characters (except newlines/tabs)
/// 4. Normalize whitespace (collapse runs to one space, trim)
///
/// Entities are already decoded by the HTML parser, so they are not touched here.
///
/// # Examples
/// ```
/// use pumpscrape::tools::clean::clean;
///
/// let dirty = "  The\u{200B} first   cat\n\ncoin  ";
/// assert_eq!(clean(dirty), "The first cat coin");
/// ```
pub fn clean(text: &str) -> String {
    let mut result = normalize_unicode(text);
    result = remove_zero_width_chars(&result);
    result = remove_control_chars(&result);
    normalize_whitespace(&result)
}
