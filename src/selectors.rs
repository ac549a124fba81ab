//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for metadata tags with name/property attributes.
pub static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[name], meta[property]").expect("valid metadata selector"));

/// Selector for `<body>` elements.
pub static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("valid body selector"));

/// Elements likely to hold a token's own description, most specific first.
pub const DESCRIPTION_SELECTORS: [&str; 9] = [
    "[data-testid*='description']",
    "[class*='description']",
    "[class*='Description']",
    "[class*='about']",
    "[class*='bio']",
    "main p",
    "article p",
    "[role='main'] p",
    ".content p",
];

/// Parsed [`DESCRIPTION_SELECTORS`], same order.
pub static DESCRIPTION_SELECTOR_LIST: Lazy<Vec<(&'static str, Selector)>> = Lazy::new(|| {
    DESCRIPTION_SELECTORS
        .iter()
        .map(|s| (*s, Selector::parse(s).expect("valid description selector")))
        .collect()
});
