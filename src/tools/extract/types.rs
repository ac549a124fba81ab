use serde::{Deserialize, Serialize};

/// Where on the page an accepted description came from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DescriptionSource {
    /// A `<meta>` tag, keyed by its name/property.
    Meta { key: String },
    /// An element matched by one of the description selectors.
    Selector { selector: String },
    /// A leaf text element found by scanning the page body.
    TextBlock,
}

/// Extract description result.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionMatch {
    pub text: String,
    pub source: DescriptionSource,
}
