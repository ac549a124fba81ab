//! Common types shared across tools for type safety without dependencies

/// Metadata key-value pairs.
pub type Metadata = Vec<(String, String)>;
