//! Catalog data model.

use serde::{Deserialize, Serialize};

/// One catalog entry: a title plus a fixed set of free-text attributes.
///
/// An item's identity is its ordinal position in the catalog snapshot;
/// there is no separate ID field. Every attribute field deserializes a
/// missing value to the empty string, never to an absent marker — the
/// vectorizer relies on this, so no attribute is ever skipped during
/// composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Display title, also the key for exact and fuzzy query resolution.
    pub title: String,
    /// Category tags (e.g. "action drama").
    #[serde(default)]
    pub tags: String,
    /// Descriptive keywords.
    #[serde(default)]
    pub keywords: String,
    /// Short promotional tagline.
    #[serde(default)]
    pub tagline: String,
    /// Participant names.
    #[serde(default)]
    pub credits: String,
    /// Primary author/creator name.
    #[serde(default)]
    pub creator: String,
}

impl ItemRecord {
    /// The attribute field names, in canonical composition order.
    ///
    /// `title` is deliberately excluded: it is the resolution key, not a
    /// similarity feature.
    pub const ATTRIBUTES: [&'static str; 5] =
        ["tags", "keywords", "tagline", "credits", "creator"];

    /// Look up an attribute field by name. Returns `None` for unknown
    /// names (including `title`).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "tags" => Some(&self.tags),
            "keywords" => Some(&self.keywords),
            "tagline" => Some(&self.tagline),
            "credits" => Some(&self.credits),
            "creator" => Some(&self.creator),
            _ => None,
        }
    }
}
