use serde::{Deserialize, Serialize};
use vecbuilder_core::SlotCategory;

/// A part the user can drop into an editable slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable key (e.g. "cmv", "bgh_poly_a").
    pub id: String,
    /// Which kind of slot accepts this part.
    pub category: SlotCategory,
    /// Human-readable name (e.g. "CMV", "mCherry").
    pub name: String,
    /// Length in base pairs. Always positive.
    pub length: usize,
    /// Annotation type for the component table, when it differs from the
    /// category default (e.g. "PolyA_signal").
    #[serde(default)]
    pub feature_type: Option<String>,
    pub description: String,
    /// Application notes shown next to the description.
    pub notes: String,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        category: SlotCategory,
        name: impl Into<String>,
        length: usize,
        description: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            length,
            feature_type: None,
            description: description.into(),
            notes: notes.into(),
        }
    }

    pub fn feature_type_label(&self) -> &str {
        self.feature_type
            .as_deref()
            .unwrap_or_else(|| self.category.default_feature_type())
    }

    /// Case-insensitive match on either the id or the name.
    pub fn matches_key(&self, key: &str) -> bool {
        self.id.eq_ignore_ascii_case(key) || self.name.eq_ignore_ascii_case(key)
    }
}

/// Description and notes for a fixed backbone element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackboneInfo {
    pub label: String,
    pub description: String,
    pub notes: String,
}
