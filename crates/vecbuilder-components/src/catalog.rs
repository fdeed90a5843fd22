use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use vecbuilder_core::{Slot, SlotCategory};

use crate::entry::{BackboneInfo, CatalogEntry};
use crate::seed_data::{builtin_backbone_info, builtin_entries};

/// Description and notes to show for a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartInfo {
    pub description: String,
    pub notes: String,
}

/// Read-only lookup table of selectable parts plus backbone descriptions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    backbone: Vec<BackboneInfo>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>, backbone: Vec<BackboneInfo>) -> Self {
        Self { entries, backbone }
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let catalog = Self::new(builtin_entries(), builtin_backbone_info());
        log::debug!(
            "loaded {} catalog entries and {} backbone descriptions",
            catalog.entries.len(),
            catalog.backbone.len()
        );
        catalog
    }

    pub fn all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entries selectable for a slot of `category`, in catalog order.
    pub fn entries(&self, category: SlotCategory) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Look up an entry in `category` by id or name (case-insensitive).
    pub fn find(&self, category: SlotCategory, key: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.category == category && e.matches_key(key))
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries whose name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let re = match RegexBuilder::new(&regex::escape(query.trim()))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re,
            Err(e) => {
                log::warn!("catalog search for {:?} failed: {}", query, e);
                return Vec::new();
            }
        };
        self.entries.iter().filter(|e| re.is_match(&e.name)).collect()
    }

    pub fn backbone_info(&self, label: &str) -> Option<&BackboneInfo> {
        self.backbone.iter().find(|b| b.label == label)
    }

    /// The catalog entry currently placed in `slot`, if any.
    pub fn entry_for(&self, slot: &Slot) -> Option<&CatalogEntry> {
        let name = slot.assigned_name.as_deref()?;
        self.entries
            .iter()
            .find(|e| e.category == slot.category && e.name == name)
    }

    /// Description and notes for a slot: the assigned catalog entry for
    /// editable slots, the backbone table for fixed ones.
    pub fn describe(&self, slot: &Slot) -> Option<PartInfo> {
        if let Some(entry) = self.entry_for(slot) {
            return Some(PartInfo {
                description: entry.description.clone(),
                notes: entry.notes.clone(),
            });
        }
        match slot.category {
            SlotCategory::Backbone => self.backbone_info(&slot.label).map(|b| PartInfo {
                description: b.description.clone(),
                notes: b.notes.clone(),
            }),
            SlotCategory::Promoter
            | SlotCategory::Orf
            | SlotCategory::Linker
            | SlotCategory::Regulatory => None,
        }
    }

    /// Annotation type for the component table. The assigned entry wins over
    /// the slot's own label.
    pub fn feature_type_for<'a>(&'a self, slot: &'a Slot) -> &'a str {
        match self.entry_for(slot) {
            Some(entry) => entry.feature_type_label(),
            None => slot.feature_type_label(),
        }
    }
}
