//! The editing session: one composition, one selection, one catalog, and the
//! intents that change them.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vecbuilder_components::Catalog;
use vecbuilder_core::synth::synthesize;
use vecbuilder_core::{
    compute_arcs, compute_linear_ranges, slot_at_angle, Arc, Composition, EditError,
    LinearRange, SelectionState, Slot, SlotCategory, VectorTemplate,
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error("No {category} named {entry:?} in the catalog")]
    UnknownEntry {
        category: SlotCategory,
        entry: String,
    },
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

#[derive(Debug, Error)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Where copied sequence text goes. The host supplies the implementation.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// A user action coming from one of the views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    /// Fill a slot with an arbitrary named part.
    Assign {
        slot_id: String,
        name: String,
        length: usize,
    },
    /// Fill a slot with a catalog entry, looked up by id or name within the
    /// slot's category.
    AssignEntry { slot_id: String, entry: String },
    Clear { slot_id: String },
    Select { slot_id: String },
    /// Select whatever lies under a click on the map. Empty space deselects.
    SelectAtAngle { angle: f64 },
    Deselect,
    SetOrfGroups { count: usize },
}

#[derive(Debug, Clone)]
pub struct Session {
    composition: Composition,
    selection: SelectionState,
    catalog: Catalog,
}

impl Session {
    pub fn new(
        template: &VectorTemplate,
        orf_groups: usize,
        catalog: Catalog,
    ) -> Result<Self, SessionError> {
        let composition = Composition::new(template, orf_groups)?;
        log::debug!(
            "new session {} ({}, {} bp)",
            composition.id,
            composition.name,
            composition.total_length()
        );
        Ok(Self {
            composition,
            selection: SelectionState::new(),
            catalog,
        })
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply one intent. On error nothing changes.
    pub fn apply(&mut self, intent: Intent) -> Result<(), SessionError> {
        log::debug!("apply {:?}", intent);
        let result = self.dispatch(intent);
        if let Err(e) = &result {
            log::warn!("intent rejected: {}", e);
        }
        result
    }

    fn dispatch(&mut self, intent: Intent) -> Result<(), SessionError> {
        match intent {
            Intent::Assign {
                slot_id,
                name,
                length,
            } => self.composition.assign(&slot_id, &name, length)?,
            Intent::AssignEntry { slot_id, entry } => {
                let slot = self.slot(&slot_id)?;
                let found = self
                    .catalog
                    .find(slot.category, &entry)
                    .ok_or_else(|| SessionError::UnknownEntry {
                        category: slot.category,
                        entry: entry.clone(),
                    })?;
                let (name, length) = (found.name.clone(), found.length);
                self.composition.assign(&slot_id, &name, length)?;
            }
            Intent::Clear { slot_id } => self.composition.clear(&slot_id)?,
            Intent::Select { slot_id } => self.selection.select(&self.composition, &slot_id)?,
            Intent::SelectAtAngle { angle } => {
                let hit = slot_at_angle(&self.arcs(), angle).map(|a| a.slot_id.clone());
                match hit {
                    Some(slot_id) => self.selection.select(&self.composition, &slot_id)?,
                    None => self.selection.deselect(),
                }
            }
            Intent::Deselect => self.selection.deselect(),
            Intent::SetOrfGroups { count } => {
                self.composition.set_editable_group_count(count)?;
                self.selection.retain_valid(&self.composition);
            }
        }
        Ok(())
    }

    pub fn slot(&self, slot_id: &str) -> Result<&Slot, SessionError> {
        self.composition
            .get(slot_id)
            .ok_or_else(|| EditError::UnknownSlot(slot_id.to_string()).into())
    }

    pub fn selected_slot(&self) -> Option<&Slot> {
        self.selection
            .selected()
            .and_then(|id| self.composition.get(id))
    }

    /// Arcs for the map. A zero-length composition has none.
    pub fn arcs(&self) -> Vec<Arc> {
        compute_arcs(&self.composition).unwrap_or_else(|e| {
            log::debug!("no arcs: {}", e);
            Vec::new()
        })
    }

    pub fn ranges(&self) -> Vec<LinearRange> {
        compute_linear_ranges(&self.composition)
    }

    /// Display sequence for one slot.
    pub fn slot_sequence(&self, slot_id: &str) -> Result<String, SessionError> {
        let slot = self.slot(slot_id)?;
        Ok(synthesize(&slot.id, slot.length))
    }

    /// Hand a slot's display sequence to the clipboard. Returns its length.
    pub fn copy_sequence(
        &self,
        slot_id: &str,
        clipboard: &mut dyn Clipboard,
    ) -> Result<usize, SessionError> {
        let sequence = self.slot_sequence(slot_id)?;
        clipboard.set_text(&sequence)?;
        log::debug!("copied {} bp of {} to clipboard", sequence.len(), slot_id);
        Ok(sequence.len())
    }
}
