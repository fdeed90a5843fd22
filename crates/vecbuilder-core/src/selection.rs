use serde::{Deserialize, Serialize};

use crate::composition::Composition;
use crate::EditError;

/// The single highlighted slot shared by the map, table and sequence views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, slot_id: &str) -> bool {
        self.selected.as_deref() == Some(slot_id)
    }

    pub fn select(&mut self, composition: &Composition, slot_id: &str) -> Result<(), EditError> {
        if !composition.contains(slot_id) {
            return Err(EditError::UnknownSlot(slot_id.to_string()));
        }
        self.selected = Some(slot_id.to_string());
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Drop the selection if its slot is gone from `composition`. Returns
    /// true when something was cleared.
    pub fn retain_valid(&mut self, composition: &Composition) -> bool {
        match self.selected.as_deref() {
            Some(id) if !composition.contains(id) => {
                log::debug!("selected slot {} no longer exists, clearing selection", id);
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::VectorTemplate;

    #[test]
    fn test_select_replaces() {
        let c = Composition::new(&VectorTemplate::aav(), 1).unwrap();
        let mut selection = SelectionState::new();
        assert_eq!(selection.selected(), None);

        selection.select(&c, "promoter").unwrap();
        selection.select(&c, "amp").unwrap();
        assert_eq!(selection.selected(), Some("amp"));
        assert!(!selection.is_selected("promoter"));

        selection.deselect();
        assert_eq!(selection.selected(), None);
        selection.deselect();
    }

    #[test]
    fn test_select_unknown_keeps_previous() {
        let c = Composition::new(&VectorTemplate::aav(), 1).unwrap();
        let mut selection = SelectionState::new();
        selection.select(&c, "orf-1").unwrap();
        assert_eq!(
            selection.select(&c, "orf-2"),
            Err(EditError::UnknownSlot("orf-2".to_string()))
        );
        assert_eq!(selection.selected(), Some("orf-1"));
    }

    #[test]
    fn test_retain_valid_after_regeneration() {
        let mut c = Composition::new(&VectorTemplate::aav(), 3).unwrap();
        let mut selection = SelectionState::new();
        selection.select(&c, "orf-3").unwrap();
        assert!(!selection.retain_valid(&c));

        c.set_editable_group_count(2).unwrap();
        assert!(selection.retain_valid(&c));
        assert_eq!(selection.selected(), None);
    }
}
