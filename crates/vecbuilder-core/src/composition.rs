use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slot::{Slot, SlotCategory, Strand};
use crate::EditError;

/// Upper bound on the number of ORF groups in the editable region.
pub const MAX_ORF_GROUPS: usize = 3;

pub const PROMOTER_ID: &str = "promoter";
pub const REGULATORY_ID: &str = "regulatory";

pub fn orf_id(group: usize) -> String {
    format!("orf-{}", group)
}

/// Id of the linker between ORF `group` and ORF `group + 1`.
pub fn linker_id(group: usize) -> String {
    format!("linker-{}", group)
}

/// The fixed backbone a composition is built around. The editable region
/// (promoter, ORF/linker groups, regulatory element) sits between `leading`
/// and `trailing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorTemplate {
    pub name: String,
    pub leading: Vec<Slot>,
    pub trailing: Vec<Slot>,
}

impl VectorTemplate {
    pub fn new(name: impl Into<String>, leading: Vec<Slot>, trailing: Vec<Slot>) -> Self {
        Self {
            name: name.into(),
            leading,
            trailing,
        }
    }

    /// AAV transfer vector: ITR-flanked cassette on a pUC/AmpR backbone.
    pub fn aav() -> Self {
        Self::new(
            "AAV transfer vector",
            vec![Slot::backbone("5itr", "5' ITR", 50)],
            vec![
                Slot::backbone("3itr", "3' ITR", 50),
                Slot::backbone("bgh", "BGH pA", 80).with_feature_type("PolyA_signal"),
                Slot::backbone("puc", "pUC ori", 150)
                    .with_color("#60A5FA")
                    .with_strand(Strand::Reverse)
                    .with_feature_type("Rep_origin"),
                Slot::backbone("amp", "Ampicillin", 200)
                    .with_color("#B91C1C")
                    .with_strand(Strand::Reverse)
                    .with_feature_type("CDS"),
            ],
        )
    }
}

impl Default for VectorTemplate {
    fn default() -> Self {
        Self::aav()
    }
}

/// Ordered slots around the circle. Slot order is also the order along the
/// linear sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub id: Uuid,
    pub name: String,
    slots: Vec<Slot>,
}

impl Composition {
    /// Build a composition from a template with `orf_groups` ORF groups, all
    /// editable slots empty.
    pub fn new(template: &VectorTemplate, orf_groups: usize) -> Result<Self, EditError> {
        check_group_count(orf_groups)?;

        let mut slots = template.leading.clone();
        slots.push(Slot::editable(PROMOTER_ID, SlotCategory::Promoter, None));
        slots.extend(build_region(orf_groups, &mut HashMap::new()));
        slots.push(Slot::editable(REGULATORY_ID, SlotCategory::Regulatory, None));
        slots.extend(template.trailing.iter().cloned());

        let mut composition = Self {
            id: Uuid::new_v4(),
            name: template.name.clone(),
            slots,
        };
        composition.renumber_steps();
        Ok(composition)
    }

    /// Wrap an arbitrary slot list. Ids must be unique, lengths positive, and
    /// only backbone slots may be fixed. Group-count changes also need the
    /// promoter and regulatory slots to be present.
    pub fn from_slots(name: impl Into<String>, slots: Vec<Slot>) -> Result<Self, EditError> {
        let mut seen = HashSet::new();
        for slot in &slots {
            if !seen.insert(slot.id.as_str()) {
                return Err(EditError::DuplicateSlot(slot.id.clone()));
            }
            if slot.length == 0 {
                return Err(EditError::ZeroLength(slot.id.clone()));
            }
            let backbone = slot.category == SlotCategory::Backbone;
            if slot.fixed != backbone || (slot.fixed && slot.assigned_name.is_some()) {
                return Err(EditError::InconsistentSlot(slot.id.clone()));
            }
        }

        let mut composition = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            slots,
        };
        composition.renumber_steps();
        Ok(composition)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    pub fn contains(&self, slot_id: &str) -> bool {
        self.get(slot_id).is_some()
    }

    /// Index of the slot in map order.
    pub fn position(&self, slot_id: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.id == slot_id)
    }

    pub fn total_length(&self) -> usize {
        self.slots.iter().map(|s| s.length).sum()
    }

    pub fn editable_group_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.category == SlotCategory::Orf)
            .count()
    }

    /// Put a named part of the given length into an editable slot.
    pub fn assign(&mut self, slot_id: &str, name: &str, length: usize) -> Result<(), EditError> {
        let slot = self.editable_slot_mut(slot_id)?;
        if length == 0 {
            return Err(EditError::ZeroLength(slot_id.to_string()));
        }
        slot.label = slot.assigned_label(name);
        slot.assigned_name = Some(name.to_string());
        slot.length = length;
        log::debug!("assigned {} ({} bp) to slot {}", name, length, slot_id);
        Ok(())
    }

    /// Return an editable slot to its empty placeholder state.
    pub fn clear(&mut self, slot_id: &str) -> Result<(), EditError> {
        let slot = self.editable_slot_mut(slot_id)?;
        slot.assigned_name = None;
        slot.length = slot.category.placeholder_length();
        slot.label = slot.placeholder_label();
        log::debug!("cleared slot {}", slot_id);
        Ok(())
    }

    /// Regenerate the ORF/linker region for `count` groups. Slots that exist
    /// both before and after keep their assignment. Returns the ids of the
    /// slots that were dropped.
    pub fn set_editable_group_count(&mut self, count: usize) -> Result<Vec<String>, EditError> {
        check_group_count(count)?;
        let promoter = self
            .position(PROMOTER_ID)
            .ok_or_else(|| EditError::UnknownSlot(PROMOTER_ID.to_string()))?;
        let regulatory = self
            .position(REGULATORY_ID)
            .ok_or_else(|| EditError::UnknownSlot(REGULATORY_ID.to_string()))?;
        let region = (promoter + 1)..regulatory.max(promoter + 1);
        if let Some(stray) = self.slots[region.clone()]
            .iter()
            .find(|s| !matches!(s.category, SlotCategory::Orf | SlotCategory::Linker))
        {
            return Err(EditError::MisplacedSlot(stray.id.clone()));
        }

        let mut previous: HashMap<String, Slot> = self
            .slots
            .drain(region.clone())
            .map(|s| (s.id.clone(), s))
            .collect();
        let rebuilt = build_region(count, &mut previous);
        self.slots.splice(region.start..region.start, rebuilt);
        self.renumber_steps();

        let mut removed: Vec<String> = previous.into_keys().collect();
        removed.sort();
        log::debug!(
            "regenerated editable region with {} ORF group(s), dropped {:?}",
            count,
            removed
        );
        Ok(removed)
    }

    fn editable_slot_mut(&mut self, slot_id: &str) -> Result<&mut Slot, EditError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.id == slot_id)
            .ok_or_else(|| EditError::UnknownSlot(slot_id.to_string()))?;
        if slot.fixed {
            return Err(EditError::ImmutableSlot(slot_id.to_string()));
        }
        Ok(slot)
    }

    fn renumber_steps(&mut self) {
        let mut step = 0;
        for slot in &mut self.slots {
            if slot.fixed {
                slot.step = None;
            } else {
                step += 1;
                slot.step = Some(step);
            }
        }
    }
}

fn check_group_count(count: usize) -> Result<(), EditError> {
    if count == 0 || count > MAX_ORF_GROUPS {
        return Err(EditError::InvalidGroupCount {
            count,
            max: MAX_ORF_GROUPS,
        });
    }
    Ok(())
}

/// ORF 1, linker 1, ORF 2, ..., ORF `count`, reusing slots from `previous`
/// by id and removing them from it.
fn build_region(count: usize, previous: &mut HashMap<String, Slot>) -> Vec<Slot> {
    let mut region = Vec::with_capacity(count * 2);
    for group in 1..=count {
        if group > 1 {
            let id = linker_id(group - 1);
            region.push(
                previous
                    .remove(&id)
                    .unwrap_or_else(|| Slot::editable(id, SlotCategory::Linker, Some(group - 1))),
            );
        }
        let id = orf_id(group);
        region.push(
            previous
                .remove(&id)
                .unwrap_or_else(|| Slot::editable(id, SlotCategory::Orf, Some(group))),
        );
    }
    region
}
