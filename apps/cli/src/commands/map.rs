use vecbuilder_core::label_anchor;

use crate::config::MapConfig;
use crate::dto::{AnchorDto, MapSegmentDto, MapViewDto};
use crate::session::Session;

/// The circular map: one segment per slot, in composition order.
pub fn map_view(session: &Session, config: &MapConfig) -> MapViewDto {
    let composition = session.composition();
    let segments = session
        .arcs()
        .iter()
        .zip(composition.slots())
        .map(|(arc, slot)| MapSegmentDto {
            id: slot.id.clone(),
            label: slot.label.clone(),
            category: slot.category.to_string(),
            color: slot.color.clone(),
            length: slot.length,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            step: slot.step,
            filled: slot.is_assigned(),
            removable: slot.is_assigned() && !slot.fixed,
            selected: session.selection().is_selected(&slot.id),
            anchor: AnchorDto::from(&label_anchor(arc, config.ring_radius, config.label_radius)),
        })
        .collect();

    MapViewDto {
        name: composition.name.clone(),
        size: config.size,
        ring_radius: config.ring_radius,
        inner_radius: config.inner_radius,
        label_radius: config.label_radius,
        total_length: composition.total_length(),
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Intent;
    use std::f64::consts::TAU;
    use vecbuilder_components::Catalog;
    use vecbuilder_core::VectorTemplate;

    #[test]
    fn test_map_segments() {
        let mut session = Session::new(&VectorTemplate::aav(), 1, Catalog::builtin()).unwrap();
        session
            .apply(Intent::AssignEntry {
                slot_id: "orf-1".to_string(),
                entry: "gfp".to_string(),
            })
            .unwrap();
        session
            .apply(Intent::Select {
                slot_id: "orf-1".to_string(),
            })
            .unwrap();

        let view = map_view(&session, &MapConfig::default());
        assert_eq!(view.segments.len(), session.composition().len());
        assert_eq!(view.total_length, 50 + 30 + 720 + 30 + 480);
        assert_eq!(view.segments.last().unwrap().end_angle, TAU);

        let orf = view.segments.iter().find(|s| s.id == "orf-1").unwrap();
        assert!(orf.filled && orf.removable && orf.selected);
        assert_eq!(orf.label, "GFP");
        assert_eq!(orf.step, Some(2));

        let itr = &view.segments[0];
        assert!(!itr.filled && !itr.removable && !itr.selected);
        assert_eq!(itr.step, None);
    }
}
