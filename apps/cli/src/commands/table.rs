use crate::dto::{ComponentRowDto, SummaryDto, SummaryItemDto};
use crate::session::Session;

/// Rows for the component table: assigned parts and backbone elements, in
/// map order. Empty slots are left out.
pub fn component_table(session: &Session) -> Vec<ComponentRowDto> {
    let catalog = session.catalog();
    session
        .composition()
        .slots()
        .iter()
        .zip(session.ranges())
        .filter(|(slot, _)| slot.is_assigned() || slot.fixed)
        .map(|(slot, range)| {
            let info = catalog.describe(slot);
            let complement = slot.strand.is_reverse();
            let span = format!("{}-{}", range.start, range.end);
            ComponentRowDto {
                id: slot.id.clone(),
                name: slot.display_name().to_string(),
                start: range.start,
                end: range.end,
                complement,
                position: if complement {
                    format!("complement ({})", span)
                } else {
                    span
                },
                size: slot.length,
                feature_type: catalog.feature_type_for(slot).to_string(),
                color: slot.color.clone(),
                description: info.as_ref().map(|i| i.description.clone()),
                notes: info.map(|i| i.notes),
                assigned: slot.is_assigned(),
                selected: session.selection().is_selected(&slot.id),
            }
        })
        .collect()
}

/// The summary sidebar: every slot with its step number, plus the total.
pub fn summary(session: &Session) -> SummaryDto {
    let composition = session.composition();
    let items = composition
        .slots()
        .iter()
        .map(|slot| SummaryItemDto {
            id: slot.id.clone(),
            heading: match slot.step {
                Some(step) => format!("Step {}: {}", step, slot.label),
                None => slot.label.clone(),
            },
            color: slot.color.clone(),
            length: slot.is_assigned().then_some(slot.length),
        })
        .collect();
    SummaryDto {
        items,
        total_length: composition.total_length(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Intent;
    use vecbuilder_components::Catalog;
    use vecbuilder_core::VectorTemplate;

    fn session() -> Session {
        let mut s = Session::new(&VectorTemplate::aav(), 1, Catalog::builtin()).unwrap();
        s.apply(Intent::AssignEntry {
            slot_id: "promoter".to_string(),
            entry: "CMV".to_string(),
        })
        .unwrap();
        s
    }

    #[test]
    fn test_component_table_rows() {
        let s = session();
        let rows = component_table(&s);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["5itr", "promoter", "3itr", "bgh", "puc", "amp"]);

        let promoter = &rows[1];
        assert_eq!(promoter.name, "CMV");
        assert_eq!(promoter.position, "51-639");
        assert_eq!(promoter.feature_type, "Promoter");
        assert_eq!(
            promoter.description.as_deref(),
            Some("Human cytomegalovirus immediate early enhancer/promoter")
        );

        let puc = rows.iter().find(|r| r.id == "puc").unwrap();
        assert!(puc.complement);
        assert!(puc.position.starts_with("complement ("));
        assert_eq!(puc.feature_type, "Rep_origin");

        let itr = &rows[0];
        assert_eq!(itr.name, "5' ITR");
        assert_eq!(itr.feature_type, "Backbone");
        assert_eq!(itr.notes.as_deref(), Some("Required for vector integration"));
    }

    #[test]
    fn test_summary() {
        let s = session();
        let summary = summary(&s);
        assert_eq!(summary.total_length, 50 + 589 + 30 + 30 + 480);
        assert_eq!(summary.items[0].heading, "5' ITR");
        assert_eq!(summary.items[1].heading, "Step 1: Promoter - CMV");
        assert_eq!(summary.items[1].length, Some(589));
        assert_eq!(summary.items[2].heading, "Step 2: Add ORF #1");
        assert_eq!(summary.items[2].length, None);
    }
}
