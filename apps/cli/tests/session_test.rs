use pretty_assertions::assert_eq;

use vecbuilder_cli::commands::{catalog, map, sequence, table};
use vecbuilder_cli::config::EditorConfig;
use vecbuilder_cli::render;
use vecbuilder_cli::session::{Intent, MemoryClipboard, Session};
use vecbuilder_components::Catalog;
use vecbuilder_core::synth::synthesize;
use vecbuilder_core::{SlotCategory, VectorTemplate};

fn session(groups: usize) -> Session {
    Session::new(&VectorTemplate::aav(), groups, Catalog::builtin()).unwrap()
}

fn assign(s: &mut Session, slot_id: &str, entry: &str) {
    s.apply(Intent::AssignEntry {
        slot_id: slot_id.to_string(),
        entry: entry.to_string(),
    })
    .unwrap();
}

#[test]
fn test_build_single_cassette() {
    let mut s = session(1);
    assign(&mut s, "promoter", "CMV");
    assign(&mut s, "orf-1", "GFP");

    let rows = table::component_table(&s);
    let positions: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.id.as_str(), r.position.as_str()))
        .collect();
    assert_eq!(
        positions,
        vec![
            ("5itr", "1-50"),
            ("promoter", "51-639"),
            ("orf-1", "640-1359"),
            ("3itr", "1390-1439"),
            ("bgh", "1440-1519"),
            ("puc", "complement (1520-1669)"),
            ("amp", "complement (1670-1869)"),
        ]
    );

    let summary = table::summary(&s);
    assert_eq!(summary.total_length, 1869);
    assert_eq!(summary.items[1].heading, "Step 1: Promoter - CMV");
    assert_eq!(summary.items[1].length, Some(589));
    assert_eq!(summary.items[3].heading, "Step 3: Add Regulatory Element");
    assert_eq!(summary.items[3].length, None);
}

#[test]
fn test_map_follows_edits() {
    let config = EditorConfig::default();
    let mut s = session(3);
    let before = map::map_view(&s, &config.map);
    assert_eq!(before.segments.len(), 12);
    assert!(before.segments.iter().all(|seg| seg.end_angle > seg.start_angle));

    s.apply(Intent::SetOrfGroups { count: 2 }).unwrap();
    assign(&mut s, "orf-2", "mCherry");
    let after = map::map_view(&s, &config.map);
    let ids: Vec<&str> = after.segments.iter().map(|seg| seg.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "5itr", "promoter", "orf-1", "linker-1", "orf-2", "regulatory", "3itr", "bgh",
            "puc", "amp"
        ]
    );
    let orf2 = &after.segments[4];
    assert!(orf2.filled);
    assert!(orf2.removable);
    assert_eq!(orf2.step, Some(4));
}

#[test]
fn test_sequence_view_tracks_selection() {
    let config = EditorConfig::default();
    let mut s = session(1);
    assign(&mut s, "promoter", "CMV");
    s.apply(Intent::Select {
        slot_id: "promoter".to_string(),
    })
    .unwrap();

    let view = sequence::sequence_view(&s, &config.sequence);
    assert_eq!(view.full_length, 1179);
    assert_eq!(view.residue, "Residue: 51-639 (length: 589)");
    assert_eq!(view.lines[1].line_number, 51);
    assert!(view.lines[1].blocks.iter().all(|b| b.selected));
    assert!(view.lines[0].blocks.iter().all(|b| !b.selected));
}

#[test]
fn test_detail_and_copy() {
    let config = EditorConfig::default();
    let mut s = session(1);
    assign(&mut s, "orf-1", "GFP");

    let detail = sequence::part_detail(&s, "orf-1", &config.sequence).unwrap();
    assert_eq!(detail.name, "GFP");
    assert_eq!(detail.description.as_deref(), Some("Green Fluorescent Protein"));
    assert_eq!(detail.sequence.len(), 8);
    assert_eq!(detail.opposite_strand.len(), 8);

    let mut clipboard = MemoryClipboard::default();
    assert_eq!(s.copy_sequence("orf-1", &mut clipboard).unwrap(), 720);
    assert_eq!(clipboard.contents, Some(synthesize("orf-1", 720)));

    let text = render::render_detail(&detail);
    assert!(text.starts_with("Name: GFP\n"));
    assert!(text.contains("Sequence (Length: 720 bp)"));
}

#[test]
fn test_catalog_views() {
    let s = session(1);
    let view = catalog::catalog_view(&s, SlotCategory::Linker);
    assert_eq!(view.title, "Select from Linker Database");
    assert!(!view.entries.is_empty());

    let found = catalog::search_catalog(&s, "polya");
    let names: Vec<&str> = found.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["BGH PolyA", "SV40 PolyA"]);
}

#[test]
fn test_clearing_restores_placeholder() {
    let mut s = session(1);
    let before = table::summary(&s);
    assign(&mut s, "promoter", "CAG");
    s.apply(Intent::Clear {
        slot_id: "promoter".to_string(),
    })
    .unwrap();
    assert_eq!(table::summary(&s), before);
}
