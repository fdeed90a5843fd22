use vecbuilder_core::operations::reverse_complement;
use vecbuilder_core::slot_at_position;
use vecbuilder_core::synth::{format_lines, format_numbered, synthesize, synthesize_composition};

use crate::config::SequenceConfig;
use crate::dto::{PartDetailDto, SequenceBlockDto, SequenceLineDto, SequenceViewDto};
use crate::session::{Session, SessionError};

/// The full vector sequence, numbered and split into blocks. Each block is
/// tagged with the slot its first base belongs to.
pub fn sequence_view(session: &Session, config: &SequenceConfig) -> SequenceViewDto {
    let composition = session.composition();
    let ranges = session.ranges();
    let total = composition.total_length();

    let residue = match session
        .selection()
        .selected()
        .and_then(|id| ranges.iter().find(|r| r.slot_id == id))
    {
        Some(range) => format!(
            "Residue: {}-{} (length: {})",
            range.start,
            range.end,
            range.len()
        ),
        None => format!("Residue: 1-{} (length: {})", total, total),
    };

    let full = synthesize_composition(composition);
    let lines = format_lines(&full, 1, config.line_layout())
        .into_iter()
        .map(|line| SequenceLineDto {
            line_number: line.line_number,
            blocks: line
                .blocks
                .into_iter()
                .map(|block| {
                    let owner = slot_at_position(&ranges, block.start)
                        .and_then(|r| composition.get(&r.slot_id));
                    SequenceBlockDto {
                        start: block.start,
                        text: block.text,
                        slot_id: owner.map(|s| s.id.clone()),
                        color: owner.map(|s| s.color.clone()),
                        selected: owner
                            .map(|s| session.selection().is_selected(&s.id))
                            .unwrap_or(false),
                    }
                })
                .collect(),
        })
        .collect();

    SequenceViewDto {
        full_length: total,
        residue,
        lines,
    }
}

/// Details for one slot. Assigned catalog parts get a sequence listing for
/// both strands.
pub fn part_detail(
    session: &Session,
    slot_id: &str,
    config: &SequenceConfig,
) -> Result<PartDetailDto, SessionError> {
    let slot = session.slot(slot_id)?;
    let catalog = session.catalog();
    let info = catalog.describe(slot);

    let (sequence, opposite_strand) = match catalog.entry_for(slot) {
        Some(entry) => {
            let forward = synthesize(&slot.id, entry.length);
            let reverse = reverse_complement(&forward);
            (
                format_numbered(&forward, config.detail_bases_per_line),
                format_numbered(&reverse, config.detail_bases_per_line),
            )
        }
        None => (Vec::new(), Vec::new()),
    };

    Ok(PartDetailDto {
        slot_id: slot.id.clone(),
        name: slot.display_name().to_string(),
        category: slot.category.plural_label().to_string(),
        fixed: slot.fixed,
        description: info.as_ref().map(|i| i.description.clone()),
        notes: info.map(|i| i.notes),
        length: slot.length,
        sequence,
        opposite_strand,
    })
}
