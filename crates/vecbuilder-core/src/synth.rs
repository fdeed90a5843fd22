//! Placeholder sequence text for display.
//!
//! Slots carry no real sequence, so the sequence views fill each one with
//! letters from a small linear congruential generator seeded by the slot id.
//! The same (id, length) pair always produces the same letters.

use serde::{Deserialize, Serialize};

use crate::composition::Composition;

const BASES: [char; 4] = ['A', 'T', 'G', 'C'];
const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// Deterministic pseudo-sequence of `length` bases for a slot.
pub fn synthesize(slot_id: &str, length: usize) -> String {
    let mut seed: u64 = slot_id.encode_utf16().map(u64::from).sum();
    (0..length)
        .map(|_| {
            seed = (seed * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
            // floor(seed / modulus * 4), kept in integers
            BASES[(seed * BASES.len() as u64 / LCG_MODULUS) as usize]
        })
        .collect()
}

/// Every slot's sequence, concatenated in map order.
pub fn synthesize_composition(composition: &Composition) -> String {
    composition
        .slots()
        .iter()
        .map(|slot| synthesize(&slot.id, slot.length))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineLayout {
    pub bases_per_line: usize,
    pub bases_per_block: usize,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            bases_per_line: 50,
            bases_per_block: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceBlock {
    /// 1-based position of the block's first base.
    pub start: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceLine {
    /// 1-based position of the line's first base.
    pub line_number: usize,
    pub blocks: Vec<SequenceBlock>,
}

/// Wrap `sequence` into numbered lines of fixed-width blocks. The first base
/// is numbered `start_pos`.
pub fn format_lines(sequence: &str, start_pos: usize, layout: LineLayout) -> Vec<SequenceLine> {
    let per_line = layout.bases_per_line.max(1);
    let per_block = layout.bases_per_block.clamp(1, per_line);
    let bases: Vec<char> = sequence.chars().collect();

    bases
        .chunks(per_line)
        .enumerate()
        .map(|(i, line)| {
            let line_number = start_pos + i * per_line;
            let blocks = line
                .chunks(per_block)
                .enumerate()
                .map(|(j, block)| SequenceBlock {
                    start: line_number + j * per_block,
                    text: block.iter().collect(),
                })
                .collect();
            SequenceLine {
                line_number,
                blocks,
            }
        })
        .collect()
}

/// Plain-text listing: right-aligned line number, then space-separated blocks
/// of ten bases.
pub fn format_numbered(sequence: &str, bases_per_line: usize) -> Vec<String> {
    let layout = LineLayout {
        bases_per_line,
        bases_per_block: 10,
    };
    format_lines(sequence, 1, layout)
        .into_iter()
        .map(|line| {
            let blocks: Vec<&str> = line.blocks.iter().map(|b| b.text.as_str()).collect();
            format!("{:>4} {}", line.line_number, blocks.join(" "))
        })
        .collect()
}
