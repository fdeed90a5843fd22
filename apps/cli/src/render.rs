//! Plain-text rendering of the read models for the terminal.

use crate::dto::{
    CatalogViewDto, ComponentRowDto, MapViewDto, PartDetailDto, SequenceViewDto, SummaryDto,
};

const NONE: &str = "None";

pub fn render_map(view: &MapViewDto) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({} bp)\n", view.name, view.total_length));
    for seg in &view.segments {
        let marker = if seg.selected { '>' } else { ' ' };
        let fill = if seg.filled { '#' } else { 'o' };
        let step = seg
            .step
            .map(|s| format!("Step {} | ", s))
            .unwrap_or_default();
        out.push_str(&format!(
            "{} {} {:>6.1}°-{:>6.1}°  {}{} ({} bp){}\n",
            marker,
            fill,
            seg.start_angle.to_degrees(),
            seg.end_angle.to_degrees(),
            step,
            seg.label,
            seg.length,
            if seg.removable { "  [x]" } else { "" }
        ));
    }
    out
}

pub fn render_table(rows: &[ComponentRowDto]) -> String {
    if rows.is_empty() {
        return "No components to display. Add parts to see them here.\n".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<14} {:<26} {:>9}  {:<14} {}\n",
        "Name", "Position", "Size (bp)", "Type", "Description"
    ));
    for row in rows {
        let marker = if row.selected { '>' } else { ' ' };
        out.push_str(&format!(
            "{} {:<14} {:<26} {:>9}  {:<14} {}\n",
            marker,
            row.name,
            row.position,
            row.size,
            row.feature_type,
            row.description.as_deref().unwrap_or(NONE)
        ));
        if let Some(notes) = &row.notes {
            out.push_str(&format!("  {:<14} {}\n", "", notes));
        }
    }
    out
}

pub fn render_summary(summary: &SummaryDto) -> String {
    let mut out = String::new();
    out.push_str("Vector Summary\n");
    for item in &summary.items {
        match item.length {
            Some(len) => {
                out.push_str(&format!("  {} ({} bp)\n", item.heading, len));
            }
            None => {
                out.push_str(&format!("  {}\n", item.heading));
            }
        }
    }
    out.push_str(&format!("Total Size: {} bp\n", summary.total_length));
    out
}

/// Blocks of the selected slot are upper case, everything else lower case.
pub fn render_sequence(view: &SequenceViewDto) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Full length: {}  {}\n",
        view.full_length, view.residue
    ));
    let any_selected = view
        .lines
        .iter()
        .flat_map(|l| &l.blocks)
        .any(|b| b.selected);
    for line in &view.lines {
        let blocks: Vec<String> = line
            .blocks
            .iter()
            .map(|b| {
                if !any_selected || b.selected {
                    b.text.clone()
                } else {
                    b.text.to_lowercase()
                }
            })
            .collect();
        out.push_str(&format!("{:>8} {}\n", line.line_number, blocks.join(" ")));
    }
    out
}

pub fn render_catalog(view: &CatalogViewDto) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", view.title));
    for entry in &view.entries {
        out.push_str(&format!(
            "  {:<12} {:>6} bp  {}\n",
            entry.name, entry.length, entry.description
        ));
        out.push_str(&format!("  {:<12} {:>9}  {}\n", "", "", entry.notes));
    }
    out.push_str(&format!("Showing {} entries\n", view.entries.len()));
    out
}

pub fn render_detail(detail: &PartDetailDto) -> String {
    let mut out = String::new();
    out.push_str(&format!("Name: {}\n", detail.name));
    out.push_str(&format!(
        "Description: {}\n",
        detail.description.as_deref().unwrap_or(NONE)
    ));
    if let Some(notes) = &detail.notes {
        out.push_str(&format!("Application Notes: {}\n", notes));
    }
    out.push_str(&format!("Type: {}\n", detail.category));
    if detail.fixed {
        out.push_str("This is a backbone element and cannot be modified.\n");
    }
    if !detail.sequence.is_empty() {
        out.push_str(&format!("\nSequence (Length: {} bp)\n", detail.length));
        for line in &detail.sequence {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("\nOpposite strand\n");
        for line in &detail.opposite_strand {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
