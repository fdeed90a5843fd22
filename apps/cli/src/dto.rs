//! Flat, JSON-friendly read models for the views.

use serde::{Deserialize, Serialize};
use vecbuilder_components::CatalogEntry;
use vecbuilder_core::LabelAnchor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewDto {
    pub name: String,
    pub size: f64,
    pub ring_radius: f64,
    pub inner_radius: f64,
    pub label_radius: f64,
    pub total_length: usize,
    pub segments: Vec<MapSegmentDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSegmentDto {
    pub id: String,
    pub label: String,
    pub category: String,
    pub color: String,
    pub length: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub step: Option<usize>,
    /// Drawn solid; empty slots are drawn as an outline.
    pub filled: bool,
    /// Shows a remove button next to the label.
    pub removable: bool,
    pub selected: bool,
    pub anchor: AnchorDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorDto {
    pub mid_angle: f64,
    pub x: f64,
    pub y: f64,
    pub x0: f64,
    pub y0: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRowDto {
    pub id: String,
    pub name: String,
    pub start: usize,
    pub end: usize,
    pub complement: bool,
    /// "51-639" or "complement (51-639)".
    pub position: String,
    pub size: usize,
    pub feature_type: String,
    pub color: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub assigned: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryItemDto {
    pub id: String,
    /// "Step 2: GFP", or just the label for backbone elements.
    pub heading: String,
    pub color: String,
    /// Only reported once a part has been assigned.
    pub length: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDto {
    pub items: Vec<SummaryItemDto>,
    pub total_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceBlockDto {
    pub start: usize,
    pub text: String,
    pub slot_id: Option<String>,
    pub color: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceLineDto {
    pub line_number: usize,
    pub blocks: Vec<SequenceBlockDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceViewDto {
    pub full_length: usize,
    /// "Residue: 51-639 (length: 589)".
    pub residue: String,
    pub lines: Vec<SequenceLineDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryDto {
    pub id: String,
    pub name: String,
    pub length: usize,
    pub description: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogViewDto {
    pub title: String,
    pub entries: Vec<CatalogEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartDetailDto {
    pub slot_id: String,
    pub name: String,
    pub category: String,
    pub fixed: bool,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub length: usize,
    /// Numbered sequence listing; empty when no catalog part is assigned.
    pub sequence: Vec<String>,
    pub opposite_strand: Vec<String>,
}

impl From<&LabelAnchor> for AnchorDto {
    fn from(a: &LabelAnchor) -> Self {
        AnchorDto {
            mid_angle: a.mid_angle,
            x: a.x,
            y: a.y,
            x0: a.x0,
            y0: a.y0,
        }
    }
}

impl From<&CatalogEntry> for CatalogEntryDto {
    fn from(e: &CatalogEntry) -> Self {
        CatalogEntryDto {
            id: e.id.clone(),
            name: e.name.clone(),
            length: e.length,
            description: e.description.clone(),
            notes: e.notes.clone(),
        }
    }
}
