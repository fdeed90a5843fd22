use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::composition::Composition;
use crate::LayoutError;

/// Angular span of one slot on the circular map. Angles are radians measured
/// clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub slot_id: String,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// 1-based, inclusive base-pair range of one slot on the linear sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearRange {
    pub slot_id: String,
    pub start: usize,
    pub end: usize,
}

impl LinearRange {
    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position <= self.end
    }
}

/// Where a slot's label and leader line go on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub mid_angle: f64,
    /// Label position.
    pub x: f64,
    pub y: f64,
    /// Leader line start, on the ring.
    pub x0: f64,
    pub y0: f64,
}

/// Split the full turn between slots in proportion to their length.
///
/// Every angle is derived from the integer running total, so each arc starts
/// exactly where the previous one ended and the last arc ends at exactly
/// `TAU`.
pub fn compute_arcs(composition: &Composition) -> Result<Vec<Arc>, LayoutError> {
    let total = composition.total_length();
    if total == 0 {
        return Err(LayoutError::EmptyComposition);
    }

    let angle_at = |offset: usize| (offset as f64 / total as f64) * TAU;
    let mut offset = 0usize;
    let arcs = composition
        .slots()
        .iter()
        .map(|slot| {
            let start_angle = angle_at(offset);
            offset += slot.length;
            Arc {
                slot_id: slot.id.clone(),
                start_angle,
                end_angle: angle_at(offset),
            }
        })
        .collect();
    Ok(arcs)
}

/// Consecutive base-pair ranges, starting at position 1.
pub fn compute_linear_ranges(composition: &Composition) -> Vec<LinearRange> {
    let mut start = 1usize;
    composition
        .slots()
        .iter()
        .map(|slot| {
            let range = LinearRange {
                slot_id: slot.id.clone(),
                start,
                end: start + slot.length - 1,
            };
            start += slot.length;
            range
        })
        .collect()
}

/// The range covering a 1-based base-pair position.
pub fn slot_at_position(ranges: &[LinearRange], position: usize) -> Option<&LinearRange> {
    ranges.iter().find(|r| r.contains(position))
}

/// The arc under `angle`, which may be any real number of radians.
pub fn slot_at_angle(arcs: &[Arc], angle: f64) -> Option<&Arc> {
    let mut angle = angle.rem_euclid(TAU);
    // Tiny negative inputs round up to exactly TAU. They lie just before
    // 12 o'clock, so use the largest angle still inside the last arc.
    if angle >= TAU {
        angle = f64::from_bits(TAU.to_bits() - 1);
    }
    arcs.iter().find(|a| a.contains(angle))
}

pub fn label_anchor(arc: &Arc, ring_radius: f64, label_radius: f64) -> LabelAnchor {
    let mid_angle = arc.mid_angle();
    let (sin, cos) = mid_angle.sin_cos();
    LabelAnchor {
        mid_angle,
        x: sin * label_radius,
        y: -cos * label_radius,
        x0: sin * ring_radius,
        y0: -cos * ring_radius,
    }
}
