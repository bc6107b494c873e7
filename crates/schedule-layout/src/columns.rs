//! Column assignment inside one overlap group.
//!
//! Greedy interval-graph colouring: intervals are visited in layout order and
//! each takes the first column whose latest occupant it does not overlap,
//! opening a new column when every column is busy. Visiting by start time makes
//! the number of columns opened equal to the group's maximum overlap depth.

use serde::Serialize;

use crate::interval::Interval;

/// Horizontal placement of one event inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSlot {
    pub column_index: usize,
    /// Number of columns the group is split into; the same for every member.
    pub column_count: usize,
}

impl ColumnSlot {
    /// Full-width placement of an event that overlaps nothing.
    pub const SOLE: ColumnSlot = ColumnSlot {
        column_index: 0,
        column_count: 1,
    };

    /// Left edge as a percentage of the day column width.
    pub fn left_percent(&self) -> f64 {
        self.column_index as f64 * self.width_percent()
    }

    /// Width as a percentage of the day column width.
    pub fn width_percent(&self) -> f64 {
        100.0 / self.column_count as f64
    }
}

/// Maximum number of intervals in `group` active at the same instant.
///
/// Sweeps the endpoints with ends processed before starts at equal times, so
/// back-to-back intervals do not stack.
pub fn max_overlap_depth(group: &[Interval]) -> usize {
    let mut edges: Vec<(i32, i32)> = group
        .iter()
        .flat_map(|iv| [(iv.start, 1), (iv.end, -1)])
        .collect();
    edges.sort_unstable();

    let mut active = 0i32;
    let mut deepest = 0i32;
    for (_, delta) in edges {
        active += delta;
        deepest = deepest.max(active);
    }
    deepest as usize
}

/// Assign a column to every interval of one overlap group.
///
/// `group` is expected in layout order (see
/// [`layout_order`](crate::grouping::layout_order)). The returned slots are
/// parallel to `group`.
pub fn assign_columns(group: &[Interval]) -> Vec<ColumnSlot> {
    if group.len() <= 1 {
        return vec![ColumnSlot::SOLE; group.len()];
    }

    // Latest occupant of each open column.
    let mut occupants: Vec<Interval> = Vec::new();
    let mut indices = Vec::with_capacity(group.len());

    for iv in group {
        match occupants.iter().position(|occ| !occ.overlaps(iv)) {
            Some(col) => {
                occupants[col] = *iv;
                indices.push(col);
            }
            None => {
                occupants.push(*iv);
                indices.push(occupants.len() - 1);
            }
        }
    }

    // Unsorted input can make the greedy pass open more columns than the depth.
    let column_count = max_overlap_depth(group).max(occupants.len());

    indices
        .into_iter()
        .map(|column_index| ColumnSlot {
            column_index,
            column_count,
        })
        .collect()
}
