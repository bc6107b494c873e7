//! Partition a day's intervals into overlap groups.
//!
//! Intervals are visited by start time, longer first on ties, and each one
//! joins the first group that already holds an interval it overlaps. Visiting
//! in start order means an interval can never bridge two existing groups: any
//! two earlier intervals that both reach past its start overlap each other and
//! already share a group. The groups are therefore the connected components of
//! the overlap graph, not cliques; members of a group are only transitively
//! linked.

use std::cmp::Reverse;

use crate::interval::Interval;

/// Indices of `intervals` in layout order: start ascending, then longer first.
///
/// The sort is stable, so fully identical intervals keep their input order.
pub fn layout_order(intervals: &[Interval]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by_key(|&i| (intervals[i].start, Reverse(intervals[i].duration_minutes())));
    order
}

/// Group `intervals` by transitive overlap.
///
/// Returns groups of indices into `intervals`. Every index appears in exactly
/// one group, each group lists its members in [`layout_order`], and groups are
/// ordered by their earliest member.
pub fn group_by_overlap(intervals: &[Interval]) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for idx in layout_order(intervals) {
        let current = &intervals[idx];
        let joined = groups
            .iter_mut()
            .find(|group| group.iter().any(|&m| intervals[m].overlaps(current)));

        match joined {
            Some(group) => group.push(idx),
            None => groups.push(vec![idx]),
        }
    }

    groups
}

