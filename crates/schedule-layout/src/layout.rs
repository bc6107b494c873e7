//! One-call layout of a day's events into renderable blocks.
//!
//! Runs the full pipeline: normalize each event to an interval, drop the ones
//! that cannot be drawn, group the rest by overlap, assign columns, then
//! project every event and its lead-time blocks onto pixel coordinates.

use serde::Serialize;

use crate::columns::{assign_columns, ColumnSlot};
use crate::config::ScheduleConfig;
use crate::error::Rejection;
use crate::event::Event;
use crate::grouping::group_by_overlap;
use crate::interval::Interval;
use crate::projection::{duration_to_height, lead_intervals, minutes_to_position};

/// What a placed block represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Event,
    Preparation,
    Travel,
}

/// A rectangle for the rendering layer. `left` and `width` are percentages of
/// the day column; `top` and `height` are pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedBlock {
    pub event_id: String,
    pub kind: BlockKind,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
    pub column_index: usize,
    pub column_count: usize,
}

/// An event left out of the layout, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedEvent {
    pub event_id: String,
    pub reason: Rejection,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DayLayout {
    pub blocks: Vec<PlacedBlock>,
    pub rejected: Vec<RejectedEvent>,
}

impl DayLayout {
    /// The main block of `event_id`, if it was placed.
    pub fn event_block(&self, event_id: &str) -> Option<&PlacedBlock> {
        self.blocks
            .iter()
            .find(|b| b.kind == BlockKind::Event && b.event_id == event_id)
    }

    /// All blocks (main and lead) belonging to `event_id`.
    pub fn blocks_for<'a>(
        &'a self,
        event_id: &'a str,
    ) -> impl Iterator<Item = &'a PlacedBlock> + 'a {
        self.blocks.iter().filter(move |b| b.event_id == event_id)
    }
}

/// Column placement for every interval, parallel to `intervals`.
///
/// Intervals are grouped by transitive overlap and each group is coloured
/// independently.
pub fn resolve_columns(intervals: &[Interval]) -> Vec<ColumnSlot> {
    let mut slots = vec![ColumnSlot::SOLE; intervals.len()];

    for group in group_by_overlap(intervals) {
        let members: Vec<Interval> = group.iter().map(|&i| intervals[i]).collect();
        for (idx, slot) in group.iter().zip(assign_columns(&members)) {
            slots[*idx] = slot;
        }
    }

    slots
}

/// Lay out one day's events.
///
/// Events that are malformed, zero-length, or entirely outside the visible
/// window are reported in [`DayLayout::rejected`] and do not affect the
/// placement of the others. Blocks come out group by group in layout order;
/// each event's travel and preparation blocks precede its main block.
///
/// `config` is assumed valid (see [`ScheduleConfig::validate`]).
#[tracing::instrument(level = "debug", skip_all, fields(events = events.len()))]
pub fn layout_day(events: &[Event], config: &ScheduleConfig) -> DayLayout {
    let window = config.window();
    let mut rejected = Vec::new();
    let mut placed: Vec<(&Event, Interval)> = Vec::with_capacity(events.len());

    for event in events {
        let verdict = Interval::from_event(event).and_then(|iv| {
            if iv.clamp_to(&window).is_some() {
                Ok(iv)
            } else {
                Err(Rejection::OutsideWindow)
            }
        });

        match verdict {
            Ok(iv) => placed.push((event, iv)),
            Err(reason) => {
                tracing::debug!(event_id = %event.id, %reason, "event excluded from layout");
                rejected.push(RejectedEvent {
                    event_id: event.id.clone(),
                    reason,
                });
            }
        }
    }

    let intervals: Vec<Interval> = placed.iter().map(|(_, iv)| *iv).collect();
    let groups = group_by_overlap(&intervals);
    tracing::debug!(placed = placed.len(), groups = groups.len(), "overlap groups resolved");

    let mut blocks = Vec::with_capacity(placed.len());
    for group in groups {
        let members: Vec<Interval> = group.iter().map(|&i| intervals[i]).collect();
        for (&idx, slot) in group.iter().zip(assign_columns(&members)) {
            let (event, interval) = placed[idx];
            push_event_blocks(&mut blocks, event, &interval, slot, config);
        }
    }

    DayLayout { blocks, rejected }
}

fn push_event_blocks(
    blocks: &mut Vec<PlacedBlock>,
    event: &Event,
    interval: &Interval,
    slot: ColumnSlot,
    config: &ScheduleConfig,
) {
    let (travel, preparation) = lead_intervals(interval, event.preparation_time, event.travel_time);
    let spans = [
        (BlockKind::Travel, travel),
        (BlockKind::Preparation, preparation),
        (BlockKind::Event, Some(*interval)),
    ];

    for (kind, span) in spans {
        let Some(span) = span else { continue };
        if let Some(block) = place(event, kind, &span, slot, config) {
            blocks.push(block);
        }
    }
}

/// Project one span, or `None` when nothing of it is visible.
fn place(
    event: &Event,
    kind: BlockKind,
    span: &Interval,
    slot: ColumnSlot,
    config: &ScheduleConfig,
) -> Option<PlacedBlock> {
    let visible = span.clamp_to(&config.window())?;
    let height = duration_to_height(&visible, config);
    if height <= 0.0 {
        return None;
    }
    let top = minutes_to_position(visible.start, config)?;

    Some(PlacedBlock {
        event_id: event.id.clone(),
        kind,
        top,
        height,
        left: slot.left_percent(),
        width: slot.width_percent(),
        column_index: slot.column_index,
        column_count: slot.column_count,
    })
}
