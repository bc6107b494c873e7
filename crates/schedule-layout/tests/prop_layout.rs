//! Property-based tests for overlap resolution and layout using proptest.
//!
//! These verify the invariants that must hold for *any* day of events, not
//! just the hand-picked cases in `grouping_tests.rs` and `layout_tests.rs`.

use proptest::prelude::*;
use schedule_layout::columns::max_overlap_depth;
use schedule_layout::projection::minutes_to_position;
use schedule_layout::{
    group_by_overlap, layout_day, resolve_columns, Event, Interval, ScheduleConfig,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A same-day interval of 5 minutes to 4 hours.
fn arb_interval() -> impl Strategy<Value = Interval> {
    (0i32..1380, 5i32..=240).prop_map(|(start, len)| Interval::new(start, (start + len).min(1440)))
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(arb_interval(), 0..30)
}

fn arb_clock() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((arb_clock(), arb_clock(), 0u32..60, 0u32..60), 0..20).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (start, end, prep, travel))| {
                Event::new(format!("e{}", i), start, end).with_lead_time(prep, travel)
            })
            .collect()
    })
}

fn arb_config() -> impl Strategy<Value = ScheduleConfig> {
    (0u32..12, 13u32..=24, any::<bool>(), 40.0f64..120.0).prop_map(|(start, end, linear, pph)| {
        ScheduleConfig::new(start, end, linear, pph).unwrap()
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

/// Index of the group each interval landed in.
fn group_of(groups: &[Vec<usize>], len: usize) -> Vec<usize> {
    let mut owner = vec![usize::MAX; len];
    for (g, members) in groups.iter().enumerate() {
        for &m in members {
            owner[m] = g;
        }
    }
    owner
}

// ---------------------------------------------------------------------------
// Property 1: every interval lands in exactly one group
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn groups_partition_the_input(intervals in arb_intervals()) {
        let groups = group_by_overlap(&intervals);
        let mut seen: Vec<usize> = groups.iter().flatten().copied().collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..intervals.len()).collect::<Vec<_>>());
    }
}

// ---------------------------------------------------------------------------
// Property 2: groups are connected components (overlap never crosses groups)
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn overlapping_intervals_share_a_group(intervals in arb_intervals()) {
        let groups = group_by_overlap(&intervals);
        let owner = group_of(&groups, intervals.len());

        for i in 0..intervals.len() {
            for j in (i + 1)..intervals.len() {
                if intervals[i].overlaps(&intervals[j]) {
                    prop_assert_eq!(
                        owner[i],
                        owner[j],
                        "{:?} and {:?} overlap",
                        intervals[i],
                        intervals[j]
                    );
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: overlapping events never share a column
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn overlapping_intervals_get_distinct_columns(intervals in arb_intervals()) {
        let slots = resolve_columns(&intervals);

        for i in 0..intervals.len() {
            prop_assert!(slots[i].column_index < slots[i].column_count);
            for j in (i + 1)..intervals.len() {
                if intervals[i].overlaps(&intervals[j]) {
                    prop_assert_ne!(slots[i].column_index, slots[j].column_index);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: column count is uniform per group and equals its overlap depth
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn column_count_matches_group_depth(intervals in arb_intervals()) {
        let slots = resolve_columns(&intervals);

        for group in group_by_overlap(&intervals) {
            let members: Vec<Interval> = group.iter().map(|&i| intervals[i]).collect();
            let depth = max_overlap_depth(&members);
            for &m in &group {
                prop_assert_eq!(slots[m].column_count, depth);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: layout is a pure function of its inputs
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn layout_is_deterministic(events in arb_events(), config in arb_config()) {
        prop_assert_eq!(layout_day(&events, &config), layout_day(&events, &config));
    }
}

// ---------------------------------------------------------------------------
// Property 6: every block lies inside the grid and every event is accounted for
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn blocks_stay_inside_the_grid(events in arb_events(), config in arb_config()) {
        let layout = layout_day(&events, &config);
        let window = config.window();
        let grid_height = minutes_to_position(window.end, &config).unwrap();

        for block in &layout.blocks {
            prop_assert!(block.height > 0.0);
            prop_assert!(block.top >= 0.0);
            prop_assert!(block.top + block.height <= grid_height + 1e-9);
            prop_assert!(block.left >= 0.0 && block.left + block.width <= 100.0 + 1e-9);
        }

        for event in &events {
            let placed = layout.event_block(&event.id).is_some();
            let rejected = layout.rejected.iter().any(|r| r.event_id == event.id);
            prop_assert!(placed != rejected, "{} must be placed or rejected, not both", event.id);
        }
    }
}
