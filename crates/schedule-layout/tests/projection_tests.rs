//! Tests for time → pixel projection in both display modes.

use schedule_layout::projection::{
    clock_duration_to_height, lead_intervals, minutes_to_position, minutes_to_pixels,
};
use schedule_layout::{duration_to_height, time_to_position, Interval, ScheduleConfig};

fn linear(start_hour: u32, end_hour: u32) -> ScheduleConfig {
    ScheduleConfig::new(start_hour, end_hour, true, 60.0).unwrap()
}

fn labelled(start_hour: u32) -> ScheduleConfig {
    ScheduleConfig::new(start_hour, 24, false, 60.0).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// 24-hour mode
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn linear_mode_offsets_from_start_hour() {
    let config = linear(7, 24);
    assert_eq!(time_to_position("07:00", &config), Some(0.0));
    assert_eq!(time_to_position("09:30", &config), Some(150.0));
    assert_eq!(time_to_position("23:45", &config), Some(1005.0));
}

#[test]
fn linear_mode_scales_with_pixels_per_hour() {
    let config = ScheduleConfig::new(0, 24, true, 48.0).unwrap();
    assert_eq!(time_to_position("10:15", &config), Some(10.0 * 48.0 + 12.0));
}

#[test]
fn time_outside_window_is_invalid() {
    let config = linear(7, 22);
    assert_eq!(time_to_position("06:59", &config), None);
    assert_eq!(time_to_position("22:00", &config), None);
}

#[test]
fn malformed_time_is_invalid() {
    let config = linear(0, 24);
    assert_eq!(time_to_position("25:99", &config), None);
    assert_eq!(time_to_position("noon", &config), None);
    assert_eq!(time_to_position("", &config), None);
}

#[test]
fn window_end_projects_to_grid_bottom() {
    let config = linear(7, 24);
    assert_eq!(minutes_to_position(1440, &config), Some(17.0 * 60.0));
    assert_eq!(minutes_to_position(1441, &config), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Label-row mode
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn label_hour_lies_between_its_neighbours() {
    let config = labelled(7);
    let seven = time_to_position("07:00", &config).unwrap();
    let eight = time_to_position("08:00", &config).unwrap();
    let nine = time_to_position("09:00", &config).unwrap();

    assert!(seven < eight && eight < nine, "{} < {} < {}", seven, eight, nine);
}

#[test]
fn label_mode_adds_minutes_within_the_row() {
    let config = labelled(7);
    let ten = time_to_position("10:00", &config).unwrap();
    let ten_thirty = time_to_position("10:30", &config).unwrap();
    assert_eq!(ten_thirty - ten, 30.0);
}

#[test]
fn label_mode_is_monotonic_across_the_day() {
    let config = labelled(6);
    let mut previous = f64::NEG_INFINITY;
    for minutes in (360..1440).step_by(5) {
        let pos = minutes_to_position(minutes, &config).unwrap();
        assert!(pos > previous, "position must increase at minute {}", minutes);
        previous = pos;
    }
}

#[test]
fn midnight_as_hour_zero_and_hour_24_share_the_last_row() {
    let config = labelled(7);
    let last = config.row_count() as f64 - 1.0;
    assert_eq!(config.visual_row_index(0), Some(last));
    assert_eq!(config.visual_row_index(24), Some(last));
}

#[test]
fn label_mode_window_end_is_closing_row() {
    let config = labelled(7);
    let last = config.row_count() as f64 - 1.0;
    assert_eq!(minutes_to_position(1440, &config), Some(last * 60.0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Heights
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn event_starting_before_window_is_cropped() {
    // 06:00-08:30 with the window starting at 07:00 -> 90 visible minutes.
    let config = linear(7, 24);
    let height = clock_duration_to_height("06:00", "08:30", &config).unwrap();
    assert_eq!(height, 90.0);
}

#[test]
fn midnight_span_is_clamped_to_window_end() {
    let config = linear(0, 24);
    let height = clock_duration_to_height("23:00", "01:00", &config).unwrap();
    assert_eq!(height, 60.0);
}

#[test]
fn event_outside_window_has_zero_height() {
    let config = linear(7, 22);
    assert_eq!(duration_to_height(&Interval::new(300, 400), &config), 0.0);
    assert_eq!(clock_duration_to_height("22:30", "23:00", &config), Some(0.0));
}

#[test]
fn malformed_clock_duration_is_none() {
    let config = linear(0, 24);
    assert_eq!(clock_duration_to_height("xx", "10:00", &config), None);
}

#[test]
fn height_scales_with_pixels_per_hour() {
    assert_eq!(minutes_to_pixels(90, 80.0), 120.0);
    let config = ScheduleConfig::new(0, 24, true, 120.0).unwrap();
    assert_eq!(duration_to_height(&Interval::new(600, 630), &config), 60.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Lead time
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn travel_is_chained_before_preparation() {
    let event = Interval::new(600, 660);
    let (travel, preparation) = lead_intervals(&event, 15, 30);

    assert_eq!(preparation, Some(Interval::new(585, 600)));
    assert_eq!(travel, Some(Interval::new(555, 585)));
}

#[test]
fn zero_lead_minutes_produce_no_spans() {
    let event = Interval::new(600, 660);
    assert_eq!(lead_intervals(&event, 0, 0), (None, None));

    let (travel, preparation) = lead_intervals(&event, 0, 20);
    assert_eq!(preparation, None);
    assert_eq!(travel, Some(Interval::new(580, 600)));
}
