//! Map clock times and durations onto vertical pixel coordinates.
//!
//! Offsets are measured from the top of the first grid row. All functions are
//! pure; `pixels_per_hour` comes from the configuration and is never derived
//! from viewport state here.

use crate::config::ScheduleConfig;
use crate::interval::{parse_clock_minutes, Interval, MINUTES_PER_DAY, MINUTES_PER_HOUR};

/// Vertical offset of an `HH:MM` time.
///
/// Returns `None` for a malformed time or one outside
/// `[start_hour, end_hour)`.
pub fn time_to_position(time: &str, config: &ScheduleConfig) -> Option<f64> {
    let minutes = parse_clock_minutes(time).ok()?;
    let window = config.window();
    if minutes < window.start || minutes >= window.end {
        return None;
    }
    minutes_to_position(minutes, config)
}

/// Vertical offset of a minute-of-day value inside the window.
///
/// Unlike [`time_to_position`] the window end itself is accepted, so the
/// bottom edge of a block can be projected. Values past midnight (up to 1440)
/// are accepted when the window runs to 24:00.
pub fn minutes_to_position(minutes: i32, config: &ScheduleConfig) -> Option<f64> {
    let window = config.window();
    if minutes < window.start || minutes > window.end {
        return None;
    }

    let hour = minutes.div_euclid(MINUTES_PER_HOUR);
    let minute = minutes.rem_euclid(MINUTES_PER_HOUR);
    let pph = config.pixels_per_hour;
    let within_hour = minute as f64 / MINUTES_PER_HOUR as f64 * pph;

    if config.use_24_hour_mode {
        return Some((hour - config.start_hour as i32) as f64 * pph + within_hour);
    }

    let row = config.visual_row_index(hour as u32)?;
    Some(row * pph + within_hour)
}

/// Pixel height of the visible part of `interval`.
///
/// Both ends are clamped to the window; an interval entirely outside it has
/// height 0.
pub fn duration_to_height(interval: &Interval, config: &ScheduleConfig) -> f64 {
    match interval.clamp_to(&config.window()) {
        Some(visible) => minutes_to_pixels(visible.duration_minutes(), config.pixels_per_hour),
        None => 0.0,
    }
}

/// [`duration_to_height`] for a pair of `HH:MM` strings.
///
/// `None` when either time is malformed. An end not after the start is read as
/// crossing midnight; equal times have height 0.
pub fn clock_duration_to_height(
    start_time: &str,
    end_time: &str,
    config: &ScheduleConfig,
) -> Option<f64> {
    let start = parse_clock_minutes(start_time).ok()?;
    let end = parse_clock_minutes(end_time).ok()?;
    let end = if end < start { end + MINUTES_PER_DAY } else { end };
    Some(duration_to_height(&Interval::new(start, end), config))
}

pub fn minutes_to_pixels(minutes: i32, pixels_per_hour: f64) -> f64 {
    minutes as f64 * pixels_per_hour / MINUTES_PER_HOUR as f64
}

/// Travel and preparation spans preceding `event`.
///
/// Travel is chained before preparation: travel covers
/// `[start - prep - travel, start - prep)` and preparation covers
/// `[start - prep, start)`. A zero-minute lead yields `None`.
///
/// Leads are capped at one day: a longer lead reaches before midnight of the
/// event's day either way, so the visible part of every span is unchanged.
pub fn lead_intervals(
    event: &Interval,
    preparation_time: u32,
    travel_time: u32,
) -> (Option<Interval>, Option<Interval>) {
    let prep = lead_minutes(preparation_time);
    let travel = lead_minutes(travel_time);

    let preparation = (prep > 0).then(|| Interval::new(event.start - prep, event.start));
    let travel =
        (travel > 0).then(|| Interval::new(event.start - prep - travel, event.start - prep));

    (travel, preparation)
}

fn lead_minutes(minutes: u32) -> i32 {
    minutes.min(MINUTES_PER_DAY as u32) as i32
}
