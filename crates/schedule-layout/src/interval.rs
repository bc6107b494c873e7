//! Minute-offset intervals derived from `HH:MM` event times.
//!
//! An event whose end clock time is before its start is assumed to cross
//! midnight exactly once, so its end is moved forward by one day. Intervals are
//! half-open: back-to-back events (one ends exactly when the next starts) do
//! not overlap.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::error::Rejection;
use crate::event::Event;

pub const MINUTES_PER_HOUR: i32 = 60;
pub const MINUTES_PER_DAY: i32 = 24 * MINUTES_PER_HOUR;

/// A half-open `[start, end)` span in minutes since midnight of the event's day.
///
/// `end` may exceed [`MINUTES_PER_DAY`] for midnight-spanning events and
/// `start` may be negative for lead-time blocks reaching into the previous day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Normalize an event's clock times into an interval.
    ///
    /// # Errors
    /// [`Rejection::MalformedTime`] for a missing or unparseable time and
    /// [`Rejection::ZeroDuration`] when start and end are the same clock time.
    pub fn from_event(event: &Event) -> Result<Self, Rejection> {
        Self::from_clock(&event.start_time, &event.end_time)
    }

    /// Normalize a pair of `HH:MM` strings, applying the midnight correction.
    pub fn from_clock(start_time: &str, end_time: &str) -> Result<Self, Rejection> {
        let start = parse_clock_minutes(start_time)?;
        let end = parse_clock_minutes(end_time)?;

        if start == end {
            return Err(Rejection::ZeroDuration);
        }

        let end = if end < start { end + MINUTES_PER_DAY } else { end };
        Ok(Self { start, end })
    }

    pub fn duration_minutes(&self) -> i32 {
        self.end - self.start
    }

    /// `a.start < b.end && b.start < a.end`.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The part of this interval inside `window`, or `None` if nothing is left.
    pub fn clamp_to(&self, window: &Interval) -> Option<Interval> {
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        (start < end).then_some(Interval { start, end })
    }
}

/// Parse a 24-hour `HH:MM` clock string into minutes since midnight.
///
/// Both fields must be two digits: `9:05` and `09:5` are rejected.
pub fn parse_clock_minutes(time: &str) -> Result<i32, Rejection> {
    let malformed = || Rejection::MalformedTime(time.to_string());
    if time.len() != 5 || time.as_bytes()[2] != b':' {
        return Err(malformed());
    }
    let parsed = NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| malformed())?;
    Ok((parsed.hour() * 60 + parsed.minute()) as i32)
}
