//! Error types for schedule-layout operations.

use serde::Serialize;
use thiserror::Error;

/// A display configuration that cannot describe a grid.
///
/// These are caller programming errors, reported once when a
/// [`ScheduleConfig`](crate::config::ScheduleConfig) is built or validated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid schedule window: start hour {start} must be before end hour {end} (max 24)")]
    InvalidWindow { start: u32, end: u32 },

    #[error("Invalid pixels per hour: {0}")]
    InvalidPixelsPerHour(f64),

    #[error("Invalid label hour {hour}: {reason}")]
    InvalidLabelHour { hour: u32, reason: String },
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Why a single event was left out of a layout.
///
/// A rejection never aborts the layout of the remaining events.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rejection {
    /// `startTime` or `endTime` is missing or not a valid `HH:MM` clock time.
    #[error("malformed time '{0}'")]
    MalformedTime(String),

    /// Start and end are the same clock time.
    #[error("zero-duration event")]
    ZeroDuration,

    /// The event does not intersect the visible window.
    #[error("event lies outside the visible window")]
    OutsideWindow,
}
