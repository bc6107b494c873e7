//! # schedule-layout
//!
//! Deterministic layout of a day's time-ranged events onto a schedule grid.
//!
//! Given events with `HH:MM` start and end times, the engine decides which
//! events share a horizontal band, splits each band into columns so that no
//! two overlapping events collide, and projects every event (plus its
//! preparation and travel lead time) onto vertical pixel coordinates for a
//! 24-hour grid or a label-row grid with period captions.
//!
//! ## Modules
//!
//! - [`interval`]: `HH:MM` pairs → minute intervals with midnight correction
//! - [`grouping`]: Partition intervals into transitive overlap groups
//! - [`columns`]: Greedy column assignment within a group
//! - [`projection`]: Clock times and durations → pixel offsets and heights
//! - [`config`]: Display configuration and the visual-row grid
//! - [`layout`]: The full per-day pipeline producing renderable blocks
//! - [`event`]: Input event records
//! - [`error`]: Error types

pub mod columns;
pub mod config;
pub mod error;
pub mod event;
pub mod grouping;
pub mod interval;
pub mod layout;
pub mod projection;

pub use columns::{assign_columns, ColumnSlot};
pub use config::{fit_pixels_per_hour, ScheduleConfig, VisualRow};
pub use error::{LayoutError, Rejection};
pub use event::Event;
pub use grouping::group_by_overlap;
pub use interval::Interval;
pub use layout::{layout_day, resolve_columns, BlockKind, DayLayout, PlacedBlock};
pub use projection::{duration_to_height, time_to_position};
