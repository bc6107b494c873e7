//! Schedule display configuration and the visual-row grid it describes.
//!
//! Two display modes exist. In 24-hour mode every clock hour in the window is
//! one numeric row. In label-row mode the grid runs from the start hour down to
//! a closing midnight row, and designated label hours show a period caption
//! (Morning, Afternoon, Evening) instead of a number.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::interval::{Interval, MINUTES_PER_HOUR};

/// Lower bound of the reference pixels-per-hour fitting policy.
pub const MIN_PIXELS_PER_HOUR: f64 = 40.0;
/// Upper bound of the reference pixels-per-hour fitting policy.
pub const MAX_PIXELS_PER_HOUR: f64 = 120.0;

/// Caption shown in place of a label hour's number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Period {
    pub fn caption(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
            Period::Evening => "Evening",
            Period::Night => "Night",
        }
    }
}

/// An hour whose numeric row is replaced by a caption row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelHour {
    pub hour: u32,
    pub period: Period,
}

/// 08:00 Morning, 12:00 Afternoon, 18:00 Evening.
pub fn default_label_hours() -> Vec<LabelHour> {
    vec![
        LabelHour {
            hour: 8,
            period: Period::Morning,
        },
        LabelHour {
            hour: 12,
            period: Period::Afternoon,
        },
        LabelHour {
            hour: 18,
            period: Period::Evening,
        },
    ]
}

/// One slot of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VisualRow {
    /// A numeric hour row. The closing midnight row is reported as hour 0.
    Hour { hour: u32 },
    /// A period caption occupying a label hour's slot.
    Caption { hour: u32, period: Period },
}

/// Read-only display settings supplied by the settings layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleConfig {
    #[serde(rename = "scheduleStartHour")]
    pub start_hour: u32,
    /// Exclusive; 24 means midnight of the next day.
    #[serde(rename = "scheduleEndHour")]
    pub end_hour: u32,
    #[serde(rename = "use24HourMode")]
    pub use_24_hour_mode: bool,
    pub pixels_per_hour: f64,
    /// Only consulted in label-row mode.
    pub label_hours: Vec<LabelHour>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_hour: 7,
            end_hour: 24,
            use_24_hour_mode: false,
            pixels_per_hour: 60.0,
            label_hours: default_label_hours(),
        }
    }
}

impl ScheduleConfig {
    /// Build a validated configuration with the default label hours.
    ///
    /// # Errors
    /// See [`ScheduleConfig::validate`].
    pub fn new(
        start_hour: u32,
        end_hour: u32,
        use_24_hour_mode: bool,
        pixels_per_hour: f64,
    ) -> Result<Self> {
        let config = Self {
            start_hour,
            end_hour,
            use_24_hour_mode,
            pixels_per_hour,
            label_hours: default_label_hours(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the label hours, re-validating the result.
    pub fn with_label_hours(mut self, label_hours: Vec<LabelHour>) -> Result<Self> {
        self.label_hours = label_hours;
        self.validate()?;
        Ok(self)
    }

    /// Check the invariants every layout call relies on.
    ///
    /// # Errors
    /// - [`LayoutError::InvalidWindow`] unless `start_hour < end_hour <= 24`.
    /// - [`LayoutError::InvalidPixelsPerHour`] unless finite and positive.
    /// - [`LayoutError::InvalidLabelHour`] for a label hour past 23 or one
    ///   listed twice. Label hours outside the window are simply not shown.
    pub fn validate(&self) -> Result<()> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(LayoutError::InvalidWindow {
                start: self.start_hour,
                end: self.end_hour,
            });
        }

        if !self.pixels_per_hour.is_finite() || self.pixels_per_hour <= 0.0 {
            return Err(LayoutError::InvalidPixelsPerHour(self.pixels_per_hour));
        }

        for (i, label) in self.label_hours.iter().enumerate() {
            if label.hour >= 24 {
                return Err(LayoutError::InvalidLabelHour {
                    hour: label.hour,
                    reason: "not a clock hour".to_string(),
                });
            }
            if self.label_hours[..i].iter().any(|l| l.hour == label.hour) {
                return Err(LayoutError::InvalidLabelHour {
                    hour: label.hour,
                    reason: "listed more than once".to_string(),
                });
            }
        }

        Ok(())
    }

    /// The visible window in minutes, `[start_hour * 60, end_hour * 60)`.
    pub fn window(&self) -> Interval {
        Interval::new(
            self.start_hour as i32 * MINUTES_PER_HOUR,
            self.end_hour as i32 * MINUTES_PER_HOUR,
        )
    }

    /// The caption for `hour` when it is a label hour in label-row mode.
    pub fn label_for(&self, hour: u32) -> Option<Period> {
        if self.use_24_hour_mode {
            return None;
        }
        self.label_hours.iter().find(|l| l.hour == hour).map(|l| l.period)
    }

    /// Enumerate the grid rows top to bottom.
    pub fn visual_rows(&self) -> Vec<VisualRow> {
        if self.use_24_hour_mode {
            return (self.start_hour..self.end_hour)
                .map(|hour| VisualRow::Hour { hour })
                .collect();
        }

        (self.start_hour..=self.end_hour)
            .map(|hour| match self.label_for(hour) {
                Some(period) => VisualRow::Caption { hour, period },
                None => VisualRow::Hour { hour: hour % 24 },
            })
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.visual_rows().len()
    }

    /// Visual row of a clock hour in label-row mode.
    ///
    /// Hour 0 and hour 24 both name midnight and resolve to the closing row
    /// when the window starts after midnight. A label hour has no numeric row
    /// of its own; its caption row sits exactly where interpolating between
    /// the numeric rows around it would land, so that row is its position.
    /// Returns `None` for an hour outside `[start_hour, end_hour]`.
    pub fn visual_row_index(&self, hour: u32) -> Option<f64> {
        let hour = if hour == 0 && self.start_hour > 0 { 24 } else { hour };
        if hour < self.start_hour || hour > self.end_hour {
            return None;
        }
        // Row `i` of the label-row grid always stands for clock hour `start_hour + i`.
        Some((hour - self.start_hour) as f64)
    }
}

/// Reference policy for sizing hour rows to the viewport: the available height
/// split evenly across `row_count` rows, clamped to
/// [`MIN_PIXELS_PER_HOUR`]..=[`MAX_PIXELS_PER_HOUR`].
///
/// The engine never calls this itself; the rendering layer decides when to.
pub fn fit_pixels_per_hour(available_height: f64, row_count: usize) -> f64 {
    if row_count == 0 || !available_height.is_finite() {
        return MIN_PIXELS_PER_HOUR;
    }
    (available_height / row_count as f64).clamp(MIN_PIXELS_PER_HOUR, MAX_PIXELS_PER_HOUR)
}
