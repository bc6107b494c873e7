//! Input event records as handed over by the storage layer.

use serde::{Deserialize, Serialize};

/// A time-ranged schedule entry for one day.
///
/// The engine only reads the clock times and lead minutes. `kind` is carried
/// through untouched so callers can style blocks by category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    /// Wall-clock start, `HH:MM`.
    #[serde(default)]
    pub start_time: String,
    /// Wall-clock end, `HH:MM`. Not after `start_time` means the event runs past midnight.
    #[serde(default)]
    pub end_time: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Minutes of preparation immediately before `start_time`.
    #[serde(default)]
    pub preparation_time: u32,
    /// Minutes of travel before the preparation block.
    #[serde(default)]
    pub travel_time: u32,
}

impl Event {
    /// Build an event with no lead time and an empty category.
    pub fn new(
        id: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            ..Self::default()
        }
    }

    /// Attach preparation and travel minutes.
    pub fn with_lead_time(mut self, preparation_time: u32, travel_time: u32) -> Self {
        self.preparation_time = preparation_time;
        self.travel_time = travel_time;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}
