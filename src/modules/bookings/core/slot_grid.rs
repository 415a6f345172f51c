use crate::modules::bookings::core::time_point::TimePoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SlotGridError {
    #[error("invalid slot grid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Produces the grid for a given date. Must be deterministic for a date so a session
/// can cache the result once the date is chosen.
pub type SlotGridGenerator = Arc<dyn Fn(NaiveDate) -> SlotGrid + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGridConfig {
    pub day_start: TimePoint,
    pub day_end: TimePoint,
    pub interval_minutes: i64,
}

impl Default for SlotGridConfig {
    fn default() -> Self {
        Self {
            day_start: TimePoint::from_hm(7, 0).expect("07:00 is a valid time of day"),
            day_end: TimePoint::from_hm(22, 30).expect("22:30 is a valid time of day"),
            interval_minutes: 30,
        }
    }
}

impl SlotGridConfig {
    pub fn generate(&self) -> Result<SlotGrid, SlotGridError> {
        generate(self.day_start, self.day_end, self.interval_minutes)
    }

    /// Validates the configuration once and hands out the same grid for every date.
    pub fn generator(&self) -> Result<SlotGridGenerator, SlotGridError> {
        let grid = self.generate()?;
        Ok(Arc::new(move |_date: NaiveDate| grid.clone()))
    }
}

/// Ordered, evenly spaced candidate time points of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotGrid {
    points: Vec<TimePoint>,
}

impl SlotGrid {
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    pub fn contains(&self, slot: TimePoint) -> bool {
        self.position(slot).is_some()
    }

    pub fn position(&self, slot: TimePoint) -> Option<usize> {
        self.points.binary_search(&slot).ok()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Every `day_start + k * interval` up to and including `day_end`.
pub fn generate(
    day_start: TimePoint,
    day_end: TimePoint,
    interval_minutes: i64,
) -> Result<SlotGrid, SlotGridError> {
    if interval_minutes <= 0 {
        return Err(SlotGridError::InvalidConfiguration(format!(
            "interval must be a positive number of minutes, got {interval_minutes}"
        )));
    }
    if day_end < day_start {
        return Err(SlotGridError::InvalidConfiguration(format!(
            "day end {day_end} is before day start {day_start}"
        )));
    }

    let mut points = Vec::new();
    let mut current = Some(day_start);
    while let Some(point) = current.filter(|p| *p <= day_end) {
        points.push(point);
        current = point.checked_add_minutes(interval_minutes);
    }

    Ok(SlotGrid { points })
}
