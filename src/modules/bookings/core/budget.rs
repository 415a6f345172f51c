use serde::Serialize;

/// Snapshot of the hours a participant may still book on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyBudget {
    pub remaining_hours: f64,
    pub whole_hours: u32,
    pub leftover_minutes: u32,
}

impl DailyBudget {
    /// Negative or NaN figures from the authority collapse to an empty budget.
    pub fn from_hours(remaining_hours: f64) -> Self {
        let remaining_hours = if remaining_hours.is_nan() {
            0.0
        } else {
            remaining_hours.max(0.0)
        };
        let total_minutes = (remaining_hours * 60.0).round() as u32;
        Self {
            remaining_hours,
            whole_hours: total_minutes / 60,
            leftover_minutes: total_minutes % 60,
        }
    }
}
