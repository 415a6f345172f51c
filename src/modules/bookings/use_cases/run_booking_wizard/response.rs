use crate::modules::bookings::core::booking::{BookingOutcome, DailyBooking};
use crate::modules::bookings::core::budget::DailyBudget;
use crate::modules::bookings::core::grid_view::GridView;
use crate::modules::bookings::core::range_selection::ToggleOutcome;
use crate::modules::bookings::core::wizard::StageKind;
use crate::shared::core::primitives::SessionId;
use chrono::NaiveDate;
use serde::Serialize;

/// What the time-selection screen shows: the date, the budget left on it, the day's
/// existing bookings and the tagged grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSelectionView {
    pub date: NaiveDate,
    pub budget: DailyBudget,
    pub daily_bookings: Vec<DailyBooking>,
    pub grid: GridView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardResponse {
    pub session_id: SessionId,
    pub stage: StageKind,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle: Option<ToggleOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<BookingOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_selection: Option<TimeSelectionView>,
}

pub fn prompt_for(stage: StageKind, time_selection: Option<&TimeSelectionView>) -> String {
    match (stage, time_selection) {
        (StageKind::ChoosingTime, Some(view)) => format!(
            "Please select a time slot for {}. You have {}h {}m free.",
            view.date, view.budget.whole_hours, view.budget.leftover_minutes
        ),
        (StageKind::ChoosingDate, _) | (StageKind::ChoosingTime, None) => {
            "Please select a date:".to_string()
        }
        (StageKind::Done, _) => "Your booking is confirmed.".to_string(),
        (StageKind::Terminated, _) => "Booking cancelled.".to_string(),
    }
}
