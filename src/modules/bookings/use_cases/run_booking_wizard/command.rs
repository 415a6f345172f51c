use crate::modules::bookings::core::time_point::TimePoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One interaction of the participant with the booking wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardCommand {
    SelectDate { date: NaiveDate },
    ToggleSlot { slot: TimePoint },
    Confirm,
    Back,
    Quit,
}
