use crate::modules::bookings::core::range_selection::{RangeSelection, SelectionError};
use crate::modules::bookings::core::time_point::TimePoint;
use crate::shared::core::primitives::ParticipantId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub participant_id: ParticipantId,
    pub date: NaiveDate,
    pub start: TimePoint,
    pub end: TimePoint,
}

impl BookingRequest {
    pub fn from_selection(
        participant_id: ParticipantId,
        selection: &RangeSelection,
    ) -> Result<Self, SelectionError> {
        let (start, end) = selection.endpoints()?;
        Ok(Self {
            participant_id,
            date: selection.date(),
            start,
            end,
        })
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes_since(self.start)
    }

    pub fn overlaps(&self, start: TimePoint, end: TimePoint) -> bool {
        self.start < end && start < self.end
    }
}

/// An existing reservation on a date, as reported by the booking authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBooking {
    pub start: TimePoint,
    pub end: TimePoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingOutcome {
    Confirmed {
        date: NaiveDate,
        start: TimePoint,
        end: TimePoint,
    },
    Rejected {
        error: String,
    },
    IncompleteSelection,
}

impl BookingOutcome {
    /// Whether the authority answered; an incomplete selection never reaches it.
    pub fn reached_authority(&self) -> bool {
        !matches!(self, BookingOutcome::IncompleteSelection)
    }

    pub fn notice(&self) -> String {
        match self {
            BookingOutcome::Confirmed { date, start, end } => format!(
                "You have successfully booked on {}, {start} - {end}",
                date.format("%B %d")
            ),
            BookingOutcome::Rejected { error } => format!("Error occurred: {error}"),
            BookingOutcome::IncompleteSelection => {
                "You must choose both start and end time".to_string()
            }
        }
    }
}
