// Shared builders for booking tests.

use crate::modules::bookings::core::booking::BookingRequest;
use crate::modules::bookings::core::range_selection::{RangeSelection, ToggleOutcome};
use crate::modules::bookings::core::slot_grid::{SlotGrid, SlotGridConfig, generate};
use crate::modules::bookings::core::time_point::TimePoint;
use crate::shared::core::primitives::ParticipantId;
use chrono::NaiveDate;

pub fn at(hour: u32, minute: u32) -> TimePoint {
    TimePoint::from_hm(hour, minute).unwrap()
}

pub fn booking_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn participant() -> ParticipantId {
    ParticipantId::new("participant-0001")
}

/// 07:00, 07:30, 08:00, 08:30
pub fn short_grid() -> SlotGrid {
    generate(at(7, 0), at(8, 30), 30).unwrap()
}

pub fn request(participant_id: &str, start: TimePoint, end: TimePoint) -> BookingRequest {
    BookingRequest {
        participant_id: ParticipantId::new(participant_id),
        date: booking_date(),
        start,
        end,
    }
}

pub struct SelectionBuilder {
    grid: SlotGrid,
    remaining_hours: f64,
    inner: RangeSelection,
}

impl Default for SelectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SelectionBuilder {
    pub fn new() -> Self {
        Self {
            grid: SlotGridConfig::default().generate().unwrap(),
            remaining_hours: 24.0,
            inner: RangeSelection::new(booking_date()),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.inner = RangeSelection::new(date);
        self
    }

    pub fn remaining_hours(mut self, hours: f64) -> Self {
        self.remaining_hours = hours;
        self
    }

    pub fn pick(mut self, slot: TimePoint) -> Self {
        let outcome = self.inner.toggle(&self.grid, slot, self.remaining_hours);
        assert_eq!(outcome, ToggleOutcome::SelectionChanged, "pick of {slot} refused");
        self
    }

    pub fn build(self) -> RangeSelection {
        self.inner
    }
}

#[cfg(test)]
mod selection_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_an_empty_selection_for_the_default_date() {
        let selection = SelectionBuilder::default().build();
        assert!(selection.is_empty());
        assert_eq!(selection.date(), booking_date());
    }

    #[rstest]
    fn setters_override_the_date_and_picks() {
        let other = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
        let selection = SelectionBuilder::new()
            .date(other)
            .remaining_hours(1.0)
            .pick(at(9, 0))
            .pick(at(10, 0))
            .build();
        assert_eq!(selection.date(), other);
        assert_eq!(selection.points(), &[at(9, 0), at(10, 0)]);
    }

    #[rstest]
    #[should_panic(expected = "pick of 10:30 refused")]
    fn it_should_fail_loudly_on_a_refused_pick() {
        SelectionBuilder::new()
            .remaining_hours(1.0)
            .pick(at(9, 0))
            .pick(at(10, 30));
    }
}
