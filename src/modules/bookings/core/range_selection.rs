use crate::modules::bookings::core::availability::eligible_next;
use crate::modules::bookings::core::slot_grid::SlotGrid;
use crate::modules::bookings::core::time_point::TimePoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("both a start and an end time must be selected")]
    IncompleteSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The slot lies beyond the remaining daily budget or before the chosen start.
    OutOfBudgetOrPast,
    /// Start and end are already chosen; one of them has to be removed first.
    SelectionFull,
    NotOnGrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ToggleOutcome {
    SelectionChanged,
    Rejected { reason: RejectReason },
}

/// Start and end slot picked for one date, in the order they were picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeSelection {
    date: NaiveDate,
    points: Vec<TimePoint>,
}

impl RangeSelection {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            points: Vec::with_capacity(2),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, slot: TimePoint) -> bool {
        self.points.contains(&slot)
    }

    /// Slots that may be added next given the remaining daily budget.
    pub fn eligible_next(&self, grid: &SlotGrid, remaining_hours: f64) -> Vec<TimePoint> {
        eligible_next(grid, &self.points, remaining_hours)
            .into_iter()
            .collect()
    }

    pub fn toggle(
        &mut self,
        grid: &SlotGrid,
        slot: TimePoint,
        remaining_hours: f64,
    ) -> ToggleOutcome {
        if self.contains(slot) {
            self.points.retain(|p| *p != slot);
            return ToggleOutcome::SelectionChanged;
        }
        if !grid.contains(slot) {
            return ToggleOutcome::Rejected {
                reason: RejectReason::NotOnGrid,
            };
        }
        match self.points.len() {
            0 => {
                self.points.push(slot);
                ToggleOutcome::SelectionChanged
            }
            1 if self.eligible_next(grid, remaining_hours).contains(&slot) => {
                self.points.push(slot);
                ToggleOutcome::SelectionChanged
            }
            1 => ToggleOutcome::Rejected {
                reason: RejectReason::OutOfBudgetOrPast,
            },
            _ => ToggleOutcome::Rejected {
                reason: RejectReason::SelectionFull,
            },
        }
    }

    pub fn endpoints(&self) -> Result<(TimePoint, TimePoint), SelectionError> {
        match self.points.as_slice() {
            [start, end] => Ok((*start, *end)),
            _ => Err(SelectionError::IncompleteSelection),
        }
    }
}

#[cfg(test)]
mod range_selection_tests {
    use super::*;
    use crate::modules::bookings::core::slot_grid::generate;
    use rstest::{fixture, rstest};

    fn at(hour: u32, minute: u32) -> TimePoint {
        TimePoint::from_hm(hour, minute).unwrap()
    }

    #[fixture]
    fn grid() -> SlotGrid {
        generate(at(7, 0), at(10, 0), 30).unwrap()
    }

    #[fixture]
    fn selection() -> RangeSelection {
        RangeSelection::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[rstest]
    fn it_should_accept_any_first_slot(grid: SlotGrid, mut selection: RangeSelection) {
        let outcome = selection.toggle(&grid, at(9, 30), 0.0);
        assert_eq!(outcome, ToggleOutcome::SelectionChanged);
        assert_eq!(selection.points(), &[at(9, 30)]);
    }

    #[rstest]
    fn it_should_accept_an_end_within_the_budget(grid: SlotGrid, mut selection: RangeSelection) {
        selection.toggle(&grid, at(7, 0), 2.0);
        let outcome = selection.toggle(&grid, at(9, 0), 2.0);
        assert_eq!(outcome, ToggleOutcome::SelectionChanged);
        assert_eq!(selection.endpoints(), Ok((at(7, 0), at(9, 0))));
    }

    #[rstest]
    #[case(at(9, 30))]
    #[case(at(7, 0))]
    fn it_should_reject_an_end_beyond_the_budget_or_before_the_start(
        grid: SlotGrid,
        mut selection: RangeSelection,
        #[case] end: TimePoint,
    ) {
        selection.toggle(&grid, at(7, 30), 1.5);
        let outcome = selection.toggle(&grid, end, 1.5);
        assert_eq!(
            outcome,
            ToggleOutcome::Rejected {
                reason: RejectReason::OutOfBudgetOrPast
            }
        );
        assert_eq!(selection.points(), &[at(7, 30)]);
    }

    #[rstest]
    fn it_should_refuse_a_third_slot(grid: SlotGrid, mut selection: RangeSelection) {
        selection.toggle(&grid, at(7, 0), 3.0);
        selection.toggle(&grid, at(8, 0), 3.0);
        let outcome = selection.toggle(&grid, at(8, 30), 3.0);
        assert_eq!(
            outcome,
            ToggleOutcome::Rejected {
                reason: RejectReason::SelectionFull
            }
        );
        assert_eq!(selection.len(), 2);
    }

    #[rstest]
    fn it_should_refuse_a_slot_off_the_grid(grid: SlotGrid, mut selection: RangeSelection) {
        let outcome = selection.toggle(&grid, at(7, 10), 3.0);
        assert_eq!(
            outcome,
            ToggleOutcome::Rejected {
                reason: RejectReason::NotOnGrid
            }
        );
        assert!(selection.is_empty());
    }

    #[rstest]
    fn toggling_the_start_twice_restores_an_empty_selection(
        grid: SlotGrid,
        mut selection: RangeSelection,
    ) {
        let before = selection.clone();
        selection.toggle(&grid, at(8, 0), 1.0);
        selection.toggle(&grid, at(8, 0), 1.0);
        assert_eq!(selection, before);
    }

    #[rstest]
    fn toggling_the_end_twice_restores_the_single_start(
        grid: SlotGrid,
        mut selection: RangeSelection,
    ) {
        selection.toggle(&grid, at(8, 0), 1.0);
        let before = selection.clone();
        selection.toggle(&grid, at(8, 30), 1.0);
        selection.toggle(&grid, at(8, 30), 1.0);
        assert_eq!(selection, before);
    }

    #[rstest]
    fn removing_the_start_keeps_the_end_as_the_new_anchor(
        grid: SlotGrid,
        mut selection: RangeSelection,
    ) {
        selection.toggle(&grid, at(7, 0), 2.0);
        selection.toggle(&grid, at(8, 0), 2.0);
        selection.toggle(&grid, at(7, 0), 2.0);
        assert_eq!(selection.points(), &[at(8, 0)]);
        assert_eq!(
            selection.eligible_next(&grid, 1.0),
            vec![at(8, 30), at(9, 0)]
        );
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![at(7, 0)])]
    fn it_should_refuse_endpoints_of_an_incomplete_selection(
        grid: SlotGrid,
        mut selection: RangeSelection,
        #[case] picks: Vec<TimePoint>,
    ) {
        for pick in picks {
            selection.toggle(&grid, pick, 2.0);
        }
        assert_eq!(selection.endpoints(), Err(SelectionError::IncompleteSelection));
    }
}
