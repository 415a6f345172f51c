use crate::modules::bookings::core::slot_grid::SlotGrid;
use crate::modules::bookings::core::time_point::TimePoint;
use std::collections::BTreeSet;

/// Slack for budgets that arrive as fractional hours, such as 70 minutes as 1.1666...
const BUDGET_TOLERANCE_MINUTES: f64 = 1e-6;

/// Whether `minutes` of booked time fit in `remaining_hours`. NaN fits nothing.
pub fn fits_budget(minutes: i64, remaining_hours: f64) -> bool {
    minutes as f64 <= remaining_hours * 60.0 + BUDGET_TOLERANCE_MINUTES
}

/// Slots that may be added to a selection holding `chosen`.
///
/// Nothing chosen: the whole grid. One point chosen: the contiguous run of slots after it
/// whose elapsed time since the start fits in `remaining_hours` (a slot exactly on the budget
/// is kept, the first one beyond it ends the scan). Two or more chosen: nothing.
pub fn eligible_next(
    grid: &SlotGrid,
    chosen: &[TimePoint],
    remaining_hours: f64,
) -> BTreeSet<TimePoint> {
    match chosen {
        [] => grid.points().iter().copied().collect(),
        [start] => {
            let Some(index) = grid.position(*start) else {
                return BTreeSet::new();
            };
            grid.points()[index + 1..]
                .iter()
                .copied()
                .take_while(|slot| fits_budget(slot.minutes_since(*start), remaining_hours))
                .collect()
        }
        _ => BTreeSet::new(),
    }
}
