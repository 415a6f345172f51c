use crate::modules::bookings::core::availability::eligible_next;
use crate::modules::bookings::core::slot_grid::SlotGrid;
use crate::modules::bookings::core::time_point::TimePoint;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotTag {
    Selected,
    Eligible,
    Ineligible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub time: TimePoint,
    pub tag: SlotTag,
}

/// Everything a grid UI needs to draw the time selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub slots: Vec<SlotView>,
    pub selected: Vec<TimePoint>,
    pub eligible: Vec<TimePoint>,
}

impl GridView {
    pub fn render(grid: &SlotGrid, selected: &[TimePoint], remaining_hours: f64) -> Self {
        let eligible = eligible_next(grid, selected, remaining_hours);
        let slots = grid
            .points()
            .iter()
            .map(|&time| {
                let tag = if selected.contains(&time) {
                    SlotTag::Selected
                } else if eligible.contains(&time) {
                    SlotTag::Eligible
                } else {
                    SlotTag::Ineligible
                };
                SlotView { time, tag }
            })
            .collect();
        Self {
            slots,
            selected: selected.to_vec(),
            eligible: eligible.into_iter().collect(),
        }
    }

    pub fn tag_of(&self, time: TimePoint) -> Option<SlotTag> {
        self.slots.iter().find(|s| s.time == time).map(|s| s.tag)
    }
}
