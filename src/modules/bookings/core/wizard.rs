use crate::modules::bookings::core::booking::BookingOutcome;
use crate::modules::bookings::core::range_selection::{RangeSelection, ToggleOutcome};
use crate::modules::bookings::core::slot_grid::SlotGrid;
use crate::modules::bookings::core::time_point::TimePoint;
use crate::shared::core::primitives::{ParticipantId, SessionId};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("'{action}' is not accepted while {stage}")]
    UnexpectedEvent { stage: StageKind, action: &'static str },

    #[error("the booking session has already finished")]
    SessionFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    ChoosingDate,
    ChoosingTime,
    Done,
    Terminated,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StageKind::ChoosingDate => "choosing a date",
            StageKind::ChoosingTime => "choosing a time",
            StageKind::Done => "done",
            StageKind::Terminated => "terminated",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStage {
    ChoosingDate,
    /// The grid is generated once when the date is picked and reused for every toggle.
    ChoosingTime {
        grid: SlotGrid,
        selection: RangeSelection,
    },
    Done,
    Terminated,
}

impl WizardStage {
    pub fn kind(&self) -> StageKind {
        match self {
            WizardStage::ChoosingDate => StageKind::ChoosingDate,
            WizardStage::ChoosingTime { .. } => StageKind::ChoosingTime,
            WizardStage::Done => StageKind::Done,
            WizardStage::Terminated => StageKind::Terminated,
        }
    }
}

/// One participant's walk through date selection, time selection and confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    id: SessionId,
    participant_id: ParticipantId,
    stage: WizardStage,
}

impl WizardSession {
    pub fn new(participant_id: ParticipantId) -> Self {
        Self {
            id: SessionId::generate(),
            participant_id,
            stage: WizardStage::ChoosingDate,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn participant_id(&self) -> &ParticipantId {
        &self.participant_id
    }

    pub fn stage(&self) -> &WizardStage {
        &self.stage
    }

    pub fn stage_kind(&self) -> StageKind {
        self.stage.kind()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.stage, WizardStage::Done | WizardStage::Terminated)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.selection().map(RangeSelection::date)
    }

    pub fn grid(&self) -> Option<&SlotGrid> {
        match &self.stage {
            WizardStage::ChoosingTime { grid, .. } => Some(grid),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&RangeSelection> {
        match &self.stage {
            WizardStage::ChoosingTime { selection, .. } => Some(selection),
            _ => None,
        }
    }

    /// The selection an `action` of the time-selection stage works on.
    pub fn selection_for(&self, action: &'static str) -> Result<&RangeSelection, WizardError> {
        match &self.stage {
            WizardStage::ChoosingTime { selection, .. } => Ok(selection),
            _ => Err(self.refusal(action)),
        }
    }

    pub fn select_date(&mut self, date: NaiveDate, grid: SlotGrid) -> Result<(), WizardError> {
        self.expect_stage(StageKind::ChoosingDate, "select date")?;
        self.stage = WizardStage::ChoosingTime {
            grid,
            selection: RangeSelection::new(date),
        };
        Ok(())
    }

    pub fn toggle_slot(
        &mut self,
        slot: TimePoint,
        remaining_hours: f64,
    ) -> Result<ToggleOutcome, WizardError> {
        match &mut self.stage {
            WizardStage::ChoosingTime { grid, selection } => {
                Ok(selection.toggle(grid, slot, remaining_hours))
            }
            _ => Err(self.refusal("toggle slot")),
        }
    }

    /// Leaves time selection for date selection, dropping the selection.
    pub fn back(&mut self) -> Result<(), WizardError> {
        self.expect_stage(StageKind::ChoosingTime, "back")?;
        self.stage = WizardStage::ChoosingDate;
        Ok(())
    }

    pub fn quit(&mut self) -> Result<(), WizardError> {
        if self.is_finished() {
            return Err(WizardError::SessionFinished);
        }
        self.stage = WizardStage::Terminated;
        Ok(())
    }

    /// Applies the coordinator's verdict: done on success, back to date selection on
    /// rejection, unchanged when the selection was incomplete.
    pub fn settle(&mut self, outcome: &BookingOutcome) -> Result<(), WizardError> {
        self.expect_stage(StageKind::ChoosingTime, "confirm")?;
        match outcome {
            BookingOutcome::Confirmed { .. } => self.stage = WizardStage::Done,
            BookingOutcome::Rejected { .. } => self.stage = WizardStage::ChoosingDate,
            BookingOutcome::IncompleteSelection => {}
        }
        Ok(())
    }

    fn expect_stage(&self, expected: StageKind, action: &'static str) -> Result<(), WizardError> {
        if self.stage_kind() != expected {
            return Err(self.refusal(action));
        }
        Ok(())
    }

    /// Why `action` is refused in the current stage.
    fn refusal(&self, action: &'static str) -> WizardError {
        if self.is_finished() {
            return WizardError::SessionFinished;
        }
        WizardError::UnexpectedEvent {
            stage: self.stage_kind(),
            action,
        }
    }
}
