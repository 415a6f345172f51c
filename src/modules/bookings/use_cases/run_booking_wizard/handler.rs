use crate::modules::bookings::adapters::outbound::booking_authority::{
    AuthorityError, BookingAuthority, within_deadline,
};
use crate::modules::bookings::adapters::outbound::session_store::{SessionStore, SessionStoreError};
use crate::modules::bookings::core::booking::BookingOutcome;
use crate::modules::bookings::core::budget::DailyBudget;
use crate::modules::bookings::core::grid_view::GridView;
use crate::modules::bookings::core::range_selection::ToggleOutcome;
use crate::modules::bookings::core::slot_grid::SlotGridGenerator;
use crate::modules::bookings::core::wizard::{WizardError, WizardSession};
use crate::modules::bookings::use_cases::confirm_booking::coordinator::BookingCoordinator;
use crate::modules::bookings::use_cases::run_booking_wizard::command::WizardCommand;
use crate::modules::bookings::use_cases::run_booking_wizard::response::{
    TimeSelectionView, WizardResponse, prompt_for,
};
use crate::shared::core::primitives::SessionId;
use crate::shared::infrastructure::identity::{IdentityError, ParticipantDirectory};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Authority(#[from] AuthorityError),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

#[derive(Default)]
struct Effects {
    toggle: Option<ToggleOutcome>,
    outcome: Option<BookingOutcome>,
    remaining_hours: Option<f64>,
}

/// Drives booking sessions: date selection, time selection and confirmation.
///
/// A session is loaded, changed and saved back per command. The changed session is only
/// saved once the response for it could be built, so a failing authority read leaves the
/// stored session untouched. Once the authority has answered a confirmation the session is
/// saved first, and the outcome is returned even when that save fails.
pub struct BookingWizardHandler<TStore, TAuthority, TDirectory>
where
    TStore: SessionStore + 'static,
    TAuthority: BookingAuthority + 'static,
    TDirectory: ParticipantDirectory + 'static,
{
    sessions: Arc<TStore>,
    authority: Arc<TAuthority>,
    directory: Arc<TDirectory>,
    grids: SlotGridGenerator,
    coordinator: BookingCoordinator<TAuthority>,
    deadline: Option<Duration>,
}

impl<TStore, TAuthority, TDirectory> BookingWizardHandler<TStore, TAuthority, TDirectory>
where
    TStore: SessionStore + 'static,
    TAuthority: BookingAuthority + 'static,
    TDirectory: ParticipantDirectory + 'static,
{
    pub fn new(
        sessions: Arc<TStore>,
        authority: Arc<TAuthority>,
        directory: Arc<TDirectory>,
        grids: SlotGridGenerator,
        deadline: Option<Duration>,
    ) -> Self {
        Self {
            coordinator: BookingCoordinator::new(authority.clone(), deadline),
            sessions,
            authority,
            directory,
            grids,
            deadline,
        }
    }

    pub async fn start(&self, external_identity: &str) -> Result<WizardResponse, ApplicationError> {
        let participant_id = self.directory.resolve_participant(external_identity).await?;
        let session = WizardSession::new(participant_id);
        let response = self.respond(&session, Effects::default()).await?;
        self.sessions.insert(session.clone()).await?;
        tracing::info!(session_id = %session.id(), participant_id = %session.participant_id(), "booking session started");
        Ok(response)
    }

    /// Current state of a session; re-reads the budget when time is being chosen.
    pub async fn view(&self, session_id: SessionId) -> Result<WizardResponse, ApplicationError> {
        let session = self.sessions.load(session_id).await?;
        self.respond(&session, Effects::default()).await
    }

    pub async fn handle(
        &self,
        session_id: SessionId,
        command: WizardCommand,
    ) -> Result<WizardResponse, ApplicationError> {
        let mut session = self.sessions.load(session_id).await?;
        let mut effects = Effects::default();

        match command {
            WizardCommand::SelectDate { date } => {
                session.select_date(date, (self.grids)(date))?;
                tracing::info!(%session_id, %date, "date selected");
            }
            WizardCommand::ToggleSlot { slot } => {
                let date = session.selection_for("toggle slot")?.date();
                let hours = within_deadline(
                    self.deadline,
                    self.authority
                        .remaining_daily_hours(session.participant_id(), date),
                )
                .await?;
                let toggle = session.toggle_slot(slot, hours)?;
                if let ToggleOutcome::Rejected { reason } = toggle {
                    tracing::debug!(%session_id, %slot, ?reason, "slot toggle rejected");
                }
                effects.toggle = Some(toggle);
                effects.remaining_hours = Some(hours);
            }
            WizardCommand::Confirm => {
                let outcome = self
                    .coordinator
                    .confirm(session.selection_for("confirm")?, session.participant_id())
                    .await;
                session.settle(&outcome)?;
                effects.outcome = Some(outcome);
            }
            WizardCommand::Back => session.back()?,
            WizardCommand::Quit => {
                session.quit()?;
                tracing::info!(%session_id, "booking session cancelled");
            }
        }

        if let Some(outcome) = effects.outcome.as_ref().filter(|o| o.reached_authority()) {
            if let Err(error) = self.sessions.save(session.clone()).await {
                tracing::error!(%session_id, %error, ?outcome, "booking outcome not stored on the session");
            }
            return self.respond(&session, effects).await;
        }

        let response = self.respond(&session, effects).await?;
        self.sessions.save(session).await?;
        Ok(response)
    }

    /// Drops a session from the store, finished or not.
    pub async fn evict(&self, session_id: SessionId) -> Result<(), ApplicationError> {
        self.sessions
            .evict(session_id)
            .await?
            .ok_or(SessionStoreError::NotFound(session_id))?;
        tracing::debug!(%session_id, "booking session evicted");
        Ok(())
    }

    async fn respond(
        &self,
        session: &WizardSession,
        effects: Effects,
    ) -> Result<WizardResponse, ApplicationError> {
        let time_selection = match (session.grid(), session.selection()) {
            (Some(grid), Some(selection)) => {
                let hours = match effects.remaining_hours {
                    Some(hours) => hours,
                    None => {
                        within_deadline(
                            self.deadline,
                            self.authority
                                .remaining_daily_hours(session.participant_id(), selection.date()),
                        )
                        .await?
                    }
                };
                let daily_bookings = within_deadline(
                    self.deadline,
                    self.authority.daily_bookings(selection.date()),
                )
                .await
                .unwrap_or_else(|error| {
                    tracing::warn!(%error, date = %selection.date(), "daily bookings unavailable");
                    Vec::new()
                });
                Some(TimeSelectionView {
                    date: selection.date(),
                    budget: DailyBudget::from_hours(hours),
                    daily_bookings,
                    grid: GridView::render(grid, selection.points(), hours),
                })
            }
            _ => None,
        };

        Ok(WizardResponse {
            session_id: session.id(),
            stage: session.stage_kind(),
            prompt: prompt_for(session.stage_kind(), time_selection.as_ref()),
            toggle: effects.toggle,
            notice: effects.outcome.as_ref().map(BookingOutcome::notice),
            outcome: effects.outcome,
            time_selection,
        })
    }
}
