use crate::modules::bookings::adapters::outbound::booking_authority::{
    BookingAuthority, within_deadline,
};
use crate::modules::bookings::core::booking::BookingOutcome;
use crate::modules::bookings::core::range_selection::RangeSelection;
use crate::modules::bookings::use_cases::confirm_booking::decide::{decide_confirm, settle_response};
use crate::modules::bookings::use_cases::confirm_booking::decision::ConfirmDecision;
use crate::shared::core::primitives::ParticipantId;
use std::sync::Arc;
use std::time::Duration;

/// Turns a finished selection into exactly one booking attempt against the authority.
pub struct BookingCoordinator<TAuthority>
where
    TAuthority: BookingAuthority + 'static,
{
    authority: Arc<TAuthority>,
    deadline: Option<Duration>,
}

impl<TAuthority> BookingCoordinator<TAuthority>
where
    TAuthority: BookingAuthority + 'static,
{
    pub fn new(authority: Arc<TAuthority>, deadline: Option<Duration>) -> Self {
        Self {
            authority,
            deadline,
        }
    }

    pub async fn confirm(
        &self,
        selection: &RangeSelection,
        participant_id: &ParticipantId,
    ) -> BookingOutcome {
        let request = match decide_confirm(participant_id, selection) {
            ConfirmDecision::Submit { request } => request,
            ConfirmDecision::Rejected { reason } => {
                tracing::debug!(%participant_id, %reason, "confirmation without both endpoints");
                return BookingOutcome::IncompleteSelection;
            }
        };

        let response =
            within_deadline(self.deadline, self.authority.create_booking(&request)).await;
        if let Err(error) = &response {
            tracing::warn!(%participant_id, %error, "booking authority call failed");
        }

        let outcome = settle_response(&request, response);
        match &outcome {
            BookingOutcome::Confirmed { date, start, end } => {
                tracing::info!(%participant_id, %date, %start, %end, "booking confirmed");
            }
            BookingOutcome::Rejected { error } => {
                tracing::info!(%participant_id, date = %request.date, %error, "booking rejected");
            }
            BookingOutcome::IncompleteSelection => {}
        }
        outcome
    }
}
