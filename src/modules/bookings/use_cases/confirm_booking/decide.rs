use crate::modules::bookings::adapters::outbound::booking_authority::{
    AuthorityError, CreateBookingResponse,
};
use crate::modules::bookings::core::booking::{BookingOutcome, BookingRequest};
use crate::modules::bookings::core::range_selection::RangeSelection;
use crate::modules::bookings::use_cases::confirm_booking::decision::ConfirmDecision;
use crate::shared::core::primitives::ParticipantId;

pub fn decide_confirm(participant_id: &ParticipantId, selection: &RangeSelection) -> ConfirmDecision {
    match BookingRequest::from_selection(participant_id.clone(), selection) {
        Ok(request) => ConfirmDecision::Submit { request },
        Err(reason) => ConfirmDecision::Rejected { reason },
    }
}

/// Maps the authority's answer (or the failure to get one) onto the outcome shown to the
/// participant. Neither a business refusal nor a failed call is treated as a fault.
pub fn settle_response(
    request: &BookingRequest,
    response: Result<CreateBookingResponse, AuthorityError>,
) -> BookingOutcome {
    match response {
        Ok(CreateBookingResponse { ok: true, .. }) => BookingOutcome::Confirmed {
            date: request.date,
            start: request.start,
            end: request.end,
        },
        Ok(CreateBookingResponse { error, .. }) => BookingOutcome::Rejected {
            error: error.unwrap_or_else(|| "booking refused".to_string()),
        },
        Err(error) => BookingOutcome::Rejected {
            error: error.to_string(),
        },
    }
}
