use crate::modules::bookings::core::booking::BookingRequest;
use crate::modules::bookings::core::range_selection::SelectionError;

pub enum ConfirmDecision {
    Submit { request: BookingRequest },
    Rejected { reason: SelectionError },
}
