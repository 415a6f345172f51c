use crate::modules::bookings::adapters::outbound::booking_authority_in_memory::InMemoryBookingAuthority;
use crate::modules::bookings::adapters::outbound::session_store_in_memory::InMemorySessionStore;
use crate::modules::bookings::use_cases::run_booking_wizard::handler::BookingWizardHandler;
use crate::shared::infrastructure::identity::in_memory::InMemoryParticipantDirectory;
use std::sync::Arc;

pub type WizardHandler =
    BookingWizardHandler<InMemorySessionStore, InMemoryBookingAuthority, InMemoryParticipantDirectory>;

#[derive(Clone)]
pub struct AppState {
    pub wizard: Arc<WizardHandler>,
}
