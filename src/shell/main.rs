use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use time_bookings::modules::bookings::adapters::outbound::booking_authority_in_memory::InMemoryBookingAuthority;
use time_bookings::modules::bookings::adapters::outbound::session_store_in_memory::InMemorySessionStore;
use time_bookings::modules::bookings::use_cases::run_booking_wizard::handler::BookingWizardHandler;
use time_bookings::shared::infrastructure::identity::in_memory::InMemoryParticipantDirectory;
use time_bookings::shell::config::AppConfig;
use time_bookings::shell::http::router;
use time_bookings::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let grids = config.grid_generator()?;

    // In-memory deps for now
    let sessions = Arc::new(InMemorySessionStore::new());
    let authority = Arc::new(InMemoryBookingAuthority::new(config.daily_hours));
    let directory = Arc::new(InMemoryParticipantDirectory::new());
    for (external_identity, participant_id) in config.participants.iter().cloned() {
        directory.register(external_identity, participant_id).await;
    }

    let wizard = Arc::new(BookingWizardHandler::new(
        sessions,
        authority,
        directory,
        grids,
        config.authority_timeout,
    ));

    let app = router(AppState { wizard });

    tracing::info!(
        addr = %config.http_addr,
        day_start = %config.grid.day_start,
        day_end = %config.grid.day_end,
        interval_minutes = config.grid.interval_minutes,
        "booking service listening"
    );
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
