use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::bookings::use_cases::run_booking_wizard::inbound::http as wizard_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(wizard_http::start))
        .route(
            "/sessions/{session_id}",
            get(wizard_http::view).delete(wizard_http::evict),
        )
        .route("/sessions/{session_id}/events", post(wizard_http::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
