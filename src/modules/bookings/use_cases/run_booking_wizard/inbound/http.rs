use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::bookings::adapters::outbound::session_store::SessionStoreError;
use crate::modules::bookings::use_cases::run_booking_wizard::command::WizardCommand;
use crate::modules::bookings::use_cases::run_booking_wizard::handler::ApplicationError;
use crate::shared::core::primitives::SessionId;
use crate::shared::infrastructure::identity::IdentityError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartSessionBody {
    pub external_identity: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::Session(SessionStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ApplicationError::Identity(IdentityError::NotRegistered(_)) => StatusCode::FORBIDDEN,
        ApplicationError::Identity(_) => StatusCode::BAD_GATEWAY,
        ApplicationError::Authority(_) => StatusCode::BAD_GATEWAY,
        ApplicationError::Wizard(_) => StatusCode::CONFLICT,
    };
    if status.is_server_error() {
        tracing::warn!(%error, "booking request failed");
    }
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub async fn start(
    State(state): State<AppState>,
    body: Result<Json<StartSessionBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.wizard.start(&body.external_identity).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn view(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.wizard.view(SessionId::from_uuid(session_id)).await {
        Ok(response) => Json(response).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Result<Json<WizardCommand>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state
        .wizard
        .handle(SessionId::from_uuid(session_id), command)
        .await
    {
        Ok(response) => Json(response).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn evict(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.wizard.evict(SessionId::from_uuid(session_id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
