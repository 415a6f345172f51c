use crate::modules::bookings::core::booking::{BookingRequest, DailyBooking};
use crate::shared::core::primitives::ParticipantId;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthorityError {
    #[error("booking authority unavailable: {0}")]
    Unavailable(String),

    #[error("booking authority did not answer within {0:?}")]
    DeadlineExceeded(Duration),
}

/// Answer of the authority to a booking request. `ok == false` is a business rejection
/// (slot taken, budget exhausted), not a failure of the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub ok: bool,
    pub error: Option<String>,
}

impl CreateBookingResponse {
    pub fn accepted() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn refused(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// System of record for reservations and daily budgets.
#[async_trait]
pub trait BookingAuthority: Send + Sync {
    async fn remaining_daily_hours(
        &self,
        participant_id: &ParticipantId,
        date: NaiveDate,
    ) -> Result<f64, AuthorityError>;

    async fn daily_bookings(&self, date: NaiveDate) -> Result<Vec<DailyBooking>, AuthorityError>;

    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<CreateBookingResponse, AuthorityError>;
}

/// Runs an authority call under an optional caller-supplied deadline. Dropping the
/// returned future cancels the call.
pub async fn within_deadline<T>(
    deadline: Option<Duration>,
    call: impl Future<Output = Result<T, AuthorityError>>,
) -> Result<T, AuthorityError> {
    match deadline {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| AuthorityError::DeadlineExceeded(limit))?,
        None => call.await,
    }
}
