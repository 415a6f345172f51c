use crate::modules::bookings::adapters::outbound::booking_authority::{
    AuthorityError, BookingAuthority, CreateBookingResponse,
};
use crate::modules::bookings::core::booking::{BookingRequest, DailyBooking};
use crate::shared::core::primitives::ParticipantId;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

/// Booking authority kept in process memory, for local runs and tests.
///
/// Every participant gets the same daily hour limit unless overridden. Booked time is summed
/// in whole minutes and only turned into hours when reported. Bookings are checked and
/// inserted under one write lock, so overlapping requests on a date are serialized.
pub struct InMemoryBookingAuthority {
    daily_hours: f64,
    limits: RwLock<HashMap<ParticipantId, f64>>,
    bookings: RwLock<HashMap<NaiveDate, Vec<BookingRequest>>>,
    refuse_next: Mutex<Option<String>>,
    create_calls: AtomicUsize,
    delay_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryBookingAuthority {
    pub fn new(daily_hours: f64) -> Self {
        Self {
            daily_hours,
            limits: RwLock::new(HashMap::new()),
            bookings: RwLock::new(HashMap::new()),
            refuse_next: Mutex::new(None),
            create_calls: AtomicUsize::new(0),
            delay_ms: AtomicU64::new(0),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::SeqCst);
    }

    pub async fn set_daily_limit(&self, participant_id: ParticipantId, hours: f64) {
        self.limits.write().await.insert(participant_id, hours);
    }

    /// The next `create_booking` call answers `ok = false` with `error`.
    pub async fn refuse_next(&self, error: impl Into<String>) {
        *self.refuse_next.lock().await = Some(error.into());
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    async fn ensure_online(&self) -> Result<(), AuthorityError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline {
            return Err(AuthorityError::Unavailable("Booking authority offline".into()));
        }
        Ok(())
    }

    async fn limit_minutes_of(&self, participant_id: &ParticipantId) -> i64 {
        let hours = self
            .limits
            .read()
            .await
            .get(participant_id)
            .copied()
            .unwrap_or(self.daily_hours);
        (hours * 60.0).round() as i64
    }

    fn booked_minutes(bookings: &[BookingRequest], participant_id: &ParticipantId) -> i64 {
        bookings
            .iter()
            .filter(|b| &b.participant_id == participant_id)
            .map(BookingRequest::duration_minutes)
            .sum()
    }
}

#[async_trait::async_trait]
impl BookingAuthority for InMemoryBookingAuthority {
    async fn remaining_daily_hours(
        &self,
        participant_id: &ParticipantId,
        date: NaiveDate,
    ) -> Result<f64, AuthorityError> {
        self.ensure_online().await?;
        let limit = self.limit_minutes_of(participant_id).await;
        let guard = self.bookings.read().await;
        let used = guard
            .get(&date)
            .map(|day| Self::booked_minutes(day, participant_id))
            .unwrap_or(0);
        Ok((limit - used).max(0) as f64 / 60.0)
    }

    async fn daily_bookings(&self, date: NaiveDate) -> Result<Vec<DailyBooking>, AuthorityError> {
        self.ensure_online().await?;
        let guard = self.bookings.read().await;
        let mut day: Vec<DailyBooking> = guard
            .get(&date)
            .into_iter()
            .flatten()
            .map(|b| DailyBooking {
                start: b.start,
                end: b.end,
            })
            .collect();
        day.sort_by_key(|b| b.start);
        Ok(day)
    }

    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<CreateBookingResponse, AuthorityError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_online().await?;

        if let Some(error) = self.refuse_next.lock().await.take() {
            return Ok(CreateBookingResponse::refused(error));
        }
        if request.end <= request.start {
            return Ok(CreateBookingResponse::refused(
                "end time must be after start time",
            ));
        }

        let limit = self.limit_minutes_of(&request.participant_id).await;
        let mut guard = self.bookings.write().await;
        let day = guard.entry(request.date).or_default();
        if day.iter().any(|b| b.overlaps(request.start, request.end)) {
            return Ok(CreateBookingResponse::refused("slot taken"));
        }
        if Self::booked_minutes(day, &request.participant_id) + request.duration_minutes() > limit {
            return Ok(CreateBookingResponse::refused("daily limit exceeded"));
        }
        day.push(request.clone());
        Ok(CreateBookingResponse::accepted())
    }
}
