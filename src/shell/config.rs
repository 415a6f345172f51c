use crate::modules::bookings::core::slot_grid::{SlotGridConfig, SlotGridError, SlotGridGenerator};
use crate::shared::core::primitives::ParticipantId;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Grid(#[from] SlotGridError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub grid: SlotGridConfig,
    pub authority_timeout: Option<Duration>,
    pub daily_hours: f64,
    /// `external identity -> participant` pairs seeded into the in-memory directory.
    pub participants: Vec<(String, ParticipantId)>,
    pub http_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = SlotGridConfig::default();
        let grid = SlotGridConfig {
            day_start: parse_or(&lookup, "BOOKING_DAY_START", defaults.day_start)?,
            day_end: parse_or(&lookup, "BOOKING_DAY_END", defaults.day_end)?,
            interval_minutes: parse_or(
                &lookup,
                "BOOKING_SLOT_INTERVAL_MINUTES",
                defaults.interval_minutes,
            )?,
        };
        grid.generate()?;

        let authority_timeout = match lookup("BOOKING_AUTHORITY_TIMEOUT_MS") {
            Some(value) => Some(Duration::from_millis(parse(
                "BOOKING_AUTHORITY_TIMEOUT_MS",
                &value,
            )?)),
            None => None,
        };

        let daily_hours: f64 = parse_or(&lookup, "BOOKING_DAILY_HOURS", 2.0)?;
        if !daily_hours.is_finite() || daily_hours < 0.0 {
            return Err(ConfigError::Invalid {
                key: "BOOKING_DAILY_HOURS",
                value: daily_hours.to_string(),
                reason: "must be a non-negative number of hours".into(),
            });
        }

        let participants = match lookup("BOOKING_PARTICIPANTS") {
            Some(value) => parse_participants(&value)?,
            None => Vec::new(),
        };

        Ok(Self {
            grid,
            authority_timeout,
            daily_hours,
            participants,
            http_addr: parse_or(&lookup, "HTTP_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)))?,
        })
    }

    pub fn grid_generator(&self) -> Result<SlotGridGenerator, ConfigError> {
        Ok(self.grid.generator()?)
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => parse(key, &value),
        None => Ok(default),
    }
}

/// `tg-1001=participant-0001,tg-1002=participant-0002`
fn parse_participants(value: &str) -> Result<Vec<(String, ParticipantId)>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((external, participant)) if !external.trim().is_empty() && !participant.trim().is_empty() => {
                Ok((external.trim().to_string(), ParticipantId::new(participant.trim())))
            }
            _ => Err(ConfigError::Invalid {
                key: "BOOKING_PARTICIPANTS",
                value: pair.to_string(),
                reason: "expected external=participant".into(),
            }),
        })
        .collect()
}
