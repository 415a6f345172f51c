use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid time of day '{0}', expected HH:MM")]
pub struct ParseTimePointError(pub String);

/// Time of day at minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimePoint(NaiveTime);

impl TimePoint {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Signed number of minutes from `earlier` to `self`.
    pub fn minutes_since(&self, earlier: TimePoint) -> i64 {
        self.0.signed_duration_since(earlier.0).num_minutes()
    }

    /// Returns `None` when the result would wrap past midnight.
    pub fn checked_add_minutes(&self, minutes: i64) -> Option<TimePoint> {
        let (next, wrapped_seconds) = self
            .0
            .overflowing_add_signed(TimeDelta::try_minutes(minutes)?);
        (wrapped_seconds == 0).then_some(Self(next))
    }
}

impl From<NaiveTime> for TimePoint {
    fn from(value: NaiveTime) -> Self {
        Self(value.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(value))
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimePoint {
    type Err = ParseTimePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| ParseTimePointError(s.to_string()))
    }
}

impl TryFrom<String> for TimePoint {
    type Error = ParseTimePointError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimePoint> for String {
    fn from(value: TimePoint) -> Self {
        value.to_string()
    }
}
