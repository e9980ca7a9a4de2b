use chrono::{NaiveDate, NaiveTime};
use events_errors::ValidationError;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::Interest;

pub type EventId = Uuid;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// A meet-up record as stored in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub interest: Interest,
    pub description: String,
}

/// Unvalidated submission. `interest` is kept as the raw tag text so that
/// an unknown tag is reported by the catalog as a validation failure.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct NewEvent {
    #[builder(setter(into))]
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[builder(setter(into))]
    pub interest: String,
    #[builder(default, setter(into))]
    pub description: String,
}

/// Parses a time of day given as `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime(raw.to_string()))
}
