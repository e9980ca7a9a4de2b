use chrono::NaiveDate;
use common_errors::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Rejected submission. The catalog is left unchanged whenever one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown interest: {0}")]
    UnknownInterest(String),
    #[error("Event date {date} is before today ({today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownInterest(_) => "UNKNOWN_INTEREST",
            Self::DateInPast { .. } => "DATE_IN_PAST",
            Self::InvalidTime(_) => "INVALID_TIME",
        }
    }
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Event not found: {event_id}")]
    NotFound { event_id: Uuid },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::bad_request_with_details(
            err.code(),
            "Submission rejected",
            &err.to_string(),
        )
    }
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::Validation(inner) => inner.into(),
            not_found @ EventError::NotFound { .. } => AppError::not_found(
                "EVENT_NOT_FOUND",
                &not_found.to_string(),
            ),
        }
    }
}
