use chrono::NaiveDate;
use events_dao::{EventCatalog, SessionHandle};
use events_errors::ValidationError;
use events_models::{Event, NewEvent, parse_time_of_day};
use events_responses::{EVENT_CREATED_MESSAGE, EventResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventCommand {
    pub name: String,
    #[schema(example = "2030-06-01")]
    pub date: NaiveDate,
    /// `HH:MM` or `HH:MM:SS`
    #[schema(example = "18:00")]
    pub time: String,
    #[schema(example = "Book Club")]
    pub interest: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEventResult {
    pub event: EventResponse,
    pub message: String,
}

#[derive(Clone)]
pub struct CreateEventHandler {
    session: SessionHandle,
}

impl CreateEventHandler {
    pub fn new(session: SessionHandle) -> Self { Self { session } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateEventCommand,
    ) -> Result<CreateEventResult, ValidationError> {
        let mut session = self.session.write().await;
        let event = Self::submit(&mut session.catalog, command)
            .map(EventResponse::from)
            .inspect_err(|err| {
                warn!(error = %err, "event submission rejected");
            })?;
        info!(id = %event.id, interest = %event.interest, "event created");

        Ok(CreateEventResult {
            event,
            message: EVENT_CREATED_MESSAGE.to_string(),
        })
    }

    fn submit(
        catalog: &mut EventCatalog, command: CreateEventCommand,
    ) -> Result<&Event, ValidationError> {
        let time = parse_time_of_day(&command.time)?;
        let new_event = NewEvent::builder()
            .name(command.name)
            .date(command.date)
            .time(time)
            .interest(command.interest)
            .description(command.description)
            .build();
        catalog.insert(new_event)
    }
}
