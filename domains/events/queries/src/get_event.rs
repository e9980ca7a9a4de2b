use events_dao::SessionHandle;
use events_errors::EventError;
use events_responses::EventResponse;
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct GetEventQuery {
    pub event_id: Uuid,
}

#[derive(Clone)]
pub struct GetEventQueryHandler {
    session: SessionHandle,
}

impl GetEventQueryHandler {
    pub fn new(session: SessionHandle) -> Self { Self { session } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetEventQuery,
    ) -> Result<EventResponse, EventError> {
        let session = self.session.read().await;
        session
            .catalog
            .get(query.event_id)
            .map(EventResponse::from)
            .ok_or(EventError::NotFound {
                event_id: query.event_id,
            })
    }
}
