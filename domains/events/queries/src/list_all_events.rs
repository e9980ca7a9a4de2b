use events_dao::SessionHandle;
use events_responses::EventResponse;
use tracing::instrument;

#[derive(Clone)]
pub struct ListAllEventsQueryHandler {
    session: SessionHandle,
}

impl ListAllEventsQueryHandler {
    pub fn new(session: SessionHandle) -> Self { Self { session } }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Vec<EventResponse> {
        let session = self.session.read().await;
        session.catalog.all().iter().map(EventResponse::from).collect()
    }
}
