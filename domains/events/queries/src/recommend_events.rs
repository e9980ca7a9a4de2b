use events_dao::SessionHandle;
use events_models::Interest;
use events_responses::EventResponse;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
pub struct RecommendEventsQuery {
    pub interest: Interest,
}

#[derive(Clone)]
pub struct RecommendEventsQueryHandler {
    session: SessionHandle,
}

impl RecommendEventsQueryHandler {
    pub fn new(session: SessionHandle) -> Self { Self { session } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: RecommendEventsQuery,
    ) -> Vec<EventResponse> {
        let session = self.session.read().await;
        let recommended: Vec<EventResponse> = session
            .recommend(query.interest)
            .into_iter()
            .map(EventResponse::from)
            .collect();
        debug!(
            count = recommended.len(),
            interactions = session.interactions.len(),
            "recommendations computed"
        );
        recommended
    }
}
