use std::collections::HashSet;

use events_dao::SessionHandle;
use events_models::Interest;
use events_responses::EventResponse;
use serde::Deserialize;
use tracing::instrument;

/// Filter by interest membership. An empty selection matches nothing.
#[derive(Debug, Default, Deserialize)]
pub struct ListEventsQuery {
    pub interests: HashSet<Interest>,
}

impl ListEventsQuery {
    pub fn new(interests: impl IntoIterator<Item = Interest>) -> Self {
        Self {
            interests: interests.into_iter().collect(),
        }
    }
}

#[derive(Clone)]
pub struct ListEventsQueryHandler {
    session: SessionHandle,
}

impl ListEventsQueryHandler {
    pub fn new(session: SessionHandle) -> Self { Self { session } }

    #[instrument(skip(self))]
    pub async fn execute(&self, query: ListEventsQuery) -> Vec<EventResponse> {
        let session = self.session.read().await;
        session
            .catalog
            .query(&query.interests)
            .into_iter()
            .map(EventResponse::from)
            .collect()
    }
}
