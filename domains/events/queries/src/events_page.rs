use events_dao::SessionHandle;
use events_models::Interest;
use events_responses::EventsPage;
use tracing::instrument;

use crate::ListEventsQuery;

/// Builds the page render model for the current selection.
#[derive(Clone)]
pub struct EventsPageQueryHandler {
    session: SessionHandle,
}

impl EventsPageQueryHandler {
    pub fn new(session: SessionHandle) -> Self { Self { session } }

    #[instrument(skip(self))]
    pub async fn execute(&self, query: ListEventsQuery) -> EventsPage {
        let mut selected: Vec<Interest> =
            query.interests.iter().copied().collect();
        selected.sort();

        let session = self.session.read().await;
        EventsPage::render(
            selected,
            session.catalog.query(&query.interests),
            session.catalog.all(),
        )
    }
}
