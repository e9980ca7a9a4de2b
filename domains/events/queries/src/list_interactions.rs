use events_dao::SessionHandle;
use events_responses::InteractionResponse;
use tracing::instrument;

#[derive(Clone)]
pub struct ListInteractionsQueryHandler {
    session: SessionHandle,
}

impl ListInteractionsQueryHandler {
    pub fn new(session: SessionHandle) -> Self { Self { session } }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Vec<InteractionResponse> {
        let session = self.session.read().await;
        session
            .interactions
            .entries()
            .iter()
            .map(InteractionResponse::from)
            .collect()
    }
}
