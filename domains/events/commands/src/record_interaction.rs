use events_dao::SessionHandle;
use events_errors::ValidationError;
use events_responses::InteractionResponse;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordInteractionCommand {
    pub user: String,
    pub event: String,
    #[schema(example = "Yoga")]
    pub interest: String,
}

#[derive(Clone)]
pub struct RecordInteractionHandler {
    session: SessionHandle,
}

impl RecordInteractionHandler {
    pub fn new(session: SessionHandle) -> Self { Self { session } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: RecordInteractionCommand,
    ) -> Result<InteractionResponse, ValidationError> {
        let mut session = self.session.write().await;
        let recorded = session
            .interactions
            .record(command.user, command.event, &command.interest)
            .map(InteractionResponse::from)?;
        debug!(total = session.interactions.len(), "interaction recorded");
        Ok(recorded)
    }
}
