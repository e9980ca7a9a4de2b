use axum::{
    Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
    routing::get,
};
use common_errors::AppError;
use events_commands::{
    CreateEventCommand, CreateEventHandler, CreateEventResult,
    RecordInteractionCommand, RecordInteractionHandler,
};
use events_dao::SessionHandle;
use events_models::Interest;
use events_queries::{
    EventsPageQueryHandler, GetEventQuery, GetEventQueryHandler,
    ListAllEventsQueryHandler, ListEventsQuery, ListEventsQueryHandler,
    ListInteractionsQueryHandler, RecommendEventsQuery,
    RecommendEventsQueryHandler,
};
use events_responses::{EventResponse, EventsPage, InteractionResponse};
use serde::Deserialize;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Clone)]
pub struct EventServices {
    pub create_event: CreateEventHandler,
    pub record_interaction: RecordInteractionHandler,

    pub list_events: ListEventsQueryHandler,
    pub list_all_events: ListAllEventsQueryHandler,
    pub get_event: GetEventQueryHandler,
    pub events_page: EventsPageQueryHandler,
    pub recommend_events: RecommendEventsQueryHandler,
    pub list_interactions: ListInteractionsQueryHandler,
}

impl EventServices {
    pub fn new(session: SessionHandle) -> Self {
        Self {
            create_event: CreateEventHandler::new(session.clone()),
            record_interaction: RecordInteractionHandler::new(session.clone()),
            list_events: ListEventsQueryHandler::new(session.clone()),
            list_all_events: ListAllEventsQueryHandler::new(session.clone()),
            get_event: GetEventQueryHandler::new(session.clone()),
            events_page: EventsPageQueryHandler::new(session.clone()),
            recommend_events: RecommendEventsQueryHandler::new(
                session.clone(),
            ),
            list_interactions: ListInteractionsQueryHandler::new(session),
        }
    }
}

pub struct EventHandlers;

impl EventHandlers {
    pub fn routes() -> Router<EventServices> {
        Router::new()
            .route("/interests", get(list_interests))
            .route("/events", get(list_events).post(create_event))
            .route("/events/all", get(list_all_events))
            .route("/events/{id}", get(get_event))
            .route("/page", get(events_page))
            .route(
                "/interactions",
                get(list_interactions).post(record_interaction),
            )
            .route("/recommendations", get(recommend_events))
    }
}

/// Comma-separated interest names, e.g. `Yoga,Book Club`. The key may
/// appear at most once.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InterestsFilterParams {
    interests: Option<String>,
}

impl InterestsFilterParams {
    fn into_query(self) -> Result<ListEventsQuery, AppError> {
        let interests = match self.interests {
            Some(raw) => Interest::parse_list(&raw)?,
            None => Vec::new(),
        };
        Ok(ListEventsQuery::new(interests))
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendParams {
    interest: String,
}

#[utoipa::path(
    get,
    path = "/interests",
    responses(
        (status = 200, description = "Selectable interests in display order", body = Vec<Interest>)
    ),
    tag = "events"
)]
pub async fn list_interests() -> Json<Vec<Interest>> {
    Json(Interest::ALL.to_vec())
}

#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventCommand,
    responses(
        (status = 201, description = "Event created successfully", body = CreateEventResult),
        (status = 400, description = "Unknown interest, past date, invalid time or malformed body", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn create_event(
    State(services): State<EventServices>,
    command: Result<Json<CreateEventCommand>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateEventResult>), AppError> {
    let Json(command) = command?;
    let result = services.create_event.execute(command).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/events",
    params(
        InterestsFilterParams
    ),
    responses(
        (status = 200, description = "Events matching any selected interest; empty when none selected", body = Vec<EventResponse>),
        (status = 400, description = "Unknown interest or malformed query", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn list_events(
    State(services): State<EventServices>,
    params: Result<Query<InterestsFilterParams>, QueryRejection>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let Query(params) = params?;
    let query = params.into_query()?;
    Ok(Json(services.list_events.execute(query).await))
}

#[utoipa::path(
    get,
    path = "/events/all",
    responses(
        (status = 200, description = "Every event in insertion order", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn list_all_events(
    State(services): State<EventServices>,
) -> Json<Vec<EventResponse>> {
    Json(services.list_all_events.execute().await)
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn get_event(
    State(services): State<EventServices>, Path(id): Path<Uuid>,
) -> Result<Json<EventResponse>, AppError> {
    let event = services
        .get_event
        .execute(GetEventQuery { event_id: id })
        .await?;
    Ok(Json(event))
}

#[utoipa::path(
    get,
    path = "/page",
    params(
        InterestsFilterParams
    ),
    responses(
        (status = 200, description = "Page render model", body = EventsPage),
        (status = 400, description = "Unknown interest or malformed query", body = common_errors::ApiErrorResponse)
    ),
    tag = "page"
)]
#[instrument(skip_all)]
pub async fn events_page(
    State(services): State<EventServices>,
    params: Result<Query<InterestsFilterParams>, QueryRejection>,
) -> Result<Json<EventsPage>, AppError> {
    let Query(params) = params?;
    let query = params.into_query()?;
    Ok(Json(services.events_page.execute(query).await))
}

#[utoipa::path(
    post,
    path = "/interactions",
    request_body = RecordInteractionCommand,
    responses(
        (status = 201, description = "Interaction recorded", body = InteractionResponse),
        (status = 400, description = "Unknown interest or malformed input", body = common_errors::ApiErrorResponse)
    ),
    tag = "recommendations"
)]
#[instrument(skip_all)]
pub async fn record_interaction(
    State(services): State<EventServices>,
    command: Result<Json<RecordInteractionCommand>, JsonRejection>,
) -> Result<(StatusCode, Json<InteractionResponse>), AppError> {
    let Json(command) = command?;
    let recorded = services.record_interaction.execute(command).await?;
    Ok((StatusCode::CREATED, Json(recorded)))
}

#[utoipa::path(
    get,
    path = "/interactions",
    responses(
        (status = 200, description = "Interaction log in insertion order", body = Vec<InteractionResponse>)
    ),
    tag = "recommendations"
)]
#[instrument(skip_all)]
pub async fn list_interactions(
    State(services): State<EventServices>,
) -> Json<Vec<InteractionResponse>> {
    Json(services.list_interactions.execute().await)
}

#[utoipa::path(
    get,
    path = "/recommendations",
    params(
        RecommendParams
    ),
    responses(
        (status = 200, description = "Events recommended for the interest", body = Vec<EventResponse>),
        (status = 400, description = "Unknown interest or malformed input", body = common_errors::ApiErrorResponse)
    ),
    tag = "recommendations"
)]
#[instrument(skip_all)]
pub async fn recommend_events(
    State(services): State<EventServices>,
    params: Result<Query<RecommendParams>, QueryRejection>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let Query(params) = params?;
    let interest: Interest = params.interest.parse()?;
    let events = services
        .recommend_events
        .execute(RecommendEventsQuery { interest })
        .await;
    Ok(Json(events))
}
