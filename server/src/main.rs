mod config;

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use clap::Parser;
use events_dao::SessionHandle;
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_rapidoc::RapiDoc;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let session = SessionHandle::default();
    let app = app(session);

    let addr = config.addr();
    info!("Social Circles server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn app(session: SessionHandle) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health_check))
        .with_state(session.clone());

    Router::new()
        .merge(health_routes)
        .merge(events_http::event_routes(session))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        events_http::list_interests,
        events_http::create_event,
        events_http::list_events,
        events_http::list_all_events,
        events_http::get_event,
        events_http::events_page,
        events_http::record_interaction,
        events_http::list_interactions,
        events_http::recommend_events,
    ),
    components(
        schemas(
            HealthResponse,
            events_models::Interest,
            events_responses::EventResponse,
            events_responses::EventsPage,
            events_responses::EventsSection,
            events_responses::InteractionResponse,
            events_commands::CreateEventCommand,
            events_commands::CreateEventResult,
            events_commands::RecordInteractionCommand,
            common_errors::ApiErrorResponse,
            common_errors::ApiErrorInfo,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "Event catalog endpoints"),
        (name = "page", description = "Page render model"),
        (name = "recommendations", description = "Interactions and recommended events")
    ),
    info(
        title = "Social Circles API",
        description = "Community meet-up events browsable by interest",
        version = "1.0.0"
    )
)]
struct ApiDoc;

#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    events: usize,
    interactions: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check successful with session size", body = HealthResponse)
    ),
    tag = "health"
)]
async fn health_check(
    State(session): State<SessionHandle>,
) -> (StatusCode, Json<HealthResponse>) {
    let session = session.read().await;
    let health = HealthResponse {
        status: "OK".to_string(),
        events: session.catalog.len(),
        interactions: session.interactions.len(),
    };

    (StatusCode::OK, Json(health))
}
