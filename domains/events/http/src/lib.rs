pub mod handlers;

use axum::Router;
use events_dao::SessionHandle;

pub use handlers::*;

pub fn event_routes(session: SessionHandle) -> Router {
    let services = EventServices::new(session);
    EventHandlers::routes().with_state(services)
}
