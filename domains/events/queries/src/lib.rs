pub mod events_page;
pub mod get_event;
pub mod list_all_events;
pub mod list_events;
pub mod list_interactions;
pub mod recommend_events;

pub use events_page::*;
pub use get_event::*;
pub use list_all_events::*;
pub use list_events::*;
pub use list_interactions::*;
pub use recommend_events::*;
