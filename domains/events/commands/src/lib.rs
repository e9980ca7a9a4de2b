pub mod create_event;
pub mod record_interaction;

pub use create_event::*;
pub use record_interaction::*;
