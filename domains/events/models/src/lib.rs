pub mod events;
pub mod interactions;
pub mod interest;

pub use events::{
    DATE_FORMAT, Event, EventId, NewEvent, TIME_FORMAT, parse_time_of_day,
};
pub use interactions::Interaction;
pub use interest::Interest;
