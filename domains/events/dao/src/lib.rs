pub mod catalog;
pub mod clock;
pub mod interactions;
pub mod session;

pub use catalog::EventCatalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use interactions::InteractionLog;
pub use session::{Session, SessionHandle};
