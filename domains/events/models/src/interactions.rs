use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Interest;

/// A simulated user's interaction with an event. `event` is a loose label,
/// not a reference into the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Interaction {
    pub user: String,
    pub event: String,
    pub interest: Interest,
}
