use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::TimeRecord;

/// Which side of a head-to-head comparison won an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Winner {
    Swimmer1,
    Swimmer2,
}

/// One event row of a head-to-head comparison. Present only when at least
/// one swimmer has a best time for the combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeadToHeadEntry {
    /// Event label, e.g. `100m Freestyle (50m)`.
    pub event: String,
    pub swimmer1_time: Option<TimeRecord>,
    pub swimmer2_time: Option<TimeRecord>,
    pub winner: Winner,
}
