use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Accumulated performance at one competition, identified purely by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompetitionSummary {
    pub name: String,
    /// Location of the most recent record seen for this competition.
    pub location: String,
    /// Latest race date seen under this competition name.
    pub date: NaiveDate,
    pub points: u32,
    pub events: usize,
}
