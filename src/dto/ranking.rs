use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Swimmer;

/// One leaderboard row: a swimmer with their accumulated placement points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    #[serde(flatten)]
    pub swimmer: Swimmer,
    pub total_points: u32,
    pub race_count: usize,
}
