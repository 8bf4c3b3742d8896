use crate::dto::LeaderboardEntry;
use crate::models::{Swimmer, TimeRecord};

/// Ranks every swimmer by accumulated placement points, highest first.
/// The sort is stable: swimmers with equal totals keep their input order,
/// and that ordering is part of the contract.
pub fn rank_leaderboard(swimmers: &[Swimmer], records: &[TimeRecord]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = swimmers
        .iter()
        .map(|swimmer| {
            let mut total_points = 0;
            let mut race_count = 0;
            for record in records.iter().filter(|r| r.swimmer_id == swimmer.id) {
                total_points += record.points;
                race_count += 1;
            }
            LeaderboardEntry {
                swimmer: swimmer.clone(),
                total_points,
                race_count,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    tracing::debug!(swimmers = entries.len(), "ranked leaderboard");
    entries
}
