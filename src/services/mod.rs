pub mod best_times;
pub mod competitions;
pub mod grouping;
pub mod head_to_head;
pub mod leaderboard;
pub mod records;

pub use best_times::{index_best_times, is_best};
pub use competitions::aggregate_by_competition;
pub use head_to_head::compare_head_to_head;
pub use leaderboard::rank_leaderboard;
pub use records::{group_records, recent_times, swimmer_name, total_points};
