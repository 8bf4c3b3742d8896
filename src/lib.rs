//! Swim race result aggregation and scoring engine.
//!
//! Pure computation over caller-owned snapshots of swimmers and time
//! records: scoring at submission time, then personal bests, competition
//! summaries, leaderboards, per-event rankings and head-to-head comparisons
//! derived on demand. The engine holds no state and performs no I/O;
//! persistence and presentation belong to the host application.

pub mod dto;
pub mod error;
pub mod models;
pub mod reference;
pub mod scoring;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{EngineError, Result};
pub use models::{
    Distance, EventKey, PoolSize, RaceTime, Style, Swimmer, TimeParts, TimeRecord,
    compute_time_from_parts,
};
pub use scoring::{compute_placement_points, compute_standardized_points};
pub use services::{
    aggregate_by_competition, compare_head_to_head, group_records, index_best_times, is_best,
    rank_leaderboard, recent_times, swimmer_name, total_points,
};

// Re-export the request/response shapes a host layer works with
pub use dto::{
    CompetitionSummary, CreateSwimmerRequest, CreateTimeRecordRequest, EventGroup,
    HeadToHeadEntry, LeaderboardEntry, RecordFilter, Winner,
};
