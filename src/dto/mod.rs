pub mod comparison;
pub mod competition;
pub mod ranking;
pub mod records;
pub mod swimmer;
pub mod time_record;

pub use comparison::{HeadToHeadEntry, Winner};
pub use competition::CompetitionSummary;
pub use ranking::LeaderboardEntry;
pub use records::{EventGroup, RecordFilter};
pub use swimmer::CreateSwimmerRequest;
pub use time_record::CreateTimeRecordRequest;
