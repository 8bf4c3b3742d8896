pub mod event;
pub mod race_time;
pub mod swimmer;
pub mod time_record;

pub use event::{Distance, EventKey, PoolSize, Style};
pub use race_time::{RaceTime, TimeParts, compute_time_from_parts};
pub use swimmer::Swimmer;
pub use time_record::TimeRecord;
