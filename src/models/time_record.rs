use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::event::{Distance, EventKey, PoolSize, Style};

/// One logged race result. Immutable after creation; the scores are derived
/// once at submission time and stored alongside the raw result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeRecord {
    pub id: Uuid,
    pub swimmer_id: Uuid,
    pub distance: Distance,
    pub style: Style,
    /// Absent on legacy records; read paths treat it as 50m.
    pub pool_size: Option<PoolSize>,
    /// Canonical `[M:]SS.CC` display string.
    pub time: String,
    /// Sole sort and comparison key for "faster".
    pub total_seconds: f64,
    pub placement: u32,
    /// Placement points, `max(0, 21 - placement)`.
    pub points: u32,
    /// Approximate standardized score; 0 when no reference applies.
    pub fina_points: u32,
    pub date: NaiveDate,
    pub competition: String,
    pub competition_location: String,
}

impl TimeRecord {
    pub fn pool_size_or_default(&self) -> PoolSize {
        self.pool_size.unwrap_or_default()
    }

    /// The `(distance, style, pool size)` key this record groups under.
    pub fn event_key(&self) -> EventKey {
        EventKey::new(self.distance, self.style, self.pool_size_or_default())
    }

    /// Placement with an ordinal suffix, e.g. `1st`, `2nd`, `4th`.
    pub fn placement_ordinal(&self) -> String {
        let suffix = match self.placement {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        format!("{}{}", self.placement, suffix)
    }
}
