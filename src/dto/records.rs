use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Distance, PoolSize, Style, TimeRecord};

/// Optional filters for the records view. Absent fields match everything;
/// active filters are ANDed together.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams, ToSchema)]
pub struct RecordFilter {
    pub distance: Option<Distance>,
    pub style: Option<Style>,
    pub pool_size: Option<PoolSize>,
}

impl RecordFilter {
    pub fn matches(&self, record: &TimeRecord) -> bool {
        self.distance.is_none_or(|d| record.distance == d)
            && self.style.is_none_or(|s| record.style == s)
            && self.pool_size.is_none_or(|p| record.pool_size_or_default() == p)
    }
}

/// All records for one event, fastest first. Position in `times` is the
/// 1-based rank minus one; index 0 is the current best.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventGroup {
    pub distance: Distance,
    pub style: Style,
    pub pool_size: PoolSize,
    pub times: Vec<TimeRecord>,
}
