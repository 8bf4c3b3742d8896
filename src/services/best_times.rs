use std::collections::HashMap;

use crate::models::{EventKey, TimeRecord};
use crate::services::grouping::group_reduce;

/// Indexes the fastest record per `(distance, style, pool size)` key.
/// Comparison is strict `<`, so ties keep the first-seen record.
pub fn index_best_times<'a, I>(records: I) -> HashMap<EventKey, &'a TimeRecord>
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    let index = group_reduce(
        records,
        |record| record.event_key(),
        |record| *record,
        |best, record| {
            if record.total_seconds < best.total_seconds {
                *best = record;
            }
        },
    );
    tracing::debug!(events = index.len(), "indexed best times");
    index
}

/// Whether `record` currently holds the best time for its event, compared
/// by record identity.
pub fn is_best(index: &HashMap<EventKey, &TimeRecord>, record: &TimeRecord) -> bool {
    index
        .get(&record.event_key())
        .is_some_and(|best| best.id == record.id)
}
