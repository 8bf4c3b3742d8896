use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::{EventGroup, RecordFilter};
use crate::models::{EventKey, Swimmer, TimeRecord};
use crate::services::grouping::group_reduce;

/// Filters records and groups the survivors into per-event rankings,
/// fastest first within each group.
pub fn group_records(records: &[TimeRecord], filter: &RecordFilter) -> HashMap<EventKey, EventGroup> {
    let mut groups = group_reduce(
        records.iter().filter(|record| filter.matches(record)),
        |record| record.event_key(),
        |record| EventGroup {
            distance: record.distance,
            style: record.style,
            pool_size: record.pool_size_or_default(),
            times: Vec::new(),
        },
        |group, record| group.times.push(record.clone()),
    );

    for group in groups.values_mut() {
        group
            .times
            .sort_by(|a, b| a.total_seconds.total_cmp(&b.total_seconds));
    }
    tracing::debug!(groups = groups.len(), "grouped records");
    groups
}

/// The most recently raced records, newest first.
pub fn recent_times(records: &[TimeRecord], limit: usize) -> Vec<TimeRecord> {
    let mut sorted: Vec<TimeRecord> = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Sum of placement points over a record collection.
pub fn total_points<'a, I>(records: I) -> u32
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    records.into_iter().map(|record| record.points).sum()
}

/// Display name for a record's swimmer. Deleting a swimmer orphans their
/// records rather than cascading, so orphaned ids fall back to a placeholder.
pub fn swimmer_name(swimmers: &[Swimmer], swimmer_id: Uuid) -> &str {
    swimmers
        .iter()
        .find(|swimmer| swimmer.id == swimmer_id)
        .map_or("Unknown Swimmer", |swimmer| swimmer.name.as_str())
}
