use crate::dto::CompetitionSummary;
use crate::models::TimeRecord;
use crate::services::grouping::group_reduce;

/// Accumulates one swimmer's history into per-competition totals, most
/// recent competition first. A competition is identified purely by name, so
/// entries sharing a name merge even across dates; the summary keeps the
/// latest date seen and that record's location.
pub fn aggregate_by_competition<'a, I>(records: I) -> Vec<CompetitionSummary>
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    let stats = group_reduce(
        records,
        |record| record.competition.clone(),
        |record| CompetitionSummary {
            name: record.competition.clone(),
            location: record.competition_location.clone(),
            date: record.date,
            points: 0,
            events: 0,
        },
        |summary, record| {
            summary.points += record.points;
            summary.events += 1;
            if record.date > summary.date {
                summary.date = record.date;
                summary.location = record.competition_location.clone();
            }
        },
    );

    let mut summaries: Vec<CompetitionSummary> = stats.into_values().collect();
    summaries.sort_by(|a, b| b.date.cmp(&a.date));
    tracing::debug!(competitions = summaries.len(), "aggregated competition stats");
    summaries
}
