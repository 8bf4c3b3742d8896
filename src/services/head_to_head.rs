use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::{HeadToHeadEntry, Winner};
use crate::models::{EventKey, TimeRecord};
use crate::reference;
use crate::services::best_times::index_best_times;

/// Compares two swimmers' personal bests across every enumerable event
/// combination, in the fixed style, distance, pool-size order. A combination
/// appears only when at least one swimmer has a time for it.
///
/// When both swimmers hold the exact same total seconds, swimmer 2 is
/// reported as the winner. That asymmetry is a compatibility quirk of the
/// comparison, kept as-is.
pub fn compare_head_to_head(
    swimmer1_id: Uuid,
    swimmer2_id: Uuid,
    records: &[TimeRecord],
) -> Vec<HeadToHeadEntry> {
    let bests1 = bests_for(swimmer1_id, records);
    let bests2 = bests_for(swimmer2_id, records);

    let mut comparisons = Vec::new();
    for key in reference::all_event_keys() {
        let time1 = bests1.get(key).copied();
        let time2 = bests2.get(key).copied();

        let winner = match (time1, time2) {
            (None, None) => continue,
            (None, Some(_)) => Winner::Swimmer2,
            (Some(_), None) => Winner::Swimmer1,
            (Some(t1), Some(t2)) => {
                if t1.total_seconds < t2.total_seconds {
                    Winner::Swimmer1
                } else {
                    Winner::Swimmer2
                }
            }
        };

        comparisons.push(HeadToHeadEntry {
            event: key.label(),
            swimmer1_time: time1.cloned(),
            swimmer2_time: time2.cloned(),
            winner,
        });
    }

    tracing::debug!(events = comparisons.len(), "compared head to head");
    comparisons
}

fn bests_for(swimmer_id: Uuid, records: &[TimeRecord]) -> HashMap<EventKey, &TimeRecord> {
    index_best_times(records.iter().filter(|r| r.swimmer_id == swimmer_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Distance, PoolSize, Style};
    use crate::testing::record_for;

    #[test]
    fn test_one_sided_event_goes_to_the_swimmer_with_a_time() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let records = vec![record_for(s1, Distance::M200, Style::Freestyle, PoolSize::LongCourse, 135.0)];

        let comparisons = compare_head_to_head(s1, s2, &records);
        assert_eq!(comparisons.len(), 1);
        assert_eq!(comparisons[0].event, "200m Freestyle (50m)");
        assert_eq!(comparisons[0].winner, Winner::Swimmer1);
        assert!(comparisons[0].swimmer2_time.is_none());
    }

    #[test]
    fn test_uncontested_combinations_are_absent() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let comparisons = compare_head_to_head(s1, s2, &[]);
        assert!(comparisons.is_empty());
    }

    #[test]
    fn test_faster_best_time_wins() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let records = vec![
            record_for(s1, Distance::M100, Style::Freestyle, PoolSize::LongCourse, 61.0),
            // slower earlier swim for s1, the comparison uses the best
            record_for(s1, Distance::M100, Style::Freestyle, PoolSize::LongCourse, 64.0),
            record_for(s2, Distance::M100, Style::Freestyle, PoolSize::LongCourse, 62.5),
        ];

        let comparisons = compare_head_to_head(s1, s2, &records);
        assert_eq!(comparisons.len(), 1);
        assert_eq!(comparisons[0].winner, Winner::Swimmer1);
        let t1 = comparisons[0].swimmer1_time.as_ref().unwrap();
        assert!((t1.total_seconds - 61.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_tie_goes_to_swimmer_two() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let records = vec![
            record_for(s1, Distance::M50, Style::Butterfly, PoolSize::LongCourse, 27.5),
            record_for(s2, Distance::M50, Style::Butterfly, PoolSize::LongCourse, 27.5),
        ];

        let comparisons = compare_head_to_head(s1, s2, &records);
        assert_eq!(comparisons[0].winner, Winner::Swimmer2);
    }

    #[test]
    fn test_output_follows_enumeration_order_not_time() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let records = vec![
            record_for(s1, Distance::M100, Style::Backstroke, PoolSize::LongCourse, 70.0),
            record_for(s2, Distance::M50, Style::Freestyle, PoolSize::LongCourse, 25.0),
        ];

        let comparisons = compare_head_to_head(s1, s2, &records);
        // Freestyle enumerates before Backstroke regardless of times
        assert_eq!(comparisons[0].event, "50m Freestyle (50m)");
        assert_eq!(comparisons[1].event, "100m Backstroke (50m)");
    }

    #[test]
    fn test_pool_sizes_compare_separately() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let records = vec![
            record_for(s1, Distance::M100, Style::Freestyle, PoolSize::ShortCourse, 58.0),
            record_for(s2, Distance::M100, Style::Freestyle, PoolSize::LongCourse, 60.0),
        ];

        let comparisons = compare_head_to_head(s1, s2, &records);
        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons[0].event, "100m Freestyle (25m)");
        assert_eq!(comparisons[0].winner, Winner::Swimmer1);
        assert_eq!(comparisons[1].event, "100m Freestyle (50m)");
        assert_eq!(comparisons[1].winner, Winner::Swimmer2);
    }
}
