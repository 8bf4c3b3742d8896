//! Scoring rules applied once when a result is submitted. Both functions are
//! total: any well-formed input produces a score, with 0 as the floor.

use crate::models::{Distance, PoolSize, Style};
use crate::reference;

/// Placement points: 1st place earns 20, each position down one fewer,
/// floored at zero from 21st place on. A missing placement scores zero.
pub fn compute_placement_points(placement: Option<u32>) -> u32 {
    21u32.saturating_sub(placement.unwrap_or(21))
}

/// Approximate standardized ("FINA-like") score: `floor(1000 * (base / t)^3)`
/// against the long-course reference table. Returns 0 for open water, for
/// combinations without a base time, and for non-positive times.
///
/// The cubic ratio deliberately rewards small improvements near record pace
/// disproportionately; that matches the formula being approximated.
///
/// The score is capped at `u32::MAX`: times far below the reference (only
/// reachable through implausible submissions like `0:00.01`) saturate
/// instead of growing unbounded.
pub fn compute_standardized_points(
    total_seconds: f64,
    style: Style,
    distance: Distance,
    pool_size: PoolSize,
) -> u32 {
    if pool_size == PoolSize::OpenWater {
        return 0;
    }
    let Some(base) = reference::base_time(style, distance) else {
        return 0;
    };
    if total_seconds <= 0.0 {
        return 0;
    }
    (1000.0 * (base / total_seconds).powi(3)).floor() as u32
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_placement_points_podium() {
        assert_eq!(compute_placement_points(Some(1)), 20);
        assert_eq!(compute_placement_points(Some(2)), 19);
        assert_eq!(compute_placement_points(Some(20)), 1);
    }

    #[test]
    fn test_placement_points_floor_at_zero() {
        assert_eq!(compute_placement_points(Some(21)), 0);
        assert_eq!(compute_placement_points(Some(25)), 0);
        assert_eq!(compute_placement_points(None), 0);
    }

    #[test]
    fn test_standardized_points_at_base_time() {
        let points = compute_standardized_points(46.80, Style::Freestyle, Distance::M100, PoolSize::LongCourse);
        assert_eq!(points, 1000);
    }

    #[test]
    fn test_standardized_points_slower_time_scores_less() {
        let at_base = compute_standardized_points(46.80, Style::Freestyle, Distance::M100, PoolSize::LongCourse);
        let slower = compute_standardized_points(52.00, Style::Freestyle, Distance::M100, PoolSize::LongCourse);
        let much_slower = compute_standardized_points(60.00, Style::Freestyle, Distance::M100, PoolSize::LongCourse);
        assert!(slower < at_base);
        assert!(much_slower < slower);
    }

    #[test]
    fn test_open_water_scores_zero() {
        assert_eq!(
            compute_standardized_points(46.80, Style::Freestyle, Distance::M100, PoolSize::OpenWater),
            0
        );
    }

    #[test]
    fn test_missing_base_time_scores_zero() {
        assert_eq!(
            compute_standardized_points(300.0, Style::Medley, Distance::M50, PoolSize::LongCourse),
            0
        );
    }

    #[test]
    fn test_non_positive_time_scores_zero() {
        assert_eq!(
            compute_standardized_points(0.0, Style::Freestyle, Distance::M100, PoolSize::LongCourse),
            0
        );
    }

    #[test]
    fn test_implausibly_fast_time_saturates() {
        // 1000 * (20.91 / 0.01)^3 is far beyond u32 range; the cast caps it.
        let points = compute_standardized_points(0.01, Style::Freestyle, Distance::M50, PoolSize::LongCourse);
        assert_eq!(points, u32::MAX);
    }

    #[test]
    fn test_short_course_uses_same_table() {
        // Documented approximation: 25m records score against LCM base times.
        let lcm = compute_standardized_points(50.0, Style::Freestyle, Distance::M100, PoolSize::LongCourse);
        let scm = compute_standardized_points(50.0, Style::Freestyle, Distance::M100, PoolSize::ShortCourse);
        assert_eq!(lcm, scm);
    }

    proptest! {
        #[test]
        fn prop_placement_points_formula(placement in 1u32..10_000) {
            let expected = if placement >= 21 { 0 } else { 21 - placement };
            prop_assert_eq!(compute_placement_points(Some(placement)), expected);
        }

        #[test]
        fn prop_standardized_points_non_increasing(secs in 47u32..600) {
            let faster = compute_standardized_points(
                f64::from(secs),
                Style::Freestyle,
                Distance::M100,
                PoolSize::LongCourse,
            );
            let slower = compute_standardized_points(
                f64::from(secs) + 1.0,
                Style::Freestyle,
                Distance::M100,
                PoolSize::LongCourse,
            );
            prop_assert!(slower <= faster);
        }
    }
}
