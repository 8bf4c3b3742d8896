//! Static reference tables: standardized-scoring base times and the full
//! event cross-product. These are configuration constants, not runtime state.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{EngineError, Result};
use crate::models::{Distance, EventKey, PoolSize, Style};

/// Approximate world-record base times in seconds (men's long-course
/// reference) used for standardized point calculation. Combinations missing
/// here score zero. The same table is applied to 25m records; short-course
/// conversion factors are out of scope.
pub const BASE_TIMES: &[(Style, Distance, f64)] = &[
    (Style::Freestyle, Distance::M50, 20.91),
    (Style::Freestyle, Distance::M100, 46.80),
    (Style::Freestyle, Distance::M200, 102.00),
    (Style::Freestyle, Distance::M400, 220.07),
    (Style::Freestyle, Distance::M800, 452.12),
    (Style::Freestyle, Distance::M1500, 871.02),
    (Style::Backstroke, Distance::M50, 23.55),
    (Style::Backstroke, Distance::M100, 51.60),
    (Style::Backstroke, Distance::M200, 111.92),
    (Style::Breaststroke, Distance::M50, 25.95),
    (Style::Breaststroke, Distance::M100, 56.88),
    (Style::Breaststroke, Distance::M200, 125.48),
    (Style::Butterfly, Distance::M50, 22.27),
    (Style::Butterfly, Distance::M100, 49.45),
    (Style::Butterfly, Distance::M200, 110.34),
    (Style::Medley, Distance::M200, 114.00),
    (Style::Medley, Distance::M400, 242.50),
];

static BASE_TIME_INDEX: LazyLock<HashMap<(Style, Distance), f64>> =
    LazyLock::new(|| BASE_TIMES.iter().map(|&(style, distance, secs)| ((style, distance), secs)).collect());

/// Reference time for a `(style, distance)` pair, if one is defined.
pub fn base_time(style: Style, distance: Distance) -> Option<f64> {
    BASE_TIME_INDEX.get(&(style, distance)).copied()
}

/// Startup check: every base time must be strictly positive.
pub fn validate_base_times() -> Result<()> {
    for &(style, distance, secs) in BASE_TIMES {
        if secs <= 0.0 {
            return Err(EngineError::Reference(format!(
                "base time for {} {} must be positive, got {}",
                distance, style, secs
            )));
        }
    }
    Ok(())
}

/// Every enumerable event combination, in style, then distance, then pool
/// size order. Head-to-head iterates this instead of nesting loops per call.
static ALL_EVENT_KEYS: LazyLock<Vec<EventKey>> = LazyLock::new(|| {
    let mut keys = Vec::with_capacity(Style::ALL.len() * Distance::ALL.len() * PoolSize::ALL.len());
    for style in Style::ALL {
        for distance in Distance::ALL {
            for pool_size in PoolSize::ALL {
                keys.push(EventKey::new(distance, style, pool_size));
            }
        }
    }
    keys
});

pub fn all_event_keys() -> &'static [EventKey] {
    &ALL_EVENT_KEYS
}
