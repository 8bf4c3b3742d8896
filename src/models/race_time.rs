use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::Result;

/// Raw time input as it comes off a submission form. Seconds are required;
/// minutes and centiseconds default to zero when left blank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema)]
pub struct TimeParts {
    #[serde(default)]
    pub minutes: u32,

    #[validate(range(max = 59, message = "Seconds must be between 0 and 59"))]
    pub seconds: u32,

    #[serde(default)]
    #[validate(range(max = 99, message = "Centiseconds must be between 0 and 99"))]
    pub centiseconds: u32,
}

impl TimeParts {
    pub fn new(minutes: u32, seconds: u32, centiseconds: u32) -> Self {
        Self {
            minutes,
            seconds,
            centiseconds,
        }
    }
}

/// Canonical form of a race time: the `[M:]SS.CC` display string and the
/// total-seconds value every comparison runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RaceTime {
    pub display: String,
    pub total_seconds: f64,
}

impl RaceTime {
    /// Converts validated time parts into canonical form. Out-of-range parts
    /// are rejected, never clamped.
    pub fn from_parts(parts: TimeParts) -> Result<Self> {
        parts.validate()?;

        let display = if parts.minutes > 0 {
            format!("{}:{:02}.{:02}", parts.minutes, parts.seconds, parts.centiseconds)
        } else {
            format!("{:02}.{:02}", parts.seconds, parts.centiseconds)
        };
        let total_seconds =
            f64::from(parts.minutes) * 60.0 + f64::from(parts.seconds) + f64::from(parts.centiseconds) / 100.0;

        Ok(Self {
            display,
            total_seconds,
        })
    }
}

/// Convenience wrapper over [`RaceTime::from_parts`].
pub fn compute_time_from_parts(minutes: u32, seconds: u32, centiseconds: u32) -> Result<RaceTime> {
    RaceTime::from_parts(TimeParts::new(minutes, seconds, centiseconds))
}
