use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::Result;
use crate::models::{Distance, PoolSize, RaceTime, Style, TimeParts, TimeRecord};
use crate::scoring::{compute_placement_points, compute_standardized_points};

/// Request payload for logging a race result. This is the only way a
/// [`TimeRecord`] comes into existence: validation and scoring happen here,
/// and invalid input never becomes a record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTimeRecordRequest {
    pub swimmer_id: Uuid,
    pub distance: Distance,
    pub style: Style,

    #[serde(default)]
    pub pool_size: PoolSize,

    #[validate(nested)]
    pub time: TimeParts,

    #[validate(range(min = 1, message = "Placement must be at least 1"))]
    pub placement: u32,

    pub date: NaiveDate,

    #[validate(length(min = 1, max = 255, message = "Competition name is required"))]
    pub competition: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub competition_location: String,
}

impl CreateTimeRecordRequest {
    /// Validates the submission, canonicalizes the time, derives both scores
    /// and mints the immutable record. A record always carries a strictly
    /// positive total; an all-zero time is rejected like any other invalid
    /// input.
    pub fn into_record(self) -> Result<TimeRecord> {
        self.validate()?;

        let race_time = RaceTime::from_parts(self.time)?;
        if race_time.total_seconds <= 0.0 {
            let mut error = ValidationError::new("zero_time");
            error.message = Some("Time must be greater than zero".into());
            let mut errors = ValidationErrors::new();
            errors.add("time", error);
            return Err(errors.into());
        }
        let points = compute_placement_points(Some(self.placement));
        let fina_points =
            compute_standardized_points(race_time.total_seconds, self.style, self.distance, self.pool_size);

        Ok(TimeRecord {
            id: Uuid::new_v4(),
            swimmer_id: self.swimmer_id,
            distance: self.distance,
            style: self.style,
            pool_size: Some(self.pool_size),
            time: race_time.display,
            total_seconds: race_time.total_seconds,
            placement: self.placement,
            points,
            fina_points,
            date: self.date,
            competition: self.competition,
            competition_location: self.competition_location,
        })
    }
}
