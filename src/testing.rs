//! Record and swimmer fixtures shared by the unit tests.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Distance, PoolSize, Style, Swimmer, TimeRecord};

pub(crate) fn swimmer(name: &str) -> Swimmer {
    Swimmer {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location: "Lisbon".to_string(),
    }
}

pub(crate) fn record_at(
    distance: Distance,
    style: Style,
    pool_size: PoolSize,
    total_seconds: f64,
) -> TimeRecord {
    record_for(Uuid::new_v4(), distance, style, pool_size, total_seconds)
}

pub(crate) fn record_for(
    swimmer_id: Uuid,
    distance: Distance,
    style: Style,
    pool_size: PoolSize,
    total_seconds: f64,
) -> TimeRecord {
    TimeRecord {
        id: Uuid::new_v4(),
        swimmer_id,
        distance,
        style,
        pool_size: Some(pool_size),
        time: format!("{:05.2}", total_seconds),
        total_seconds,
        placement: 1,
        points: 20,
        fina_points: 0,
        date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
        competition: "Club Meet".to_string(),
        competition_location: "Lisbon".to_string(),
    }
}
