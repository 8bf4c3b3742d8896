use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Race distance labels. Pool events up to 1500m plus open-water kilometre marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Distance {
    #[serde(rename = "50m")]
    M50,
    #[serde(rename = "100m")]
    M100,
    #[serde(rename = "200m")]
    M200,
    #[serde(rename = "400m")]
    M400,
    #[serde(rename = "500m")]
    M500,
    #[serde(rename = "800m")]
    M800,
    #[serde(rename = "1500m")]
    M1500,
    #[serde(rename = "1km")]
    Km1,
    #[serde(rename = "1.5km")]
    Km1_5,
    #[serde(rename = "2km")]
    Km2,
    #[serde(rename = "3km")]
    Km3,
    #[serde(rename = "5km")]
    Km5,
}

impl Distance {
    pub const ALL: [Distance; 12] = [
        Distance::M50,
        Distance::M100,
        Distance::M200,
        Distance::M400,
        Distance::M500,
        Distance::M800,
        Distance::M1500,
        Distance::Km1,
        Distance::Km1_5,
        Distance::Km2,
        Distance::Km3,
        Distance::Km5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M50 => "50m",
            Self::M100 => "100m",
            Self::M200 => "200m",
            Self::M400 => "400m",
            Self::M500 => "500m",
            Self::M800 => "800m",
            Self::M1500 => "1500m",
            Self::Km1 => "1km",
            Self::Km1_5 => "1.5km",
            Self::Km2 => "2km",
            Self::Km3 => "3km",
            Self::Km5 => "5km",
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stroke styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Style {
    Freestyle,
    Breaststroke,
    Butterfly,
    Backstroke,
    Medley,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Freestyle,
        Style::Breaststroke,
        Style::Butterfly,
        Style::Backstroke,
        Style::Medley,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Freestyle => "Freestyle",
            Self::Breaststroke => "Breaststroke",
            Self::Butterfly => "Butterfly",
            Self::Backstroke => "Backstroke",
            Self::Medley => "Medley",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the race took place. Legacy records may omit this; every read path
/// must fall back to the long-course default before grouping or comparing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PoolSize {
    #[serde(rename = "25m")]
    ShortCourse,
    #[default]
    #[serde(rename = "50m")]
    LongCourse,
    #[serde(rename = "Open Water")]
    OpenWater,
}

impl PoolSize {
    pub const ALL: [PoolSize; 3] = [PoolSize::ShortCourse, PoolSize::LongCourse, PoolSize::OpenWater];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortCourse => "25m",
            Self::LongCourse => "50m",
            Self::OpenWater => "Open Water",
        }
    }
}

impl fmt::Display for PoolSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite key every grouping and comparison runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct EventKey {
    pub distance: Distance,
    pub style: Style,
    pub pool_size: PoolSize,
}

impl EventKey {
    pub fn new(distance: Distance, style: Style, pool_size: PoolSize) -> Self {
        Self {
            distance,
            style,
            pool_size,
        }
    }

    /// Human-readable event label, e.g. `100m Freestyle (50m)`.
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.distance, self.style, self.pool_size)
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.distance, self.style, self.pool_size)
    }
}
