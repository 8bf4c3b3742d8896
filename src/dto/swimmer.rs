use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::models::Swimmer;

/// Request payload for registering a new swimmer
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSwimmerRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub location: String,
}

impl CreateSwimmerRequest {
    /// Validates the request and mints a swimmer with a fresh id.
    pub fn into_swimmer(self) -> Result<Swimmer> {
        self.validate()?;

        Ok(Swimmer {
            id: Uuid::new_v4(),
            name: self.name,
            location: self.location,
        })
    }
}
