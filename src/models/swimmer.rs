use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered swimmer. Created once, never mutated; deleting one orphans
/// its time records (the engine does not cascade).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Swimmer {
    pub id: Uuid,
    pub name: String,
    /// Team or region, free text, may be empty.
    pub location: String,
}
