//! Item DTOs for create and update operations.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::ItemPatch;

/// Request body for `POST /api/items`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// Text content of the new item.
    pub description: String,
}

/// Request body for `PUT /api/items/{id}`.
///
/// Both fields are optional; omitted fields keep their stored values.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    /// Replacement text content.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement completion status.
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            description: req.description,
            completed: req.completed,
        }
    }
}
