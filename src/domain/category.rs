//! Category entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A product grouping with a unique name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Primary key, UUID v4 generated server-side.
    pub id: Uuid,
    /// Unique display name, 1-256 bytes.
    pub name: String,
    /// Creation instant in UTC, immutable.
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Construct a category from an already validated name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
