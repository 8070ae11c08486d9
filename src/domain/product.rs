//! Product entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A catalogue product referencing its [`Category`](super::Category) by id.
///
/// Identifiers and creation timestamps are assigned exactly once by
/// [`Product::new`] and never change; the replace operation only touches the
/// mutable fields (name, description, price, category reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Primary key, UUID v4 generated server-side.
    pub id: Uuid,
    /// Unique display name, 1-256 bytes.
    pub name: String,
    /// Free-text description, up to 512 bytes; may be empty.
    pub description: String,
    /// Price in the smallest currency unit, strictly positive.
    pub price: i32,
    /// Referenced category; the store enforces referential integrity.
    #[serde(rename = "categoryID")]
    pub category_id: Uuid,
    /// Creation instant in UTC, immutable.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Construct a product from already validated parts.
    ///
    /// Assigns a fresh identifier and the current UTC instant. This never
    /// fails; all payload rejection happens in
    /// [`validation`](super::validation) beforehand.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: i32,
        category_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            price,
            category_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn construction_assigns_fresh_identifiers() {
        let category = Uuid::new_v4();
        let a = Product::new("tea", "loose leaf", 450, category);
        let b = Product::new("tea", "loose leaf", 450, category);
        assert_ne!(a.id, b.id);
    }

    #[rstest]
    fn construction_timestamps_are_utc_now() {
        let before = Utc::now();
        let product = Product::new("tea", "", 450, Uuid::new_v4());
        assert!(product.created_at >= before);
        assert!(product.created_at <= Utc::now());
    }

    #[rstest]
    fn json_shape_uses_wire_field_names() {
        let product = Product::new("tea", "loose leaf", 450, Uuid::new_v4());
        let value = serde_json::to_value(&product).expect("product JSON");
        assert!(value.get("categoryID").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("category_id").is_none());
    }
}
