//! Diesel table definitions for the catalogue schema.
//!
//! These must match the statements executed by [`setup`](super::setup)
//! exactly; Diesel uses them for type-safe SQL generation.

diesel::table! {
    /// Product categories.
    categories (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique display name.
        name -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Catalogue products, each referencing a category.
    products (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique display name.
        name -> Text,
        /// Free-text description; may be empty.
        description -> Text,
        /// Price in the smallest currency unit.
        price -> Int4,
        /// Foreign key into `categories`.
        category_id -> Uuid,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(products -> categories (category_id));
diesel::allow_tables_to_appear_in_same_query!(categories, products);
