//! Internal Diesel row structs.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain. Conversions to and from the domain entities live here so the
//! repositories stay focused on query shape.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::ports::ProductUpdate;
use crate::domain::{Category, Product};

use super::schema::{categories, products};

/// Row struct for reading from the products table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            category_id: row.category_id,
            created_at: row.created_at,
        }
    }
}

/// Insertable struct for creating product rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: &'a str,
    pub price: i32,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a Product> for NewProductRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: product.id,
            name: &product.name,
            description: &product.description,
            price: product.price,
            category_id: product.category_id,
            created_at: product.created_at,
        }
    }
}

/// Changeset replacing the mutable product columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = products)]
pub(crate) struct ProductChangeset<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: i32,
    pub category_id: Uuid,
}

impl<'a> From<&'a ProductUpdate> for ProductChangeset<'a> {
    fn from(update: &'a ProductUpdate) -> Self {
        Self {
            name: &update.name,
            description: &update.description,
            price: update.price,
            category_id: update.category_id,
        }
    }
}

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

/// Insertable struct for creating category rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a Category> for NewCategoryRow<'a> {
    fn from(category: &'a Category) -> Self {
        Self {
            id: category.id,
            name: &category.name,
            created_at: category.created_at,
        }
    }
}
