//! In-memory port implementations and app builders for handler tests.

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    CategoryRepository, ProductRepository, ProductUpdate, RepositoryError,
};
use crate::domain::{Category, Product};
use crate::inbound::http::state::HttpState;

/// In-memory catalogue enforcing the same constraints as the PostgreSQL
/// schema: unique names per table and a resolvable category reference.
#[derive(Default)]
pub struct InMemoryCatalog {
    products: Mutex<Vec<Product>>,
    categories: Mutex<Vec<Category>>,
}

impl InMemoryCatalog {
    /// Seed a category directly, bypassing the HTTP surface.
    pub fn seed_category(&self, category: Category) {
        self.categories
            .lock()
            .expect("category lock")
            .push(category);
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        let categories = self.categories.lock().expect("category lock");
        if !categories.iter().any(|c| c.id == product.category_id) {
            return Err(RepositoryError::conflict(
                "referenced category does not exist",
            ));
        }
        drop(categories);

        let mut products = self.products.lock().expect("product lock");
        if products.iter().any(|p| p.name == product.name) {
            return Err(RepositoryError::conflict("product name already exists"));
        }
        products.push(product.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        update: &ProductUpdate,
    ) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().expect("product lock");
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RepositoryError::not_found("product not found"))?;
        product.name = update.name.clone();
        product.description = update.description.clone();
        product.price = update.price;
        product.category_id = update.category_id;
        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.products
            .lock()
            .expect("product lock")
            .retain(|p| p.id != id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.lock().expect("product lock").clone())
    }

    async fn get(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.products
            .lock()
            .expect("product lock")
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("product not found"))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn create(&self, category: &Category) -> Result<(), RepositoryError> {
        let mut categories = self.categories.lock().expect("category lock");
        if categories.iter().any(|c| c.name == category.name) {
            return Err(RepositoryError::conflict("category name already exists"));
        }
        categories.push(category.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.categories.lock().expect("category lock").clone())
    }
}

/// Repository that fails every operation with a fixed error, for exercising
/// the 5xx mapping.
pub struct FailingCatalog(pub RepositoryError);

#[async_trait]
impl ProductRepository for FailingCatalog {
    async fn create(&self, _product: &Product) -> Result<(), RepositoryError> {
        Err(self.0.clone())
    }

    async fn update(
        &self,
        _id: Uuid,
        _update: &ProductUpdate,
    ) -> Result<Product, RepositoryError> {
        Err(self.0.clone())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
        Err(self.0.clone())
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(self.0.clone())
    }

    async fn get(&self, _id: Uuid) -> Result<Product, RepositoryError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl CategoryRepository for FailingCatalog {
    async fn create(&self, _category: &Category) -> Result<(), RepositoryError> {
        Err(self.0.clone())
    }

    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        Err(self.0.clone())
    }
}

/// HTTP state backed by a shared in-memory catalogue.
pub fn in_memory_state(catalog: Arc<InMemoryCatalog>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(catalog.clone(), catalog))
}

/// HTTP state whose every operation fails with the given error.
pub fn failing_state(error: RepositoryError) -> web::Data<HttpState> {
    let catalog = Arc::new(FailingCatalog(error));
    web::Data::new(HttpState::new(catalog.clone(), catalog))
}
