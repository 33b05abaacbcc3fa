//! Product Service - use-case layer
//!
//! Sits between the HTTP handlers and the persistence gateway. Owns id
//! generation, timestamp stamping and the mapping of absent documents to
//! [`ProductError::NotFound`]. Storage errors are returned as they come.

use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, Product, ProductChanges, ProductResponse, ProductUpdateResponse, UpdateProduct,
};
use crate::repository::ProductRepository;

/// Product service providing the create/get/query/update/delete use-cases
///
/// Holds nothing but a shared handle to the gateway, so one instance can
/// serve any number of concurrent calls.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create(&self, input: CreateProduct) -> ProductResult<ProductResponse> {
        input.validate()?;

        let product = Product::new(input);
        let stored = self.repository.insert_one(product).await?;

        tracing::info!(product_id = %stored.id, "Product created");
        Ok(stored.into())
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ProductResult<ProductResponse> {
        self.repository
            .find_one(id)
            .await?
            .map(ProductResponse::from)
            .ok_or_else(|| ProductError::not_found(id))
    }

    /// List every product in the collection
    #[instrument(skip(self))]
    pub async fn query(&self) -> ProductResult<Vec<ProductResponse>> {
        let products = self.repository.find_many().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Apply a partial update to a product
    ///
    /// `updated_at` is always recomputed here; `created_at` is never
    /// written.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateProduct,
    ) -> ProductResult<ProductUpdateResponse> {
        input.validate()?;

        let changes = ProductChanges::from_update(input, Utc::now());
        let updated = self
            .repository
            .update_one(id, changes)
            .await?
            .ok_or_else(|| ProductError::not_found(id))?;

        tracing::info!(product_id = %id, "Product updated");
        Ok(updated.into())
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        self.repository
            .delete_one(id)
            .await?
            .ok_or_else(|| ProductError::not_found(id))?;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(true)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
