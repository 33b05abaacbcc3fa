use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductChanges};

/// Persistence gateway for products.
///
/// Every by-id operation addresses a single document through the filter
/// `{ _id: id }`. Absence is reported as `None`, never as an error, so
/// callers decide how a missing document is surfaced.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new document and return it as stored
    async fn insert_one(&self, product: Product) -> ProductResult<Product>;

    /// Find the document matching the id
    async fn find_one(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Return every document in the collection
    async fn find_many(&self) -> ProductResult<Vec<Product>>;

    /// Merge partial fields into the matching document and return the result
    async fn update_one(&self, id: Uuid, changes: ProductChanges)
    -> ProductResult<Option<Product>>;

    /// Remove the matching document and return what was removed
    async fn delete_one(&self, id: Uuid) -> ProductResult<Option<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert_one(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_one(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn find_many(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn update_one(
        &self,
        id: Uuid,
        changes: ProductChanges,
    ) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products.get_mut(&id).map(|product| {
            product.apply_changes(changes);
            product.clone()
        }))
    }

    async fn delete_one(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id))
    }
}
