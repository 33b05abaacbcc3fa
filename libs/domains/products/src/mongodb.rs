//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Document},
    options::ReturnDocument,
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductChanges};
use crate::repository::ProductRepository;

/// Default collection name for products
pub const DEFAULT_COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository on the `products` collection
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Filter document addressing one product by id
    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": id.to_string() }
    }

    /// Build the `$set` document for a partial update.
    ///
    /// Only fields present in the changes are written. `created_at` is
    /// never part of the output.
    fn build_update(changes: &ProductChanges) -> ProductResult<Document> {
        let mut set = Document::new();

        if let Some(ref name) = changes.name {
            set.insert("name", name);
        }
        if let Some(quantity) = changes.quantity {
            set.insert("quantity", quantity);
        }
        if let Some(ref price) = changes.price {
            set.insert("price", to_bson(price)?);
        }
        if let Some(status) = changes.status {
            set.insert("status", status);
        }
        set.insert("updated_at", to_bson(&changes.updated_at)?);

        Ok(doc! { "$set": set })
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn insert_one(&self, product: Product) -> ProductResult<Product> {
        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product inserted");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_one(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_many(&self) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self, changes))]
    async fn update_one(
        &self,
        id: Uuid,
        changes: ProductChanges,
    ) -> ProductResult<Option<Product>> {
        let update = Self::build_update(&changes)?;

        let updated = self
            .collection
            .find_one_and_update(Self::id_filter(id), update)
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            tracing::info!(product_id = %id, "Product updated");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let deleted = self
            .collection
            .find_one_and_delete(Self::id_filter(id))
            .await?;

        if deleted.is_some() {
            tracing::info!(product_id = %id, "Product deleted");
        }
        Ok(deleted)
    }
}
