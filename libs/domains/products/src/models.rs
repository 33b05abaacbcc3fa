use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Product entity - represents a product document stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, stored as its canonical string in `_id`
    #[serde(rename = "_id", alias = "id", with = "uuid_string")]
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    /// Fixed-point price, stored as a decimal string to keep its scale
    pub price: Decimal,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input view: the fields a caller supplies to create a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Iphone 14 pro Max")]
    pub name: String,
    #[validate(range(min = 0))]
    #[schema(example = 10)]
    pub quantity: i32,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "8.500")]
    pub price: Decimal,
    #[schema(example = true)]
    pub status: bool,
}

/// Update view: a sparse patch, only present fields are applied.
///
/// Timestamps are not part of the patch. Unknown keys (including
/// `created_at` and `updated_at`) are dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = Option<String>, example = "7.500")]
    pub price: Option<Decimal>,
    pub status: Option<bool>,
}

/// Partial fields handed to the gateway's `update_one`.
///
/// Carries no `created_at`: the creation timestamp cannot be written
/// through an update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
    pub status: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

/// Output view: the full product as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    #[schema(value_type = String, example = "8.500")]
    pub price: Decimal,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update-result view: the merged product after a successful update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductUpdateResponse {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    #[schema(value_type = String, example = "7.500")]
    pub price: Decimal,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Serializes a UUID as its hyphenated string in every format, so the
/// stored `_id` and by-id filters always agree.
mod uuid_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Uuid::parse_str(&raw).map_err(serde::de::Error::custom)
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.message = Some("price must not be negative".into());
        return Err(err);
    }
    Ok(())
}

impl Product {
    /// Create a new product from the input view, stamping both timestamps
    /// with the same instant
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            quantity: input.quantity,
            price: input.price,
            status: input.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge partial changes into this product.
    ///
    /// `created_at` is left untouched; `updated_at` always takes the value
    /// carried by the changes.
    pub fn apply_changes(&mut self, changes: ProductChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.updated_at = changes.updated_at;
    }
}

impl ProductChanges {
    /// Build the storage patch from a caller patch, with a freshly computed
    /// `updated_at`
    pub fn from_update(update: UpdateProduct, updated_at: DateTime<Utc>) -> Self {
        Self {
            name: update.name,
            quantity: update.quantity,
            price: update.price,
            status: update.status,
            updated_at,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            price: product.price,
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<Product> for ProductUpdateResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            price: product.price,
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
