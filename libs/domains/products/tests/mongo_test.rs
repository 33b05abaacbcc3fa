//! MongoDB repository tests
//!
//! Run against a throwaway MongoDB container. Ignored by default because
//! they need Docker: `cargo test -p domain_products -- --ignored`.

use chrono::Utc;
use domain_products::mongodb::DEFAULT_COLLECTION;
use domain_products::{
    CreateProduct, MongoProductRepository, Product, ProductChanges, ProductRepository,
    ProductService,
};
use mongodb::bson::doc;
use rust_decimal::Decimal;
use std::str::FromStr;
use test_utils::{assertions, TestDataBuilder, TestMongo};
use uuid::Uuid;

fn input(builder: &TestDataBuilder, suffix: &str) -> CreateProduct {
    CreateProduct {
        name: builder.name("product", suffix),
        quantity: builder.quantity(100),
        price: Decimal::from_str("8.500").unwrap(),
        status: true,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_and_find_round_trip() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("mongo_insert_find");

    let product = Product::new(input(&builder, "a"));
    let stored = repo.insert_one(product.clone()).await.unwrap();
    let found = assertions::assert_some(repo.find_one(stored.id).await.unwrap(), "find_one");

    assertions::assert_uuid_eq(found.id, product.id, "stored id");
    assert_eq!(found.price.to_string(), "8.500");
    assert_eq!(found, product);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_document_uses_string_underscore_id() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("mongo_raw_id");

    let stored = repo.insert_one(Product::new(input(&builder, "a"))).await.unwrap();

    let raw = mongo
        .database()
        .collection::<mongodb::bson::Document>(DEFAULT_COLLECTION)
        .find_one(doc! { "_id": stored.id.to_string() })
        .await
        .unwrap();
    assert!(raw.is_some());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_many_returns_every_document() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("mongo_find_many");

    assert!(repo.find_many().await.unwrap().is_empty());

    let a = repo.insert_one(Product::new(input(&builder, "a"))).await.unwrap();
    let b = repo.insert_one(Product::new(input(&builder, "b"))).await.unwrap();

    let ids: Vec<Uuid> = repo.find_many().await.unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a.id));
    assert!(ids.contains(&b.id));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_one_merges_fields_and_keeps_created_at() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("mongo_update");

    let stored = repo.insert_one(Product::new(input(&builder, "a"))).await.unwrap();
    let later = Utc::now() + chrono::Duration::seconds(1);

    let updated = repo
        .update_one(
            stored.id,
            ProductChanges {
                name: None,
                quantity: None,
                price: Some(Decimal::from_str("7.500").unwrap()),
                status: None,
                updated_at: later,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.price.to_string(), "7.500");
    assert_eq!(updated.name, stored.name);
    assert_eq!(updated.quantity, stored.quantity);
    assert_eq!(updated.created_at, stored.created_at);
    assertions::assert_strictly_after(updated.updated_at, stored.updated_at, "updated_at");

    let reread = repo.find_one(stored.id).await.unwrap().unwrap();
    assert_eq!(reread, updated);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete_missing_return_none() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let missing = Uuid::now_v7();

    let changes = ProductChanges {
        name: Some("B".to_string()),
        quantity: None,
        price: None,
        status: None,
        updated_at: Utc::now(),
    };

    assert!(repo.update_one(missing, changes).await.unwrap().is_none());
    assert!(repo.delete_one(missing).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_delete_once_over_mongo() {
    let mongo = TestMongo::new().await;
    let service = ProductService::new(MongoProductRepository::with_collection(
        &mongo.database(),
        "catalog",
    ));
    let builder = TestDataBuilder::from_test_name("mongo_service_delete");

    let created = service.create(input(&builder, "a")).await.unwrap();

    assert!(service.delete(created.id).await.unwrap());
    let err = service.delete(created.id).await.unwrap_err();
    assert_eq!(
        err.message(),
        format!("Product not found with filter: {}", created.id)
    );
}
