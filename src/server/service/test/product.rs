//! Write-path tests for the product service.
//!
//! These cover the coupling between records and stored image files: staged
//! uploads must disappear when the write fails, and replaced or deleted
//! products must not leave old files behind.

use sea_orm::{DatabaseConnection, EntityTrait};
use tempfile::TempDir;
use test_utils::builder::TestBuilder;

use crate::server::{
    error::AppError,
    model::product::{ProductForm, Unit},
    service::{
        product::ProductService,
        upload::{StagedUpload, UploadStore},
    },
};

fn store() -> (TempDir, UploadStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(dir.path());
    (dir, store)
}

async fn stage_image(store: &UploadStore, name: &str) -> StagedUpload {
    store
        .stage_bytes(Some("image/png"), Some(name), b"fake image bytes")
        .await
        .unwrap()
}

fn milk_form() -> ProductForm {
    ProductForm {
        product_name: Some("Fresh Milk".to_string()),
        unit: Some("liter".to_string()),
        quantity: Some("1".to_string()),
        description: Some("Farm fresh".to_string()),
        mrp: Some("60".to_string()),
        selling_price: Some("50".to_string()),
        slug: None,
    }
}

async fn catalog_db() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap()
}

/// A valid create stores the record with the staged file's public path.
#[tokio::test]
async fn create_persists_staged_image_path() {
    let test = catalog_db().await;
    let db: &DatabaseConnection = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let staged = stage_image(&uploads, "milk.png").await;
    let staged_path = staged.path.clone();
    let public_path = staged.public_path();

    let service = ProductService::new(db, &uploads);
    let product = service.create(milk_form(), Some(staged)).await.unwrap();

    assert_eq!(product.image, public_path);
    assert_eq!(product.unit, Unit::Liter);
    assert!(staged_path.exists());
}

/// A create without a file stores an empty image path.
#[tokio::test]
async fn create_without_file_stores_empty_image() {
    let test = catalog_db().await;
    let db = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let service = ProductService::new(db, &uploads);
    let product = service.create(milk_form(), None).await.unwrap();

    assert_eq!(product.image, "");
}

/// A rejected create discards the staged file and persists nothing.
#[tokio::test]
async fn failed_create_discards_staged_file() {
    let test = catalog_db().await;
    let db = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let staged = stage_image(&uploads, "milk.png").await;
    let staged_path = staged.path.clone();

    let form = ProductForm {
        selling_price: Some("70".to_string()),
        ..milk_form()
    };

    let service = ProductService::new(db, &uploads);
    let err = service.create(form, Some(staged)).await.unwrap_err();

    assert_eq!(err.to_string(), "Selling price cannot exceed MRP");
    assert!(!staged_path.exists());

    let products = entity::prelude::Product::find().all(db).await.unwrap();
    assert!(products.is_empty());
}

/// Updating with a new file stores the new path and removes the old file.
#[tokio::test]
async fn update_replaces_image_and_removes_old_file() {
    let test = catalog_db().await;
    let db = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let service = ProductService::new(db, &uploads);

    let first = stage_image(&uploads, "old.png").await;
    let first_path = first.path.clone();
    let created = service.create(milk_form(), Some(first)).await.unwrap();

    let second = stage_image(&uploads, "new.png").await;
    let second_path = second.path.clone();
    let second_public = second.public_path();

    let updated = service
        .update(created.id, ProductForm::default(), Some(second))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.image, second_public);
    assert!(second_path.exists());
    assert!(!first_path.exists());
}

/// A failed update discards the staged file and keeps the previous image.
#[tokio::test]
async fn failed_update_keeps_previous_image_file() {
    let test = catalog_db().await;
    let db = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let service = ProductService::new(db, &uploads);

    let first = stage_image(&uploads, "old.png").await;
    let first_path = first.path.clone();
    let first_public = first.public_path();
    let created = service.create(milk_form(), Some(first)).await.unwrap();

    let second = stage_image(&uploads, "new.png").await;
    let second_path = second.path.clone();

    let form = ProductForm {
        mrp: Some("-5".to_string()),
        ..ProductForm::default()
    };
    let err = service
        .update(created.id, form, Some(second))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(!second_path.exists());
    assert!(first_path.exists());

    let unchanged = service.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(unchanged.image, first_public);
}

/// Updating a missing product discards the staged file.
#[tokio::test]
async fn update_of_missing_product_discards_staged_file() {
    let test = catalog_db().await;
    let db = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let staged = stage_image(&uploads, "ghost.png").await;
    let staged_path = staged.path.clone();

    let service = ProductService::new(db, &uploads);
    let result = service
        .update(9999, ProductForm::default(), Some(staged))
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(!staged_path.exists());
}

/// A partial update keeps omitted fields and the stored image.
#[tokio::test]
async fn partial_update_keeps_omitted_fields() {
    let test = catalog_db().await;
    let db = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let service = ProductService::new(db, &uploads);
    let created = service.create(milk_form(), None).await.unwrap();

    let form = ProductForm {
        selling_price: Some("55".to_string()),
        ..ProductForm::default()
    };
    let updated = service
        .update(created.id, form, None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.selling_price, 55.0);
    assert_eq!(updated.product_name, created.product_name);
    assert_eq!(updated.quantity, created.quantity);
    assert_eq!(updated.slug, created.slug);
    assert_eq!(updated.image, created.image);
}

/// Renaming a product regenerates its slug; other updates keep it.
#[tokio::test]
async fn rename_regenerates_slug() {
    let test = catalog_db().await;
    let db = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let service = ProductService::new(db, &uploads);
    let created = service.create(milk_form(), None).await.unwrap();

    let form = ProductForm {
        product_name: Some("Toned Milk".to_string()),
        ..ProductForm::default()
    };
    let updated = service
        .update(created.id, form, None)
        .await
        .unwrap()
        .unwrap();

    assert_ne!(updated.slug, created.slug);
    assert!(updated.slug.starts_with("toned-milk-"));
}

/// The effective price pair is checked even when only one side changes.
#[tokio::test]
async fn update_rejects_price_invariant_on_merged_values() {
    let test = catalog_db().await;
    let db = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let service = ProductService::new(db, &uploads);
    let created = service.create(milk_form(), None).await.unwrap();

    // Stored selling price is 50; lowering MRP below it must fail.
    let form = ProductForm {
        mrp: Some("40".to_string()),
        ..ProductForm::default()
    };
    let err = service.update(created.id, form, None).await.unwrap_err();

    assert_eq!(err.to_string(), "Selling price cannot exceed MRP");
}

/// Identical names on different products still get distinct slugs.
#[tokio::test]
async fn identical_names_get_distinct_slugs() {
    let test = catalog_db().await;
    let db = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let service = ProductService::new(db, &uploads);
    let first = service.create(milk_form(), None).await.unwrap();
    let second = service.create(milk_form(), None).await.unwrap();

    assert_ne!(first.slug, second.slug);
}

/// Deleting a product removes its stored image file.
#[tokio::test]
async fn delete_removes_image_file() {
    let test = catalog_db().await;
    let db = test.db.as_ref().unwrap();
    let (_dir, uploads) = store();

    let service = ProductService::new(db, &uploads);

    let staged = stage_image(&uploads, "milk.png").await;
    let staged_path = staged.path.clone();
    let created = service.create(milk_form(), Some(staged)).await.unwrap();

    let deleted = service.delete(created.id).await.unwrap();

    assert!(deleted);
    assert!(!staged_path.exists());
    assert!(service.get_by_id(created.id).await.unwrap().is_none());
}
