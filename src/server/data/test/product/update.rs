use super::*;

/// Tests replacing a product's stored fields.
///
/// Verifies that the new draft is persisted, the creation time is
/// preserved, and the update time moves forward.
///
/// Expected: Ok(Some) with the new fields
#[tokio::test]
async fn replaces_fields_and_preserves_creation_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(created.id, draft_with_slug("fresh-milk-2"))
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.product_name, "Fresh Milk");
    assert_eq!(updated.unit, Unit::Liter);
    assert_eq!(updated.slug, "fresh-milk-2");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a missing product.
///
/// Expected: Ok(None) with nothing inserted
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let updated = repo.update(9999, draft_with_slug("ghost")).await?;

    assert!(updated.is_none());

    let products = entity::prelude::Product::find().all(db).await?;
    assert!(products.is_empty());

    Ok(())
}
