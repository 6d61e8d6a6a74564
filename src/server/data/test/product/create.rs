use super::*;

/// Tests creating a product from a validated draft.
///
/// Verifies that every field of the draft is persisted and that both
/// timestamps are set on creation.
///
/// Expected: Ok with the product stored as given
#[tokio::test]
async fn creates_product_from_draft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo.create(draft_with_slug("fresh-milk-1")).await?;

    assert_eq!(product.product_name, "Fresh Milk");
    assert_eq!(product.unit, Unit::Liter);
    assert_eq!(product.quantity, "1");
    assert_eq!(product.description, "Farm fresh");
    assert_eq!(product.image, "/uploads/milk.jpg");
    assert_eq!(product.mrp, 60.0);
    assert_eq!(product.selling_price, 50.0);
    assert_eq!(product.slug, "fresh-milk-1");
    assert_eq!(product.created_at, product.updated_at);

    // Verify product exists in database
    let db_product = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?;
    assert!(db_product.is_some());

    Ok(())
}

/// Tests the unique constraint on slugs.
///
/// Verifies that inserting a second product with an existing slug is
/// rejected by the database.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    repo.create(draft_with_slug("shared-slug")).await?;

    let result = repo.create(draft_with_slug("shared-slug")).await;
    assert!(result.is_err());

    Ok(())
}
