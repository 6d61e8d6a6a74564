use super::*;

/// Tests deleting a product.
///
/// Expected: Ok(true) with the row removed
#[tokio::test]
async fn deletes_existing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(deleted);
    let db_product = entity::prelude::Product::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_product.is_none());

    Ok(())
}

/// Tests deleting a missing product.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let deleted = repo.delete(9999).await?;

    assert!(!deleted);

    Ok(())
}
