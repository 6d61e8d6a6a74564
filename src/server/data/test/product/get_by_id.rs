use super::*;

/// Tests fetching a product by ID.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn returns_product_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let product = repo.get_by_id(created.id).await?;

    assert!(product.is_some());
    let product = product.unwrap();
    assert_eq!(product.id, created.id);
    assert_eq!(product.product_name, created.product_name);

    Ok(())
}

/// Tests fetching a missing product.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo.get_by_id(9999).await?;

    assert!(product.is_none());

    Ok(())
}
