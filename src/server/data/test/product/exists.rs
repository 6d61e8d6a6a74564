use super::*;

/// Tests the existence check for a stored product.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_stored_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    assert!(repo.exists(created.id).await?);

    Ok(())
}

/// Tests the existence check for a missing product.
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
    assert!(!repo.exists(9999).await?);

    Ok(())
}
