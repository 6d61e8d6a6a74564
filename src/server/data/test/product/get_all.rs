use super::*;

/// Tests listing products.
///
/// Verifies that all stored products are returned, newest first.
///
/// Expected: Ok with both products, later creation first
#[tokio::test]
async fn returns_products_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::product::create_product(db).await?;
    let second = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let products = repo.get_all().await?;

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, second.id);
    assert_eq!(products[1].id, first.id);

    Ok(())
}

/// Tests listing with no products stored.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let products = repo.get_all().await?;

    assert!(products.is_empty());

    Ok(())
}
