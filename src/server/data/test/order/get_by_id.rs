use super::*;

/// Tests fetching an order by ID.
///
/// Expected: Ok(Some) with the customer snapshot and items
#[tokio::test]
async fn returns_order_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (created, items) = factory::order::create_order_with_items(db, 2).await?;

    let repo = OrderRepository::new(db);
    let order = repo.get_by_id(created.id).await?;

    assert!(order.is_some());
    let order = order.unwrap();
    assert_eq!(order.id, created.id);
    assert_eq!(order.customer.full_name, created.full_name);
    assert_eq!(order.items.len(), items.len());

    Ok(())
}

/// Tests fetching a missing order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let order = repo.get_by_id(9999).await?;

    assert!(order.is_none());

    Ok(())
}
