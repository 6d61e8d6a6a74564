use super::*;

/// Tests listing orders.
///
/// Verifies that all orders are returned newest first, each with its own
/// line items.
///
/// Expected: Ok with both orders, later creation first
#[tokio::test]
async fn returns_orders_newest_first_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::order::create_order_with_items(db, 1).await?;
    let (second, _) = factory::order::create_order_with_items(db, 2).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.get_all().await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, second.id);
    assert_eq!(orders[0].items.len(), 2);
    assert_eq!(orders[1].id, first.id);
    assert_eq!(orders[1].items.len(), 1);

    Ok(())
}

/// Tests listing with no orders stored.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let orders = repo.get_all().await?;

    assert!(orders.is_empty());

    Ok(())
}
