use super::*;

/// Tests creating an order with a line item.
///
/// Verifies that the customer snapshot, total, status, and items are all
/// persisted and returned together.
///
/// Expected: Ok with the order and its item stored
#[tokio::test]
async fn creates_order_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let order = repo.create(create_params()).await?;

    assert_eq!(order.customer.full_name, "Asha Patel");
    assert_eq!(order.customer.city, "Bengaluru");
    assert_eq!(order.total_price, 100.0);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_name, "Fresh Milk");
    assert_eq!(order.items[0].quantity, 2);

    // Verify the line item row is attached to the order
    let db_items = entity::prelude::OrderItem::find()
        .filter(entity::order_item::Column::OrderId.eq(order.id))
        .all(db)
        .await?;
    assert_eq!(db_items.len(), 1);

    Ok(())
}

/// Tests that a failed line-item insert rolls back the order row.
///
/// The context is built without the order_item table, so the item insert
/// fails after the order row was written inside the transaction.
///
/// Expected: Err, and no order row persisted
#[tokio::test]
async fn failed_item_insert_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let result = repo.create(create_params()).await;

    assert!(result.is_err());

    let orders = entity::prelude::Order::find().all(db).await?;
    assert!(orders.is_empty());

    Ok(())
}

/// Tests creating an order without line items.
///
/// Expected: Ok with an empty item list
#[tokio::test]
async fn creates_order_without_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let order = repo
        .create(CreateOrderParams {
            items: vec![],
            ..create_params()
        })
        .await?;

    assert!(order.items.is_empty());

    Ok(())
}
