use super::*;

/// Tests updating only the status of an order.
///
/// Verifies that the customer snapshot and line items are untouched when
/// only the status is supplied.
///
/// Expected: Ok(Some) with the new status and old customer
#[tokio::test]
async fn updates_status_and_keeps_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (created, items) = factory::order::create_order_with_items(db, 2).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateOrderParams {
                customer: None,
                total_price: None,
                status: Some(OrderStatus::Shipped),
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.status, OrderStatus::Shipped);
    assert_eq!(updated.customer.full_name, created.full_name);
    assert_eq!(updated.total_price, created.total_price);
    assert_eq!(updated.items.len(), items.len());

    Ok(())
}

/// Tests replacing the customer block of an order.
///
/// Expected: Ok(Some) with the new customer and old status
#[tokio::test]
async fn replaces_customer_block() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::order::create_order(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateOrderParams {
                customer: Some(Customer {
                    full_name: "Ravi Kumar".to_string(),
                    mobile: "9812345678".to_string(),
                    email: "ravi@example.com".to_string(),
                    pincode: "110001".to_string(),
                    city: "Delhi".to_string(),
                    address: "4 Connaught Place".to_string(),
                }),
                total_price: Some(250.0),
                status: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.customer.full_name, "Ravi Kumar");
    assert_eq!(updated.customer.city, "Delhi");
    assert_eq!(updated.total_price, 250.0);
    assert_eq!(updated.status, OrderStatus::Pending);

    Ok(())
}

/// Tests updating a missing order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(
            9999,
            UpdateOrderParams {
                customer: None,
                total_price: None,
                status: Some(OrderStatus::Confirmed),
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
