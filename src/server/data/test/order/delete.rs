use super::*;

/// Tests deleting an order.
///
/// Verifies that the line items are removed along with the order through
/// the foreign key.
///
/// Expected: Ok(true) with no remaining rows
#[tokio::test]
async fn deletes_order_and_its_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (created, _) = factory::order::create_order_with_items(db, 2).await?;

    let repo = OrderRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(deleted);

    let db_order = entity::prelude::Order::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_order.is_none());

    let db_items = entity::prelude::OrderItem::find()
        .filter(entity::order_item::Column::OrderId.eq(created.id))
        .all(db)
        .await?;
    assert!(db_items.is_empty());

    Ok(())
}

/// Tests deleting a missing order.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let deleted = repo.delete(9999).await?;

    assert!(!deleted);

    Ok(())
}
