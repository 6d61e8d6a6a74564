use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::{CreateOrderDto, CreateOrderResponseDto, OrderDto, UpdateOrderDto},
    },
    server::{
        error::AppError,
        model::order::{CreateOrderParams, UpdateOrderParams},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Get all orders.
///
/// Returns every order with its customer block and line items, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of orders
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved orders", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let orders = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(orders.into_iter().map(|o| o.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get an order by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Order ID to fetch
///
/// # Returns
/// - `200 OK` - Order with customer block and line items
/// - `404 Not Found` - No order with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved order", body = OrderDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let order = service.get_by_id(id).await?;

    match order {
        Some(order) => Ok((StatusCode::OK, Json(order.into_dto()))),
        None => Err(AppError::NotFound("Order not found".to_string())),
    }
}

/// Create a new order.
///
/// Validates the customer block and line items, stores the order, then hands
/// the admin notification email to a background task. The task is dispatched
/// before the response body is flushed, but the response never waits on the
/// send; a failure is logged and the order stands.
///
/// # Arguments
/// - `state` - Application state containing the database connection and mailer
/// - `payload` - Order submission with customer block and line items
///
/// # Returns
/// - `201 Created` - Confirmation message and the stored order
/// - `400 Bad Request` - Missing or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully created order", body = CreateOrderResponseDto),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateOrderParams::from_dto(payload)?;

    let service = OrderService::new(&state.db);

    let order = service.create(params).await?;

    if let Some(mailer) = state.mailer.clone() {
        let notify = order.clone();

        tokio::spawn(async move {
            if let Err(err) = mailer.send_order_notification(&notify).await {
                tracing::warn!("Failed to send order notification email: {err}");
            }
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponseDto {
            message: "Order created successfully".to_string(),
            order: order.into_dto(),
        }),
    ))
}

/// Update an order.
///
/// Accepts a partial payload; omitted fields keep their stored values. Line
/// items are fixed once an order is created.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Order ID to update
/// - `payload` - Changed customer fields, total price, or status
///
/// # Returns
/// - `200 OK` - Successfully updated order
/// - `400 Bad Request` - Invalid fields
/// - `404 Not Found` - No order with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Successfully updated order", body = OrderDto),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateOrderParams::from_dto(payload)?;

    let service = OrderService::new(&state.db);

    let order = service.update(id, params).await?;

    match order {
        Some(order) => Ok((StatusCode::OK, Json(order.into_dto()))),
        None => Err(AppError::NotFound("Order not found".to_string())),
    }
}

/// Delete an order.
///
/// Removes the order and its line items.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Order ID to delete
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No order with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted order", body = MessageDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Order deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Order not found".to_string()))
    }
}
