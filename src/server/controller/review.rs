use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::{
        error::AppError,
        model::review::{CreateReviewParams, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Get all reviews, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of reviews
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let reviews = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(reviews.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a review by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Review ID to fetch
///
/// # Returns
/// - `200 OK` - Review details
/// - `404 Not Found` - No review with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let review = service.get_by_id(id).await?;

    match review {
        Some(review) => Ok((StatusCode::OK, Json(review.into_dto()))),
        None => Err(AppError::NotFound("Review not found".to_string())),
    }
}

/// Create a review.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Review with name, optional description, and rating
///
/// # Returns
/// - `201 Created` - Successfully created review
/// - `400 Bad Request` - Missing fields or rating out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = ReviewDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateReviewParams::from_dto(payload)?;

    let service = ReviewService::new(&state.db);

    let review = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

/// Update a review.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Review ID to update
/// - `payload` - Changed fields; omitted fields keep their stored values
///
/// # Returns
/// - `200 OK` - Successfully updated review
/// - `400 Bad Request` - Invalid fields
/// - `404 Not Found` - No review with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Successfully updated review", body = ReviewDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateReviewParams::from_dto(payload)?;

    let service = ReviewService::new(&state.db);

    let review = service.update(id, params).await?;

    match review {
        Some(review) => Ok((StatusCode::OK, Json(review.into_dto()))),
        None => Err(AppError::NotFound("Review not found".to_string())),
    }
}

/// Delete a review.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Review ID to delete
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No review with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted review", body = MessageDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Review deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Review not found".to_string()))
    }
}
