use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        gallery::{CreateGalleryDto, GalleryDto, UpdateGalleryDto},
    },
    server::{
        error::AppError,
        model::gallery::{CreateGalleryParams, UpdateGalleryParams},
        service::gallery::GalleryService,
        state::AppState,
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

/// Get all gallery entries, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of gallery entries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/galleries",
    tag = GALLERY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved gallery entries", body = Vec<GalleryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_galleries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GalleryService::new(&state.db);

    let galleries = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            galleries
                .into_iter()
                .map(|g| g.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a gallery entry by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Gallery entry ID to fetch
///
/// # Returns
/// - `200 OK` - Gallery entry
/// - `404 Not Found` - No entry with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/galleries/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Gallery entry ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved gallery entry", body = GalleryDto),
        (status = 404, description = "Gallery entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GalleryService::new(&state.db);

    let gallery = service.get_by_id(id).await?;

    match gallery {
        Some(gallery) => Ok((StatusCode::OK, Json(gallery.into_dto()))),
        None => Err(AppError::NotFound("Gallery not found".to_string())),
    }
}

/// Create a gallery entry.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Gallery entry with the image path
///
/// # Returns
/// - `201 Created` - Successfully created entry
/// - `400 Bad Request` - Missing image
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/galleries",
    tag = GALLERY_TAG,
    request_body = CreateGalleryDto,
    responses(
        (status = 201, description = "Successfully created gallery entry", body = GalleryDto),
        (status = 400, description = "Invalid gallery data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_gallery(
    State(state): State<AppState>,
    Json(payload): Json<CreateGalleryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateGalleryParams::from_dto(payload)?;

    let service = GalleryService::new(&state.db);

    let gallery = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(gallery.into_dto())))
}

/// Update a gallery entry.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Gallery entry ID to update
/// - `payload` - Changed fields; omitted fields keep their stored values
///
/// # Returns
/// - `200 OK` - Successfully updated entry
/// - `400 Bad Request` - Empty image
/// - `404 Not Found` - No entry with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/galleries/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Gallery entry ID")
    ),
    request_body = UpdateGalleryDto,
    responses(
        (status = 200, description = "Successfully updated gallery entry", body = GalleryDto),
        (status = 400, description = "Invalid gallery data", body = ErrorDto),
        (status = 404, description = "Gallery entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_gallery(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGalleryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateGalleryParams::from_dto(payload)?;

    let service = GalleryService::new(&state.db);

    let gallery = service.update(id, params).await?;

    match gallery {
        Some(gallery) => Ok((StatusCode::OK, Json(gallery.into_dto()))),
        None => Err(AppError::NotFound("Gallery not found".to_string())),
    }
}

/// Delete a gallery entry.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Gallery entry ID to delete
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No entry with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/galleries/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Gallery entry ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted gallery entry", body = MessageDto),
        (status = 404, description = "Gallery entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_gallery(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GalleryService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Gallery deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Gallery not found".to_string()))
    }
}
