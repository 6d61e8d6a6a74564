use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        about::{AboutDto, CreateAboutDto, UpdateAboutDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError,
        model::about::{CreateAboutParams, UpdateAboutParams},
        service::about::AboutService,
        state::AppState,
    },
};

/// Tag for grouping about endpoints in OpenAPI documentation
pub static ABOUT_TAG: &str = "about";

/// Get all "about" entries, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of entries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/abouts",
    tag = ABOUT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved about entries", body = Vec<AboutDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_abouts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AboutService::new(&state.db);

    let abouts = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(abouts.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get an "about" entry by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Entry ID to fetch
///
/// # Returns
/// - `200 OK` - Entry details
/// - `404 Not Found` - No entry with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/abouts/{id}",
    tag = ABOUT_TAG,
    params(
        ("id" = i32, Path, description = "About entry ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved about entry", body = AboutDto),
        (status = 404, description = "About entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_about_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AboutService::new(&state.db);

    let about = service.get_by_id(id).await?;

    match about {
        Some(about) => Ok((StatusCode::OK, Json(about.into_dto()))),
        None => Err(AppError::NotFound("About not found".to_string())),
    }
}

/// Create an "about" entry.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Entry with title and optional description
///
/// # Returns
/// - `201 Created` - Successfully created entry
/// - `400 Bad Request` - Missing title
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/abouts",
    tag = ABOUT_TAG,
    request_body = CreateAboutDto,
    responses(
        (status = 201, description = "Successfully created about entry", body = AboutDto),
        (status = 400, description = "Invalid about data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_about(
    State(state): State<AppState>,
    Json(payload): Json<CreateAboutDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateAboutParams::from_dto(payload)?;

    let service = AboutService::new(&state.db);

    let about = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(about.into_dto())))
}

/// Update an "about" entry.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Entry ID to update
/// - `payload` - Changed fields; omitted fields keep their stored values
///
/// # Returns
/// - `200 OK` - Successfully updated entry
/// - `400 Bad Request` - Invalid fields
/// - `404 Not Found` - No entry with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/abouts/{id}",
    tag = ABOUT_TAG,
    params(
        ("id" = i32, Path, description = "About entry ID")
    ),
    request_body = UpdateAboutDto,
    responses(
        (status = 200, description = "Successfully updated about entry", body = AboutDto),
        (status = 400, description = "Invalid about data", body = ErrorDto),
        (status = 404, description = "About entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_about(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAboutDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateAboutParams::from_dto(payload)?;

    let service = AboutService::new(&state.db);

    let about = service.update(id, params).await?;

    match about {
        Some(about) => Ok((StatusCode::OK, Json(about.into_dto()))),
        None => Err(AppError::NotFound("About not found".to_string())),
    }
}

/// Delete an "about" entry.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Entry ID to delete
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No entry with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/abouts/{id}",
    tag = ABOUT_TAG,
    params(
        ("id" = i32, Path, description = "About entry ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted about entry", body = MessageDto),
        (status = 404, description = "About entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_about(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AboutService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "About deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("About not found".to_string()))
    }
}
