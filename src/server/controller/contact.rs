use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        contact::{ContactDto, CreateContactDto, UpdateContactDto},
    },
    server::{
        error::AppError,
        model::contact::{CreateContactParams, UpdateContactParams},
        service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Get all contact submissions, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of submissions
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = CONTACT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved contact submissions", body = Vec<ContactDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contacts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ContactService::new(&state.db);

    let contacts = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            contacts
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a contact submission by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Submission ID to fetch
///
/// # Returns
/// - `200 OK` - Submission details
/// - `404 Not Found` - No submission with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(
        ("id" = i32, Path, description = "Contact submission ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved contact submission", body = ContactDto),
        (status = 404, description = "Contact submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contact_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContactService::new(&state.db);

    let contact = service.get_by_id(id).await?;

    match contact {
        Some(contact) => Ok((StatusCode::OK, Json(contact.into_dto()))),
        None => Err(AppError::NotFound("Contact not found".to_string())),
    }
}

/// Create a contact submission.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Submission with name, phone, address, and optional feedback
///
/// # Returns
/// - `201 Created` - Successfully created submission
/// - `400 Bad Request` - Missing fields or rating out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = CONTACT_TAG,
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Successfully created contact submission", body = ContactDto),
        (status = 400, description = "Invalid contact data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateContactParams::from_dto(payload)?;

    let service = ContactService::new(&state.db);

    let contact = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(contact.into_dto())))
}

/// Update a contact submission.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Submission ID to update
/// - `payload` - Changed fields; omitted fields keep their stored values
///
/// # Returns
/// - `200 OK` - Successfully updated submission
/// - `400 Bad Request` - Invalid fields
/// - `404 Not Found` - No submission with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(
        ("id" = i32, Path, description = "Contact submission ID")
    ),
    request_body = UpdateContactDto,
    responses(
        (status = 200, description = "Successfully updated contact submission", body = ContactDto),
        (status = 400, description = "Invalid contact data", body = ErrorDto),
        (status = 404, description = "Contact submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateContactParams::from_dto(payload)?;

    let service = ContactService::new(&state.db);

    let contact = service.update(id, params).await?;

    match contact {
        Some(contact) => Ok((StatusCode::OK, Json(contact.into_dto()))),
        None => Err(AppError::NotFound("Contact not found".to_string())),
    }
}

/// Delete a contact submission.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Submission ID to delete
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No submission with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(
        ("id" = i32, Path, description = "Contact submission ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted contact submission", body = MessageDto),
        (status = 404, description = "Contact submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContactService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Contact deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Contact not found".to_string()))
    }
}
