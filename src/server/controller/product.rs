use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        product::ProductDto,
    },
    server::{
        error::{upload::UploadError, AppError},
        model::product::ProductForm,
        service::{
            product::ProductService,
            upload::{StagedUpload, UploadStore},
        },
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Reads a product multipart form, staging the image part as it arrives.
///
/// Text parts are collected by their form field name; an `image` part is
/// written to the upload store immediately. When the stream fails midway,
/// anything already staged is discarded before the error propagates, so no
/// request leaves stray files regardless of where it broke off.
///
/// # Returns
/// - `Ok((form, staged))` - Collected text fields and the staged image, if any
/// - `Err(AppError)` - Rejected file or malformed multipart stream
async fn read_form(
    uploads: &UploadStore,
    mut multipart: Multipart,
) -> Result<(ProductForm, Option<StagedUpload>), AppError> {
    let mut form = ProductForm::default();
    let mut staged: Option<StagedUpload> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                if let Some(staged) = &staged {
                    uploads.discard(staged).await;
                }
                return Err(UploadError::from(err).into());
            }
        };

        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" {
            match uploads.stage_field(field).await {
                Ok(new_staged) => {
                    // A repeated image part wins; drop the earlier file.
                    if let Some(old) = staged.replace(new_staged) {
                        uploads.discard(&old).await;
                    }
                }
                Err(err) => {
                    if let Some(staged) = &staged {
                        uploads.discard(staged).await;
                    }
                    return Err(err.into());
                }
            }
            continue;
        }

        let value = match field.text().await {
            Ok(value) => value,
            Err(err) => {
                if let Some(staged) = &staged {
                    uploads.discard(staged).await;
                }
                return Err(UploadError::from(err).into());
            }
        };

        match name.as_str() {
            "productName" => form.product_name = Some(value),
            "unit" => form.unit = Some(value),
            "quantity" => form.quantity = Some(value),
            "description" => form.description = Some(value),
            "mrp" => form.mrp = Some(value),
            "sellingPrice" => form.selling_price = Some(value),
            "slug" => form.slug = Some(value),
            _ => {}
        }
    }

    Ok((form, staged))
}

/// Get all products.
///
/// Returns every product in the catalog, newest first, each carrying its
/// derived discount percentage.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of products
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db, &state.uploads);

    let products = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(products.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a product by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Product ID to fetch
///
/// # Returns
/// - `200 OK` - Product details with derived discount
/// - `404 Not Found` - No product with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db, &state.uploads);

    let product = service.get_by_id(id).await?;

    match product {
        Some(product) => Ok((StatusCode::OK, Json(product.into_dto()))),
        None => Err(AppError::NotFound("Product not found".to_string())),
    }
}

/// Create a new product.
///
/// Accepts a multipart form with the product fields as text parts and an
/// optional `image` file part. A rejected request leaves no file behind.
///
/// # Arguments
/// - `state` - Application state containing the database connection and upload store
/// - `multipart` - Multipart form with product fields and optional image
///
/// # Returns
/// - `201 Created` - Successfully created product
/// - `400 Bad Request` - Missing or invalid fields, or a rejected file
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 201, description = "Successfully created product", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (form, staged) = read_form(&state.uploads, multipart).await?;

    let service = ProductService::new(&state.db, &state.uploads);

    let product = service.create(form, staged).await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Update a product.
///
/// Accepts the same multipart form as creation; omitted fields keep their
/// stored values. The existence check runs before the body is read, so an
/// update against a missing product never touches the filesystem.
///
/// # Arguments
/// - `state` - Application state containing the database connection and upload store
/// - `id` - Product ID to update
/// - `multipart` - Multipart form with changed fields and optional image
///
/// # Returns
/// - `200 OK` - Successfully updated product
/// - `400 Bad Request` - Invalid fields or a rejected file
/// - `404 Not Found` - No product with the given ID
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully updated product", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db, &state.uploads);

    if !service.exists(id).await? {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let (form, staged) = read_form(&state.uploads, multipart).await?;

    let product = service.update(id, form, staged).await?;

    match product {
        Some(product) => Ok((StatusCode::OK, Json(product.into_dto()))),
        None => Err(AppError::NotFound("Product not found".to_string())),
    }
}

/// Delete a product.
///
/// Removes the record and its stored image file.
///
/// # Arguments
/// - `state` - Application state containing the database connection and upload store
/// - `id` - Product ID to delete
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No product with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted product", body = MessageDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db, &state.uploads);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Product deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Product not found".to_string()))
    }
}
