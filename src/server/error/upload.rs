use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while receiving and staging an uploaded file.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The uploaded part is not an image.
    ///
    /// Results in 400 Bad Request. Only `image/*` content types are accepted.
    #[error("Only image files are allowed")]
    NotAnImage,

    /// The uploaded file exceeds the size limit.
    ///
    /// Results in 400 Bad Request.
    ///
    /// # Fields
    /// - `size` - Received size in bytes
    /// - `limit` - Maximum accepted size in bytes
    #[error("File too large: {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    /// The multipart stream was malformed or truncated.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    Multipart(#[from] MultipartError),

    /// Filesystem failure while writing or removing a staged file.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Maps upload errors to HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For rejected files and malformed multipart streams
/// - 500 Internal Server Error - For filesystem failures, with a generic message
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAnImage | Self::TooLarge { .. } | Self::Multipart(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    message: self.to_string(),
                }),
            )
                .into_response(),
            Self::Io(err) => {
                tracing::error!("Upload storage error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
