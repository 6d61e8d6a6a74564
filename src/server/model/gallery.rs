//! Gallery domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::gallery::{CreateGalleryDto, GalleryDto, UpdateGalleryDto};
use crate::server::error::AppError;

/// Gallery entry holding the public path of a stored image.
#[derive(Debug, Clone)]
pub struct Gallery {
    pub id: i32,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Gallery {
    pub fn from_entity(entity: entity::gallery::Model) -> Self {
        Self {
            id: entity.id,
            image: entity.image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GalleryDto {
        GalleryDto {
            id: self.id,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a gallery entry.
#[derive(Debug, Clone)]
pub struct CreateGalleryParams {
    pub image: String,
}

impl CreateGalleryParams {
    pub fn from_dto(dto: CreateGalleryDto) -> Result<Self, AppError> {
        let image = match dto.image {
            Some(image) if !image.is_empty() => image,
            _ => return Err(AppError::BadRequest("Image is required".to_string())),
        };

        Ok(Self { image })
    }
}

/// Parameters for updating a gallery entry; `None` fields are retained.
#[derive(Debug, Clone)]
pub struct UpdateGalleryParams {
    pub image: Option<String>,
}

impl UpdateGalleryParams {
    pub fn from_dto(dto: UpdateGalleryDto) -> Result<Self, AppError> {
        if let Some(image) = &dto.image {
            if image.is_empty() {
                return Err(AppError::BadRequest("Image is required".to_string()));
            }
        }

        Ok(Self { image: dto.image })
    }
}
