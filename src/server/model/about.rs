//! "About us" content domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::about::{AboutDto, CreateAboutDto, UpdateAboutDto};
use crate::server::error::AppError;

#[derive(Debug, Clone)]
pub struct About {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl About {
    pub fn from_entity(entity: entity::about::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AboutDto {
        AboutDto {
            id: self.id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating an "about" entry.
///
/// Description defaults to empty when omitted.
#[derive(Debug, Clone)]
pub struct CreateAboutParams {
    pub title: String,
    pub description: String,
}

impl CreateAboutParams {
    pub fn from_dto(dto: CreateAboutDto) -> Result<Self, AppError> {
        let title = match dto.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(AppError::BadRequest("Title is required".to_string())),
        };

        Ok(Self {
            title,
            description: dto.description.unwrap_or_default(),
        })
    }
}

/// Parameters for updating an "about" entry; `None` fields are retained.
#[derive(Debug, Clone)]
pub struct UpdateAboutParams {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateAboutParams {
    pub fn from_dto(dto: UpdateAboutDto) -> Result<Self, AppError> {
        if let Some(title) = &dto.title {
            if title.is_empty() {
                return Err(AppError::BadRequest("Title is required".to_string()));
            }
        }

        Ok(Self {
            title: dto.title,
            description: dto.description,
        })
    }
}
