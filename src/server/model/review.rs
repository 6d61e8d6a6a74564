//! Customer review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::review::{CreateReviewDto, ReviewDto, UpdateReviewDto};
use crate::server::error::AppError;

/// Customer review with a 0-5 star rating.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub rate: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            rate: entity.rate,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            name: self.name,
            description: self.description,
            rate: self.rate,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a review.
///
/// Description defaults to empty when omitted.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub name: String,
    pub description: String,
    pub rate: i32,
}

impl CreateReviewParams {
    pub fn from_dto(dto: CreateReviewDto) -> Result<Self, AppError> {
        let name = match dto.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(AppError::BadRequest("Name is required".to_string())),
        };

        let rate = dto
            .rate
            .ok_or_else(|| AppError::BadRequest("Rate is required".to_string()))?;
        check_rate(rate)?;

        Ok(Self {
            name,
            description: dto.description.unwrap_or_default(),
            rate,
        })
    }
}

/// Parameters for updating a review; `None` fields are retained.
#[derive(Debug, Clone)]
pub struct UpdateReviewParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub rate: Option<i32>,
}

impl UpdateReviewParams {
    pub fn from_dto(dto: UpdateReviewDto) -> Result<Self, AppError> {
        if let Some(name) = &dto.name {
            if name.is_empty() {
                return Err(AppError::BadRequest("Name is required".to_string()));
            }
        }

        if let Some(rate) = dto.rate {
            check_rate(rate)?;
        }

        Ok(Self {
            name: dto.name,
            description: dto.description,
            rate: dto.rate,
        })
    }
}

fn check_rate(rate: i32) -> Result<(), AppError> {
    if !(0..=5).contains(&rate) {
        return Err(AppError::BadRequest(
            "Rate must be between 0 and 5".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_out_of_range_rate() {
        let dto = CreateReviewDto {
            name: Some("Asha".to_string()),
            description: None,
            rate: Some(6),
        };

        let err = CreateReviewParams::from_dto(dto).unwrap_err();
        assert_eq!(err.to_string(), "Rate must be between 0 and 5");
    }

    #[test]
    fn create_defaults_description_to_empty() {
        let dto = CreateReviewDto {
            name: Some("Asha".to_string()),
            description: None,
            rate: Some(5),
        };

        let params = CreateReviewParams::from_dto(dto).unwrap();
        assert_eq!(params.description, "");
    }
}
