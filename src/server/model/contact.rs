//! Contact submission domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::contact::{ContactDto, CreateContactDto, UpdateContactDto};
use crate::server::error::AppError;

/// Contact form submission with an optional feedback note and rating.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: i32,
    pub fullname: String,
    pub phone: String,
    pub address: String,
    pub feedback: Option<String>,
    pub rating: i32,
    pub submitted_at: DateTime<Utc>,
}

impl Contact {
    pub fn from_entity(entity: entity::contact::Model) -> Self {
        Self {
            id: entity.id,
            fullname: entity.fullname,
            phone: entity.phone,
            address: entity.address,
            feedback: entity.feedback,
            rating: entity.rating,
            submitted_at: entity.submitted_at,
        }
    }

    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            id: self.id,
            fullname: self.fullname,
            phone: self.phone,
            address: self.address,
            feedback: self.feedback,
            rating: self.rating,
            submitted_at: self.submitted_at,
        }
    }
}

/// Parameters for creating a contact submission.
///
/// Rating defaults to zero when omitted.
#[derive(Debug, Clone)]
pub struct CreateContactParams {
    pub fullname: String,
    pub phone: String,
    pub address: String,
    pub feedback: Option<String>,
    pub rating: i32,
}

impl CreateContactParams {
    pub fn from_dto(dto: CreateContactDto) -> Result<Self, AppError> {
        let fullname = required(dto.fullname, "Fullname is required")?;
        let phone = required(dto.phone, "Phone is required")?;
        let address = required(dto.address, "Address is required")?;

        let rating = dto.rating.unwrap_or(0);
        check_rating(rating)?;

        Ok(Self {
            fullname,
            phone,
            address,
            feedback: dto.feedback,
            rating,
        })
    }
}

/// Parameters for updating a contact submission; `None` fields are retained.
#[derive(Debug, Clone)]
pub struct UpdateContactParams {
    pub fullname: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
}

impl UpdateContactParams {
    pub fn from_dto(dto: UpdateContactDto) -> Result<Self, AppError> {
        if let Some(fullname) = &dto.fullname {
            if fullname.is_empty() {
                return Err(AppError::BadRequest("Fullname is required".to_string()));
            }
        }
        if let Some(phone) = &dto.phone {
            if phone.is_empty() {
                return Err(AppError::BadRequest("Phone is required".to_string()));
            }
        }
        if let Some(address) = &dto.address {
            if address.is_empty() {
                return Err(AppError::BadRequest("Address is required".to_string()));
            }
        }

        if let Some(rating) = dto.rating {
            check_rating(rating)?;
        }

        Ok(Self {
            fullname: dto.fullname,
            phone: dto.phone,
            address: dto.address,
            feedback: dto.feedback,
            rating: dto.rating,
        })
    }
}

fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

fn check_rating(rating: i32) -> Result<(), AppError> {
    if !(0..=5).contains(&rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 0 and 5".to_string(),
        ));
    }
    Ok(())
}
