use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: i32,
    pub fullname: String,
    pub phone: String,
    pub address: String,
    pub feedback: Option<String>,
    pub rating: i32,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactDto {
    pub fullname: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
}

/// Partial-update fields for a contact; omitted fields are retained.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactDto {
    pub fullname: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
}
