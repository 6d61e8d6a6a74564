use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub rate: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub rate: Option<i32>,
}

/// Partial-update fields for a review; omitted fields are retained.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub rate: Option<i32>,
}
