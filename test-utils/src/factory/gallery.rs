//! Gallery factory for creating test gallery records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a gallery entry with a unique image path.
pub async fn create_gallery(db: &DatabaseConnection) -> Result<entity::gallery::Model, DbErr> {
    create_gallery_with_image(db, format!("/uploads/gallery-{}.jpg", next_id())).await
}

/// Creates a gallery entry with the given image path.
pub async fn create_gallery_with_image(
    db: &DatabaseConnection,
    image: impl Into<String>,
) -> Result<entity::gallery::Model, DbErr> {
    let now = Utc::now();

    entity::gallery::ActiveModel {
        id: ActiveValue::NotSet,
        image: ActiveValue::Set(image.into()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
