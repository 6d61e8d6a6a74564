//! Product catalog service.
//!
//! Coordinates validation, the product repository, and the upload store so
//! that stored image files always match what the catalog references: a
//! failed write never leaves a stray staged file behind, and a replaced or
//! deleted product does not leave its old image on disk.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{
        check_price_invariant, parse_mrp, parse_quantity, parse_selling_price, parse_unit,
        Product, ProductDraft, ProductForm,
    },
    service::upload::{StagedUpload, UploadStore},
    util::slug::generate_slug,
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    uploads: &'a UploadStore,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection, uploads: &'a UploadStore) -> Self {
        Self { db, uploads }
    }

    /// Gets all products, newest first
    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db).get_all().await?)
    }

    /// Gets a product by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        Ok(ProductRepository::new(self.db).get_by_id(id).await?)
    }

    /// Checks if a product exists
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(ProductRepository::new(self.db).exists(id).await?)
    }

    /// Creates a product from multipart fields and an optionally staged image.
    ///
    /// The staged file is discarded when validation or the insert fails, so
    /// a rejected request leaves nothing on disk.
    pub async fn create(
        &self,
        form: ProductForm,
        staged: Option<StagedUpload>,
    ) -> Result<Product, AppError> {
        match self.try_create(form, &staged).await {
            Ok(product) => Ok(product),
            Err(err) => {
                if let Some(staged) = &staged {
                    self.uploads.discard(staged).await;
                }
                Err(err)
            }
        }
    }

    async fn try_create(
        &self,
        form: ProductForm,
        staged: &Option<StagedUpload>,
    ) -> Result<Product, AppError> {
        let image = staged
            .as_ref()
            .map(StagedUpload::public_path)
            .unwrap_or_default();
        let draft = ProductDraft::from_form(form, image)?;

        Ok(ProductRepository::new(self.db).create(draft).await?)
    }

    /// Updates a product, merging supplied fields over the stored ones.
    ///
    /// Field-level rules match creation; the price invariant is checked on
    /// the effective pair after the merge. A name change regenerates the
    /// slug. When a new image was staged, the previous file is removed only
    /// after the record saved; when anything fails, the staged file is
    /// discarded and the previous image stays in place.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Updated product
    /// - `Ok(None)` - No product with the given ID
    pub async fn update(
        &self,
        id: i32,
        form: ProductForm,
        staged: Option<StagedUpload>,
    ) -> Result<Option<Product>, AppError> {
        match self.try_update(id, form, &staged).await {
            Ok(Some(product)) => Ok(Some(product)),
            other => {
                // Not found or failed: the staged file has no record to belong to.
                if let Some(staged) = &staged {
                    self.uploads.discard(staged).await;
                }
                other
            }
        }
    }

    async fn try_update(
        &self,
        id: i32,
        form: ProductForm,
        staged: &Option<StagedUpload>,
    ) -> Result<Option<Product>, AppError> {
        let repo = ProductRepository::new(self.db);
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let product_name = match &form.product_name {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(AppError::BadRequest("Product name is required".to_string()));
                }
                trimmed.to_string()
            }
            None => existing.product_name.clone(),
        };
        let unit = match &form.unit {
            Some(raw) => parse_unit(raw)?,
            None => existing.unit,
        };
        let quantity = match &form.quantity {
            Some(raw) => parse_quantity(raw)?,
            None => existing.quantity.clone(),
        };
        let description = match &form.description {
            Some(raw) => raw.trim().to_string(),
            None => existing.description.clone(),
        };
        let mrp = match &form.mrp {
            Some(raw) => parse_mrp(raw)?,
            None => existing.mrp,
        };
        let selling_price = match &form.selling_price {
            Some(raw) => parse_selling_price(raw)?,
            None => existing.selling_price,
        };
        check_price_invariant(mrp, selling_price)?;

        // A renamed product gets a fresh slug; the client cannot set one here.
        let slug = if product_name != existing.product_name {
            generate_slug(&product_name)
        } else {
            existing.slug.clone()
        };

        let old_image = existing.image.clone();
        let image = match staged {
            Some(staged) => staged.public_path(),
            None => old_image.clone(),
        };

        let updated = repo
            .update(
                id,
                ProductDraft {
                    product_name,
                    unit,
                    quantity,
                    description,
                    image,
                    mrp,
                    selling_price,
                    slug,
                },
            )
            .await?;

        if let Some(staged) = staged {
            if !old_image.is_empty() && old_image != staged.public_path() {
                self.uploads.remove_public(&old_image).await;
            }
        }

        Ok(updated)
    }

    /// Deletes a product and its stored image file.
    ///
    /// The file removal is best-effort; the record is deleted regardless.
    ///
    /// # Returns
    /// - `Ok(true)` - Product was deleted
    /// - `Ok(false)` - No product with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ProductRepository::new(self.db);
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        if !existing.image.is_empty() {
            self.uploads.remove_public(&existing.image).await;
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
