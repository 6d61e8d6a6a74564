//! Product domain models and parameters.
//!
//! Products carry a dual price (MRP and selling price), a unit of sale, and
//! a unique slug. The discount percentage is derived from the two prices on
//! every read rather than stored.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::product::ProductDto;
use crate::server::error::AppError;
use crate::server::util::slug::generate_slug;

/// Unit a product is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Kg,
    Liter,
}

impl Unit {
    /// Parses the wire representation of a unit.
    ///
    /// # Returns
    /// - `Some(Unit)` - Recognized unit value
    /// - `None` - Anything other than `"kg"` or `"liter"`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "kg" => Some(Self::Kg),
            "liter" => Some(Self::Liter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Liter => "liter",
        }
    }
}

/// Parses and validates a unit field from a request.
///
/// # Returns
/// - `Ok(Unit)` - Recognized unit value
/// - `Err(AppError::BadRequest)` - Unrecognized unit
pub fn parse_unit(raw: &str) -> Result<Unit, AppError> {
    Unit::parse(raw)
        .ok_or_else(|| AppError::BadRequest("Unit must be \"kg\" or \"liter\"".to_string()))
}

/// Trims and validates a quantity field from a request.
///
/// # Returns
/// - `Ok(String)` - Trimmed, non-empty quantity
/// - `Err(AppError::BadRequest)` - Empty or whitespace-only quantity
pub fn parse_quantity(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Quantity is required".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Parses and validates an MRP field from a request.
///
/// Rejects anything that is not a finite number greater than zero.
pub fn parse_mrp(raw: &str) -> Result<f64, AppError> {
    parse_positive_price(raw)
        .ok_or_else(|| AppError::BadRequest("MRP must be a valid positive number".to_string()))
}

/// Parses and validates a selling price field from a request.
///
/// Rejects anything that is not a finite number greater than zero.
pub fn parse_selling_price(raw: &str) -> Result<f64, AppError> {
    parse_positive_price(raw).ok_or_else(|| {
        AppError::BadRequest("Selling price must be a valid positive number".to_string())
    })
}

/// Checks the price invariant shared by create and update.
///
/// # Returns
/// - `Ok(())` - Selling price does not exceed MRP
/// - `Err(AppError::BadRequest)` - Selling price exceeds MRP
pub fn check_price_invariant(mrp: f64, selling_price: f64) -> Result<(), AppError> {
    if selling_price > mrp {
        return Err(AppError::BadRequest(
            "Selling price cannot exceed MRP".to_string(),
        ));
    }
    Ok(())
}

// "NaN" parses successfully, so the comparison guards against it as well.
fn parse_positive_price(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => None,
    }
}

/// Raw multipart text fields of a product create or update request.
///
/// All fields are optional at this stage; create and update apply different
/// presence rules on top.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub product_name: Option<String>,
    pub unit: Option<String>,
    pub quantity: Option<String>,
    pub description: Option<String>,
    pub mrp: Option<String>,
    pub selling_price: Option<String>,
    pub slug: Option<String>,
}

/// Validated product fields ready to persist.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub product_name: String,
    pub unit: Unit,
    pub quantity: String,
    pub description: String,
    pub image: String,
    pub mrp: f64,
    pub selling_price: f64,
    pub slug: String,
}

impl ProductDraft {
    /// Validates a create request and assembles the fields to persist.
    ///
    /// Requires name, unit, quantity, MRP, and selling price; description
    /// defaults to empty and the slug is generated from the name unless the
    /// client supplied one.
    ///
    /// # Arguments
    /// - `form` - Raw multipart text fields
    /// - `image` - Public path of the staged image, or empty when none was uploaded
    ///
    /// # Returns
    /// - `Ok(ProductDraft)` - All fields validated
    /// - `Err(AppError::BadRequest)` - First validation failure, with a field-specific message
    pub fn from_form(form: ProductForm, image: String) -> Result<Self, AppError> {
        let required = [
            &form.product_name,
            &form.unit,
            &form.quantity,
            &form.mrp,
            &form.selling_price,
        ];
        if required
            .iter()
            .any(|field| field.as_deref().map(str::trim).unwrap_or("").is_empty())
        {
            return Err(AppError::BadRequest(
                "Product name, unit (kg or liter), quantity, MRP, and selling price are required"
                    .to_string(),
            ));
        }

        // Presence was checked above; the fallbacks are unreachable.
        let product_name = form.product_name.unwrap_or_default().trim().to_string();
        let unit = parse_unit(form.unit.as_deref().unwrap_or_default())?;
        let quantity = parse_quantity(form.quantity.as_deref().unwrap_or_default())?;
        let mrp = parse_mrp(form.mrp.as_deref().unwrap_or_default())?;
        let selling_price = parse_selling_price(form.selling_price.as_deref().unwrap_or_default())?;
        check_price_invariant(mrp, selling_price)?;

        let slug = match form.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => generate_slug(&product_name),
        };

        Ok(Self {
            description: form
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .to_string(),
            product_name,
            unit,
            quantity,
            image,
            mrp,
            selling_price,
            slug,
        })
    }
}

/// Product with all stored fields.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub unit: Unit,
    pub quantity: String,
    pub description: String,
    pub image: String,
    pub mrp: f64,
    pub selling_price: f64,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Product)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored unit value is not recognized
    pub fn from_entity(entity: entity::product::Model) -> Result<Self, DbErr> {
        let unit = Unit::parse(&entity.unit)
            .ok_or_else(|| DbErr::Custom(format!("Unrecognized stored unit: {}", entity.unit)))?;

        Ok(Self {
            id: entity.id,
            product_name: entity.product_name,
            unit,
            quantity: entity.quantity,
            description: entity.description,
            image: entity.image,
            mrp: entity.mrp,
            selling_price: entity.selling_price,
            slug: entity.slug,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Discount derived from the two prices, rounded to a whole percentage.
    ///
    /// Zero when MRP is not positive, so legacy rows cannot divide by zero.
    pub fn discount_percentage(&self) -> i64 {
        if self.mrp > 0.0 {
            (((self.mrp - self.selling_price) / self.mrp) * 100.0).round() as i64
        } else {
            0
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `ProductDto` - DTO with all product fields and the derived discount
    pub fn into_dto(self) -> ProductDto {
        let discount_percentage = self.discount_percentage();
        ProductDto {
            id: self.id,
            product_name: self.product_name,
            unit: self.unit.as_str().to_string(),
            quantity: self.quantity,
            description: self.description,
            image: self.image,
            mrp: self.mrp,
            selling_price: self.selling_price,
            slug: self.slug,
            created_at: self.created_at,
            updated_at: self.updated_at,
            discount_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_prices(mrp: f64, selling_price: f64) -> Product {
        Product {
            id: 1,
            product_name: "Milk".to_string(),
            unit: Unit::Liter,
            quantity: "1".to_string(),
            description: String::new(),
            image: String::new(),
            mrp,
            selling_price,
            slug: "milk-1".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn full_form() -> ProductForm {
        ProductForm {
            product_name: Some("Milk".to_string()),
            unit: Some("liter".to_string()),
            quantity: Some("1".to_string()),
            description: Some("Fresh".to_string()),
            mrp: Some("60".to_string()),
            selling_price: Some("50".to_string()),
            slug: None,
        }
    }

    #[test]
    fn discount_rounds_to_whole_percentage() {
        assert_eq!(product_with_prices(60.0, 50.0).discount_percentage(), 17);
    }

    #[test]
    fn discount_is_zero_when_mrp_is_zero() {
        assert_eq!(product_with_prices(0.0, 0.0).discount_percentage(), 0);
    }

    #[test]
    fn draft_requires_all_mandatory_fields() {
        let form = ProductForm {
            mrp: None,
            ..full_form()
        };

        let err = ProductDraft::from_form(form, String::new()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn draft_rejects_selling_price_above_mrp() {
        let form = ProductForm {
            mrp: Some("40".to_string()),
            selling_price: Some("50".to_string()),
            ..full_form()
        };

        let err = ProductDraft::from_form(form, String::new()).unwrap_err();
        assert_eq!(err.to_string(), "Selling price cannot exceed MRP");
    }

    #[test]
    fn draft_rejects_nan_prices() {
        let form = ProductForm {
            mrp: Some("NaN".to_string()),
            ..full_form()
        };

        let err = ProductDraft::from_form(form, String::new()).unwrap_err();
        assert_eq!(err.to_string(), "MRP must be a valid positive number");
    }

    #[test]
    fn draft_generates_slug_when_not_supplied() {
        let draft = ProductDraft::from_form(full_form(), String::new()).unwrap();
        assert!(draft.slug.starts_with("milk-"));
    }

    #[test]
    fn draft_keeps_client_supplied_slug() {
        let form = ProductForm {
            slug: Some("custom-slug".to_string()),
            ..full_form()
        };

        let draft = ProductDraft::from_form(form, String::new()).unwrap();
        assert_eq!(draft.slug, "custom-slug");
    }
}
