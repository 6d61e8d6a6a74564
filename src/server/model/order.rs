//! Order domain models and parameters.
//!
//! Orders capture a customer snapshot, a set of line items copied from the
//! catalog at purchase time, a client-computed total, and a fulfilment
//! status. Line items are fixed once the order is created.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::order::{
    CreateOrderCustomerDto, CreateOrderDto, CreateOrderItemDto, OrderCustomerDto, OrderDto,
    OrderItemDto, UpdateOrderDto,
};
use crate::server::error::AppError;

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Parses the wire representation of a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "shipped" => Some(Self::Shipped),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Parses and validates a status field from a request.
pub fn parse_status(raw: &str) -> Result<OrderStatus, AppError> {
    OrderStatus::parse(raw).ok_or_else(|| {
        AppError::BadRequest(
            "Status must be one of pending, confirmed, shipped, delivered, cancelled".to_string(),
        )
    })
}

/// Customer snapshot stored with an order.
#[derive(Debug, Clone)]
pub struct Customer {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub pincode: String,
    pub city: String,
    pub address: String,
}

impl Customer {
    /// Validates the customer block of a request.
    ///
    /// A missing block is treated as a block with every field missing, so
    /// the caller always gets a field-specific message.
    ///
    /// # Returns
    /// - `Ok(Customer)` - All fields present and well-formed
    /// - `Err(AppError::BadRequest)` - First validation failure
    pub fn from_dto(dto: Option<CreateOrderCustomerDto>) -> Result<Self, AppError> {
        let dto = dto.unwrap_or(CreateOrderCustomerDto {
            full_name: None,
            mobile: None,
            email: None,
            pincode: None,
            city: None,
            address: None,
        });

        let full_name = required_trimmed(dto.full_name, "Full name is required")?;

        let mobile = required(dto.mobile, "Mobile number is required")?;
        if !is_valid_mobile(&mobile) {
            return Err(AppError::BadRequest(
                "Mobile number must be valid (10 digits or +91)".to_string(),
            ));
        }

        let email = required(dto.email, "Email is required")?;
        if !is_valid_email(&email) {
            return Err(AppError::BadRequest(
                "Please enter a valid email".to_string(),
            ));
        }

        let pincode = required(dto.pincode, "Pincode is required")?;
        if pincode.len() != 6 || !pincode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::BadRequest("Pincode must be 6 digits".to_string()));
        }

        let city = required_trimmed(dto.city, "City is required")?;

        let address = required_trimmed(dto.address, "Address is required")?;
        if address.chars().count() > 200 {
            return Err(AppError::BadRequest(
                "Address cannot exceed 200 characters".to_string(),
            ));
        }

        Ok(Self {
            full_name,
            mobile,
            email,
            pincode,
            city,
            address,
        })
    }
}

/// Line item stored with an order.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
}

impl OrderItem {
    /// Validates a line item of a create request.
    pub fn from_dto(dto: CreateOrderItemDto) -> Result<Self, AppError> {
        let product_id = dto
            .product_id
            .ok_or_else(|| AppError::BadRequest("Product ID is required".to_string()))?;
        let product_name = required(dto.product_name, "Product name is required")?;

        let quantity = dto
            .quantity
            .ok_or_else(|| AppError::BadRequest("Quantity is required".to_string()))?;
        if quantity < 1 {
            return Err(AppError::BadRequest(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let price = dto
            .price
            .ok_or_else(|| AppError::BadRequest("Price is required".to_string()))?;
        if price < 0.0 {
            return Err(AppError::BadRequest("Price cannot be negative".to_string()));
        }

        Ok(Self {
            product_id,
            product_name,
            quantity,
            price,
        })
    }

    fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            product_id: entity.product_id,
            product_name: entity.product_name,
            quantity: entity.quantity,
            price: entity.price,
        }
    }

    fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            product_id: self.product_id,
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Order with its customer snapshot and line items.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i32,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Order)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status value is not recognized
    pub fn from_entities(
        order: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, DbErr> {
        let status = OrderStatus::parse(&order.status)
            .ok_or_else(|| DbErr::Custom(format!("Unrecognized stored status: {}", order.status)))?;

        Ok(Self {
            id: order.id,
            customer: Customer {
                full_name: order.full_name,
                mobile: order.mobile,
                email: order.email,
                pincode: order.pincode,
                city: order.city,
                address: order.address,
            },
            items: items.into_iter().map(OrderItem::from_entity).collect(),
            total_price: order.total_price,
            status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            customer: OrderCustomerDto {
                full_name: self.customer.full_name,
                mobile: self.customer.mobile,
                email: self.customer.email,
                pincode: self.customer.pincode,
                city: self.customer.city,
                address: self.customer.address,
            },
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
            total_price: self.total_price,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new order.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
    pub status: OrderStatus,
}

impl CreateOrderParams {
    /// Validates a create request.
    ///
    /// Items default to an empty list and status to `pending` when omitted.
    ///
    /// # Returns
    /// - `Ok(CreateOrderParams)` - All fields validated
    /// - `Err(AppError::BadRequest)` - First validation failure, with a field-specific message
    pub fn from_dto(dto: CreateOrderDto) -> Result<Self, AppError> {
        let customer = Customer::from_dto(dto.customer)?;

        let items = dto
            .items
            .unwrap_or_default()
            .into_iter()
            .map(OrderItem::from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        let total_price = dto
            .total_price
            .ok_or_else(|| AppError::BadRequest("Total price is required".to_string()))?;
        if total_price < 0.0 {
            return Err(AppError::BadRequest(
                "Total price cannot be negative".to_string(),
            ));
        }

        let status = match dto.status.as_deref() {
            Some(raw) => parse_status(raw)?,
            None => OrderStatus::default(),
        };

        Ok(Self {
            customer,
            items,
            total_price,
            status,
        })
    }
}

/// Parameters for updating an order; `None` fields are retained.
#[derive(Debug, Clone)]
pub struct UpdateOrderParams {
    pub customer: Option<Customer>,
    pub total_price: Option<f64>,
    pub status: Option<OrderStatus>,
}

impl UpdateOrderParams {
    /// Validates an update request.
    ///
    /// A supplied customer block replaces the stored one and is validated in
    /// full; a supplied total or status is validated on its own.
    pub fn from_dto(dto: UpdateOrderDto) -> Result<Self, AppError> {
        let customer = match dto.customer {
            Some(customer) => Some(Customer::from_dto(Some(customer))?),
            None => None,
        };

        if let Some(total_price) = dto.total_price {
            if total_price < 0.0 {
                return Err(AppError::BadRequest(
                    "Total price cannot be negative".to_string(),
                ));
            }
        }

        let status = match dto.status.as_deref() {
            Some(raw) => Some(parse_status(raw)?),
            None => None,
        };

        Ok(Self {
            customer,
            total_price: dto.total_price,
            status,
        })
    }
}

fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

fn required_trimmed(value: Option<String>, message: &str) -> Result<String, AppError> {
    let trimmed = value.as_deref().map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(message.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Accepts a 10-digit Indian mobile number starting 6-9, with an optional
/// `+91` or `91` prefix.
fn is_valid_mobile(value: &str) -> bool {
    fn ten_digits(v: &str) -> bool {
        v.len() == 10
            && v.bytes().all(|b| b.is_ascii_digit())
            && matches!(v.as_bytes()[0], b'6'..=b'9')
    }

    ten_digits(value)
        || value.strip_prefix("+91").is_some_and(ten_digits)
        || value.strip_prefix("91").is_some_and(ten_digits)
}

/// Accepts any value containing a `local@host.tld` shaped token.
fn is_valid_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        token.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_dto() -> CreateOrderCustomerDto {
        CreateOrderCustomerDto {
            full_name: Some("Asha Patel".to_string()),
            mobile: Some("9876543210".to_string()),
            email: Some("asha@example.com".to_string()),
            pincode: Some("560001".to_string()),
            city: Some("Bengaluru".to_string()),
            address: Some("12 MG Road".to_string()),
        }
    }

    fn create_dto() -> CreateOrderDto {
        CreateOrderDto {
            customer: Some(customer_dto()),
            items: Some(vec![CreateOrderItemDto {
                product_id: Some(1),
                product_name: Some("Milk".to_string()),
                quantity: Some(2),
                price: Some(50.0),
            }]),
            total_price: Some(100.0),
            status: None,
        }
    }

    #[test]
    fn mobile_accepts_bare_and_prefixed_numbers() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("+919876543210"));
        assert!(is_valid_mobile("919876543210"));
    }

    #[test]
    fn mobile_accepts_ten_digits_starting_with_nine_one() {
        // Looks like a 91 prefix but is a complete number on its own.
        assert!(is_valid_mobile("9123456789"));
    }

    #[test]
    fn mobile_rejects_bad_lengths_and_leading_digits() {
        assert!(!is_valid_mobile("5876543210"));
        assert!(!is_valid_mobile("987654321"));
        assert!(!is_valid_mobile("98765432100"));
    }

    #[test]
    fn email_requires_at_and_dotted_domain() {
        assert!(is_valid_email("asha@example.com"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("example.com"));
    }

    #[test]
    fn create_defaults_status_to_pending() {
        let params = CreateOrderParams::from_dto(create_dto()).unwrap();
        assert_eq!(params.status, OrderStatus::Pending);
    }

    #[test]
    fn create_rejects_missing_customer_with_field_message() {
        let dto = CreateOrderDto {
            customer: None,
            ..create_dto()
        };

        let err = CreateOrderParams::from_dto(dto).unwrap_err();
        assert_eq!(err.to_string(), "Full name is required");
    }

    #[test]
    fn create_rejects_zero_quantity_items() {
        let mut dto = create_dto();
        dto.items.as_mut().unwrap()[0].quantity = Some(0);

        let err = CreateOrderParams::from_dto(dto).unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be at least 1");
    }

    #[test]
    fn create_rejects_negative_total() {
        let dto = CreateOrderDto {
            total_price: Some(-1.0),
            ..create_dto()
        };

        let err = CreateOrderParams::from_dto(dto).unwrap_err();
        assert_eq!(err.to_string(), "Total price cannot be negative");
    }

    #[test]
    fn create_rejects_unknown_status() {
        let dto = CreateOrderDto {
            status: Some("archived".to_string()),
            ..create_dto()
        };

        assert!(CreateOrderParams::from_dto(dto).is_err());
    }

    #[test]
    fn create_allows_empty_item_list() {
        let dto = CreateOrderDto {
            items: None,
            ..create_dto()
        };

        let params = CreateOrderParams::from_dto(dto).unwrap();
        assert!(params.items.is_empty());
    }

    #[test]
    fn update_rejects_address_over_limit() {
        let dto = UpdateOrderDto {
            customer: Some(CreateOrderCustomerDto {
                address: Some("x".repeat(201)),
                ..customer_dto()
            }),
            total_price: None,
            status: None,
        };

        let err = UpdateOrderParams::from_dto(dto).unwrap_err();
        assert_eq!(err.to_string(), "Address cannot exceed 200 characters");
    }
}
