//! Order notification mail delivery.
//!
//! New orders trigger a summary mail to the shop's configured mailbox.
//! Delivery is fire-and-forget from the caller's point of view: the order
//! response never waits on, or fails because of, the SMTP relay.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::Config, error::AppError, model::order::Order};

/// SMTP client bound to the shop's notification mailbox.
///
/// The configured address is both sender and recipient; orders are
/// announced to the shop, not to the customer.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    address: String,
}

impl Mailer {
    /// Builds a mailer from configuration.
    ///
    /// # Returns
    /// - `Some(Mailer)` - Credentials present and the relay is valid
    /// - `None` - Credentials missing, or the relay host could not be
    ///   resolved (logged); notifications are disabled in both cases
    pub fn from_config(config: &Config) -> Option<Self> {
        let (user, pass) = match (&config.mail_user, &config.mail_pass) {
            (Some(user), Some(pass)) => (user.clone(), pass.clone()),
            _ => return None,
        };

        let transport = match AsyncSmtpTransport::<Tokio1Executor>::relay(&config.mail_host) {
            Ok(builder) => builder
                .credentials(Credentials::new(user.clone(), pass))
                .build(),
            Err(err) => {
                tracing::warn!("Failed to configure mail relay {}: {}", config.mail_host, err);
                return None;
            }
        };

        Some(Self {
            transport,
            address: user,
        })
    }

    /// Sends the notification mail for a newly created order.
    pub async fn send_order_notification(&self, order: &Order) -> Result<(), AppError> {
        let mailbox: Mailbox = self.address.parse()?;

        let message = Message::builder()
            .from(mailbox.clone())
            .to(mailbox)
            .subject(format!("New Order Received (#{})", order.id))
            .header(ContentType::TEXT_HTML)
            .body(render_order_summary(order))?;

        self.transport.send(message).await?;

        Ok(())
    }
}

/// Renders the HTML body of an order notification.
///
/// Lists the customer snapshot, a table of line items with per-line totals,
/// and the order total, followed by the order ID and creation time.
pub fn render_order_summary(order: &Order) -> String {
    let item_rows: String = order
        .items
        .iter()
        .map(|item| {
            format!(
                concat!(
                    "<tr>",
                    "<td style=\"padding: 8px; border: 1px solid #ddd;\">{}</td>",
                    "<td style=\"padding: 8px; border: 1px solid #ddd;\">{}</td>",
                    "<td style=\"padding: 8px; border: 1px solid #ddd;\">&#8377;{}</td>",
                    "<td style=\"padding: 8px; border: 1px solid #ddd;\">&#8377;{}</td>",
                    "</tr>"
                ),
                item.product_name,
                item.quantity,
                item.price,
                item.quantity as f64 * item.price,
            )
        })
        .collect();

    format!(
        concat!(
            "<div style=\"font-family: Arial, sans-serif; padding: 20px; background: #f4f4f4;\">",
            "<div style=\"max-width: 600px; margin: auto; background: white; padding: 20px; border-radius: 10px;\">",
            "<h2 style=\"text-align: center; color: #333;\">New Order Received</h2>",
            "<p style=\"font-size: 16px; color: #555;\">A new order has been placed. Below are the details:</p>",
            "<h3 style=\"margin-top: 20px;\">Customer Details</h3>",
            "<table style=\"width: 100%; border-collapse: collapse; margin-bottom: 20px;\">",
            "<tr><td><b>Name:</b></td><td>{name}</td></tr>",
            "<tr><td><b>Mobile:</b></td><td>{mobile}</td></tr>",
            "<tr><td><b>Email:</b></td><td>{email}</td></tr>",
            "<tr><td><b>Pincode:</b></td><td>{pincode}</td></tr>",
            "<tr><td><b>City:</b></td><td>{city}</td></tr>",
            "<tr><td><b>Address:</b></td><td>{address}</td></tr>",
            "</table>",
            "<h3 style=\"margin-top: 20px;\">Order Items</h3>",
            "<table style=\"width: 100%; border-collapse: collapse; margin-top: 10px;\">",
            "<thead><tr style=\"background: #eee;\">",
            "<th style=\"padding: 8px; border: 1px solid #ddd;\">Product</th>",
            "<th style=\"padding: 8px; border: 1px solid #ddd;\">Qty</th>",
            "<th style=\"padding: 8px; border: 1px solid #ddd;\">Price</th>",
            "<th style=\"padding: 8px; border: 1px solid #ddd;\">Total</th>",
            "</tr></thead>",
            "<tbody>{items}</tbody>",
            "</table>",
            "<h3 style=\"margin-top: 20px; text-align: right;\">",
            "Order Total: <span style=\"color: #007bff;\">&#8377;{total}</span>",
            "</h3>",
            "<p style=\"margin-top: 20px; font-size: 14px; color: #555;\">",
            "<b>Order ID:</b> {id}<br>",
            "<b>Date:</b> {date}",
            "</p>",
            "</div>",
            "</div>"
        ),
        name = order.customer.full_name,
        mobile = order.customer.mobile,
        email = order.customer.email,
        pincode = order.customer.pincode,
        city = order.customer.city,
        address = order.customer.address,
        items = item_rows,
        total = order.total_price,
        id = order.id,
        date = order.created_at.format("%d/%m/%Y, %H:%M:%S"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::order::{Customer, OrderItem, OrderStatus};

    fn sample_order() -> Order {
        Order {
            id: 42,
            customer: Customer {
                full_name: "Asha Patel".to_string(),
                mobile: "9876543210".to_string(),
                email: "asha@example.com".to_string(),
                pincode: "560001".to_string(),
                city: "Bengaluru".to_string(),
                address: "12 MG Road".to_string(),
            },
            items: vec![OrderItem {
                product_id: 7,
                product_name: "Fresh Milk".to_string(),
                quantity: 2,
                price: 50.0,
            }],
            total_price: 100.0,
            status: OrderStatus::Pending,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn summary_includes_customer_and_line_totals() {
        let html = render_order_summary(&sample_order());

        assert!(html.contains("Asha Patel"));
        assert!(html.contains("Fresh Milk"));
        // 2 x 50.0 line total and the order total
        assert!(html.contains("&#8377;100"));
        assert!(html.contains("Order ID:</b> 42"));
    }

    #[test]
    fn summary_renders_a_row_per_item() {
        let mut order = sample_order();
        order.items.push(OrderItem {
            product_id: 8,
            product_name: "Paneer".to_string(),
            quantity: 1,
            price: 80.0,
        });

        let html = render_order_summary(&order);

        // Six customer rows plus one row per item; the styled header row
        // does not match the bare tag.
        assert_eq!(html.matches("<tr>").count(), 6 + 2);
        assert!(html.contains("Paneer"));
    }
}
