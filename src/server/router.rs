use axum::{routing::get, Json, Router};

use crate::{
    model::api::MessageDto,
    server::{
        controller::{
            about::{create_about, delete_about, get_about_by_id, get_abouts, update_about},
            contact::{
                create_contact, delete_contact, get_contact_by_id, get_contacts, update_contact,
            },
            gallery::{
                create_gallery, delete_gallery, get_galleries, get_gallery_by_id, update_gallery,
            },
            order::{create_order, delete_order, get_order_by_id, get_orders, update_order},
            product::{
                create_product, delete_product, get_product_by_id, get_products, update_product,
            },
            review::{create_review, delete_review, get_review_by_id, get_reviews, update_review},
        },
        state::AppState,
    },
};

/// Health probe for the API root.
async fn server_status() -> Json<MessageDto> {
    Json(MessageDto {
        message: "Server is running".to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(server_status))
        .route("/api/products", get(get_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product_by_id)
                .put(update_product)
                .delete(delete_product),
        )
        .route("/api/galleries", get(get_galleries).post(create_gallery))
        .route(
            "/api/galleries/{id}",
            get(get_gallery_by_id)
                .put(update_gallery)
                .delete(delete_gallery),
        )
        .route("/api/reviews", get(get_reviews).post(create_review))
        .route(
            "/api/reviews/{id}",
            get(get_review_by_id)
                .put(update_review)
                .delete(delete_review),
        )
        .route("/api/abouts", get(get_abouts).post(create_about))
        .route(
            "/api/abouts/{id}",
            get(get_about_by_id).put(update_about).delete(delete_about),
        )
        .route("/api/contacts", get(get_contacts).post(create_contact))
        .route(
            "/api/contacts/{id}",
            get(get_contact_by_id)
                .put(update_contact)
                .delete(delete_contact),
        )
        .route("/api/orders", get(get_orders).post(create_order))
        .route(
            "/api/orders/{id}",
            get(get_order_by_id).put(update_order).delete(delete_order),
        )
}
