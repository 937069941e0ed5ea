// src/lib.rs

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use services::store_api::StoreApiService;

#[derive(Clone)]
pub struct AppState {
    pub store: StoreApiService,
}

pub mod models {
    pub mod common;
    pub mod order;
    pub mod overview;
    pub mod product;
    pub mod revenue;
    pub mod user;
}

pub mod services {
    pub mod catalog;
    pub mod money;
    pub mod orders;
    pub mod revenue;
    pub mod stats;
    pub mod store_api;
}

pub mod handlers {
    pub mod orders;
    pub mod overview;
    pub mod products;
    pub(crate) mod respond;
    pub mod revenue;
    pub mod users;
}

/// Build the admin API router with tracing and CORS layers applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/admin/overview", get(handlers::overview::get_overview))
        .route("/api/admin/users", get(handlers::users::list_users))
        .route(
            "/api/admin/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/api/admin/products/{id}",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )
        .route("/api/admin/orders", get(handlers::orders::list_orders))
        .route(
            "/api/admin/orders/{id}/complete",
            put(handlers::orders::complete_order),
        )
        .route("/api/admin/revenue", get(handlers::revenue::query_revenue))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "Plant shop admin backend is running"
}
