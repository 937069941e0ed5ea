use std::env;

use plantshop_admin_backend::{AppState, app, services::store_api::StoreApiService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,plantshop_admin_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let store_url = env::var("STORE_API_URL").expect("STORE_API_URL must be set");
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!("Using store backend at {}", store_url);

    let state = AppState {
        store: StoreApiService::new(store_url),
    };

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("Admin backend listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app(state)).await.unwrap();
}
