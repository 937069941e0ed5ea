//! In-process stand-in for the upstream store backend, mimicking the
//! json-server shape the admin service talks to.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};

#[derive(Clone, Default)]
pub struct MockStore {
    pub users: Arc<Mutex<Vec<Value>>>,
    pub products: Arc<Mutex<Vec<Value>>>,
    pub orders: Arc<Mutex<Vec<Value>>>,
    /// Number of PUT /orders/{id} calls, to assert that rejected transitions
    /// never reach the backend.
    pub order_puts: Arc<Mutex<usize>>,
}

impl MockStore {
    pub fn order_put_count(&self) -> usize {
        *self.order_puts.lock().unwrap()
    }

    pub fn order_status(&self, id: &str) -> Option<String> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o["id"] == id)
            .and_then(|o| o["status"].as_str().map(str::to_string))
    }

    pub fn product_count(&self) -> usize {
        self.products.lock().unwrap().len()
    }
}

/// Mixed-shape fixture data covering both backend revisions.
pub fn seeded_store() -> MockStore {
    let store = MockStore::default();

    *store.users.lock().unwrap() = vec![
        json!({"id": "u1", "fullName": "Nguyễn Văn A", "email": "a@example.com", "isAdmin": true}),
        json!({"id": "u2", "fullName": "Trần Thị B", "email": "b@example.com"}),
        json!({"id": "u3", "fullName": "Lê Văn C", "email": "c@example.com", "isAdmin": false}),
    ];

    *store.products.lock().unwrap() = vec![
        json!({
            "id": "p1", "name": "Monstera Deliciosa", "price": "520.000đ", "quantity": 4,
            "type": "plant", "lightPreference": "Ưa sáng", "new": true,
            "images": ["monstera-1.png", "monstera-2.png"]
        }),
        json!({
            "id": "p2", "name": "Ceramic pot", "price": "90.000đ", "quantity": 10,
            "type": "pot", "size": "M", "image": "ceramic.png"
        }),
        json!({
            "id": "p3", "name": "Terracotta pot", "price": "70.000đ", "quantity": 6,
            "type": "plantpot", "size": "L", "image": "terracotta.png"
        }),
        json!({
            "id": "p4", "name": "Watering can", "price": "45.000đ", "quantity": 12,
            "type": "accessory", "origin": "Việt Nam", "image": "can.png"
        }),
    ];

    *store.orders.lock().unwrap() = vec![
        // older revision: flat contact fields, formatted total, ISO timestamp
        json!({
            "id": "ord-100", "userId": "u2",
            "fullName": "Trần Thị B", "email": "b@example.com",
            "phoneNumber": "0901234567", "address": "12 Nguyễn Trãi",
            "products": [
                {"id": "li1", "productId": "p1", "name": "Monstera Deliciosa", "price": "520.000đ", "quantity": 2}
            ],
            "totalPrice": "100.000đ",
            "paymentMethod": 1,
            "status": "completed",
            "createdAt": "2024-01-05T09:30:00Z"
        }),
        // newer revision: nested customerInfo, numeric amounts
        json!({
            "id": "ord-200", "userId": "u3",
            "customerInfo": {
                "fullName": "Lê Văn C", "email": "c@example.com",
                "phoneNumber": "0987654321", "address": "5 Lý Thường Kiệt"
            },
            "items": [
                {"id": "li2", "name": "Ceramic pot", "price": 90000, "quantity": 1}
            ],
            "totalAmount": 35000,
            "shippingFee": 15000,
            "finalAmount": 50000,
            "paymentMethod": "cod",
            "status": "pending",
            "orderDate": "2024-01-06"
        }),
        json!({
            "id": "ord-300", "userId": "u2",
            "fullName": "Trần Thị B", "email": "b@example.com",
            "phoneNumber": "0901234567", "address": "12 Nguyễn Trãi",
            "products": [],
            "totalPrice": "200.000đ",
            "status": "completed",
            "createdAt": "2024-02-10T14:00:00Z"
        }),
        json!({
            "id": "ord-400", "userId": "u3",
            "customerInfo": {
                "fullName": "Lê Văn C", "email": "c@example.com",
                "phoneNumber": "0987654321", "address": "5 Lý Thường Kiệt"
            },
            "items": [],
            "finalAmount": 80000,
            "status": "cancelled",
            "orderDate": "2024-01-20"
        }),
    ];

    store
}

/// Bind the mock store on an ephemeral port and return its base URL.
pub async fn spawn_mock_store(store: MockStore) -> String {
    let router = Router::new()
        .route("/users", get(list_users))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            axum::routing::put(update_product).delete(delete_product),
        )
        .route("/orders", get(list_orders))
        .route("/orders/{id}", get(get_order).put(put_order))
        .with_state(store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn list_users(State(store): State<MockStore>) -> Json<Value> {
    Json(Value::Array(store.users.lock().unwrap().clone()))
}

async fn list_products(State(store): State<MockStore>) -> Json<Value> {
    Json(Value::Array(store.products.lock().unwrap().clone()))
}

async fn create_product(
    State(store): State<MockStore>,
    Json(mut record): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let id = uuid::Uuid::new_v4().to_string();
    record["id"] = Value::String(id);
    store.products.lock().unwrap().push(record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn update_product(
    State(store): State<MockStore>,
    Path(id): Path<String>,
    Json(record): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut products = store.products.lock().unwrap();
    match products.iter_mut().find(|p| p["id"] == id.as_str()) {
        Some(existing) => {
            *existing = record.clone();
            Ok(Json(record))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn delete_product(
    State(store): State<MockStore>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let mut products = store.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p["id"] != id.as_str());
    if products.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({})))
}

async fn list_orders(State(store): State<MockStore>) -> Json<Value> {
    Json(Value::Array(store.orders.lock().unwrap().clone()))
}

async fn get_order(
    State(store): State<MockStore>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    store
        .orders
        .lock()
        .unwrap()
        .iter()
        .find(|o| o["id"] == id.as_str())
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn put_order(
    State(store): State<MockStore>,
    Path(id): Path<String>,
    Json(record): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    *store.order_puts.lock().unwrap() += 1;
    let mut orders = store.orders.lock().unwrap();
    match orders.iter_mut().find(|o| o["id"] == id.as_str()) {
        Some(existing) => {
            *existing = record.clone();
            Ok(Json(record))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}
