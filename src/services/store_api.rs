//! Client for the upstream store backend (a json-server style REST API).
//!
//! This is the only module that sees the raw wire shapes; every fetch
//! normalizes into the canonical models before returning. There is no retry
//! and no cache: the backend owns the data and every admin request reads a
//! fresh snapshot.

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::models::order::{Order, RawOrder};
use crate::models::product::{Product, RawProduct, StoreProductRecord};
use crate::models::user::User;

type ApiError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone)]
pub struct StoreApiService {
    client: Client,
    base_url: String,
}

impl StoreApiService {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        tracing::debug!("Fetching users from store backend");

        let url = format!("{}/users", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("Store API error {}: {}", status, error_text).into());
        }

        let users: Vec<User> = response.json().await?;
        Ok(users)
    }

    /// Fetch the catalog and normalize it. Records whose `type` maps to no
    /// category are dropped with a warning.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        tracing::debug!("Fetching products from store backend");

        let url = format!("{}/products", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("Store API error {}: {}", status, error_text).into());
        }

        let raw: Vec<RawProduct> = response.json().await?;

        let mut products = Vec::with_capacity(raw.len());
        for record in raw {
            let id = record.id.clone();
            match record.normalize() {
                Some(product) => products.push(product),
                None => tracing::warn!("Skipping product {} with unrecognized type", id),
            }
        }

        Ok(products)
    }

    /// Fetch all orders and normalize them. Records whose status maps to no
    /// known lifecycle state are dropped with a warning.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        tracing::debug!("Fetching orders from store backend");

        let url = format!("{}/orders", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("Store API error {}: {}", status, error_text).into());
        }

        let raw: Vec<RawOrder> = response.json().await?;

        let mut orders = Vec::with_capacity(raw.len());
        for record in raw {
            let id = record.id.clone();
            match record.normalize() {
                Some(order) => orders.push(order),
                None => tracing::warn!("Skipping order {} with unrecognized status", id),
            }
        }

        Ok(orders)
    }

    /// Fetch a single order as the raw JSON record, for read-merge-write
    /// updates. `Ok(None)` means the order does not exist upstream.
    pub async fn fetch_order_raw(&self, order_id: &str) -> Result<Option<Value>, ApiError> {
        let url = format!("{}/orders/{}", self.base_url, order_id);
        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("Store API error {}: {}", status, error_text).into());
        }

        let record: Value = response.json().await?;
        Ok(Some(record))
    }

    /// Replace an order record in full; the store backend has no PATCH.
    pub async fn replace_order(&self, order_id: &str, record: &Value) -> Result<(), ApiError> {
        tracing::info!("Replacing order {} on store backend", order_id);

        let url = format!("{}/orders/{}", self.base_url, order_id);
        let response = self.client.put(&url).json(record).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("Store API error {}: {}", status, error_text).into());
        }

        Ok(())
    }

    /// Create a product; the store backend assigns the id and echoes the
    /// created record.
    pub(crate) async fn create_product(
        &self,
        record: &StoreProductRecord,
    ) -> Result<Value, ApiError> {
        tracing::info!("Creating product '{}' on store backend", record.name);

        let url = format!("{}/products", self.base_url);
        let response = self.client.post(&url).json(record).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("Store API error {}: {}", status, error_text).into());
        }

        let created: Value = response.json().await?;
        Ok(created)
    }

    /// Full-record product update. `Ok(None)` means the product does not
    /// exist upstream.
    pub(crate) async fn update_product(
        &self,
        product_id: &str,
        record: &StoreProductRecord,
    ) -> Result<Option<Value>, ApiError> {
        tracing::info!("Updating product {} on store backend", product_id);

        let url = format!("{}/products/{}", self.base_url, product_id);
        let response = self.client.put(&url).json(record).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("Store API error {}: {}", status, error_text).into());
        }

        let updated: Value = response.json().await?;
        Ok(Some(updated))
    }

    /// Delete a product. Returns `false` when the product does not exist
    /// upstream.
    pub async fn delete_product(&self, product_id: &str) -> Result<bool, ApiError> {
        tracing::info!("Deleting product {} on store backend", product_id);

        let url = format!("{}/products/{}", self.base_url, product_id);
        let response = self.client.delete(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("Store API error {}: {}", status, error_text).into());
        }

        Ok(true)
    }
}
