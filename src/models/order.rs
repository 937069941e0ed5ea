//! Order records and the order lifecycle.
//!
//! Two backend revisions are in the wild: one stores customer contact fields
//! inline with `totalPrice` as a formatted string and `createdAt` as an ISO
//! timestamp, the other nests the contact under `customerInfo` with
//! `totalAmount`/`finalAmount` and `orderDate`. [`RawOrder`] accepts both;
//! [`Order`] is the canonical shape.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::RawAmount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Map a stored status to the enum. Some records were written with the
    /// Vietnamese display label instead of the enum value; accept both.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "pending" | "đang xử lý" => Some(Self::Pending),
            "completed" | "đã hoàn thành" => Some(Self::Completed),
            "cancelled" | "đã hủy" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Display label as the storefront shows it.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Đang xử lý",
            Self::Completed => "Đã hoàn thành",
            Self::Cancelled => "Đã hủy",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawCustomerInfo {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawOrderItem {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "productId", default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<RawAmount>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// Order record as the store backend returns it, covering both revisions.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawOrder {
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "customerInfo", default)]
    pub customer_info: Option<RawCustomerInfo>,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub products: Vec<RawOrderItem>,
    #[serde(default)]
    pub items: Vec<RawOrderItem>,
    #[serde(rename = "totalPrice", default)]
    pub total_price: Option<RawAmount>,
    #[serde(rename = "totalAmount", default)]
    pub total_amount: Option<RawAmount>,
    #[serde(rename = "finalAmount", default)]
    pub final_amount: Option<RawAmount>,
    #[serde(rename = "shippingFee", default)]
    pub shipping_fee: Option<RawAmount>,
    #[serde(rename = "paymentMethod", default)]
    pub payment_method: Option<Value>,
    #[serde(rename = "deliveryMethod", default)]
    pub delivery_method: Option<Value>,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "orderDate", default)]
    pub order_date: Option<String>,
}

impl RawOrder {
    /// Canonicalize a raw record. Returns `None` when the stored status does
    /// not map to any known lifecycle state.
    pub(crate) fn normalize(self) -> Option<Order> {
        let status = OrderStatus::from_raw(&self.status)?;

        let customer = match self.customer_info {
            Some(info) => Customer {
                full_name: info.full_name,
                email: info.email,
                phone: info.phone_number.or(info.phone).unwrap_or_default(),
                address: info.address,
            },
            None => Customer {
                full_name: self.full_name.unwrap_or_default(),
                email: self.email.unwrap_or_default(),
                phone: self.phone_number.or(self.phone).unwrap_or_default(),
                address: self.address.unwrap_or_default(),
            },
        };

        let items = if self.products.is_empty() {
            self.items
        } else {
            self.products
        };
        let items = items
            .into_iter()
            .map(|item| OrderItem {
                id: item.id,
                product_id: item.product_id,
                name: item.name,
                unit_price: item.price.map(|p| p.to_decimal()).unwrap_or_default(),
                quantity: item.quantity,
                image: item.image,
            })
            .collect();

        // `finalAmount` already includes the shipping fee where present.
        let total = self
            .total_price
            .or(self.final_amount)
            .or(self.total_amount)
            .map(|a| a.to_decimal())
            .unwrap_or_default();

        let created_at = self
            .created_at
            .or(self.order_date)
            .as_deref()
            .and_then(parse_timestamp);

        Some(Order {
            id: self.id,
            user_id: self.user_id,
            customer,
            items,
            total,
            shipping_fee: self
                .shipping_fee
                .map(|a| a.to_decimal())
                .unwrap_or_default(),
            payment_method: self.payment_method.as_ref().map(stringify_code),
            delivery_method: self.delivery_method.as_ref().map(stringify_code),
            status,
            created_at,
        })
    }
}

/// Payment/delivery methods appear as numeric codes in some records and as
/// strings in others.
fn stringify_code(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(ts.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Canonical order shape used everywhere past the data-access layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub shipping_fee: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,
    pub status: OrderStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Canonicalize a raw JSON record, e.g. one fetched for a read-merge-write
    /// status update.
    pub(crate) fn from_value(value: &Value) -> Option<Order> {
        serde_json::from_value::<RawOrder>(value.clone())
            .ok()
            .and_then(RawOrder::normalize)
    }
}

/// Order as the admin API presents it: the canonical record plus the
/// storefront display strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub status_label: &'static str,
    pub total_display: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        let status_label = order.status.label();
        let total_display = crate::services::money::format_vnd(order.total);
        OrderView {
            order,
            status_label,
            total_display,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderListResponse {
    pub count: usize,
    pub orders: Vec<OrderView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteOrderResponse {
    pub id: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
}
