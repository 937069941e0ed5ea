use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::services::money;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Monetary value as the store backend sends it: a bare number in some
/// backend revisions, a pre-formatted string like "1.040.000đ" in others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    pub fn to_decimal(&self) -> Decimal {
        match self {
            RawAmount::Number(n) => Decimal::from_f64_retain(*n).unwrap_or_default(),
            RawAmount::Text(s) => money::parse_amount(s),
        }
    }
}

impl Default for RawAmount {
    fn default() -> Self {
        RawAmount::Number(0.0)
    }
}
