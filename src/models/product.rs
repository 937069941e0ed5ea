//! Catalog product records.
//!
//! The store backend has gone through several schema revisions: prices are
//! stored as strings, the pot category appears under two spellings ("pot"
//! and "plantpot"), and older records carry a single `image` while newer
//! ones carry an `images` array. Everything is normalized into the canonical
//! [`Product`] here, at the data-access boundary, so the rest of the crate
//! never sees the raw inconsistencies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::RawAmount;

/// Product category after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Plant,
    Pot,
    Accessory,
}

impl ProductKind {
    /// Map a raw `type` value to a category. Both pot spellings land in
    /// `Pot`; the plural forms come from the admin form's category labels.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "plant" | "plants" => Some(Self::Plant),
            "pot" | "pots" | "plantpot" | "plantpots" => Some(Self::Pot),
            "accessory" | "accessories" => Some(Self::Accessory),
            _ => None,
        }
    }

    /// Canonical spelling written back to the store backend.
    pub fn as_store_type(&self) -> &'static str {
        match self {
            Self::Plant => "plant",
            Self::Pot => "pot",
            Self::Accessory => "accessory",
        }
    }
}

impl<'de> Deserialize<'de> for ProductKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ProductKind::from_raw(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown product type: {raw}")))
    }
}

/// Product record as the store backend returns it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawProduct {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: RawAmount,
    #[serde(default)]
    pub quantity: u32,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "lightPreference", default)]
    pub light_preference: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(rename = "new", default)]
    pub is_new: Option<bool>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl RawProduct {
    /// Canonicalize a raw record. Returns `None` when the `type` value does
    /// not map to any of the three categories.
    pub(crate) fn normalize(self) -> Option<Product> {
        let kind = ProductKind::from_raw(&self.kind)?;

        // Newer records keep a gallery; the first entry wins over the
        // legacy single image.
        let image = self
            .images
            .and_then(|images| images.into_iter().next())
            .or(self.image);

        Some(Product {
            id: self.id,
            name: self.name,
            price: self.price.to_decimal(),
            quantity: self.quantity,
            kind,
            light_preference: self.light_preference,
            size: self.size,
            origin: self.origin,
            is_new: self.is_new,
            image,
        })
    }
}

/// Canonical product shape used everywhere past the data-access layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub kind: ProductKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create/edit payload accepted by the admin API. Mirrors the fields of the
/// product form; optional fields only apply to some categories (light
/// preference for plants, size for pots, origin for accessories).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: u32,
    pub kind: ProductKind,
    #[serde(default)]
    pub light_preference: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub is_new: Option<bool>,
}

/// Wire shape written to the store backend on create/update. The store keeps
/// prices as plain strings.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct StoreProductRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: String,
    pub image: String,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "lightPreference", skip_serializing_if = "Option::is_none")]
    pub light_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(rename = "new", skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub count: usize,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProductResponse {
    pub id: String,
    pub deleted: bool,
}
