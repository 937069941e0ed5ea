//! Product classification, search, and form validation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::product::{Product, ProductKind, ProductPayload, StoreProductRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductValidationError {
    #[error("Vui lòng nhập đầy đủ thông tin sản phẩm.")]
    MissingFields,
    #[error("Vui lòng chọn điều kiện ánh sáng cho cây.")]
    MissingLightPreference,
}

/// Products in one category bucket, or all of them when no bucket is asked
/// for. Order is preserved from the fetched list.
pub fn products_of_kind(products: &[Product], kind: Option<ProductKind>) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| kind.is_none_or(|k| product.kind == k))
        .collect()
}

/// Case-insensitive substring match on the product name. An empty query
/// returns the list unchanged.
pub fn filter_products<'a>(products: Vec<&'a Product>, query: &str) -> Vec<&'a Product> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return products;
    }
    products
        .into_iter()
        .filter(|product| product.name.to_lowercase().contains(&q))
        .collect()
}

/// Form-level checks before anything is sent upstream. Name, price, image
/// and quantity are always required; plants additionally need a light
/// preference.
pub fn validate_payload(payload: &ProductPayload) -> Result<(), ProductValidationError> {
    if payload.name.trim().is_empty()
        || payload.image.trim().is_empty()
        || payload.price <= Decimal::ZERO
    {
        return Err(ProductValidationError::MissingFields);
    }

    if payload.kind == ProductKind::Plant
        && payload
            .light_preference
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .is_empty()
    {
        return Err(ProductValidationError::MissingLightPreference);
    }

    Ok(())
}

/// Convert a validated payload into the store backend's wire shape. Category
/// extras that do not apply to the payload's kind are dropped rather than
/// forwarded.
pub(crate) fn to_store_record(payload: &ProductPayload, id: Option<String>) -> StoreProductRecord {
    StoreProductRecord {
        id,
        name: payload.name.trim().to_string(),
        price: payload.price.normalize().to_string(),
        image: payload.image.clone(),
        quantity: payload.quantity,
        kind: payload.kind.as_store_type(),
        light_preference: match payload.kind {
            ProductKind::Plant => payload.light_preference.clone(),
            _ => None,
        },
        size: match payload.kind {
            ProductKind::Pot => payload.size.clone(),
            _ => None,
        },
        origin: match payload.kind {
            ProductKind::Accessory => payload.origin.clone(),
            _ => None,
        },
        is_new: match payload.kind {
            ProductKind::Plant => payload.is_new,
            _ => None,
        },
    }
}
