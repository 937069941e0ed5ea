//! Order search and the status lifecycle rule.

use serde_json::Value;
use thiserror::Error;

use crate::models::order::{Order, OrderStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Chỉ có thể chuyển trạng thái từ \"Đang xử lý\" sang \"Đã hoàn thành\".")]
    NotPending,
}

/// Gate for the one allowed lifecycle move, pending → completed. A completed
/// order stays completed; cancelled orders have no outgoing transition.
/// Checked before any upstream write.
pub fn ensure_completable(order: &Order) -> Result<(), TransitionError> {
    if order.status != OrderStatus::Pending {
        return Err(TransitionError::NotPending);
    }
    Ok(())
}

/// Full-record copy with the new status merged in. The store backend has no
/// partial update, so the whole record is written back unchanged apart from
/// `status`.
pub fn with_status(mut record: Value, status: OrderStatus) -> Value {
    if let Some(object) = record.as_object_mut() {
        object.insert(
            "status".to_string(),
            Value::String(status.as_str().to_string()),
        );
    }
    record
}

/// Case-insensitive substring match over order id, user id, phone, and
/// address. An empty query returns the list unchanged.
pub fn filter_orders<'a>(orders: &'a [Order], query: &str) -> Vec<&'a Order> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return orders.iter().collect();
    }
    orders
        .iter()
        .filter(|order| {
            order.id.to_lowercase().contains(&q)
                || order.user_id.to_lowercase().contains(&q)
                || order.customer.phone.contains(&q)
                || order.customer.address.to_lowercase().contains(&q)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(id: &str, status: &str, phone: &str, address: &str) -> Order {
        let raw: crate::models::order::RawOrder = serde_json::from_value(json!({
            "id": id,
            "userId": format!("user-{id}"),
            "phoneNumber": phone,
            "address": address,
            "totalPrice": 100000,
            "status": status
        }))
        .unwrap();
        raw.normalize().unwrap()
    }

    #[test]
    fn only_pending_orders_can_complete() {
        assert_eq!(ensure_completable(&order("o1", "pending", "", "")), Ok(()));
        assert_eq!(
            ensure_completable(&order("o2", "completed", "", "")),
            Err(TransitionError::NotPending)
        );
        assert_eq!(
            ensure_completable(&order("o3", "cancelled", "", "")),
            Err(TransitionError::NotPending)
        );
    }

    #[test]
    fn merge_keeps_unknown_fields_intact() {
        let record = json!({
            "id": "o1",
            "status": "pending",
            "someLegacyField": {"nested": true}
        });

        let updated = with_status(record, OrderStatus::Completed);
        assert_eq!(updated["status"], "completed");
        assert_eq!(updated["someLegacyField"]["nested"], true);
    }

    #[test]
    fn search_matches_id_user_phone_and_address() {
        let orders = vec![
            order("ord-100", "pending", "0901234567", "12 Nguyễn Trãi"),
            order("ord-200", "completed", "0987654321", "5 Lý Thường Kiệt"),
        ];

        assert_eq!(filter_orders(&orders, "ORD-100").len(), 1);
        assert_eq!(filter_orders(&orders, "user-ord-200").len(), 1);
        assert_eq!(filter_orders(&orders, "0987").len(), 1);
        assert_eq!(filter_orders(&orders, "nguyễn trãi").len(), 1);
        assert_eq!(filter_orders(&orders, "").len(), 2);
        assert_eq!(filter_orders(&orders, "no-match").len(), 0);
    }
}
