//! Date-bounded revenue lookup over completed orders.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::order::{Order, OrderStatus};
use crate::models::revenue::{RevenueOrderSummary, RevenueResponse};
use crate::services::money;

lazy_static! {
    static ref DATE_SHAPE: Regex = Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").unwrap();
}

/// Sanity bounds for the entered year.
pub const MIN_YEAR: i32 = 1970;
pub const MAX_YEAR: i32 = 2100;

/// Everything that can be wrong with a user-entered date range. Each case
/// carries its own user-facing message; no filtering happens when any of
/// them fires.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Vui lòng nhập ngày bắt đầu.")]
    MissingStart,
    #[error("Vui lòng nhập ngày kết thúc.")]
    MissingEnd,
    #[error("Ngày bắt đầu không hợp lệ: {0}")]
    InvalidStart(String),
    #[error("Ngày kết thúc không hợp lệ: {0}")]
    InvalidEnd(String),
    #[error("Ngày bắt đầu phải trước hoặc trùng ngày kết thúc.")]
    StartAfterEnd,
}

/// Parse a user-entered `dd/mm/yyyy` date. The shape is checked before the
/// calendar so that "2024-01-01" and "31/02/2024" produce different
/// messages.
pub fn parse_input_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    let caps = DATE_SHAPE
        .captures(trimmed)
        .ok_or_else(|| format!("'{trimmed}' không đúng định dạng dd/mm/yyyy"))?;

    let day: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(format!("năm {year} nằm ngoài khoảng {MIN_YEAR}-{MAX_YEAR}"));
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("ngày {trimmed} không tồn tại trên lịch"))
}

/// Validate a start/end pair. Missing input, a malformed date, and an
/// inverted range each report as their own error.
pub fn parse_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(NaiveDate, NaiveDate), DateRangeError> {
    let start = start
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(DateRangeError::MissingStart)?;
    let end = end
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(DateRangeError::MissingEnd)?;

    let start = parse_input_date(start).map_err(DateRangeError::InvalidStart)?;
    let end = parse_input_date(end).map_err(DateRangeError::InvalidEnd)?;

    if start > end {
        return Err(DateRangeError::StartAfterEnd);
    }

    Ok((start, end))
}

/// Orders that count toward revenue: completed, with a creation date inside
/// the inclusive range when one is given. Orders without a parseable
/// creation date never match a bounded range.
pub fn completed_in_range(
    orders: &[Order],
    range: Option<(NaiveDate, NaiveDate)>,
) -> Vec<&Order> {
    orders
        .iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .filter(|order| match range {
            None => true,
            Some((start, end)) => order
                .created_at
                .map(|ts| {
                    let date = ts.date_naive();
                    date >= start && date <= end
                })
                .unwrap_or(false),
        })
        .collect()
}

/// Build the response for a set of matching orders: per-order summaries plus
/// the formatted sum of their totals.
pub fn build_response(matching: Vec<&Order>) -> RevenueResponse {
    let total: Decimal = matching.iter().map(|order| order.total).sum();

    let orders: Vec<RevenueOrderSummary> = matching
        .into_iter()
        .map(|order| RevenueOrderSummary {
            id: order.id.clone(),
            full_name: order.customer.full_name.clone(),
            total: order.total,
            total_display: money::format_vnd(order.total),
            created_at: order.created_at,
        })
        .collect();

    RevenueResponse {
        order_count: orders.len(),
        orders,
        total,
        total_display: money::format_vnd(total),
    }
}
