//! Records served by the Katana DCL backend.
//!
//! The backend is loose about nulls and missing keys. Optional values are
//! `Option`s; everything else falls back to its default whether the key is
//! missing or explicitly `null`. Timestamps stay as strings; the client only
//! ever formats them.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as `T::default()`. Pair with `#[serde(default)]` for
/// missing keys.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Status ---

/// Visual weight of a free-form order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl StatusTone {
    /// Classify a status string, case-insensitively.
    pub fn classify(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "complete" | "completed" | "done" => StatusTone::Success,
            "pending" | "not_shipped" | "processing" => StatusTone::Warning,
            "failed" | "error" => StatusTone::Danger,
            _ => StatusTone::Neutral,
        }
    }
}

// --- Sales orders ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderAddress {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl OrderAddress {
    pub fn full_name(&self) -> Option<String> {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SalesOrderRow {
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    #[serde(default)]
    pub price_per_unit: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KatanaOrderData {
    #[serde(default)]
    pub order_no: Option<String>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub order_created_date: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub addresses: Vec<OrderAddress>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sales_order_rows: Vec<SalesOrderRow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SalesOrder {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub katana_order_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub katana_order_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub dcl_status: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub items_count: Option<u32>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub order_created_date: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub katana_order_data: KatanaOrderData,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl SalesOrder {
    /// Order total, preferring the flattened field over the nested Katana copy.
    pub fn display_total(&self) -> f64 {
        self.total.or(self.katana_order_data.total).unwrap_or(0.0)
    }

    pub fn display_currency(&self) -> &str {
        self.currency
            .as_deref()
            .or(self.katana_order_data.currency.as_deref())
            .unwrap_or("USD")
    }

    pub fn line_count(&self) -> usize {
        self.items_count
            .map(|c| c as usize)
            .unwrap_or(self.katana_order_data.sales_order_rows.len())
    }

    pub fn customer(&self) -> Option<String> {
        let address = self.katana_order_data.addresses.first()?;
        address
            .company
            .clone()
            .filter(|c| !c.trim().is_empty())
            .or_else(|| address.full_name())
    }
}

// --- Purchase orders ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub po_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub po_number: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub expected_arrival_date: Option<String>,
    #[serde(default)]
    pub katana_status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity_ordered: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity_received: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fulfillment_percentage: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// --- Stock transfers ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StockTransferRow {
    #[serde(default)]
    pub variant_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cost_per_unit: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_cost: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StockTransfer {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub record_id: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_transfer_number: String,
    #[serde(default)]
    pub source_location_id: Option<i64>,
    #[serde(default)]
    pub target_location_id: Option<i64>,
    #[serde(default)]
    pub transfer_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub order_status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_quantity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_cost: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_transfer_rows: Vec<StockTransferRow>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// --- Target orders ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TargetOrder {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_no: String,
    #[serde(default)]
    pub katana_order_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// --- Dashboard ---

/// Recent activity row on the overview page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecentOrder {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OverallStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_orders: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_orders: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed_orders: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success_rate: f64,
    #[serde(default)]
    pub avg_processing_time: Option<String>,
}

/// Body of `/api/dashboard-stats` minus the status discriminator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall: OverallStats,
}

/// Headline metrics from `/api/sales-stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesStats {
    #[serde(default, alias = "orders_today", deserialize_with = "null_as_default")]
    pub orders_today: u64,
    #[serde(default, alias = "pending_orders", deserialize_with = "null_as_default")]
    pub pending_orders: u64,
    #[serde(default, alias = "completed_orders", deserialize_with = "null_as_default")]
    pub completed_orders: u64,
    #[serde(default, alias = "failed_orders", deserialize_with = "null_as_default")]
    pub failed_orders: u64,
    #[serde(default, alias = "success_rate", deserialize_with = "null_as_default")]
    pub success_rate: f64,
    #[serde(default, alias = "avg_processing_time")]
    pub avg_processing_time: Option<String>,
}

/// One bucket of the hourly order-flow series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderFlowPoint {
    #[serde(default, alias = "time", deserialize_with = "null_as_default")]
    pub hour: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed: u64,
}

// --- Formatting helpers ---

/// Parse the timestamp formats the backend emits (RFC 3339 and the RFC 2822
/// style Flask uses for datetimes).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
}

/// "5m ago" style label relative to `now`. Unparseable input is returned as-is.
pub fn time_ago(raw: &str, now: DateTime<Utc>) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let mins = (now - ts.with_timezone(&Utc)).num_minutes().max(0);
    if mins < 1 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if mins < 60 * 24 {
        format!("{}h ago", mins / 60)
    } else {
        format!("{}d ago", mins / (60 * 24))
    }
}

/// `1234.5` + `USD` → `USD 1,234.50`.
pub fn format_money(amount: f64, currency: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{currency} {sign}{grouped}.{:02}", cents % 100)
}
