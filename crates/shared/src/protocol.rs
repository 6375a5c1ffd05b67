//! Response envelopes returned by the backend API.
//!
//! Every object response carries a `status` discriminator. Anything other
//! than `"success"` is an application error even when the HTTP layer said
//! 200, so decoding always goes through [`validate_envelope`] first.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::filters::{DateFilter, SalesOrderFilters};
use crate::models::SalesOrder;

pub const STATUS_SUCCESS: &str = "success";

/// Paging block attached to list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub showing_from: Option<u64>,
    #[serde(default)]
    pub showing_to: Option<u64>,
    /// Opaque continuation token for the page after this one.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl Pagination {
    /// Deep pages of a big result set are slow on the backend; the table shows
    /// a notice suggesting filters.
    pub fn is_large_dataset(&self) -> bool {
        self.current_page > 10 && self.total_count > 500
    }

    pub fn cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }

    /// "Showing 21 to 40 of 55", derived when the server omits the range.
    pub fn summary(&self) -> String {
        if self.total_count == 0 {
            return "No results".to_string();
        }
        let page = u64::from(self.current_page.max(1));
        let range = match (self.showing_from, self.showing_to, self.limit) {
            (Some(from), Some(to), _) => Some((from, to)),
            (from, to, Some(limit)) if limit > 0 => {
                let limit = u64::from(limit);
                Some((
                    from.unwrap_or((page - 1) * limit + 1),
                    to.unwrap_or((page * limit).min(self.total_count)),
                ))
            }
            // Without a page size only a single page can be placed.
            _ if self.total_pages <= 1 => Some((1, self.total_count)),
            _ => None,
        };
        match range {
            Some((from, to)) => format!("Showing {from} to {to} of {}", self.total_count),
            None => format!("{} results", self.total_count),
        }
    }
}

/// `{ status, data: [..], pagination? }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListEnvelope<T> {
    pub status: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub message: Option<String>,
}

/// What a list resource hands to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> ListPage<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.pagination.as_ref().is_some_and(|p| p.has_next)
    }

    pub fn has_prev(&self) -> bool {
        self.pagination.as_ref().is_some_and(|p| p.has_prev)
    }
}

impl<T> From<ListEnvelope<T>> for ListPage<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        Self {
            items: envelope.data,
            pagination: envelope.pagination,
        }
    }
}

/// Filters echoed back by `/api/sales-orders`.
pub type FiltersApplied = SalesOrderFilters;

/// `/api/sales-orders` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesOrdersEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: Vec<SalesOrder>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub filters_applied: Option<FiltersApplied>,
}

/// Sales-orders list plus the filters the server reports having applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesOrdersPage {
    pub orders: Vec<SalesOrder>,
    pub pagination: Option<Pagination>,
    pub filters_applied: Option<FiltersApplied>,
}

impl From<SalesOrdersEnvelope> for SalesOrdersPage {
    fn from(envelope: SalesOrdersEnvelope) -> Self {
        Self {
            orders: envelope.data,
            pagination: envelope.pagination,
            filters_applied: envelope.filters_applied,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateFilterOption {
    pub value: String,
    pub label: String,
}

fn default_date_filters() -> Vec<DateFilterOption> {
    DateFilter::ALL
        .into_iter()
        .map(|f| DateFilterOption {
            value: f.as_str().to_string(),
            label: f.label().to_string(),
        })
        .collect()
}

/// Dropdown choices for the sales-orders filter panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOptions {
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub dcl_statuses: Vec<String>,
    #[serde(default = "default_date_filters")]
    pub date_filters: Vec<DateFilterOption>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            statuses: Vec::new(),
            dcl_statuses: Vec::new(),
            date_filters: default_date_filters(),
        }
    }
}

/// `/api/sales-orders/filters` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterOptionsEnvelope {
    pub status: String,
    #[serde(default)]
    pub filters: FilterOptions,
}

/// `{ status, data: T }` used by `/api/sales-stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataEnvelope<T> {
    pub status: String,
    pub data: T,
}

/// Check the `status` discriminator of a decoded body.
///
/// Returns the envelope's `message` (or `fallback`) as an
/// [`ApiError::Application`] when the body is not an object, has no status,
/// or reports anything other than `"success"`.
pub fn validate_envelope(body: &serde_json::Value, fallback: &str) -> Result<(), ApiError> {
    let status = body.get("status").and_then(serde_json::Value::as_str);
    if status == Some(STATUS_SUCCESS) {
        return Ok(());
    }
    let message = body
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(fallback);
    Err(ApiError::Application(message.to_string()))
}

/// Validate the discriminator, then decode the whole body as `T`.
pub fn decode_envelope<T: DeserializeOwned>(
    body: serde_json::Value,
    fallback: &str,
) -> Result<T, ApiError> {
    validate_envelope(&body, fallback)?;
    serde_json::from_value(body).map_err(|e| ApiError::Deserialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_status_surfaces_message() {
        let body = json!({"status": "error", "message": "x"});
        let err = validate_envelope(&body, "Failed to fetch sales orders").unwrap_err();
        assert_eq!(err, ApiError::Application("x".to_string()));
        assert_eq!(err.to_string(), "x");
    }

    #[test]
    fn missing_status_uses_fallback() {
        let body = json!({"data": []});
        let err = validate_envelope(&body, "Failed to fetch target orders").unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch target orders");

        let err = validate_envelope(&json!([1, 2, 3]), "nope").unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn sales_orders_envelope_decodes() {
        let body = json!({
            "status": "success",
            "data": [{"_id": "a", "katana_order_number": "SO-1", "status": "complete"}],
            "pagination": {
                "current_page": 1, "total_pages": 3, "total_count": 55,
                "has_next": true, "has_prev": false, "next_cursor": "abc"
            },
            "filters_applied": {"date_filter": "", "status": "complete"}
        });
        let page: SalesOrdersPage = decode_envelope::<SalesOrdersEnvelope>(body, "x")
            .unwrap()
            .into();
        assert_eq!(page.orders.len(), 1);
        let pagination = page.pagination.unwrap();
        assert!(pagination.has_next);
        assert_eq!(pagination.cursor(), Some("abc"));
        assert_eq!(
            page.filters_applied.unwrap().status.as_deref(),
            Some("complete")
        );
    }

    #[test]
    fn filter_options_default_date_choices() {
        let body = json!({"status": "success", "filters": {"statuses": ["pending"], "dcl_statuses": []}});
        let env: FilterOptionsEnvelope = decode_envelope(body, "x").unwrap();
        assert_eq!(env.filters.statuses, vec!["pending".to_string()]);
        assert_eq!(env.filters.date_filters.len(), 4);
        assert_eq!(env.filters.date_filters[2].value, "last_7_days");
    }

    #[test]
    fn large_dataset_threshold() {
        let mut p = Pagination {
            current_page: 11,
            total_count: 501,
            ..Default::default()
        };
        assert!(p.is_large_dataset());
        p.current_page = 10;
        assert!(!p.is_large_dataset());
        p.current_page = 20;
        p.total_count = 500;
        assert!(!p.is_large_dataset());
    }

    #[test]
    fn summary_derives_range_when_missing() {
        let p = Pagination {
            current_page: 3,
            total_pages: 3,
            total_count: 55,
            limit: Some(20),
            ..Default::default()
        };
        assert_eq!(p.summary(), "Showing 41 to 55 of 55");
        assert_eq!(Pagination::default().summary(), "No results");
    }

    #[test]
    fn summary_without_page_size_never_shows_empty_range() {
        let single = Pagination {
            current_page: 1,
            total_pages: 1,
            total_count: 55,
            ..Default::default()
        };
        assert_eq!(single.summary(), "Showing 1 to 55 of 55");

        let deep = Pagination {
            current_page: 2,
            total_pages: 3,
            total_count: 55,
            ..Default::default()
        };
        assert_eq!(deep.summary(), "55 results");

        let zero_limit = Pagination {
            limit: Some(0),
            ..deep.clone()
        };
        assert_eq!(zero_limit.summary(), "55 results");
    }
}
