//! Sales-order filter set and its query-string form.

use serde::{Deserialize, Serialize};

/// Date-range keywords understood by `/api/sales-orders`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    Today,
    Yesterday,
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[serde(rename = "last_30_days")]
    Last30Days,
}

impl DateFilter {
    pub const ALL: [DateFilter; 4] = [
        DateFilter::Today,
        DateFilter::Yesterday,
        DateFilter::Last7Days,
        DateFilter::Last30Days,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::Today => "today",
            DateFilter::Yesterday => "yesterday",
            DateFilter::Last7Days => "last_7_days",
            DateFilter::Last30Days => "last_30_days",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::Today => "Today",
            DateFilter::Yesterday => "Yesterday",
            DateFilter::Last7Days => "Last 7 Days",
            DateFilter::Last30Days => "Last 30 Days",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

/// Page sizes offered by the sales-orders table.
pub const PAGE_SIZES: [u32; 4] = [10, 20, 50, 100];

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Everything `/api/sales-orders` can be asked for.
///
/// Used both as the held state of the sales-orders controller and as a patch
/// merged over it: a `None` field in a patch leaves the held value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOrderFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcl_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl SalesOrderFilters {
    pub fn first_page(limit: u32) -> Self {
        Self {
            page: Some(1),
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_dcl_status(mut self, dcl_status: impl Into<String>) -> Self {
        self.dcl_status = Some(dcl_status.into());
        self
    }

    pub fn with_date_filter(mut self, date_filter: DateFilter) -> Self {
        self.date_filter = Some(date_filter.as_str().to_string());
        self
    }

    pub fn with_order_number(mut self, order_number: impl Into<String>) -> Self {
        self.order_number = Some(order_number.into());
        self
    }

    pub fn with_date_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Page currently requested, 1 when unset.
    pub fn current_page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    /// The narrowing part of the set, normalised so that `Some("")` and `None`
    /// compare equal.
    fn narrowing(&self) -> [Option<&str>; 6] {
        [
            present(&self.date_filter),
            present(&self.order_number),
            present(&self.status),
            present(&self.dcl_status),
            present(&self.start_date),
            present(&self.end_date),
        ]
    }

    /// True when any narrowing field differs between the two sets.
    pub fn filters_differ(&self, other: &Self) -> bool {
        self.narrowing() != other.narrowing()
    }

    /// True when no narrowing field is set.
    pub fn is_unfiltered(&self) -> bool {
        self.narrowing().iter().all(Option::is_none)
    }

    /// Overlay the present fields of `patch` onto `self`.
    pub fn merged_with(&self, patch: &Self) -> Self {
        fn pick<T: Clone>(patch: &Option<T>, held: &Option<T>) -> Option<T> {
            patch.clone().or_else(|| held.clone())
        }
        Self {
            page: pick(&patch.page, &self.page),
            limit: pick(&patch.limit, &self.limit),
            date_filter: pick(&patch.date_filter, &self.date_filter),
            order_number: pick(&patch.order_number, &self.order_number),
            status: pick(&patch.status, &self.status),
            dcl_status: pick(&patch.dcl_status, &self.dcl_status),
            start_date: pick(&patch.start_date, &self.start_date),
            end_date: pick(&patch.end_date, &self.end_date),
            cursor: pick(&patch.cursor, &self.cursor),
        }
    }

    /// Drop every narrowing field, keeping paging.
    pub fn without_filters(&self) -> Self {
        Self {
            page: self.page,
            limit: self.limit,
            cursor: self.cursor.clone(),
            ..Default::default()
        }
    }

    /// Query parameters in wire order. Absent, blank and zero values are
    /// left out entirely.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let numbers = [("page", self.page), ("limit", self.limit)];
        for (key, value) in numbers {
            if let Some(v) = value.filter(|v| *v > 0) {
                pairs.push((key.to_string(), v.to_string()));
            }
        }
        let strings = [
            ("date_filter", &self.date_filter),
            ("order_number", &self.order_number),
            ("status", &self.status),
            ("dcl_status", &self.dcl_status),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
            ("cursor", &self.cursor),
        ];
        for (key, value) in strings {
            if let Some(v) = present(value) {
                pairs.push((key.to_string(), v.to_string()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(filters: &SalesOrderFilters) -> Vec<String> {
        filters.to_query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn absent_and_blank_fields_are_omitted() {
        let filters = SalesOrderFilters {
            page: Some(0),
            limit: Some(20),
            date_filter: Some(String::new()),
            order_number: Some("   ".into()),
            status: None,
            dcl_status: Some("shipped".into()),
            start_date: Some(String::new()),
            end_date: None,
            cursor: Some(String::new()),
        };
        let pairs = filters.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("limit".to_string(), "20".to_string()),
                ("dcl_status".to_string(), "shipped".to_string()),
            ]
        );
        assert!(pairs.iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn every_combination_of_blank_fields_is_omitted() {
        // Each narrowing field is either unset, blank or set; blank must never
        // reach the wire.
        for mask in 0u32..(3u32.pow(6)) {
            let mut m = mask;
            let mut slot = || {
                let v = match m % 3 {
                    0 => None,
                    1 => Some(String::new()),
                    _ => Some("x".to_string()),
                };
                m /= 3;
                v
            };
            let filters = SalesOrderFilters {
                date_filter: slot(),
                order_number: slot(),
                status: slot(),
                dcl_status: slot(),
                start_date: slot(),
                end_date: slot(),
                ..Default::default()
            };
            for (key, value) in filters.to_query_pairs() {
                assert!(!value.is_empty(), "{key} sent empty for mask {mask}");
            }
        }
    }

    #[test]
    fn query_order_is_stable() {
        let filters = SalesOrderFilters::first_page(50)
            .with_cursor("abc")
            .with_status("pending")
            .with_date_filter(DateFilter::Last7Days);
        assert_eq!(
            keys(&filters),
            vec!["page", "limit", "date_filter", "status", "cursor"]
        );
    }

    #[test]
    fn merge_keeps_held_values_for_absent_patch_fields() {
        let held = SalesOrderFilters::first_page(20).with_status("pending");
        let merged = held.merged_with(&SalesOrderFilters {
            page: Some(3),
            ..Default::default()
        });
        assert_eq!(merged.page, Some(3));
        assert_eq!(merged.limit, Some(20));
        assert_eq!(merged.status.as_deref(), Some("pending"));
    }

    #[test]
    fn blank_and_missing_filters_are_equivalent() {
        let a = SalesOrderFilters {
            status: Some(String::new()),
            ..Default::default()
        };
        let b = SalesOrderFilters::default();
        assert!(!a.filters_differ(&b));
        assert!(a.is_unfiltered());
        assert!(b.clone().with_status("failed").filters_differ(&b));
    }

    #[test]
    fn paging_fields_do_not_count_as_filter_changes() {
        let a = SalesOrderFilters::first_page(20);
        let b = a.clone().with_page(7).with_cursor("zz").with_limit(100);
        assert!(!a.filters_differ(&b));
    }

    #[test]
    fn date_filter_round_trips_through_keyword() {
        for f in DateFilter::ALL {
            assert_eq!(DateFilter::parse(f.as_str()), Some(f));
        }
        assert_eq!(DateFilter::parse("last_year"), None);
        let json = serde_json::to_string(&DateFilter::Last30Days).unwrap();
        assert_eq!(json, "\"last_30_days\"");
    }
}
