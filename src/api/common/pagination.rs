//
//  createsend
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination types for Campaign Monitor list endpoints.
//!
//! Endpoints that can return large result sets (suppression lists, campaign
//! recipients, opens, clicks and so on) wrap their records in a page envelope
//! and accept `page`, `pagesize`, `orderfield` and `orderdirection` query
//! parameters.
//!
//! ```json
//! {
//!     "Results": [ ... ],
//!     "ResultsOrderedBy": "email",
//!     "OrderDirection": "asc",
//!     "PageNumber": 1,
//!     "PageSize": 1000,
//!     "RecordsOnThisPage": 5,
//!     "TotalNumberOfRecords": 5,
//!     "NumberOfPages": 1
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One page of results from a paged endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagedResult<T> {
    /// The records on this page. Never `null`; an absent list decodes as empty.
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub results: Vec<T>,

    #[serde(default)]
    pub results_ordered_by: String,

    #[serde(default)]
    pub order_direction: String,

    #[serde(default)]
    pub page_number: u32,

    #[serde(default)]
    pub page_size: u32,

    #[serde(default)]
    pub records_on_this_page: u32,

    #[serde(default)]
    pub total_number_of_records: u32,

    #[serde(default)]
    pub number_of_pages: u32,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            results_ordered_by: String::new(),
            order_direction: String::new(),
            page_number: 0,
            page_size: 0,
            records_on_this_page: 0,
            total_number_of_records: 0,
            number_of_pages: 0,
        }
    }
}

impl<T> PagedResult<T> {
    /// Whether there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.page_number < self.number_of_pages
    }

    /// The page number to request next, if any.
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.page_number + 1)
    }
}

/// Sort direction for paged queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query parameters accepted by paged endpoints.
///
/// Unset fields are left off the query string so the server applies its own
/// defaults (page 1, 1000 records, ascending).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub order_field: Option<String>,
    pub order_direction: Option<OrderDirection>,
    /// Only records on or after this date (`YYYY-MM-DD`), where supported.
    pub date: Option<String>,
}

impl PageQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_field = Some(field.into());
        self.order_direction = Some(direction);
        self
    }

    pub fn since(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Query pairs in the order the API documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(date) = &self.date {
            pairs.push(("date", date.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("pagesize", size.to_string()));
        }
        if let Some(field) = &self.order_field {
            pairs.push(("orderfield", field.clone()));
        }
        if let Some(direction) = self.order_direction {
            pairs.push(("orderdirection", direction.as_str().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_result_decodes_null_results() {
        let page: PagedResult<String> = serde_json::from_str(
            r#"{"Results":null,"PageNumber":1,"NumberOfPages":1,"PageSize":1000}"#,
        )
        .unwrap();
        assert!(page.results.is_empty());
        assert!(!page.has_next());
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn test_paged_result_next_page() {
        let page: PagedResult<u32> = serde_json::from_str(
            r#"{"Results":[1,2],"PageNumber":2,"NumberOfPages":3,"RecordsOnThisPage":2}"#,
        )
        .unwrap();
        assert_eq!(page.results, vec![1, 2]);
        assert_eq!(page.next_page(), Some(3));
    }

    #[test]
    fn test_page_query_pairs() {
        let query = PageQuery::default()
            .page(2)
            .page_size(50)
            .order_by("email", OrderDirection::Desc);
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "2".to_string()),
                ("pagesize", "50".to_string()),
                ("orderfield", "email".to_string()),
                ("orderdirection", "desc".to_string()),
            ]
        );
        assert!(PageQuery::default().to_pairs().is_empty());
    }
}
