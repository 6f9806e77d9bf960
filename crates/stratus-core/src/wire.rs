//! Wire types for the flat AND-combined filter protocol
//!
//! The backend accepts exactly one query shape: a flat list of
//! field/operator/value rules combined with AND, offset-based paging and
//! an optional single-column sort. This is not a general query language
//! and deliberately exposes nothing beyond that shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Filter operators understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    #[default]
    Equal,
    NotEqual,
    In,
    NotIn,
    Contains,
    Gt,
    Gte,
    Lt,
    Lte,
    Range,
}

impl FilterOperator {
    /// Get the display label for the operator
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::In => "is in list",
            Self::NotIn => "is not in list",
            Self::Contains => "contains",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Range => "is between",
        }
    }

    /// Returns true if this operator requires a value input
    pub fn requires_value(&self) -> bool {
        // Every operator this backend accepts carries a value; the
        // null/empty checks of richer grids are not part of the protocol.
        true
    }

    /// Get all available operators in display order
    pub fn all() -> &'static [FilterOperator] {
        &[
            Self::Equal,
            Self::NotEqual,
            Self::In,
            Self::NotIn,
            Self::Contains,
            Self::Gt,
            Self::Gte,
            Self::Lt,
            Self::Lte,
            Self::Range,
        ]
    }
}

/// A single field/operator/value filter rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRule {
    pub field: String,
    #[serde(rename = "op")]
    pub operator: FilterOperator,
    pub value: Value,
}

impl QueryRule {
    /// Create a new rule
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: Value) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }
}

/// How rules are combined. The backend only supports AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    #[default]
    And,
}

/// Normalized AND-combined rule set sent to the backend.
///
/// Rule order is insertion order; the server does not care, but keeping
/// it stable makes request bodies reproducible and diffable in logs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    pub condition: Condition,
    pub rules: Vec<QueryRule>,
}

impl QuerySpec {
    /// Create a spec from a rule list
    pub fn new(rules: Vec<QueryRule>) -> Self {
        Self {
            condition: Condition::And,
            rules,
        }
    }

    /// A spec with no rules (matches everything)
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Sort direction for the single-column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Offset/limit/sort/count bundle describing one page of a remote list.
///
/// Invariant: `start == (current - 1) * limit`. `count` is only ever
/// populated from a count-fetch response, never inferred from the length
/// of a data page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    pub start: u64,
    pub limit: u64,
    pub current: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    pub count: u64,
}

impl PageState {
    /// Create page state on page 1 with the given page size
    pub fn new(limit: u64) -> Self {
        Self {
            start: 0,
            limit: limit.max(1),
            current: 1,
            sort: None,
            order: None,
            count: 0,
        }
    }

    /// Move to a page, recomputing the offset
    pub fn set_page(&mut self, current: u64) {
        self.current = current.max(1);
        self.start = (self.current - 1) * self.limit;
    }

    /// Change the page size and jump back to page 1
    pub fn set_limit(&mut self, limit: u64) {
        self.limit = limit.max(1);
        self.set_page(1);
    }

    /// Set or clear the sort column and jump back to page 1
    pub fn set_sort(&mut self, sort: Option<String>, order: Option<SortOrder>) {
        self.sort = sort;
        self.order = order;
        self.set_page(1);
    }

    /// Jump back to page 1 without touching limit/sort
    pub fn reset_page(&mut self) {
        self.set_page(1);
    }

    /// Number of pages implied by `count`, at least 1
    pub fn total_pages(&self) -> u64 {
        if self.count == 0 {
            1
        } else {
            self.count.div_ceil(self.limit)
        }
    }

    /// Page parameters for the data request of a fetch cycle
    pub fn data_params(&self) -> PageParams {
        PageParams {
            start: self.start,
            limit: self.limit,
            sort: self.sort.clone(),
            order: self.order,
            count: false,
        }
    }

    /// Page parameters for the count request of a fetch cycle.
    ///
    /// `limit = 0, count = true` asks the backend to skip row materialization
    /// and return only the total for the current filter.
    pub fn count_params(&self) -> PageParams {
        PageParams {
            start: 0,
            limit: 0,
            sort: None,
            order: None,
            count: true,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// The `page` member of a request body.
///
/// Distinct from [`PageState`]: `count` here is the request flag asking
/// the backend for a total, not the total itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageParams {
    pub start: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    pub count: bool,
}

/// Full request body for a list fetch: `{filter, page}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRequest {
    pub filter: QuerySpec,
    pub page: PageParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    mod page_state_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_start_follows_current_and_limit() {
            let mut page = PageState::new(10);
            page.set_page(3);
            assert_eq!(page.start, 20);

            page.set_page(1);
            assert_eq!(page.start, 0);

            let mut page = PageState::new(50);
            page.set_page(7);
            assert_eq!(page.start, 300);
        }

        #[test]
        fn test_set_limit_resets_to_first_page() {
            let mut page = PageState::new(10);
            page.set_page(5);
            page.set_limit(20);

            assert_eq!(page.current, 1);
            assert_eq!(page.start, 0);
            assert_eq!(page.limit, 20);
        }

        #[test]
        fn test_set_sort_resets_to_first_page() {
            let mut page = PageState::new(10);
            page.set_page(4);
            page.set_sort(Some("name".to_string()), Some(SortOrder::Desc));

            assert_eq!(page.current, 1);
            assert_eq!(page.start, 0);
            assert_eq!(page.sort.as_deref(), Some("name"));
        }

        #[test]
        fn test_page_and_limit_clamped_to_one() {
            let mut page = PageState::new(0);
            assert_eq!(page.limit, 1);

            page.set_page(0);
            assert_eq!(page.current, 1);
            assert_eq!(page.start, 0);
        }

        #[test]
        fn test_total_pages() {
            let mut page = PageState::new(10);
            assert_eq!(page.total_pages(), 1);

            page.count = 95;
            assert_eq!(page.total_pages(), 10);

            page.count = 100;
            assert_eq!(page.total_pages(), 10);

            page.count = 101;
            assert_eq!(page.total_pages(), 11);
        }

        #[test]
        fn test_count_params_shape() {
            let mut page = PageState::new(10);
            page.set_page(3);
            page.set_sort(Some("id".to_string()), Some(SortOrder::Asc));

            let params = page.count_params();
            assert_eq!(params.limit, 0);
            assert!(params.count);
            assert_eq!(params.sort, None);

            let params = page.data_params();
            assert_eq!(params.start, 0); // set_sort reset the page
            assert_eq!(params.limit, 10);
            assert!(!params.count);
        }
    }

    mod wire_format_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_query_spec_serializes_flat_and_shape() {
            let spec = QuerySpec::new(vec![
                QueryRule::new("region", FilterOperator::In, json!(["ap-guangzhou"])),
                QueryRule::new("name", FilterOperator::Contains, json!("web")),
            ]);

            let body = serde_json::to_value(&spec).unwrap();
            assert_eq!(
                body,
                json!({
                    "condition": "AND",
                    "rules": [
                        {"field": "region", "op": "in", "value": ["ap-guangzhou"]},
                        {"field": "name", "op": "contains", "value": "web"},
                    ]
                })
            );
        }

        #[test]
        fn test_list_request_body() {
            let mut page = PageState::new(20);
            page.set_page(2);
            let request = ListRequest {
                filter: QuerySpec::empty(),
                page: page.data_params(),
            };

            let body = serde_json::to_value(&request).unwrap();
            assert_eq!(
                body,
                json!({
                    "filter": {"condition": "AND", "rules": []},
                    "page": {"start": 20, "limit": 20, "count": false},
                })
            );
        }

        #[test]
        fn test_operator_labels() {
            assert_eq!(FilterOperator::Equal.label(), "=");
            assert_eq!(FilterOperator::In.label(), "is in list");
            assert_eq!(FilterOperator::all().len(), 10);
        }
    }
}
