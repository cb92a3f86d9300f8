//! Filtered, paginated search input and output.

use serde::Serialize;

use crate::store::{Product, ProductFilter, ProductSort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for ProductSort {
    fn from(dir: SortDirection) -> Self {
        match dir {
            SortDirection::Asc => ProductSort::PriceAsc,
            SortDirection::Desc => ProductSort::PriceDesc,
        }
    }
}

/// Search parameters. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Case-insensitive substring of the product name
    pub text: Option<String>,
    /// Order by price
    pub sort: Option<SortDirection>,
    /// Exact category
    pub category: Option<String>,
    /// Inclusive price ceiling
    pub max_price: Option<f64>,
    /// 1-based page; `None` or 0 means the first page
    pub page: Option<usize>,
}

impl SearchQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            name_contains: self.text.clone().filter(|t| !t.is_empty()),
            max_price: self.max_price,
            category: self.category.clone().filter(|c| !c.is_empty()),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub products: Vec<Product>,
    /// `ceil(total matching / page size)`
    pub total_page: usize,
}
