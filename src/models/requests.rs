//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

use crate::catalog::{SearchQuery, SortDirection};
use crate::error::{CatalogError, Result};

/// Query string for GET /api/v1/product/all
///
/// # Fields
/// - `search`: case-insensitive name substring
/// - `sort`: `asc` for ascending price, any other value for descending
/// - `category`: exact category
/// - `price`: inclusive price ceiling
/// - `page`: 1-based page, unparsable values mean the first page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl SearchParams {
    /// Converts the raw parameters into a catalog query.
    ///
    /// Only a non-numeric `price` is rejected.
    pub fn into_query(self) -> Result<SearchQuery> {
        let max_price = match non_empty(self.price) {
            Some(raw) => Some(raw.trim().parse::<f64>().map_err(|_| {
                CatalogError::Validation(format!("Invalid price filter: {}", raw))
            })?),
            None => None,
        };

        let sort = non_empty(self.sort).map(|s| {
            if s == "asc" {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            }
        });

        Ok(SearchQuery {
            text: non_empty(self.search),
            sort,
            category: non_empty(self.category),
            max_price,
            page: self.page.and_then(|p| p.trim().parse().ok()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
