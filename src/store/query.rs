//! Query shapes understood by `DocumentStore::find` and `distinct`.

use std::cmp::Ordering;

use super::Product;

// == Filter ==
/// Conjunction of optional predicates over products. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the name
    pub name_contains: Option<String>,
    /// Inclusive upper bound on price
    pub max_price: Option<f64>,
    /// Exact category
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(needle) = &self.name_contains {
            if !product.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        true
    }
}

// == Sort ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    /// Newest first
    CreatedDesc,
    PriceAsc,
    PriceDesc,
}

impl ProductSort {
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSort::CreatedDesc => b.created_at.cmp(&a.created_at),
            ProductSort::PriceAsc => a.price.total_cmp(&b.price),
            ProductSort::PriceDesc => b.price.total_cmp(&a.price),
        }
    }
}

// == Find Options ==
/// Ordering and paging applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub sort: Option<ProductSort>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl FindOptions {
    pub fn sorted(sort: ProductSort) -> Self {
        Self {
            sort: Some(sort),
            ..Self::default()
        }
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Product fields `distinct` can enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Category,
}

impl ProductField {
    pub fn value_of(self, product: &Product) -> &str {
        match self {
            ProductField::Category => &product.category,
        }
    }
}
