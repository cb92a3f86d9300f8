//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies. Every body
//! carries `success: true`; failures are rendered by `CatalogError`.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::catalog::SearchPage;
use crate::store::Product;

/// Body for listings (latest, admin listing)
#[derive(Debug, Clone, Serialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub products: Vec<Product>,
}

impl ProductsResponse {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            success: true,
            products,
        }
    }
}

/// Body for GET /api/v1/product/:id
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

impl ProductResponse {
    pub fn new(product: Product) -> Self {
        Self {
            success: true,
            product,
        }
    }
}

/// Body for GET /api/v1/product/categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

impl CategoriesResponse {
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

/// Body for GET /api/v1/product/all
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub products: Vec<Product>,
    pub total_page: usize,
}

impl From<SearchPage> for SearchResponse {
    fn from(page: SearchPage) -> Self {
        Self {
            success: true,
            products: page.products,
            total_page: page.total_page,
        }
    }
}

/// Body for create, update and delete
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub invalidations: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
        }
    }
}

/// Body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_uses_total_page() {
        let resp = SearchResponse::from(SearchPage {
            products: vec![],
            total_page: 3,
        });
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["totalPage"], 3);
    }

    #[test]
    fn test_message_response_serialize() {
        let resp = MessageResponse::new("Product Created Successfully");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("Product Created Successfully"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            invalidations: 5,
            total_entries: 4,
        };
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.invalidations, 5);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
