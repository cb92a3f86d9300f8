//! Product data model as exchanged with the document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a photo held by the asset store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub public_id: String,
    pub url: String,
}

/// A stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    /// Always lowercase
    pub category: String,
    pub photo: Photo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a product that does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub photo: Photo,
}
