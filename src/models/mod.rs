//! Request and Response models for the catalog API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::SearchParams;
pub use responses::{
    CategoriesResponse, HealthResponse, MessageResponse, ProductResponse, ProductsResponse,
    SearchResponse, StatsResponse,
};
