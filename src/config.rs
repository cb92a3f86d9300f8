//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::catalog::PhotoSwap;

/// Shortest staged-upload age the sweeper may act on, in seconds.
pub const MIN_STAGED_MAX_AGE: u64 = 60;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Number of products per search page
    pub products_per_page: usize,
    /// Directory incoming photos are staged in
    pub upload_dir: PathBuf,
    /// Directory the local asset store keeps assets in
    pub asset_dir: PathBuf,
    /// URL prefix under which stored assets are served
    pub asset_base_url: String,
    /// Interval in seconds between staged-upload sweeps
    pub sweep_interval: u64,
    /// Age in seconds after which an abandoned staged upload is removed
    pub staged_max_age: u64,
    /// How updates replace an existing photo
    pub photo_swap: PhotoSwap,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 4000)
    /// - `PRODUCT_PER_PAGE` - Search page size (default: 8, 0 falls back to default)
    /// - `UPLOAD_DIR` - Staging directory for uploads (default: uploads)
    /// - `ASSET_DIR` - Local asset directory (default: assets)
    /// - `ASSET_BASE_URL` - URL prefix for assets (default: /assets)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 300)
    /// - `STAGED_MAX_AGE` - Staged upload max age in seconds (default: 3600, at least 60)
    /// - `PHOTO_SWAP` - `concurrent` or `sequential` (default: concurrent)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            products_per_page: parse_var("PRODUCT_PER_PAGE")
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.products_per_page),
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            asset_dir: env::var("ASSET_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_dir),
            asset_base_url: env::var("ASSET_BASE_URL").unwrap_or(defaults.asset_base_url),
            sweep_interval: parse_var("SWEEP_INTERVAL").unwrap_or(defaults.sweep_interval),
            staged_max_age: parse_var("STAGED_MAX_AGE")
                .unwrap_or(defaults.staged_max_age)
                .max(MIN_STAGED_MAX_AGE),
            photo_swap: parse_var("PHOTO_SWAP").unwrap_or(defaults.photo_swap),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 4000,
            products_per_page: 8,
            upload_dir: PathBuf::from("uploads"),
            asset_dir: PathBuf::from("assets"),
            asset_base_url: "/assets".to_string(),
            sweep_interval: 300,
            staged_max_age: 3600,
            photo_swap: PhotoSwap::Concurrent,
        }
    }
}
