//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    admin_products_handler, categories_handler, delete_product_handler, get_product_handler,
    health_handler, latest_handler, new_product_handler, search_handler, stats_handler,
    update_product_handler, AppState,
};

/// Largest accepted request body, photo included.
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024; // 10 MB

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
/// - Body limit: `MAX_UPLOAD_SIZE`
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let products = Router::new()
        .route("/new", post(new_product_handler))
        .route("/all", get(search_handler))
        .route("/latest", get(latest_handler))
        .route("/categories", get(categories_handler))
        .route("/admin-products", get(admin_products_handler))
        .route(
            "/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        );

    Router::new()
        .nest("/api/v1/product", products)
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `asset_dir` under `base_url` when the base URL is a local path.
///
/// Absolute URLs point at some other host, so nothing is mounted for them.
pub fn mount_assets(router: Router, base_url: &str, asset_dir: &Path) -> Router {
    let mount = base_url.trim_end_matches('/');
    if !mount.starts_with('/') {
        return router;
    }
    router.nest_service(mount, ServeDir::new(asset_dir))
}
