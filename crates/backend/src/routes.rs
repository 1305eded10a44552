use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // REFERENCE DATA
        // ========================================
        .route("/api/currencies", get(handlers::currencies::list_all))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D410 Global Sales Dashboard
        .route(
            "/api/d410/filter-options",
            get(handlers::d410_global_sales::get_filter_options),
        )
        .route(
            "/api/d410/global-sales",
            post(handlers::d410_global_sales::get_global_sales),
        )
        .route(
            "/api/d410/global-sales/export",
            post(handlers::d410_global_sales::export_global_sales),
        )
        // D411 UAE Sales Dashboard
        .route(
            "/api/d411/uae-sales",
            post(handlers::d411_uae_sales::get_uae_sales),
        )
        .route(
            "/api/d411/uae-sales/export",
            post(handlers::d411_uae_sales::export_uae_sales),
        )
        // D412 Comparison Lab
        .route(
            "/api/d412/questions",
            get(handlers::d412_comparison_lab::list_questions),
        )
        .route(
            "/api/d412/comparison-lab",
            post(handlers::d412_comparison_lab::answer_question),
        )
        // ========================================
        // INDICATORS
        // ========================================
        .route(
            "/api/indicators/meta",
            get(handlers::indicators::get_indicator_catalog),
        )
        .route(
            "/api/indicators/compute",
            post(handlers::indicators::compute_indicators),
        )
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}
