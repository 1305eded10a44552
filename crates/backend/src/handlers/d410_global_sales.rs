use axum::{extract::Query, http::StatusCode, response::Response, Json};
use contracts::dashboards::common::DatasetOverride;
use contracts::dashboards::d410_global_sales::{
    GlobalFilterOptions, GlobalSalesRequest, GlobalSalesResponse,
};

use crate::dashboards::d410_global_sales::service;
use crate::handlers::common::csv_attachment;
use crate::shared::error::status_for;

/// POST /api/d410/global-sales
pub async fn get_global_sales(
    Json(request): Json<GlobalSalesRequest>,
) -> Result<Json<GlobalSalesResponse>, StatusCode> {
    tracing::info!(
        "D410 Dashboard: Building global sales in {} (override: {:?})",
        request.currency,
        request.dataset
    );

    match service::get_global_sales(&request) {
        Ok(response) => {
            tracing::info!(
                "D410 Dashboard: Returning {} filtered rows, total sales {:.2}",
                response.row_count,
                response.kpis.total_sales
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D410 Dashboard: Failed to build global sales: {}", e);
            Err(status_for(&e))
        }
    }
}

/// POST /api/d410/global-sales/export
pub async fn export_global_sales(
    Json(request): Json<GlobalSalesRequest>,
) -> Result<Response, StatusCode> {
    match service::export_global_sales(&request) {
        Ok(bytes) => {
            tracing::info!("D410 Dashboard: Exported {} bytes of CSV", bytes.len());
            Ok(csv_attachment(bytes))
        }
        Err(e) => {
            tracing::error!("D410 Dashboard: Failed to export CSV: {}", e);
            Err(status_for(&e))
        }
    }
}

/// GET /api/d410/filter-options?seed=42&rows=100
pub async fn get_filter_options(
    Query(over): Query<DatasetOverride>,
) -> Result<Json<GlobalFilterOptions>, StatusCode> {
    match service::get_filter_options(&over) {
        Ok(options) => {
            tracing::info!(
                "D410 Dashboard: Returning filter options for {} countries",
                options.countries.len()
            );
            Ok(Json(options))
        }
        Err(e) => {
            tracing::error!("D410 Dashboard: Failed to get filter options: {}", e);
            Err(status_for(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DatasetConfig;
    use crate::shared::data::dataset::initialize_dataset;
    use chrono::NaiveDate;

    fn init() {
        initialize_dataset(
            DatasetConfig::default(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_global_sales_over_shared_dataset() {
        init();
        let Json(response) = get_global_sales(Json(GlobalSalesRequest::default()))
            .await
            .unwrap();
        assert_eq!(response.row_count, response.rows.len());
        assert!(response.row_count > 0);
    }

    #[tokio::test]
    async fn test_zero_rows_override_is_bad_request() {
        init();
        let request = GlobalSalesRequest {
            dataset: DatasetOverride {
                seed: None,
                rows: Some(0),
            },
            ..Default::default()
        };
        let status = get_global_sales(Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_seed_override_changes_options() {
        init();
        let Json(options) = get_filter_options(Query(DatasetOverride {
            seed: Some(7),
            rows: Some(20),
        }))
        .await
        .unwrap();
        assert!(!options.countries.is_empty());
        assert!(options.date_min.is_some());
    }
}
