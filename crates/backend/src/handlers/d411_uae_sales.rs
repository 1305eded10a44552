use axum::{http::StatusCode, response::Response, Json};
use contracts::dashboards::d411_uae_sales::{UaeSalesRequest, UaeSalesResponse};

use crate::dashboards::d411_uae_sales::service;
use crate::handlers::common::csv_attachment;
use crate::shared::error::status_for;

/// POST /api/d411/uae-sales
pub async fn get_uae_sales(
    Json(request): Json<UaeSalesRequest>,
) -> Result<Json<UaeSalesResponse>, StatusCode> {
    match service::get_uae_sales(&request) {
        Ok(response) => {
            tracing::info!(
                "D411 Dashboard: Returning {} rows, total sales {:.0} AED",
                response.row_count,
                response.total_sales
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D411 Dashboard: Failed to build UAE sales: {}", e);
            Err(status_for(&e))
        }
    }
}

/// POST /api/d411/uae-sales/export
pub async fn export_uae_sales(Json(request): Json<UaeSalesRequest>) -> Result<Response, StatusCode> {
    match service::export_uae_sales(&request) {
        Ok(bytes) => Ok(csv_attachment(bytes)),
        Err(e) => {
            tracing::error!("D411 Dashboard: Failed to export CSV: {}", e);
            Err(status_for(&e))
        }
    }
}
