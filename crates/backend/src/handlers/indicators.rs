use axum::{extract::Query, http::StatusCode, Json};
use contracts::enums::currency::Currency;
use contracts::shared::indicators::*;
use serde::Deserialize;

use crate::dashboards::d410_global_sales::service;
use crate::shared::error::status_for;
use crate::shared::indicators::metadata;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub currency: Currency,
}

/// POST /api/indicators/compute
///
/// Batch-computes a set of indicators over the filtered global table.
pub async fn compute_indicators(
    Json(req): Json<ComputeIndicatorsRequest>,
) -> Result<Json<ComputeIndicatorsResponse>, StatusCode> {
    tracing::info!(
        "Indicators: computing {} indicators in {}",
        req.indicator_ids.len(),
        req.context.currency,
    );

    match service::compute_indicators(&req.indicator_ids, &req.context) {
        Ok(values) => {
            tracing::info!("Indicators: returning {} values", values.len());
            Ok(Json(ComputeIndicatorsResponse { values }))
        }
        Err(e) => {
            tracing::error!("Indicators: compute failed: {}", e);
            Err(status_for(&e))
        }
    }
}

/// GET /api/indicators/meta?currency=USD
///
/// Returns the full catalogue of available indicators and sets.
pub async fn get_indicator_catalog(Query(query): Query<CatalogQuery>) -> Json<IndicatorCatalogResponse> {
    Json(metadata::build_catalog(query.currency))
}
