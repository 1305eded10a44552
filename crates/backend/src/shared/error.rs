use axum::http::StatusCode;
use thiserror::Error;

/// Ошибки дашбордов
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("row count must be between 1 and {max}, got {got}")]
    InvalidRowCount { got: usize, max: usize },

    #[error("dataset is not initialized")]
    DatasetNotInitialized,

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl DashboardError {
    /// Status code for the HTTP boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::InvalidRowCount { .. } => StatusCode::BAD_REQUEST,
            DashboardError::DatasetNotInitialized | DashboardError::Csv(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Map a service error to a status code, looking through `anyhow` context
pub fn status_for(err: &anyhow::Error) -> StatusCode {
    err.downcast_ref::<DashboardError>()
        .map(DashboardError::status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
