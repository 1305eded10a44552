use axum::Json;
use contracts::enums::currency::{fx_table, CurrencyRate};

/// GET /api/currencies
pub async fn list_all() -> Json<Vec<CurrencyRate>> {
    Json(fx_table())
}
