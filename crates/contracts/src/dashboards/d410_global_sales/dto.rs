use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dashboards::common::{ChartSpec, DatasetOverride, KpiSummary};
use crate::domain::a030_sales_order::ReportedOrder;
use crate::enums::currency::Currency;
use crate::shared::indicators::IndicatorValue;

/// Sidebar selection for the global dashboard.
///
/// Every field is optional: an empty list or a missing date means "no restriction".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalSalesFilter {
    /// Inclusive lower bound
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub age_groups: Vec<String>,
    #[serde(default)]
    pub loyalty_tiers: Vec<String>,
}

/// POST /api/d410/global-sales
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalSalesRequest {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub filter: GlobalSalesFilter,
    #[serde(default)]
    pub dataset: DatasetOverride,
}

/// Full dashboard payload: KPI row, core visuals and the filtered table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSalesResponse {
    pub currency: Currency,
    pub kpis: KpiSummary,
    /// KPI row as display cards
    pub indicators: Vec<IndicatorValue>,
    pub sales_by_country: ChartSpec,
    pub monthly_trend: ChartSpec,
    pub sales_by_category: ChartSpec,
    pub profit_by_channel: ChartSpec,
    pub row_count: usize,
    pub rows: Vec<ReportedOrder>,
}

/// Values offered by the sidebar widgets (sorted, distinct) and the default date range
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalFilterOptions {
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
    pub countries: Vec<String>,
    pub cities: Vec<String>,
    pub channels: Vec<String>,
    pub categories: Vec<String>,
    pub genders: Vec<String>,
    pub age_groups: Vec<String>,
    pub loyalty_tiers: Vec<String>,
}
