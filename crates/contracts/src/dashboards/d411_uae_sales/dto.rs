use serde::{Deserialize, Serialize};

use crate::dashboards::common::{ChartSpec, DatasetOverride};
use crate::domain::a031_uae_sale::UaeSaleRecord;

/// Filters of the single-country dashboard; empty list = no restriction
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UaeSalesFilter {
    #[serde(default)]
    pub age_groups: Vec<String>,
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// POST /api/d411/uae-sales
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UaeSalesRequest {
    #[serde(default)]
    pub filter: UaeSalesFilter,
    #[serde(default)]
    pub dataset: DatasetOverride,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UaeSalesResponse {
    pub row_count: usize,
    pub total_sales: f64,
    pub sales_by_category: ChartSpec,
    pub sales_by_location: ChartSpec,
    pub sales_by_gender: ChartSpec,
    pub sales_by_age_group: ChartSpec,
    pub rows: Vec<UaeSaleRecord>,
}
