use serde::{Deserialize, Serialize};

/// How a series should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    GroupedBar,
    Line,
}

/// One data point. `group` is set for grouped bars and multi-line charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(x: impl Into<String>, value: f64) -> Self {
        Self {
            x: x.into(),
            group: None,
            value,
        }
    }

    pub fn grouped(x: impl Into<String>, group: impl Into<String>, value: f64) -> Self {
        Self {
            x: x.into(),
            group: Some(group.into()),
            value,
        }
    }
}

/// Chart-ready series, independent of the rendering library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

/// Headline figures over a filtered table, in the reporting currency
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_sales: f64,
    pub total_profit: f64,
    pub order_count: usize,
    pub units_sold: u64,
    /// Mean of per-order sales; 0 for an empty table
    pub avg_order_value: f64,
    /// Profit / sales * 100; 0 when sales is 0
    pub profit_margin: f64,
}

/// Optional per-request dataset parameters.
///
/// When either is set, a fresh table is generated for the request instead of
/// using the one built at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatasetOverride {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub rows: Option<usize>,
}

impl DatasetOverride {
    pub fn is_empty(&self) -> bool {
        self.seed.is_none() && self.rows.is_none()
    }
}
