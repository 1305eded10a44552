use contracts::enums::currency::Currency;
use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn total_sales() -> IndicatorId {
        IndicatorId::new("total_sales")
    }
    pub fn order_count() -> IndicatorId {
        IndicatorId::new("order_count")
    }
    pub fn units_sold() -> IndicatorId {
        IndicatorId::new("units_sold")
    }
    pub fn avg_order_value() -> IndicatorId {
        IndicatorId::new("avg_order_value")
    }
    pub fn profit_margin() -> IndicatorId {
        IndicatorId::new("profit_margin")
    }
    pub fn total_profit() -> IndicatorId {
        IndicatorId::new("total_profit")
    }
}

/// Display label of a known indicator
pub fn label_of(id: &IndicatorId) -> &'static str {
    match id.0.as_str() {
        "total_sales" => "Total Sales",
        "order_count" => "Orders",
        "units_sold" => "Units Sold",
        "avg_order_value" => "Avg Order Value",
        "profit_margin" => "Profit Margin",
        "total_profit" => "Total Profit",
        _ => "",
    }
}

/// KPI row of the global dashboard, in display order
pub fn kpi_row() -> Vec<IndicatorId> {
    vec![
        ids::total_sales(),
        ids::order_count(),
        ids::units_sold(),
        ids::avg_order_value(),
        ids::profit_margin(),
    ]
}

fn meta(id: IndicatorId, format: ValueFormat, description: &str) -> IndicatorMeta {
    IndicatorMeta {
        label: label_of(&id).to_string(),
        id,
        format,
        description: Some(description.to_string()),
    }
}

/// Build the full catalogue of indicators + sets for a reporting currency.
pub fn build_catalog(currency: Currency) -> IndicatorCatalogResponse {
    let money = ValueFormat::Money { currency };
    let indicators = vec![
        meta(ids::total_sales(), money.clone(), "Sum of Sales over the filtered orders"),
        meta(ids::order_count(), ValueFormat::Integer, "Number of distinct Order_ID"),
        meta(ids::units_sold(), ValueFormat::Integer, "Sum of Units"),
        meta(
            ids::avg_order_value(),
            money.clone(),
            "Mean of per-order Sales (grouped by Order_ID)",
        ),
        meta(
            ids::profit_margin(),
            ValueFormat::Percent { decimals: 1 },
            "Profit / Sales * 100, 0 when there are no sales",
        ),
        meta(ids::total_profit(), money, "Sum of Profit over the filtered orders"),
    ];

    let sets = vec![IndicatorSetMeta {
        id: IndicatorSetId::new("kpi_row"),
        label: "Sales overview".into(),
        indicators: kpi_row(),
        columns: 5,
    }];

    IndicatorCatalogResponse { indicators, sets }
}
