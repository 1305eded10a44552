use contracts::domain::a030_sales_order::ReportedOrder;
use contracts::enums::currency::Currency;
use contracts::shared::indicators::*;

use crate::shared::format::{format_amount, format_number, format_percent};
use crate::shared::indicators::metadata::{ids, label_of};
use crate::shared::pipeline::aggregate;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn status_by_sign(value: f64) -> IndicatorStatus {
    if value > 0.0 {
        IndicatorStatus::Good
    } else if value < 0.0 {
        IndicatorStatus::Bad
    } else {
        IndicatorStatus::Neutral
    }
}

fn card(id: IndicatorId, value: f64, display: String, status: IndicatorStatus) -> IndicatorValue {
    IndicatorValue {
        label: label_of(&id).to_string(),
        id,
        value,
        display,
        status,
    }
}

// ---------------------------------------------------------------------------
// Public compute functions
// ---------------------------------------------------------------------------

pub fn compute_total_sales(rows: &[&ReportedOrder], currency: Currency) -> IndicatorValue {
    let value = aggregate::total_sales(rows);
    card(
        ids::total_sales(),
        value,
        format_amount(value, currency.code()),
        IndicatorStatus::Neutral,
    )
}

pub fn compute_order_count(rows: &[&ReportedOrder], _currency: Currency) -> IndicatorValue {
    let count = aggregate::order_count(rows);
    card(
        ids::order_count(),
        count as f64,
        format_number(count as u64),
        IndicatorStatus::Neutral,
    )
}

pub fn compute_units_sold(rows: &[&ReportedOrder], _currency: Currency) -> IndicatorValue {
    let units = aggregate::units_sold(rows);
    card(
        ids::units_sold(),
        units as f64,
        format_number(units),
        IndicatorStatus::Neutral,
    )
}

pub fn compute_avg_order_value(rows: &[&ReportedOrder], currency: Currency) -> IndicatorValue {
    let value = aggregate::avg_order_value(rows);
    card(
        ids::avg_order_value(),
        value,
        format_amount(value, currency.code()),
        IndicatorStatus::Neutral,
    )
}

pub fn compute_profit_margin(rows: &[&ReportedOrder], _currency: Currency) -> IndicatorValue {
    let value = aggregate::profit_margin(rows);
    card(
        ids::profit_margin(),
        value,
        format_percent(value),
        status_by_sign(value),
    )
}

pub fn compute_total_profit(rows: &[&ReportedOrder], currency: Currency) -> IndicatorValue {
    let value = aggregate::total_profit(rows);
    card(
        ids::total_profit(),
        value,
        format_amount(value, currency.code()),
        status_by_sign(value),
    )
}
