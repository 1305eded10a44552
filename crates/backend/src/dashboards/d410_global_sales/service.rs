use anyhow::Result;
use contracts::dashboards::common::DatasetOverride;
use contracts::dashboards::d410_global_sales::{
    GlobalFilterOptions, GlobalSalesFilter, GlobalSalesRequest, GlobalSalesResponse,
};
use contracts::domain::a030_sales_order::{OrderRecord, ReportedOrder};
use contracts::enums::currency::Currency;
use contracts::shared::indicators::{IndicatorContext, IndicatorId, IndicatorValue};

use crate::dashboards::charts::{bar, monthly_line, money_axis};
use crate::shared::data::dataset::get_dataset;
use crate::shared::error::DashboardError;
use crate::shared::export::{to_csv, ORDER_COLUMNS};
use crate::shared::indicators::metadata::kpi_row;
use crate::shared::indicators::registry::IndicatorRegistry;
use crate::shared::pipeline::aggregate::{self, sort_desc};
use crate::shared::pipeline::filter::RowFilter;
use crate::shared::pipeline::Dimension;

/// Attach reporting-currency columns to every order
pub fn report_rows(orders: &[OrderRecord], currency: Currency) -> Vec<ReportedOrder> {
    let rate = currency.aed_to_curr();
    orders
        .iter()
        .map(|o| ReportedOrder::from_order(o, rate))
        .collect()
}

/// Rows matching the sidebar filter
pub fn filtered_view<'a>(rows: &'a [ReportedOrder], filter: &GlobalSalesFilter) -> Vec<&'a ReportedOrder> {
    RowFilter::from(filter).apply(rows)
}

/// KPI row, core visuals and the filtered table
pub fn build_dashboard(orders: &[OrderRecord], request: &GlobalSalesRequest) -> GlobalSalesResponse {
    let currency = request.currency;
    let reported = report_rows(orders, currency);
    let view = filtered_view(&reported, &request.filter);

    let mut by_country = aggregate::sales_by(&view, Dimension::Country);
    sort_desc(&mut by_country);
    let mut by_category = aggregate::sales_by(&view, Dimension::Category);
    sort_desc(&mut by_category);

    let sales_axis = money_axis("Sales", currency.code());
    let indicators = IndicatorRegistry::new().compute(&kpi_row(), &view, currency);

    GlobalSalesResponse {
        currency,
        kpis: aggregate::kpi_summary(&view),
        indicators,
        sales_by_country: bar("Sales by Country", "Country", sales_axis.clone(), by_country),
        monthly_trend: monthly_line("Monthly Trend", sales_axis.clone(), aggregate::monthly_sales(&view)),
        sales_by_category: bar("Sales by Category", "Category", sales_axis, by_category),
        profit_by_channel: bar(
            "Profit by Channel",
            "Channel",
            money_axis("Profit", currency.code()),
            aggregate::profit_by(&view, Dimension::Channel),
        ),
        row_count: view.len(),
        rows: view.into_iter().cloned().collect(),
    }
}

/// CSV bytes of the filtered view, columns as in the table
pub fn export_csv(orders: &[OrderRecord], request: &GlobalSalesRequest) -> Result<Vec<u8>, DashboardError> {
    let reported = report_rows(orders, request.currency);
    let view = filtered_view(&reported, &request.filter);
    to_csv(&ORDER_COLUMNS, &view)
}

/// Sidebar choices: distinct sorted values per dimension and the date span
pub fn filter_options(orders: &[OrderRecord]) -> GlobalFilterOptions {
    let reported = report_rows(orders, Currency::BASE);
    let all: Vec<&ReportedOrder> = reported.iter().collect();
    let bounds = aggregate::date_bounds(&all);

    GlobalFilterOptions {
        date_min: bounds.map(|(lo, _)| lo),
        date_max: bounds.map(|(_, hi)| hi),
        countries: aggregate::distinct_sorted(&all, Dimension::Country),
        cities: aggregate::distinct_sorted(&all, Dimension::City),
        channels: aggregate::distinct_sorted(&all, Dimension::Channel),
        categories: aggregate::distinct_sorted(&all, Dimension::Category),
        genders: aggregate::distinct_sorted(&all, Dimension::Gender),
        age_groups: aggregate::distinct_sorted(&all, Dimension::AgeGroup),
        loyalty_tiers: aggregate::distinct_sorted(&all, Dimension::LoyaltyTier),
    }
}

/// Arbitrary indicator batch over the filtered view
pub fn indicators_for(
    orders: &[OrderRecord],
    ids: &[IndicatorId],
    context: &IndicatorContext,
) -> Vec<IndicatorValue> {
    let reported = report_rows(orders, context.currency);
    let view = filtered_view(&reported, &context.filter);
    IndicatorRegistry::new().compute(ids, &view, context.currency)
}

// ---------------------------------------------------------------------------
// Entry points over the shared dataset
// ---------------------------------------------------------------------------

pub fn get_global_sales(request: &GlobalSalesRequest) -> Result<GlobalSalesResponse> {
    let dataset = get_dataset()?;
    let orders = dataset.orders_for(&request.dataset)?;
    Ok(build_dashboard(&orders, request))
}

pub fn export_global_sales(request: &GlobalSalesRequest) -> Result<Vec<u8>> {
    let dataset = get_dataset()?;
    let orders = dataset.orders_for(&request.dataset)?;
    Ok(export_csv(&orders, request)?)
}

pub fn compute_indicators(ids: &[IndicatorId], context: &IndicatorContext) -> Result<Vec<IndicatorValue>> {
    let dataset = get_dataset()?;
    let orders = dataset.orders_for(&context.dataset)?;
    Ok(indicators_for(&orders, ids, context))
}

pub fn get_filter_options(over: &DatasetOverride) -> Result<GlobalFilterOptions> {
    let dataset = get_dataset()?;
    let orders = dataset.orders_for(over)?;
    Ok(filter_options(&orders))
}
