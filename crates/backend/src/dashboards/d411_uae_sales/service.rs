use anyhow::Result;
use contracts::dashboards::d411_uae_sales::{UaeSalesFilter, UaeSalesRequest, UaeSalesResponse};
use contracts::domain::a031_uae_sale::UaeSaleRecord;
use contracts::enums::currency::Currency;

use crate::dashboards::charts::{bar, money_axis};
use crate::shared::data::dataset::get_dataset;
use crate::shared::error::DashboardError;
use crate::shared::export::{to_csv, UAE_COLUMNS};
use crate::shared::pipeline::aggregate;
use crate::shared::pipeline::filter::RowFilter;
use crate::shared::pipeline::Dimension;

pub fn filtered_view<'a>(rows: &'a [UaeSaleRecord], filter: &UaeSalesFilter) -> Vec<&'a UaeSaleRecord> {
    RowFilter::from(filter).apply(rows)
}

/// Четыре разреза продаж по отфильтрованным строкам
pub fn build_dashboard(rows: &[UaeSaleRecord], filter: &UaeSalesFilter) -> UaeSalesResponse {
    let view = filtered_view(rows, filter);
    let axis = money_axis("Sales", Currency::BASE.code());

    UaeSalesResponse {
        row_count: view.len(),
        total_sales: aggregate::total_sales(&view),
        sales_by_category: bar(
            "Sales by Category",
            "Category",
            axis.clone(),
            aggregate::sales_by(&view, Dimension::Category),
        ),
        sales_by_location: bar(
            "Sales by Location",
            "Location",
            axis.clone(),
            aggregate::sales_by(&view, Dimension::Location),
        ),
        sales_by_gender: bar(
            "Sales by Gender",
            "Gender",
            axis.clone(),
            aggregate::sales_by(&view, Dimension::Gender),
        ),
        sales_by_age_group: bar(
            "Sales by Age Group",
            "Age Group",
            axis,
            aggregate::sales_by(&view, Dimension::AgeGroup),
        ),
        rows: view.into_iter().cloned().collect(),
    }
}

pub fn export_csv(rows: &[UaeSaleRecord], filter: &UaeSalesFilter) -> Result<Vec<u8>, DashboardError> {
    let view = filtered_view(rows, filter);
    to_csv(&UAE_COLUMNS, &view)
}

pub fn get_uae_sales(request: &UaeSalesRequest) -> Result<UaeSalesResponse> {
    let dataset = get_dataset()?;
    let rows = dataset.uae_sales_for(&request.dataset)?;
    Ok(build_dashboard(&rows, &request.filter))
}

pub fn export_uae_sales(request: &UaeSalesRequest) -> Result<Vec<u8>> {
    let dataset = get_dataset()?;
    let rows = dataset.uae_sales_for(&request.dataset)?;
    Ok(export_csv(&rows, &request.filter)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d411_uae_sales::generator::generate_sales;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unfiltered_totals() {
        let rows = generate_sales(100, 42);
        let response = build_dashboard(&rows, &UaeSalesFilter::default());
        let expected: i64 = rows.iter().map(|r| r.sales_amount).sum();

        assert_eq!(response.row_count, 100);
        assert_eq!(response.total_sales, expected as f64);
        for chart in [
            &response.sales_by_category,
            &response.sales_by_location,
            &response.sales_by_gender,
            &response.sales_by_age_group,
        ] {
            let sum: f64 = chart.points.iter().map(|p| p.value).sum();
            assert_eq!(sum, expected as f64, "{}", chart.title);
        }
    }

    #[test]
    fn test_location_and_gender_filter() {
        let rows = generate_sales(200, 7);
        let filter = UaeSalesFilter {
            locations: strings(&["Dubai", "Sharjah"]),
            genders: strings(&["Female"]),
            ..Default::default()
        };
        let response = build_dashboard(&rows, &filter);
        assert!(response.rows.iter().all(|r| {
            (r.location == "Dubai" || r.location == "Sharjah") && r.gender == "Female"
        }));
        assert!(response.sales_by_gender.points.len() <= 1);
        assert!(response.sales_by_location.points.len() <= 2);
    }

    #[test]
    fn test_no_match_is_empty() {
        let rows = generate_sales(50, 1);
        let filter = UaeSalesFilter {
            categories: strings(&["Toys"]),
            ..Default::default()
        };
        let response = build_dashboard(&rows, &filter);
        assert_eq!(response.row_count, 0);
        assert_eq!(response.total_sales, 0.0);
        assert!(response.sales_by_category.points.is_empty());
    }

    #[test]
    fn test_export_has_header_and_rows() {
        let rows = generate_sales(10, 3);
        let text = String::from_utf8(export_csv(&rows, &UaeSalesFilter::default()).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Customer_ID,Age_Group,Gender,Location,Category,Sales_Amount");
        assert!(lines[1].starts_with("CUST1,"));
    }
}
