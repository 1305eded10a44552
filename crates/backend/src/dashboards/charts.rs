use chrono::NaiveDate;
use contracts::dashboards::common::{ChartKind, ChartPoint, ChartSpec};

use crate::shared::pipeline::aggregate::Group;

fn spec(title: &str, kind: ChartKind, x_label: &str, y_label: String, points: Vec<ChartPoint>) -> ChartSpec {
    ChartSpec {
        title: title.to_string(),
        kind,
        x_label: x_label.to_string(),
        y_label,
        points,
    }
}

/// Axis title for a money measure, e.g. "Sales (USD)"
pub fn money_axis(measure: &str, currency: &str) -> String {
    format!("{} ({})", measure, currency)
}

/// Month label used on time axes
pub fn month_label(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}

pub fn bar(title: &str, x_label: &str, y_label: String, groups: Vec<Group>) -> ChartSpec {
    let points = groups
        .into_iter()
        .map(|(x, value)| ChartPoint::new(x, value))
        .collect();
    spec(title, ChartKind::Bar, x_label, y_label, points)
}

pub fn grouped_bar(
    title: &str,
    x_label: &str,
    y_label: String,
    cells: Vec<(String, String, f64)>,
) -> ChartSpec {
    let points = cells
        .into_iter()
        .map(|(x, group, value)| ChartPoint::grouped(x, group, value))
        .collect();
    spec(title, ChartKind::GroupedBar, x_label, y_label, points)
}

/// Single-series line over months
pub fn monthly_line(title: &str, y_label: String, months: Vec<(NaiveDate, f64)>) -> ChartSpec {
    let points = months
        .into_iter()
        .map(|(month, value)| ChartPoint::new(month_label(month), value))
        .collect();
    spec(title, ChartKind::Line, "Month", y_label, points)
}

/// One line per group over months
pub fn monthly_lines(
    title: &str,
    y_label: String,
    cells: Vec<(NaiveDate, String, f64)>,
) -> ChartSpec {
    let points = cells
        .into_iter()
        .map(|(month, group, value)| ChartPoint::grouped(month_label(month), group, value))
        .collect();
    spec(title, ChartKind::Line, "Month", y_label, points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_keeps_group_order() {
        let chart = bar(
            "Sales by Country",
            "Country",
            money_axis("Sales", "AED"),
            vec![("UAE".into(), 10.0), ("India".into(), 5.0)],
        );
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.y_label, "Sales (AED)");
        assert_eq!(chart.points[0], ChartPoint::new("UAE", 10.0));
        assert_eq!(chart.points[1].x, "India");
    }

    #[test]
    fn test_monthly_labels() {
        let chart = monthly_lines(
            "Channel by month",
            money_axis("Sales", "USD"),
            vec![(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(), "Online".into(), 3.0)],
        );
        assert_eq!(chart.points[0], ChartPoint::grouped("2025-02", "Online", 3.0));
        assert_eq!(chart.x_label, "Month");
    }
}
