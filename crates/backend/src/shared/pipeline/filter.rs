use chrono::NaiveDate;
use contracts::dashboards::d410_global_sales::GlobalSalesFilter;
use contracts::dashboards::d411_uae_sales::UaeSalesFilter;

use super::{Dimension, SalesRecord};

/// Immutable row predicate.
///
/// Dimensions are combined with AND, values inside one dimension with OR.
/// Empty selections are dropped on construction and never exclude anything.
/// Date bounds are inclusive; a row without a date fails any date bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter<'a> {
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    selections: Vec<(Dimension, &'a [String])>,
}

impl<'a> RowFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dates(mut self, date_from: Option<NaiveDate>, date_to: Option<NaiveDate>) -> Self {
        self.date_from = date_from;
        self.date_to = date_to;
        self
    }

    /// Restrict `dim` to `values`. An empty slice is a no-op.
    pub fn select(mut self, dim: Dimension, values: &'a [String]) -> Self {
        if !values.is_empty() {
            self.selections.push((dim, values));
        }
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none() && self.selections.is_empty()
    }

    /// True when the range can match nothing (start after end)
    pub fn is_inverted(&self) -> bool {
        matches!((self.date_from, self.date_to), (Some(from), Some(to)) if from > to)
    }

    pub fn matches<R: SalesRecord + ?Sized>(&self, row: &R) -> bool {
        if self.date_from.is_some() || self.date_to.is_some() {
            let Some(date) = row.order_date() else {
                return false;
            };
            if self.date_from.is_some_and(|from| date < from) {
                return false;
            }
            if self.date_to.is_some_and(|to| date > to) {
                return false;
            }
        }

        self.selections.iter().all(|(dim, values)| {
            row.dimension(*dim)
                .is_some_and(|v| values.iter().any(|s| s == v))
        })
    }

    /// Borrowing view of the matching rows, in input order
    pub fn apply<'r, R, I>(&self, rows: I) -> Vec<&'r R>
    where
        R: SalesRecord + 'r,
        I: IntoIterator<Item = &'r R>,
    {
        if self.is_inverted() {
            return Vec::new();
        }
        rows.into_iter().filter(|row| self.matches(*row)).collect()
    }
}

impl<'a> From<&'a GlobalSalesFilter> for RowFilter<'a> {
    fn from(f: &'a GlobalSalesFilter) -> Self {
        RowFilter::new()
            .with_dates(f.date_from, f.date_to)
            .select(Dimension::Country, &f.countries)
            .select(Dimension::City, &f.cities)
            .select(Dimension::Channel, &f.channels)
            .select(Dimension::Category, &f.categories)
            .select(Dimension::Gender, &f.genders)
            .select(Dimension::AgeGroup, &f.age_groups)
            .select(Dimension::LoyaltyTier, &f.loyalty_tiers)
    }
}

impl<'a> From<&'a UaeSalesFilter> for RowFilter<'a> {
    fn from(f: &'a UaeSalesFilter) -> Self {
        RowFilter::new()
            .select(Dimension::AgeGroup, &f.age_groups)
            .select(Dimension::Gender, &f.genders)
            .select(Dimension::Location, &f.locations)
            .select(Dimension::Category, &f.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pipeline::test_support::{date, order};

    fn table() -> Vec<contracts::domain::a030_sales_order::ReportedOrder> {
        vec![
            order("ORD1000", "UAE", "Electronics", date(2025, 1, 5), 100.0),
            order("ORD1001", "India", "Groceries", date(2025, 1, 20), 50.0),
            order("ORD1002", "UAE", "Groceries", date(2025, 2, 1), 30.0),
            order("ORD1003", "Qatar", "Electronics", date(2025, 3, 9), 70.0),
        ]
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let rows = table();
        let filter = GlobalSalesFilter::default();
        let view = RowFilter::from(&filter).apply(&rows);
        assert_eq!(view.len(), rows.len());
        assert!(RowFilter::from(&filter).is_unrestricted());
    }

    #[test]
    fn test_or_within_and_across_dimensions() {
        let rows = table();
        let filter = GlobalSalesFilter {
            countries: strings(&["UAE", "Qatar"]),
            categories: strings(&["Electronics"]),
            ..Default::default()
        };
        let ids: Vec<&str> = RowFilter::from(&filter)
            .apply(&rows)
            .iter()
            .map(|r| r.order_id.as_str())
            .collect();
        assert_eq!(ids, vec!["ORD1000", "ORD1003"]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let rows = table();
        let filter = GlobalSalesFilter {
            date_from: Some(date(2025, 1, 20)),
            date_to: Some(date(2025, 2, 1)),
            ..Default::default()
        };
        let ids: Vec<&str> = RowFilter::from(&filter)
            .apply(&rows)
            .iter()
            .map(|r| r.order_id.as_str())
            .collect();
        assert_eq!(ids, vec!["ORD1001", "ORD1002"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let rows = table();
        let filter = GlobalSalesFilter {
            date_from: Some(date(2025, 3, 1)),
            date_to: Some(date(2025, 1, 1)),
            ..Default::default()
        };
        assert!(RowFilter::from(&filter).is_inverted());
        assert!(RowFilter::from(&filter).apply(&rows).is_empty());
    }

    #[test]
    fn test_unknown_value_matches_nothing() {
        let rows = table();
        let filter = GlobalSalesFilter {
            countries: strings(&["Atlantis"]),
            ..Default::default()
        };
        assert!(RowFilter::from(&filter).apply(&rows).is_empty());
    }

    #[test]
    fn test_adding_a_dimension_never_grows_result() {
        let rows = table();
        let base = GlobalSalesFilter {
            categories: strings(&["Groceries", "Electronics"]),
            ..Default::default()
        };
        let narrower = GlobalSalesFilter {
            countries: strings(&["UAE"]),
            ..base.clone()
        };
        let wide = RowFilter::from(&base).apply(&rows).len();
        let narrow = RowFilter::from(&narrower).apply(&rows).len();
        assert!(narrow <= wide);
        assert_eq!(narrow, 2);
    }

    #[test]
    fn test_filtering_twice_is_idempotent() {
        let rows = table();
        let filter = GlobalSalesFilter {
            countries: strings(&["UAE", "India"]),
            date_to: Some(date(2025, 1, 31)),
            ..Default::default()
        };
        let predicate = RowFilter::from(&filter);
        let once = predicate.apply(&rows);
        let twice = predicate.apply(once.iter().copied());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_uae_filter_ignores_dates() {
        use contracts::domain::a031_uae_sale::UaeSaleRecord;

        let rows = vec![
            UaeSaleRecord {
                customer_id: "CUST1".into(),
                age_group: "18-25".into(),
                gender: "Male".into(),
                location: "Dubai".into(),
                category: "Clothing".into(),
                sales_amount: 120,
            },
            UaeSaleRecord {
                customer_id: "CUST2".into(),
                age_group: "60+".into(),
                gender: "Female".into(),
                location: "Ajman".into(),
                category: "Clothing".into(),
                sales_amount: 300,
            },
        ];
        let filter = UaeSalesFilter {
            locations: strings(&["Ajman"]),
            ..Default::default()
        };
        let view = RowFilter::from(&filter).apply(&rows);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].customer_id, "CUST2");
    }
}
