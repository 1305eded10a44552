use contracts::domain::a030_sales_order::ReportedOrder;
use contracts::enums::currency::Currency;
use contracts::shared::indicators::*;
use std::collections::HashMap;

use super::compute::sales;
use super::metadata::ids;

type ComputeFn = fn(&[&ReportedOrder], Currency) -> IndicatorValue;

/// Central registry: maps `IndicatorId` to its compute function.
pub struct IndicatorRegistry {
    fns: HashMap<String, ComputeFn>,
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        let mut fns: HashMap<String, ComputeFn> = HashMap::new();

        fns.insert(ids::total_sales().0, sales::compute_total_sales);
        fns.insert(ids::order_count().0, sales::compute_order_count);
        fns.insert(ids::units_sold().0, sales::compute_units_sold);
        fns.insert(ids::avg_order_value().0, sales::compute_avg_order_value);
        fns.insert(ids::profit_margin().0, sales::compute_profit_margin);
        fns.insert(ids::total_profit().0, sales::compute_total_profit);

        Self { fns }
    }

    /// Compute a batch of indicators over already filtered rows.
    /// Unknown ids are logged and skipped.
    pub fn compute(
        &self,
        ids: &[IndicatorId],
        rows: &[&ReportedOrder],
        currency: Currency,
    ) -> Vec<IndicatorValue> {
        let mut results = Vec::with_capacity(ids.len());

        for id in ids {
            match self.fns.get(&id.0) {
                Some(compute_fn) => results.push(compute_fn(rows, currency)),
                None => tracing::warn!("indicator {} not found in registry", id.0),
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::indicators::metadata::{build_catalog, kpi_row};

    #[test]
    fn test_every_catalog_entry_is_registered() {
        let registry = IndicatorRegistry::new();
        let catalog = build_catalog(Currency::AED);
        let ids: Vec<IndicatorId> = catalog.indicators.iter().map(|m| m.id.clone()).collect();
        let values = registry.compute(&ids, &[], Currency::AED);
        assert_eq!(values.len(), ids.len());
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let registry = IndicatorRegistry::new();
        let mut ids = kpi_row();
        ids.push(IndicatorId::new("does_not_exist"));
        let values = registry.compute(&ids, &[], Currency::USD);
        assert_eq!(values.len(), 5);
        assert_eq!(values[0].id, ids::total_sales());
    }
}
