use std::borrow::Cow;

use anyhow::Result;
use chrono::NaiveDate;
use contracts::dashboards::common::DatasetOverride;
use contracts::domain::a030_sales_order::OrderRecord;
use contracts::domain::a031_uae_sale::UaeSaleRecord;
use once_cell::sync::OnceCell;

use crate::dashboards::{d410_global_sales, d411_uae_sales};
use crate::shared::config::DatasetConfig;
use crate::shared::error::DashboardError;

/// Tables generated once at startup. Read-only afterwards.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    pub settings: DatasetConfig,
    /// "Today" the date window was anchored to
    pub generated_on: NaiveDate,
    pub orders: Vec<OrderRecord>,
    pub uae_sales: Vec<UaeSaleRecord>,
}

impl SalesDataset {
    pub fn generate(settings: DatasetConfig, today: NaiveDate) -> Result<Self> {
        let orders = d410_global_sales::generator::generate_orders(settings.rows, settings.seed, today)?;
        let uae_sales = d411_uae_sales::generator::generate_sales(settings.uae_rows, settings.uae_seed);
        Ok(Self {
            settings,
            generated_on: today,
            orders,
            uae_sales,
        })
    }

    fn check_rows(&self, rows: usize) -> Result<(), DashboardError> {
        if rows == 0 || rows > self.settings.max_rows {
            return Err(DashboardError::InvalidRowCount {
                got: rows,
                max: self.settings.max_rows,
            });
        }
        Ok(())
    }

    /// Global table for a request: the shared one, or a fresh one when overridden
    pub fn orders_for(&self, over: &DatasetOverride) -> Result<Cow<'_, [OrderRecord]>> {
        if over.is_empty() {
            return Ok(Cow::Borrowed(&self.orders));
        }
        let rows = over.rows.unwrap_or(self.settings.rows);
        self.check_rows(rows)?;
        let seed = over.seed.unwrap_or(self.settings.seed);
        tracing::info!("Generating request-owned global table: rows={}, seed={}", rows, seed);
        let orders = d410_global_sales::generator::generate_orders(rows, seed, self.generated_on)?;
        Ok(Cow::Owned(orders))
    }

    /// UAE table for a request
    pub fn uae_sales_for(&self, over: &DatasetOverride) -> Result<Cow<'_, [UaeSaleRecord]>> {
        if over.is_empty() {
            return Ok(Cow::Borrowed(&self.uae_sales));
        }
        let rows = over.rows.unwrap_or(self.settings.uae_rows);
        self.check_rows(rows)?;
        let seed = over.seed.unwrap_or(self.settings.uae_seed);
        tracing::info!("Generating request-owned UAE table: rows={}, seed={}", rows, seed);
        Ok(Cow::Owned(d411_uae_sales::generator::generate_sales(rows, seed)))
    }
}

static DATASET: OnceCell<SalesDataset> = OnceCell::new();

/// Generate the shared tables. Calling it again keeps the first dataset.
pub fn initialize_dataset(settings: DatasetConfig, today: NaiveDate) -> Result<()> {
    let dataset = SalesDataset::generate(settings, today)?;
    tracing::info!(
        "Dataset ready: {} global orders, {} UAE rows (anchored to {})",
        dataset.orders.len(),
        dataset.uae_sales.len(),
        today
    );
    if DATASET.set(dataset).is_err() {
        tracing::warn!("Dataset already initialized, keeping the existing one");
    }
    Ok(())
}

pub fn get_dataset() -> Result<&'static SalesDataset, DashboardError> {
    DATASET.get().ok_or(DashboardError::DatasetNotInitialized)
}
