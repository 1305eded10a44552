//! Generic generate -> filter -> aggregate pipeline.
//!
//! Both dashboards plug their row type in through [`SalesRecord`]; filtering and
//! aggregation never look at concrete structs.

pub mod aggregate;
pub mod filter;

use chrono::NaiveDate;
use contracts::domain::a030_sales_order::ReportedOrder;
use contracts::domain::a031_uae_sale::UaeSaleRecord;

/// Categorical columns a row can be filtered or grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Country,
    City,
    Location,
    Channel,
    Gender,
    AgeGroup,
    IncomeBand,
    LoyaltyTier,
    PaymentMethod,
    Category,
    Subcategory,
    Brand,
}

impl Dimension {
    /// Column header, as in the exported CSV
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Country => "Country",
            Dimension::City => "City",
            Dimension::Location => "Location",
            Dimension::Channel => "Channel",
            Dimension::Gender => "Gender",
            Dimension::AgeGroup => "Age_Group",
            Dimension::IncomeBand => "Income_Band",
            Dimension::LoyaltyTier => "Loyalty_Tier",
            Dimension::PaymentMethod => "Payment_Method",
            Dimension::Category => "Category",
            Dimension::Subcategory => "Subcategory",
            Dimension::Brand => "Brand",
        }
    }
}

/// Row schema seen by the pipeline.
///
/// `dimension` returns `None` for columns the schema does not have.
pub trait SalesRecord {
    /// Rows sharing a key belong to the same order
    fn order_key(&self) -> &str;

    fn order_date(&self) -> Option<NaiveDate> {
        None
    }

    fn dimension(&self, dim: Dimension) -> Option<&str>;

    /// Sales in the table's reporting currency
    fn sales(&self) -> f64;

    fn profit(&self) -> f64 {
        0.0
    }

    fn units(&self) -> u32 {
        1
    }

    fn discount_pct(&self) -> Option<f64> {
        None
    }
}

impl SalesRecord for ReportedOrder {
    fn order_key(&self) -> &str {
        &self.order_id
    }

    fn order_date(&self) -> Option<NaiveDate> {
        Some(self.order_date)
    }

    fn dimension(&self, dim: Dimension) -> Option<&str> {
        let value = match dim {
            Dimension::Country => &self.country,
            Dimension::City | Dimension::Location => &self.city,
            Dimension::Channel => &self.channel,
            Dimension::Gender => &self.gender,
            Dimension::AgeGroup => &self.age_group,
            Dimension::IncomeBand => &self.income_band,
            Dimension::LoyaltyTier => &self.loyalty_tier,
            Dimension::PaymentMethod => &self.payment_method,
            Dimension::Category => &self.category,
            Dimension::Subcategory => &self.subcategory,
            Dimension::Brand => &self.brand,
        };
        Some(value.as_str())
    }

    fn sales(&self) -> f64 {
        self.sales
    }

    fn profit(&self) -> f64 {
        self.profit
    }

    fn units(&self) -> u32 {
        self.units
    }

    fn discount_pct(&self) -> Option<f64> {
        Some(self.discount_pct)
    }
}

impl SalesRecord for UaeSaleRecord {
    // один покупатель = одна строка
    fn order_key(&self) -> &str {
        &self.customer_id
    }

    fn dimension(&self, dim: Dimension) -> Option<&str> {
        match dim {
            Dimension::Location | Dimension::City => Some(&self.location),
            Dimension::Gender => Some(&self.gender),
            Dimension::AgeGroup => Some(&self.age_group),
            Dimension::Category => Some(&self.category),
            _ => None,
        }
    }

    fn sales(&self) -> f64 {
        self.sales_amount as f64
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use contracts::domain::a030_sales_order::ReportedOrder;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Reported row with neutral defaults; tests override what they need
    pub fn order(id: &str, country: &str, category: &str, day: NaiveDate, sales: f64) -> ReportedOrder {
        ReportedOrder {
            order_id: id.to_string(),
            order_date: day,
            country: country.to_string(),
            city: "Dubai".to_string(),
            channel: "Online".to_string(),
            customer_id: "CUST1".to_string(),
            gender: "Female".to_string(),
            age_group: "26-40".to_string(),
            income_band: "High".to_string(),
            loyalty_tier: "None".to_string(),
            payment_method: "Card".to_string(),
            category: category.to_string(),
            subcategory: "Mobiles".to_string(),
            brand: "Apple".to_string(),
            units: 1,
            unit_price_aed: sales,
            discount_pct: 0.0,
            vat_pct: 0.0,
            sales_aed: sales,
            cost_aed: 0.0,
            profit_aed: 0.0,
            sales,
            profit: 0.0,
            aov: sales,
        }
    }
}
