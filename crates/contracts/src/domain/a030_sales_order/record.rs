use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Одна строка заказа (синтетический глобальный датасет).
///
/// All money fields are in AED. Column names follow the exported CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "Order_ID")]
    pub order_id: String,

    /// Дата заказа, без времени
    #[serde(rename = "Order_Date")]
    pub order_date: NaiveDate,

    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "City")]
    pub city: String,

    /// Hypermarket / Market / Online
    #[serde(rename = "Channel")]
    pub channel: String,

    #[serde(rename = "Customer_ID")]
    pub customer_id: String,

    #[serde(rename = "Gender")]
    pub gender: String,

    #[serde(rename = "Age_Group")]
    pub age_group: String,

    #[serde(rename = "Income_Band")]
    pub income_band: String,

    #[serde(rename = "Loyalty_Tier")]
    pub loyalty_tier: String,

    #[serde(rename = "Payment_Method")]
    pub payment_method: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Subcategory")]
    pub subcategory: String,

    #[serde(rename = "Brand")]
    pub brand: String,

    /// Количество, всегда >= 1
    #[serde(rename = "Units")]
    pub units: u32,

    #[serde(rename = "Unit_Price_AED")]
    pub unit_price_aed: f64,

    #[serde(rename = "Discount_pct")]
    pub discount_pct: f64,

    #[serde(rename = "VAT_pct")]
    pub vat_pct: f64,

    /// units * price * (1 - discount) * (1 + vat), rounded to 2 decimals
    #[serde(rename = "Sales_AED")]
    pub sales_aed: f64,

    #[serde(rename = "Cost_AED")]
    pub cost_aed: f64,

    #[serde(rename = "Profit_AED")]
    pub profit_aed: f64,
}

/// Order row with reporting-currency figures attached.
///
/// Kept flat (no `#[serde(flatten)]`) so the same struct can be written by the CSV exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedOrder {
    #[serde(rename = "Order_ID")]
    pub order_id: String,
    #[serde(rename = "Order_Date")]
    pub order_date: NaiveDate,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Channel")]
    pub channel: String,
    #[serde(rename = "Customer_ID")]
    pub customer_id: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Age_Group")]
    pub age_group: String,
    #[serde(rename = "Income_Band")]
    pub income_band: String,
    #[serde(rename = "Loyalty_Tier")]
    pub loyalty_tier: String,
    #[serde(rename = "Payment_Method")]
    pub payment_method: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Subcategory")]
    pub subcategory: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Units")]
    pub units: u32,
    #[serde(rename = "Unit_Price_AED")]
    pub unit_price_aed: f64,
    #[serde(rename = "Discount_pct")]
    pub discount_pct: f64,
    #[serde(rename = "VAT_pct")]
    pub vat_pct: f64,
    #[serde(rename = "Sales_AED")]
    pub sales_aed: f64,
    #[serde(rename = "Cost_AED")]
    pub cost_aed: f64,
    #[serde(rename = "Profit_AED")]
    pub profit_aed: f64,

    /// Sales in the reporting currency
    #[serde(rename = "Sales")]
    pub sales: f64,

    /// Profit in the reporting currency
    #[serde(rename = "Profit")]
    pub profit: f64,

    /// Sales / Units in the reporting currency
    #[serde(rename = "AOV")]
    pub aov: f64,
}

/// Round to two decimals, the precision of every money column.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl ReportedOrder {
    /// Attach reporting-currency figures. `rate` is the AED -> currency multiplier.
    pub fn from_order(order: &OrderRecord, rate: f64) -> Self {
        let sales = round2(order.sales_aed * rate);
        let profit = round2(order.profit_aed * rate);
        let aov = if order.units == 0 {
            0.0
        } else {
            round2(sales / order.units as f64)
        };

        Self {
            order_id: order.order_id.clone(),
            order_date: order.order_date,
            country: order.country.clone(),
            city: order.city.clone(),
            channel: order.channel.clone(),
            customer_id: order.customer_id.clone(),
            gender: order.gender.clone(),
            age_group: order.age_group.clone(),
            income_band: order.income_band.clone(),
            loyalty_tier: order.loyalty_tier.clone(),
            payment_method: order.payment_method.clone(),
            category: order.category.clone(),
            subcategory: order.subcategory.clone(),
            brand: order.brand.clone(),
            units: order.units,
            unit_price_aed: order.unit_price_aed,
            discount_pct: order.discount_pct,
            vat_pct: order.vat_pct,
            sales_aed: order.sales_aed,
            cost_aed: order.cost_aed,
            profit_aed: order.profit_aed,
            sales,
            profit,
            aov,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderRecord {
        OrderRecord {
            order_id: "ORD1000".into(),
            order_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            country: "UAE".into(),
            city: "Dubai".into(),
            channel: "Online".into(),
            customer_id: "CUST7".into(),
            gender: "Female".into(),
            age_group: "26-40".into(),
            income_band: "High".into(),
            loyalty_tier: "Gold".into(),
            payment_method: "Card".into(),
            category: "Electronics".into(),
            subcategory: "TV".into(),
            brand: "Sony".into(),
            units: 2,
            unit_price_aed: 1000.0,
            discount_pct: 10.0,
            vat_pct: 5.0,
            sales_aed: 1890.0,
            cost_aed: 1300.0,
            profit_aed: 590.0,
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-0.004), -0.0);
    }

    #[test]
    fn test_reported_order_conversion() {
        let row = ReportedOrder::from_order(&sample(), 0.2723);
        assert_eq!(row.sales, 514.65);
        assert_eq!(row.profit, 160.66);
        assert_eq!(row.aov, round2(row.sales / 2.0));
        assert_eq!(row.sales_aed, 1890.0);
    }

    #[test]
    fn test_base_rate_is_identity() {
        let order = sample();
        let row = ReportedOrder::from_order(&order, 1.0);
        assert_eq!(row.sales, order.sales_aed);
        assert_eq!(row.profit, order.profit_aed);
    }

    #[test]
    fn test_json_uses_column_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["Order_ID"], "ORD1000");
        assert_eq!(json["Order_Date"], "2025-03-14");
        assert_eq!(json["Unit_Price_AED"], 1000.0);
    }
}
