use serde::{Deserialize, Serialize};

/// Строка упрощённого датасета (одна страна, без дат и финансовых полей)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UaeSaleRecord {
    #[serde(rename = "Customer_ID")]
    pub customer_id: String,

    #[serde(rename = "Age_Group")]
    pub age_group: String,

    #[serde(rename = "Gender")]
    pub gender: String,

    /// Emirate / city
    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Category")]
    pub category: String,

    /// Whole AED, drawn from [20, 1000)
    #[serde(rename = "Sales_Amount")]
    pub sales_amount: i64,
}
