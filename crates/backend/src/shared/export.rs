use serde::Serialize;

use crate::shared::error::DashboardError;

/// Header of the global dashboard export (reported rows)
pub const ORDER_COLUMNS: [&str; 24] = [
    "Order_ID",
    "Order_Date",
    "Country",
    "City",
    "Channel",
    "Customer_ID",
    "Gender",
    "Age_Group",
    "Income_Band",
    "Loyalty_Tier",
    "Payment_Method",
    "Category",
    "Subcategory",
    "Brand",
    "Units",
    "Unit_Price_AED",
    "Discount_pct",
    "VAT_pct",
    "Sales_AED",
    "Cost_AED",
    "Profit_AED",
    "Sales",
    "Profit",
    "AOV",
];

/// Header of the UAE dashboard export
pub const UAE_COLUMNS: [&str; 6] = [
    "Customer_ID",
    "Age_Group",
    "Gender",
    "Location",
    "Category",
    "Sales_Amount",
];

/// Write rows as comma-separated UTF-8 with a header line.
///
/// The header is written explicitly so an empty view still exports its columns.
/// `columns` must match the serde field names of `T`.
pub fn to_csv<T: Serialize>(columns: &[&str], rows: &[T]) -> Result<Vec<u8>, DashboardError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| DashboardError::Csv(csv::Error::from(e.into_error())))
}
