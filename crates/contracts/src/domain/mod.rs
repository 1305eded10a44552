pub mod a030_sales_order;
pub mod a031_uae_sale;
