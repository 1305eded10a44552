pub mod common;
pub mod d410_global_sales;
pub mod d411_uae_sales;
pub mod d412_comparison_lab;
