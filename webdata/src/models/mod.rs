pub mod analytics;
pub mod config;
pub mod sheet_values;
