//! Output writing for the retail ETL pipeline.

pub mod csv_out;

pub use csv_out::{write_cleaned_tables, write_report_tables};
