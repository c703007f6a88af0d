//! Row types for the catalog tables.

pub mod catalog_row;

pub use catalog_row::CatalogRow;
