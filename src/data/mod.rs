//! Data module - CSV loading and the typed brand table

mod loader;
mod table;

pub use loader::{DataLoader, DEFAULT_DATA_FILE};
pub use table::{BrandRecord, BrandTable};
