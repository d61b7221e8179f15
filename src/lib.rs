//! Price Machine
//!
//! Loads supplier price lists (CSV) from a folder, normalizes product name,
//! price and package weight, and computes price per kilogram.
//!
//! - `columns`: header synonym lookup
//! - `data`: folder scan and CSV loading with Polars
//! - `search_index`: name search sorted by price per kg
//! - `formatters`: HTML, JSON and console table output
//! - `interactive`: line-based search loop

pub mod columns;
pub mod data;
pub mod error;
pub mod formatters;
pub mod interactive;
pub mod search_index;

// Re-export commonly used types
pub use columns::{ColumnMapping, Field};
pub use data::{LoadOptions, PriceData, PriceRecord};
pub use error::PriceError;
pub use formatters::{HtmlFormatter, JsonFormatter, TableFormatter};
pub use interactive::interactive_search;
