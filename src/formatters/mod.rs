pub mod html;
pub mod json;
pub mod table;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

use crate::data::PriceData;
use crate::error::{PriceError, Result};
use std::fs;
use std::path::Path;

impl PriceData {
    /// Write the HTML table (cheapest per kilogram first) and return it
    pub fn export_to_html(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let html = HtmlFormatter::format(&self.sorted_by_price_per_kg());
        fs::write(path, &html).map_err(|e| PriceError::io(path, e))?;
        tracing::info!("Wrote {} record(s) to {}", self.len(), path.display());
        Ok(html)
    }

    /// Write the records as a JSON array (cheapest per kilogram first)
    pub fn export_to_json(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let json = JsonFormatter::format(&self.sorted_by_price_per_kg())?;
        fs::write(path, &json).map_err(|e| PriceError::io(path, e))?;
        tracing::info!("Wrote {} record(s) to {}", self.len(), path.display());
        Ok(json)
    }
}

/// Price or weight as a plain decimal that always shows a fractional part
/// (`100.0`, `0.25`)
pub fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
