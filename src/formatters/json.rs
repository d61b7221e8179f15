use crate::data::PriceRecord;

/// JSON formatter for price records
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format records as a pretty-printed JSON array
    pub fn format(records: &[&PriceRecord]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(records)
    }
}
