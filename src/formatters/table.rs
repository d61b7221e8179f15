use crate::data::PriceRecord;

/// Fixed-width console table for search results
pub struct TableFormatter;

impl TableFormatter {
    pub fn header() -> String {
        format!(
            "{:<5}{:<40}{:<10}{:<10}{:<15}{:<10}",
            "No.", "Name", "Price", "Weight", "File", "Price per kg"
        )
    }

    pub fn row(number: usize, record: &PriceRecord) -> String {
        format!(
            "{:<5}{:<40}{:<10.2}{:<10.2}{:<15}{:<10.2}",
            number, record.name, record.price, record.weight, record.file, record.price_per_kg
        )
    }

    /// Header plus one numbered line per record, newline-terminated
    pub fn format(records: &[&PriceRecord]) -> String {
        let mut out = Self::header();
        out.push('\n');
        for (idx, record) in records.iter().enumerate() {
            out.push_str(&Self::row(idx + 1, record));
            out.push('\n');
        }
        out
    }
}
