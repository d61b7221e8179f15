use super::plain_number;
use crate::data::PriceRecord;
use html_escape::encode_text;

/// HTML formatter for the price table export
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format records as a standalone HTML page
    ///
    /// Records are numbered in the order given; callers pass them sorted by
    /// price per kilogram.
    pub fn format(records: &[&PriceRecord]) -> String {
        let mut html = String::with_capacity(1024 + records.len() * 256);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<title>Product positions</title>\n");
        html.push_str("<style>\n");
        html.push_str("body { font-family: system-ui, sans-serif; margin: 40px auto; padding: 20px; }\n");
        html.push_str("table { border-collapse: collapse; }\n");
        html.push_str("th { text-align: left; padding: 8px 12px; border-bottom: 2px solid #34495e; }\n");
        html.push_str("td { padding: 8px 12px; border-bottom: 1px solid #ecf0f1; }\n");
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str("<table border=\"0\">\n");
        html.push_str("<tr><th>No.</th><th>Name</th><th>Price</th><th>Weight</th><th>File</th><th>Price per kg</th></tr>\n");

        for (idx, record) in records.iter().enumerate() {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td></tr>\n",
                idx + 1,
                encode_text(&record.name),
                plain_number(record.price),
                plain_number(record.weight),
                encode_text(&record.file),
                record.price_per_kg
            ));
        }

        html.push_str("</table>\n");
        html.push_str("</body>\n</html>\n");
        html
    }
}
