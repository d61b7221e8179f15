//! Product name search
//!
//! Case-insensitive substring match over the loaded records. Results come
//! back cheapest per kilogram first.

use crate::data::{sort_by_price_per_kg, PriceData, PriceRecord};

impl PriceData {
    /// Records whose name contains `query`, ignoring case
    ///
    /// An empty query matches everything.
    pub fn find_text(&self, query: &str) -> Vec<&PriceRecord> {
        let query_lower = query.to_lowercase();

        let mut results: Vec<&PriceRecord> = self
            .records()
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&query_lower))
            .collect();

        sort_by_price_per_kg(&mut results);
        results
    }
}
