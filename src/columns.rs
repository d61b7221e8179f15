//! Header Synonym Lookup
//!
//! Price lists come from different suppliers, each naming its columns a
//! little differently. Every field has a fixed list of accepted header names,
//! checked in order; the first one present in the file wins.
//!
//! - Name: название, продукт, товар, наименование
//! - Price: цена, розница
//! - Weight (kg): фасовка, масса, вес

/// Logical column extracted from a price list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    Weight,
}

// ============================================================================
// ACCEPTED HEADER NAMES (priority order)
// ============================================================================

static NAME_HEADERS: &[&str] = &["название", "продукт", "товар", "наименование"];
static PRICE_HEADERS: &[&str] = &["цена", "розница"];
static WEIGHT_HEADERS: &[&str] = &["фасовка", "масса", "вес"];

impl Field {
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Field::Name => NAME_HEADERS,
            Field::Price => PRICE_HEADERS,
            Field::Weight => WEIGHT_HEADERS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Weight => "weight",
        }
    }
}

/// Actual header names (as spelled in the file) for the three fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name: String,
    pub price: String,
    pub weight: String,
}

impl ColumnMapping {
    /// Match file headers against the synonym lists.
    ///
    /// Returns `None` if any field has no matching header.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Option<Self> {
        Some(ColumnMapping {
            name: find_header(headers, Field::Name)?,
            price: find_header(headers, Field::Price)?,
            weight: find_header(headers, Field::Weight)?,
        })
    }

    pub fn header(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Price => &self.price,
            Field::Weight => &self.weight,
        }
    }
}

/// Header comparison ignores case and surrounding whitespace
fn normalize(header: &str) -> String {
    header.trim().to_lowercase()
}

fn find_header<S: AsRef<str>>(headers: &[S], field: Field) -> Option<String> {
    field.synonyms().iter().find_map(|synonym| {
        headers
            .iter()
            .map(AsRef::as_ref)
            .find(|h| normalize(h) == *synonym)
            .map(str::to_string)
    })
}
