//! Data Loading and Management
//!
//! Scans a folder for supplier price lists, reads them with Polars and
//! normalizes every usable row into a [`PriceRecord`].
//!
//! A price list is any regular file whose name contains the marker
//! (default `price`). Every column is read as text; the name, price and
//! weight columns are located through [`ColumnMapping`].

use crate::columns::{ColumnMapping, Field};
use crate::error::{PriceError, Result};
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One product line from a price list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    pub name: String,
    pub price: f64,
    /// Package weight in kilograms
    pub weight: f64,
    /// File name the row came from (no directory part)
    pub file: String,
    pub price_per_kg: f64,
}

impl PriceRecord {
    pub fn new(name: impl Into<String>, price: f64, weight: f64, file: impl Into<String>) -> Self {
        PriceRecord {
            name: name.into(),
            price,
            weight,
            file: file.into(),
            price_per_kg: price / weight,
        }
    }
}

/// Settings for scanning a folder
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Substring a file name must contain to be loaded (case-sensitive)
    pub marker: String,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            marker: "price".to_string(),
            delimiter: b',',
        }
    }
}

/// In-memory store of every loaded record
#[derive(Debug, Default, Clone)]
pub struct PriceData {
    records: Vec<PriceRecord>,
}

impl PriceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<PriceRecord>) -> Self {
        PriceData { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load every matching price list in `dir`
    ///
    /// Records are appended to the store. A file that fails to load is logged
    /// and skipped; only a missing folder aborts the scan.
    ///
    /// Returns the number of records added.
    pub fn load_prices(&mut self, dir: impl AsRef<Path>, options: &LoadOptions) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(PriceError::DirectoryNotFound(dir.to_path_buf()));
        }

        let files = matching_files(dir, &options.marker)?;
        tracing::info!(
            "Found {} price list(s) in {} (marker '{}')",
            files.len(),
            dir.display(),
            options.marker
        );

        let mut added = 0;
        for path in files {
            match Self::load_file(&path, options) {
                Ok(records) => {
                    tracing::info!("  {}: {} record(s)", display_name(&path), records.len());
                    added += records.len();
                    self.records.extend(records);
                }
                Err(err) => {
                    tracing::warn!("Error reading file {}: {}", display_name(&path), err);
                }
            }
        }

        tracing::info!("Loaded {} record(s), {} in total", added, self.records.len());
        Ok(added)
    }

    /// Parse a single price list
    ///
    /// Rows missing a name, price or weight are skipped. A non-numeric price
    /// or weight, or a zero weight, fails the whole file.
    pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Vec<PriceRecord>> {
        let file = display_name(path);
        let df = read_frame(path, options.delimiter, &file)?;

        let headers: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|h| h.to_string())
            .collect();

        let Some(mapping) = ColumnMapping::resolve(headers.as_slice()) else {
            tracing::debug!("{}: no recognized columns in {:?}", file, headers);
            return Ok(Vec::new());
        };
        tracing::debug!("{}: using columns {:?}", file, mapping);

        let names = text_column(&df, &mapping, Field::Name, &file)?;
        let prices = text_column(&df, &mapping, Field::Price, &file)?;
        let weights = text_column(&df, &mapping, Field::Weight, &file)?;

        let mut records = Vec::new();
        for (idx, ((name, price), weight)) in names
            .into_iter()
            .zip(prices.into_iter())
            .zip(weights.into_iter())
            .enumerate()
        {
            let row = idx + 1;
            let (Some(name), Some(price), Some(weight)) =
                (non_empty(name), non_empty(price), non_empty(weight))
            else {
                continue;
            };

            let price = parse_number(price, &file, row, Field::Price)?;
            let weight = parse_number(weight, &file, row, Field::Weight)?;
            if weight == 0.0 {
                return Err(PriceError::ZeroWeight { file, row });
            }

            records.push(PriceRecord::new(name, price, weight, file.clone()));
        }

        Ok(records)
    }

    /// All records, cheapest per kilogram first
    ///
    /// Ties keep load order.
    pub fn sorted_by_price_per_kg(&self) -> Vec<&PriceRecord> {
        let mut sorted: Vec<&PriceRecord> = self.records.iter().collect();
        sort_by_price_per_kg(&mut sorted);
        sorted
    }
}

pub(crate) fn sort_by_price_per_kg(records: &mut [&PriceRecord]) {
    records.sort_by(|a, b| a.price_per_kg.total_cmp(&b.price_per_kg));
}

/// Regular files in `dir` whose name contains `marker`, sorted by name
fn matching_files(dir: &Path, marker: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| PriceError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PriceError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && entry.file_name().to_string_lossy().contains(marker) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Read a CSV with every column as String
fn read_frame(path: &Path, delimiter: u8, file: &str) -> Result<DataFrame> {
    // Extra trailing fields are dropped instead of failing the file
    let parse_options = CsvParseOptions::default()
        .with_separator(delimiter)
        .with_truncate_ragged_lines(true);

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|source| PriceError::Csv {
            file: file.to_string(),
            source,
        })
}

fn text_column<'a>(
    df: &'a DataFrame,
    mapping: &ColumnMapping,
    field: Field,
    file: &str,
) -> Result<&'a StringChunked> {
    let header = mapping.header(field);
    df.column(header)
        .and_then(|column| column.str())
        .map_err(|_| PriceError::MissingColumn {
            file: file.to_string(),
            column: header.to_string(),
        })
}

fn non_empty(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a price or weight cell; a decimal comma is accepted
fn parse_number(raw: &str, file: &str, row: usize, field: Field) -> Result<f64> {
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PriceError::InvalidNumber {
            file: file.to_string(),
            row,
            field: field.label(),
            value: raw.to_string(),
        })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_price_per_kg() {
        let record = PriceRecord::new("Сыр", 300.0, 0.5, "price_1.csv");
        assert_relative_eq!(record.price_per_kg, 600.0);
    }

    #[test]
    fn test_parse_number() {
        assert_relative_eq!(parse_number("12.5", "f", 1, Field::Price).unwrap(), 12.5);
        assert_relative_eq!(parse_number("12,5", "f", 1, Field::Price).unwrap(), 12.5);
        assert!(matches!(
            parse_number("abc", "f", 3, Field::Weight),
            Err(PriceError::InvalidNumber { row: 3, field: "weight", .. })
        ));
        assert!(parse_number("inf", "f", 1, Field::Price).is_err());
    }

    #[test]
    fn test_load_file_skips_incomplete_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "price_a.csv",
            "товар,цена,вес\nЯблоки,100,2\n,50,1\nГруши,,1\nСливы,90, 3 \n",
        );

        let records = PriceData::load_file(&path, &LoadOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Яблоки");
        assert_relative_eq!(records[0].price_per_kg, 50.0);
        assert_eq!(records[1].name, "Сливы");
        assert_relative_eq!(records[1].weight, 3.0);
        assert_eq!(records[1].file, "price_a.csv");
    }

    #[test]
    fn test_load_file_zero_weight_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "price_z.csv", "товар,цена,вес\nЯблоки,100,0\n");

        let err = PriceData::load_file(&path, &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, PriceError::ZeroWeight { row: 1, .. }));
    }

    #[test]
    fn test_load_file_keeps_rows_with_extra_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "price_r.csv",
            "товар,цена,вес\nЯблоки,100,2,extra\nГруши,50,1\n",
        );

        let records = PriceData::load_file(&path, &LoadOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Яблоки");
        assert_relative_eq!(records[0].weight, 2.0);
        assert_eq!(records[1].name, "Груши");
    }

    #[test]
    fn test_load_file_invalid_utf8_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("price_bin.csv");
        let mut bytes = "товар,цена,вес\n".as_bytes().to_vec();
        bytes.extend_from_slice(b"\xff\xfe\xfd,10,1\n");
        fs::write(&path, bytes).unwrap();

        let err = PriceData::load_file(&path, &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, PriceError::Csv { .. }));
    }

    #[test]
    fn test_load_file_without_known_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "price_x.csv", "sku,qty\n1,2\n");

        let records = PriceData::load_file(&path, &LoadOptions::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_matching_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "price_b.csv", "");
        write(dir.path(), "price_a.csv", "");
        write(dir.path(), "stock.csv", "");
        write(dir.path(), "Price_c.csv", "");
        fs::create_dir(dir.path().join("price_dir")).unwrap();

        let files = matching_files(dir.path(), "price").unwrap();
        let names: Vec<String> = files.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, vec!["price_a.csv", "price_b.csv"]);
    }

    #[test]
    fn test_sorted_by_price_per_kg_is_stable() {
        let data = PriceData::from_records(vec![
            PriceRecord::new("B", 200.0, 1.0, "f"),
            PriceRecord::new("A1", 100.0, 1.0, "f"),
            PriceRecord::new("A2", 50.0, 0.5, "f"),
        ]);

        let names: Vec<&str> = data
            .sorted_by_price_per_kg()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["A1", "A2", "B"]);
    }
}
