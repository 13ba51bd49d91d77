//! Loaders for the product reference catalog
//!
//! The catalog is normally an Excel workbook (first sheet). CSV files
//! exported from Excel on Russian-locale systems are frequently Windows-1251
//! encoded and semicolon separated; both are detected here.

use std::fs;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use density_domain::model::ProductRow;
use encoding_rs::WINDOWS_1251;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

pub const COL_NAME: &str = "Наименование";
pub const COL_DENSITY: &str = "Плотность";
pub const COL_LENGTH: &str = "Длина";
pub const COL_WIDTH: &str = "Ширина";
pub const COL_HEIGHT: &str = "Высота";

#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to read workbook: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("Workbook has no worksheets")]
    NoWorksheet,

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

/// Load catalog rows from a file, choosing the format by extension
///
/// `.xlsx`/`.xlsm` workbooks are read from their first sheet, `.toml` files
/// as `[[products]]` tables; anything else is CSV.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ProductRow>, CatalogLoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xlsm" => load_catalog_xlsx(path),
        "toml" => {
            let content = fs::read_to_string(path)?;
            load_catalog_toml(&content)
        }
        _ => {
            let bytes = fs::read(path)?;
            load_catalog_csv(&bytes)
        }
    }
}

/// Read the first worksheet; row 1 holds the column names
pub fn load_catalog_xlsx<P: AsRef<Path>>(path: P) -> Result<Vec<ProductRow>, CatalogLoadError> {
    let mut workbook: Xlsx<_> = open_workbook(path.as_ref())?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(CatalogLoadError::NoWorksheet)??;

    // Sheet row number of the range's first row (1-based)
    let first_row = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = sheet_rows
        .next()
        .map(|row| row.iter().map(|c| cell_text(c).trim().to_string()).collect())
        .unwrap_or_default();
    let columns = ColumnIndex::from_headers(headers.iter().map(String::as_str))?;

    let mut rows = Vec::new();
    for (row_idx, sheet_row) in sheet_rows.enumerate() {
        let row_num = first_row + row_idx + 1;
        let cells: Vec<String> = sheet_row
            .iter()
            .map(|c| cell_text(c).trim().to_string())
            .collect();
        let cell = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");

        if let Some(row) = columns.parse_row(cell, row_num)? {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Text form of a worksheet cell; numbers keep their exact value
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}

/// Container for parsing a TOML catalog
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    products: Vec<ProductRow>,
}

pub fn load_catalog_toml(content: &str) -> Result<Vec<ProductRow>, CatalogLoadError> {
    let catalog: TomlCatalog = toml::from_str(content)?;
    Ok(catalog.products)
}

/// Parse CSV bytes (UTF-8 or Windows-1251) with a header row
pub fn load_catalog_csv(bytes: &[u8]) -> Result<Vec<ProductRow>, CatalogLoadError> {
    let text = decode(bytes);
    let delimiter = detect_delimiter(&text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(headers.iter())?;

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        let cell = |idx: usize| record.get(idx).unwrap_or("");
        if let Some(row) = columns.parse_row(cell, row_num)? {
            rows.push(row);
        }
    }

    Ok(rows)
}

fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, had_errors) = WINDOWS_1251.decode(bytes);
            if had_errors {
                warn!("Some characters could not be decoded from Windows-1251");
            }
            decoded.into_owned()
        }
    }
}

fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or("");
    if header.contains(';') {
        b';'
    } else {
        b','
    }
}

/// Positions of the required columns in the header row
struct ColumnIndex {
    name: usize,
    density: usize,
    length: usize,
    width: usize,
    height: usize,
}

impl ColumnIndex {
    fn from_headers<'h>(
        headers: impl Iterator<Item = &'h str>,
    ) -> Result<Self, CatalogLoadError> {
        let headers: Vec<&str> = headers.collect();
        let find = |col: &str| {
            headers
                .iter()
                .position(|h| *h == col)
                .ok_or_else(|| CatalogLoadError::MissingColumn(col.to_string()))
        };

        Ok(Self {
            name: find(COL_NAME)?,
            density: find(COL_DENSITY)?,
            length: find(COL_LENGTH)?,
            width: find(COL_WIDTH)?,
            height: find(COL_HEIGHT)?,
        })
    }

    fn parse_row<'c>(
        &self,
        cell: impl Fn(usize) -> &'c str,
        row_num: usize,
    ) -> Result<Option<ProductRow>, CatalogLoadError> {
        let name = cell(self.name);
        let numeric = [
            (COL_DENSITY, cell(self.density)),
            (COL_LENGTH, cell(self.length)),
            (COL_WIDTH, cell(self.width)),
            (COL_HEIGHT, cell(self.height)),
        ];

        // Nameless rows cannot be reported as a match
        if name.is_empty() {
            if numeric.iter().any(|(_, v)| !v.is_empty()) {
                warn!(row = row_num, "Skipping catalog row without a product name");
            }
            return Ok(None);
        }

        let mut values = [0.0; 4];
        for (slot, (column, raw)) in values.iter_mut().zip(numeric) {
            *slot = parse_cell(raw, row_num, column)?;
        }
        let [density, length, width, height] = values;

        Ok(Some(ProductRow::new(name, density, length, width, height)))
    }
}

/// Numeric cell; `,` is accepted as decimal separator, empty means NaN
fn parse_cell(s: &str, row: usize, column: &str) -> Result<f64, CatalogLoadError> {
    let cleaned = s.trim().replace(',', ".");
    if cleaned.is_empty() {
        return Ok(f64::NAN);
    }

    cleaned.parse().map_err(|_| CatalogLoadError::InvalidNumber {
        row,
        column: column.to_string(),
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_comma_delimited_utf8() {
        let csv = "Наименование,Плотность,Длина,Ширина,Высота\n\
                   ППЖ-100,100,2,1,0.5\n\
                   ППЖ-60,60,1.2,0.6,0.1\n";
        let rows = load_catalog_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ProductRow::new("ППЖ-100", 100.0, 2.0, 1.0, 0.5));
        assert_eq!(rows[1].width, 0.6);
    }

    #[test]
    fn test_semicolon_with_decimal_comma() {
        let csv = "Наименование;Плотность;Длина;Ширина;Высота\n\
                   Плита 35;35;1,2;0,6;0,05\n";
        let rows = load_catalog_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].length, 1.2);
        assert_eq!(rows[0].height, 0.05);
    }

    #[test]
    fn test_bom_is_stripped() {
        let csv = "\u{FEFF}Наименование,Плотность,Длина,Ширина,Высота\nА,20,1,1,1\n";
        let rows = load_catalog_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].name, "А");
    }

    #[test]
    fn test_windows_1251_bytes() {
        let csv = "Наименование;Плотность;Длина;Ширина;Высота\nМинвата;50;1;0,6;0,1\n";
        let (encoded, _, _) = WINDOWS_1251.encode(csv);
        assert!(std::str::from_utf8(&encoded).is_err());

        let rows = load_catalog_csv(&encoded).unwrap();
        assert_eq!(rows[0].name, "Минвата");
        assert_eq!(rows[0].density, 50.0);
    }

    #[test]
    fn test_reordered_and_extra_columns() {
        let csv = "Артикул,Высота,Наименование,Ширина,Длина,Плотность\n\
                   A-1,0.5,ППЖ-100,1,2,100\n";
        let rows = load_catalog_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows[0], ProductRow::new("ППЖ-100", 100.0, 2.0, 1.0, 0.5));
    }

    #[test]
    fn test_missing_column() {
        let csv = "Наименование,Плотность,Длина,Ширина\nА,20,1,1\n";
        let err = load_catalog_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::MissingColumn(ref c) if c == COL_HEIGHT));
    }

    #[test]
    fn test_invalid_number_fails_whole_load() {
        let csv = "Наименование,Плотность,Длина,Ширина,Высота\nА,20,1,1,1\nБ,abc,1,1,1\n";
        let err = load_catalog_csv(csv.as_bytes()).unwrap_err();
        match err {
            CatalogLoadError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 3);
                assert_eq!(column, COL_DENSITY);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_rows_skipped_and_empty_cells_nan() {
        let csv = "Наименование,Плотность,Длина,Ширина,Высота\n\
                   ,,,,\n\
                   Без высоты,20,1,1,\n";
        let rows = load_catalog_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].height.is_nan());
    }

    #[test]
    fn test_nameless_rows_skipped() {
        let csv = "Наименование,Плотность,Длина,Ширина,Высота\n\
                   ,100,2,1,0.5\n\
                   ППЖ-100,100,2,1,0.5\n";
        let rows = load_catalog_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows, vec![ProductRow::new("ППЖ-100", 100.0, 2.0, 1.0, 0.5)]);
    }

    fn write_workbook(rows: &[[&str; 5]]) -> tempfile::NamedTempFile {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                // Numeric-looking cells are stored as numbers, like Excel does
                match value.parse::<f64>() {
                    Ok(n) if r > 0 => worksheet.write_number(r as u32, c as u16, n).unwrap(),
                    _ => worksheet.write_string(r as u32, c as u16, *value).unwrap(),
                };
            }
        }
        workbook.save(file.path()).unwrap();
        file
    }

    #[test]
    fn test_xlsx_first_sheet() {
        let file = write_workbook(&[
            ["Наименование", "Высота", "Длина", "Ширина", "Плотность"],
            ["ППЖ-100", "0.5", "2", "1", "100"],
            ["Минвата 35", "0.1", "1,2", "0.6", "35"],
            ["", "", "", "", ""],
        ]);
        let rows = load_catalog(file.path()).unwrap();
        assert_eq!(
            rows,
            vec![
                ProductRow::new("ППЖ-100", 100.0, 2.0, 1.0, 0.5),
                ProductRow::new("Минвата 35", 35.0, 1.2, 0.6, 0.1),
            ]
        );
    }

    #[test]
    fn test_xlsx_missing_column() {
        let file = write_workbook(&[
            ["Наименование", "Плотность", "Длина", "Ширина", "Артикул"],
            ["ППЖ-100", "100", "2", "1", "A-1"],
        ]);
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::MissingColumn(ref c) if c == COL_HEIGHT));
    }

    #[test]
    fn test_xlsx_invalid_number() {
        let file = write_workbook(&[
            ["Наименование", "Плотность", "Длина", "Ширина", "Высота"],
            ["ППЖ-100", "сто", "2", "1", "0.5"],
        ]);
        match load_catalog(file.path()).unwrap_err() {
            CatalogLoadError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, COL_DENSITY);
                assert_eq!(value, "сто");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_xlsx_not_a_workbook() {
        let mut file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        file.write_all(b"not a zip archive").unwrap();
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Xlsx(_)));
    }

    #[test]
    fn test_toml_catalog() {
        let toml = r#"
            [[products]]
            name = "ППЖ-100"
            density = 100.0
            length = 2.0
            width = 1.0
            height = 0.5
        "#;
        let rows = load_catalog_toml(toml).unwrap();
        assert_eq!(rows, vec![ProductRow::new("ППЖ-100", 100.0, 2.0, 1.0, 0.5)]);
    }

    #[test]
    fn test_load_catalog_dispatches_on_extension() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "[[products]]\nname = \"А\"\ndensity = 20\nlength = 1\nwidth = 1\nheight = 1\n"
        )
        .unwrap();
        let rows = load_catalog(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].density, 20.0);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog("/nonexistent/tovar.csv").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io(_)));
    }
}
