//! CSV ingest and row mapping.
//!
//! Turns one vendor price list into `ProductRecord`s tagged with the caller's
//! vendor id.
//!
//! - **Strict header**: every required column must be present, otherwise the
//!   whole file fails to load
//! - **Row-level isolation**: a bad row is skipped and reported, the rest of
//!   the file still maps
//! - No fields are derived from anything but their own column

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{CellValue, Numeric, ProductRecord, RowError, VendorId};
use crate::error::{ImportError, LoadErrorKind};

pub const COL_MANUFACTURER: &str = "Manufacturer";
pub const COL_MODEL: &str = "Model";
pub const COL_SPEED: &str = "Speed";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_COST: &str = "Cost";
pub const COL_INSTALLATION: &str = "Installation";
pub const COL_PROFIT_MARGIN: &str = "Profit Margin";
pub const COL_MIN_VOLUME: &str = "Min Volume";
pub const COL_MAX_VOLUME: &str = "Max Volume";
pub const COL_TOTAL_MACHINE_COST: &str = "Total Machine Cost";

/// Header columns every price list must carry, in their conventional order.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    COL_MANUFACTURER,
    COL_MODEL,
    COL_SPEED,
    COL_DESCRIPTION,
    COL_COST,
    COL_INSTALLATION,
    COL_PROFIT_MARGIN,
    COL_MIN_VOLUME,
    COL_MAX_VOLUME,
    COL_TOTAL_MACHINE_COST,
];

/// Mapping output: records ready to write plus the rows that were skipped.
#[derive(Debug, Clone, Default)]
pub struct MappedCatalog {
    pub records: Vec<ProductRecord>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Open `path` and map every row for `vendor`.
pub fn load_catalog(path: &Path, vendor: &VendorId) -> Result<MappedCatalog, ImportError> {
    let load_err = |source: LoadErrorKind| ImportError::Load {
        file: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| load_err(e.into()))?;
    map_catalog(file, vendor).map_err(load_err)
}

/// Map a CSV stream into product records for `vendor`.
///
/// Only header problems fail the whole stream; anything wrong with an
/// individual data row lands in `row_errors`.
pub fn map_catalog<R: Read>(reader: R, vendor: &VendorId) -> Result<MappedCatalog, LoadErrorKind> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut out = MappedCatalog::default();

    for (idx, result) in reader.records().enumerate() {
        // records() starts right after the header, which is line 1.
        let line = idx + 2;
        out.rows_read += 1;

        let mapped = result
            .map_err(|e| e.to_string())
            .and_then(|record| map_row(&record, &header_map, vendor));

        match mapped {
            Ok(product) => out.records.push(product),
            Err(message) => out.row_errors.push(RowError { line, message }),
        }
    }

    Ok(out)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        // First occurrence wins if a sheet repeats a column.
        map.entry(normalize_header_name(name)).or_insert(idx);
    }
    map
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), LoadErrorKind> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !header_map.contains_key(**col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadErrorKind::MissingColumns(missing))
    }
}

fn map_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    vendor: &VendorId,
) -> Result<ProductRecord, String> {
    Ok(ProductRecord {
        vendor: vendor.clone(),
        manufacturer: get_required(record, header_map, COL_MANUFACTURER)?.to_string(),
        model: get_required(record, header_map, COL_MODEL)?.to_string(),
        speed: CellValue::infer(get_required(record, header_map, COL_SPEED)?),
        description: get_required(record, header_map, COL_DESCRIPTION)?.to_string(),
        cost: get_numeric(record, header_map, COL_COST)?,
        installation: CellValue::infer(get_required(record, header_map, COL_INSTALLATION)?),
        profit_margin: get_numeric(record, header_map, COL_PROFIT_MARGIN)?,
        min_volume: get_numeric(record, header_map, COL_MIN_VOLUME)?,
        max_volume: get_numeric(record, header_map, COL_MAX_VOLUME)?,
        total_machine_cost: get_numeric(record, header_map, COL_TOTAL_MACHINE_COST)?,
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    let value = record
        .get(*idx)
        .ok_or_else(|| format!("Row has no `{name}` field"))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("Missing required value: `{name}`"));
    }
    Ok(value)
}

fn get_numeric(record: &StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Result<Numeric, String> {
    let raw = get_required(record, header_map, name)?;
    Numeric::parse(raw).ok_or_else(|| format!("Invalid numeric value for `{name}`: '{raw}'"))
}
