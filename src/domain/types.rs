//! Shared domain types.
//!
//! Records are kept serializable so the same struct can be:
//!
//! - sent to the destination store as a document
//! - read back from the store for verification
//! - exported to JSON during a dry run

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Opaque vendor identifier supplied by the caller.
///
/// The importer never checks that it refers to an existing vendor and never
/// derives it from file contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(String);

impl VendorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VendorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A numeric spreadsheet value, kept exactly as written.
///
/// Money columns are major currency units and `profit_margin` is a fraction
/// (`0.2` = 20%). No unit conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    /// Parse an integer or finite decimal literal.
    pub fn parse(s: &str) -> Option<Self> {
        if let Ok(i) = s.parse::<i64>() {
            return Some(Numeric::Integer(i));
        }
        let f = s.parse::<f64>().ok()?;
        if f.is_finite() { Some(Numeric::Float(f)) } else { None }
    }
}

/// A spreadsheet value whose column may hold numbers or free text
/// (`Speed`, `Installation`).
///
/// Variant order matters for untagged deserialization: integers must be tried
/// before floats so `30` reads back as an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Infer the narrowest type for a single cell: integer, then float, then text.
    pub fn infer(s: &str) -> Self {
        match Numeric::parse(s) {
            Some(Numeric::Integer(i)) => CellValue::Integer(i),
            Some(Numeric::Float(f)) => CellValue::Float(f),
            None => CellValue::Text(s.to_string()),
        }
    }
}

/// One product row of a vendor price list, tagged with its vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub vendor: VendorId,
    pub manufacturer: String,
    pub model: String,
    pub speed: CellValue,
    pub description: String,
    pub cost: Numeric,
    pub installation: CellValue,
    pub profit_margin: Numeric,
    /// Inclusive lower bound of the usage-volume range.
    pub min_volume: Numeric,
    /// Inclusive upper bound of the usage-volume range.
    pub max_volume: Numeric,
    pub total_machine_cost: Numeric,
}

/// One (file, vendor) pair to import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportJob {
    pub file: PathBuf,
    pub vendor: VendorId,
    /// Human-readable vendor name, used only in output.
    pub label: Option<String>,
}

impl ImportJob {
    pub fn new(file: impl Into<PathBuf>, vendor: impl Into<VendorId>) -> Self {
        Self {
            file: file.into(),
            vendor: vendor.into(),
            label: None,
        }
    }
}

/// A data row that could not be mapped and was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based line number in the source file (the header is line 1).
    pub line: usize,
    pub message: String,
}

/// Outcome of a successful import of one file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub file: PathBuf,
    pub vendor: VendorId,
    pub rows_read: usize,
    pub inserted: usize,
    pub skipped: Vec<RowError>,
}

impl ImportReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_prefers_integer_then_float_then_text() {
        assert_eq!(CellValue::infer("30"), CellValue::Integer(30));
        assert_eq!(CellValue::infer("0.2"), CellValue::Float(0.2));
        assert_eq!(CellValue::infer("35 ppm"), CellValue::Text("35 ppm".to_string()));
        assert_eq!(CellValue::infer("NaN"), CellValue::Text("NaN".to_string()));
    }

    #[test]
    fn numeric_values_keep_their_type_through_json() {
        let json = serde_json::to_string(&vec![Numeric::Integer(500), Numeric::Float(0.2)]).unwrap();
        assert_eq!(json, "[500,0.2]");

        let back: Vec<Numeric> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Numeric::Integer(500), Numeric::Float(0.2)]);

        let cells: Vec<CellValue> = serde_json::from_str(r#"[30, 2.5, "on request"]"#).unwrap();
        assert_eq!(
            cells,
            vec![
                CellValue::Integer(30),
                CellValue::Float(2.5),
                CellValue::Text("on request".to_string())
            ]
        );
    }

    #[test]
    fn vendor_id_serializes_as_plain_string() {
        let v = VendorId::new("67916a0d2de3001c450d5a17");
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"67916a0d2de3001c450d5a17\"");
    }
}
