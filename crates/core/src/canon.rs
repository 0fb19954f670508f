//! Canonical string forms for answer-key cells.
//!
//! Cells arrive as raw CSV text. A column is typed as a whole: when every
//! non-missing cell is numeric the column is numeric, otherwise every cell is
//! kept verbatim as text. Numeric cells whose value is integral render without
//! a fractional part, so `3.0` and `3` both canonicalize to `"3"`.

/// Raw markers treated as a missing cell.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single typed answer-key cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Type a whole column of raw cells at once.
    #[must_use]
    pub fn infer_column(raw: &[&str]) -> Vec<CellValue> {
        let present: Vec<&str> = raw
            .iter()
            .copied()
            .filter(|cell| !is_missing(cell))
            .collect();

        let all_integer = present.iter().all(|cell| parse_integer(cell).is_some());
        let all_float = all_integer || present.iter().all(|cell| parse_float(cell).is_some());
        let has_missing = present.len() != raw.len();

        raw.iter()
            .map(|cell| {
                if is_missing(cell) {
                    return CellValue::Missing;
                }
                if all_integer && !has_missing {
                    if let Some(value) = parse_integer(cell) {
                        return CellValue::Integer(value);
                    }
                }
                if all_float {
                    if let Some(value) = parse_float(cell) {
                        return CellValue::Float(value);
                    }
                }
                CellValue::Text((*cell).to_string())
            })
            .collect()
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// Display string for a cell: missing is empty, integral floats drop `.0`.
#[must_use]
pub fn as_str(value: &CellValue) -> String {
    match value {
        CellValue::Missing => String::new(),
        CellValue::Integer(v) => v.to_string(),
        CellValue::Float(v) => format_float(*v),
        CellValue::Text(s) => s.clone(),
    }
}

/// Shorthand for canonicalizing a full raw column to strings.
#[must_use]
pub fn canonical_column(raw: &[&str]) -> Vec<String> {
    CellValue::infer_column(raw).iter().map(as_str).collect()
}

#[allow(clippy::cast_possible_truncation)]
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        return (value as i64).to_string();
    }
    value.to_string()
}

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell.trim())
}

fn parse_integer(cell: &str) -> Option<i64> {
    cell.trim().parse::<i64>().ok()
}

fn parse_float(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
