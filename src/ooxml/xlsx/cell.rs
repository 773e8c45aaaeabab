//! Cell values and 1-based cell references.

use std::fmt;

use crate::common::{Error, Result};
use crate::table::{GridRegion, Value};

/// Last row of a worksheet.
pub const MAX_ROWS: u32 = 1_048_576;

/// Last column of a worksheet (`XFD`).
pub const MAX_COLS: u32 = 16_384;

/// Typed content of a worksheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text as a spreadsheet would show it without a number format.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Int(v) => itoa::Buffer::new().format(*v).to_string(),
            CellValue::Float(v) => ryu::Buffer::new().format(*v).to_string(),
            CellValue::Bool(true) => "TRUE".to_string(),
            CellValue::Bool(false) => "FALSE".to_string(),
        }
    }
}

/// Nulls, NaN included, become empty cells.
impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(v) => CellValue::Bool(v),
            Value::Int(v) => CellValue::Int(v),
            Value::Float(v) if v.is_nan() => CellValue::Empty,
            Value::Float(v) => CellValue::Float(v),
            Value::Text(s) => CellValue::Text(s),
        }
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        CellValue::from(value.clone())
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(i64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        if v.is_nan() { CellValue::Empty } else { CellValue::Float(v) }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Empty, Into::into)
    }
}

/// Convert a 1-based column number to letters (1 -> "A", 27 -> "AA").
pub fn column_to_letters(col: u32) -> String {
    let mut letters = String::new();
    let mut col = col;

    while col > 0 {
        col -= 1;
        let letter = ((col % 26) as u8 + b'A') as char;
        letters.insert(0, letter);
        col /= 26;
    }

    letters
}

/// Convert column letters to a 1-based column number, case-insensitively.
pub fn letters_to_column(letters: &str) -> Option<u32> {
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }
    let mut col = 0u32;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        col = col * 26 + (ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }
    (col <= MAX_COLS).then_some(col)
}

pub(crate) fn check_cell(row: u32, col: u32) -> Result<()> {
    if (1..=MAX_ROWS).contains(&row) && (1..=MAX_COLS).contains(&col) {
        Ok(())
    } else {
        Err(Error::InvalidCellReference { row, col })
    }
}

/// A1-style reference of a single cell.
pub fn cell_reference(row: u32, col: u32) -> String {
    format!("{}{}", column_to_letters(col), row)
}

/// Top-left cell of a table rendered on a worksheet, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAnchor {
    pub row: u32,
    pub col: u32,
}

impl CellAnchor {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl Default for CellAnchor {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl GridRegion for CellAnchor {
    fn validate(&self) -> Result<()> {
        check_cell(self.row, self.col)
    }
}

/// Rectangular block of cells, 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub first_row: u32,
    pub first_col: u32,
    pub last_row: u32,
    pub last_col: u32,
}

impl CellRange {
    /// Range between two corners; both must be valid cells and the first
    /// must not lie below or right of the second.
    pub fn new(first_row: u32, first_col: u32, last_row: u32, last_col: u32) -> Result<Self> {
        check_cell(first_row, first_col)?;
        check_cell(last_row, last_col)?;
        if first_row > last_row || first_col > last_col {
            return Err(Error::InvalidInput(format!(
                "range corners out of order: {} and {}",
                cell_reference(first_row, first_col),
                cell_reference(last_row, last_col)
            )));
        }
        Ok(Self {
            first_row,
            first_col,
            last_row,
            last_col,
        })
    }

    /// `rows` x `cols` block starting at `anchor`; both counts must be
    /// positive and the block must fit on the sheet.
    pub fn from_anchor(anchor: CellAnchor, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidInput(format!(
                "cannot place an empty {}x{} block on a worksheet",
                rows, cols
            )));
        }
        let last_row = u32::try_from(rows - 1)
            .ok()
            .and_then(|r| anchor.row.checked_add(r))
            .unwrap_or(u32::MAX);
        let last_col = u32::try_from(cols - 1)
            .ok()
            .and_then(|c| anchor.col.checked_add(c))
            .unwrap_or(u32::MAX);
        Self::new(anchor.row, anchor.col, last_row, last_col)
    }

    pub fn rows(&self) -> u32 {
        self.last_row - self.first_row + 1
    }

    pub fn cols(&self) -> u32 {
        self.last_col - self.first_col + 1
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.first_row..=self.last_row).contains(&row) && (self.first_col..=self.last_col).contains(&col)
    }

    pub fn intersects(&self, other: &CellRange) -> bool {
        self.first_row <= other.last_row
            && other.first_row <= self.last_row
            && self.first_col <= other.last_col
            && other.first_col <= self.last_col
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            cell_reference(self.first_row, self.first_col),
            cell_reference(self.last_row, self.last_col)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_to_letters(1), "A");
        assert_eq!(column_to_letters(26), "Z");
        assert_eq!(column_to_letters(27), "AA");
        assert_eq!(column_to_letters(MAX_COLS), "XFD");
        assert_eq!(letters_to_column("a"), Some(1));
        assert_eq!(letters_to_column("AA"), Some(27));
        assert_eq!(letters_to_column("XFD"), Some(MAX_COLS));
        assert_eq!(letters_to_column("XFE"), None);
        assert_eq!(letters_to_column("A1"), None);
        assert_eq!(letters_to_column(""), None);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(CellValue::from(Value::Null), CellValue::Empty);
        assert_eq!(CellValue::from(Value::Float(f64::NAN)), CellValue::Empty);
        assert_eq!(CellValue::from(Value::Int(3)), CellValue::Int(3));
        assert_eq!(CellValue::from(None::<i64>), CellValue::Empty);
        assert_eq!(CellValue::from("x"), CellValue::Text("x".into()));
    }

    #[test]
    fn test_range_display_and_bounds() {
        let range = CellRange::new(2, 1, 4, 3).unwrap();
        assert_eq!(range.to_string(), "A2:C4");
        assert_eq!((range.rows(), range.cols()), (3, 3));
        assert!(range.contains(3, 2));
        assert!(!range.contains(5, 2));

        assert!(matches!(
            CellRange::new(0, 1, 1, 1),
            Err(Error::InvalidCellReference { row: 0, col: 1 })
        ));
        assert!(matches!(CellRange::new(3, 1, 2, 1), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_from_anchor() {
        let range = CellRange::from_anchor(CellAnchor::new(2, 2), 3, 2).unwrap();
        assert_eq!(range.to_string(), "B2:C4");
        assert!(CellRange::from_anchor(CellAnchor::new(1, MAX_COLS), 1, 2).is_err());
        assert!(CellRange::from_anchor(CellAnchor::new(1, 1), 1, 0).is_err());
    }

    #[test]
    fn test_intersects() {
        let a = CellRange::new(1, 1, 2, 2).unwrap();
        let b = CellRange::new(2, 2, 3, 3).unwrap();
        let c = CellRange::new(3, 3, 4, 4).unwrap();
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
