//! Writing tabular data to a worksheet as typed, styled cells.
//!
//! Unlike [`Worksheet::render_table`], which writes display text, this keeps
//! numbers as numbers and leaves their presentation to Excel number format
//! codes.

use std::collections::BTreeMap;

use crate::common::{Error, Result, RgbColor};
use crate::ooxml::xlsx::cell::{CellAnchor, CellRange, CellValue, letters_to_column};
use crate::ooxml::xlsx::format::{CellFormatOptions, HorizontalAlignment, VerticalAlignment};
use crate::ooxml::xlsx::worksheet::Worksheet;
use crate::table::{ColumnFormatMap, RowIndex, TabularData, Value};

/// Header of the index column when neither a label nor an index name is
/// given.
pub const DEFAULT_INDEX_COLUMN: &str = "index";

/// A column named by letters (`"B"`) or by 1-based number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKey {
    Letter(String),
    Index(u32),
}

impl From<&str> for ColumnKey {
    fn from(letters: &str) -> Self {
        ColumnKey::Letter(letters.to_string())
    }
}

impl From<u32> for ColumnKey {
    fn from(index: u32) -> Self {
        ColumnKey::Index(index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnWidths {
    /// Fit each written column to its longest header or value.
    Auto,
    Explicit(Vec<(ColumnKey, f64)>),
}

/// Header styling. Font name and size fall back to the data style; bold and
/// fill fall back to the sheet defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderStyle {
    pub font_name: Option<String>,
    pub font_size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: bool,
    pub font_color: Option<RgbColor>,
    pub fill_color: Option<RgbColor>,
    pub align_horizontal: Option<HorizontalAlignment>,
    pub align_vertical: Option<VerticalAlignment>,
    pub wrap_text: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataFrameOptions {
    /// Top-left cell of the header, or of the data without a header
    pub start: CellAnchor,
    pub include_index: bool,
    pub index_label: Option<String>,
    pub header: bool,
    /// Excel number format codes by column name, index column included
    pub number_formats: ColumnFormatMap,
    /// Style of the data cells; its number format is ignored in favor of
    /// `number_formats`
    pub data_style: CellFormatOptions,
    pub header_style: HeaderStyle,
    pub column_widths: Option<ColumnWidths>,
    /// Heights by absolute 1-based row; rows outside the written block are
    /// ignored
    pub row_heights: BTreeMap<u32, f64>,
}

impl Default for DataFrameOptions {
    fn default() -> Self {
        Self {
            start: CellAnchor::default(),
            include_index: false,
            index_label: None,
            header: true,
            number_formats: ColumnFormatMap::new(),
            data_style: CellFormatOptions::default(),
            header_style: HeaderStyle::default(),
            column_widths: None,
            row_heights: BTreeMap::new(),
        }
    }
}

impl DataFrameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, row: u32, col: u32) -> Self {
        self.start = CellAnchor::new(row, col);
        self
    }

    pub fn include_index(mut self, include: bool) -> Self {
        self.include_index = include;
        self
    }

    pub fn index_label(mut self, label: impl Into<String>) -> Self {
        self.index_label = Some(label.into());
        self
    }

    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn number_format(mut self, column: impl Into<String>, code: impl Into<String>) -> Self {
        self.number_formats.insert(column.into(), code.into());
        self
    }

    pub fn data_style(mut self, style: CellFormatOptions) -> Self {
        self.data_style = style;
        self
    }

    pub fn header_style(mut self, style: HeaderStyle) -> Self {
        self.header_style = style;
        self
    }

    pub fn auto_column_widths(mut self) -> Self {
        self.column_widths = Some(ColumnWidths::Auto);
        self
    }

    pub fn column_width(mut self, column: impl Into<ColumnKey>, width: f64) -> Self {
        let entry = (column.into(), width);
        match &mut self.column_widths {
            Some(ColumnWidths::Explicit(widths)) => widths.push(entry),
            _ => self.column_widths = Some(ColumnWidths::Explicit(vec![entry])),
        }
        self
    }

    pub fn row_height(mut self, row: u32, height: f64) -> Self {
        self.row_heights.insert(row, height);
        self
    }
}

impl Worksheet {
    /// Write `data` as a block of typed cells and return the block.
    ///
    /// The index, when included, becomes the leading column. Nulls are left
    /// as empty cells. Everything is checked before the first cell is
    /// written.
    pub fn write_dataframe(&mut self, data: &TabularData, options: &DataFrameOptions) -> Result<CellRange> {
        let row_count = data.validate()?;

        let default_index;
        let index = match data.index() {
            Some(index) => index,
            None => {
                default_index = RowIndex::range(row_count);
                &default_index
            },
        };
        let index_name = options
            .index_label
            .clone()
            .or_else(|| index.name.clone())
            .unwrap_or_else(|| DEFAULT_INDEX_COLUMN.to_string());

        let mut columns: Vec<(&str, &[Value])> = Vec::with_capacity(data.column_count() + 1);
        if options.include_index {
            columns.push((index_name.as_str(), index.labels.as_slice()));
        }
        columns.extend(data.columns().iter().map(|c| (c.name.as_str(), c.values.as_slice())));

        let header_rows = usize::from(options.header);
        let block = CellRange::from_anchor(options.start, header_rows + row_count, columns.len())?;
        let widths = self.resolve_widths(&columns, options)?;

        let first_col = block.first_col;
        let mut row = block.first_row;
        if options.header {
            let style = self.header_options(options);
            for (c, (name, _)) in columns.iter().enumerate() {
                self.write_cell(row, first_col + c as u32, *name, &style)?;
            }
            row += 1;
        }

        for (c, (name, values)) in columns.iter().enumerate() {
            let mut style = options.data_style.clone();
            style.number_format = options.number_formats.get(*name).cloned();
            for (r, value) in values.iter().enumerate() {
                self.write_cell(row + r as u32, first_col + c as u32, CellValue::from(value), &style)?;
            }
        }

        for (col, width) in widths {
            self.set_column_width(col, width)?;
        }
        for (&r, &height) in options.row_heights.range(block.first_row..=block.last_row) {
            self.set_row_height(r, height)?;
        }

        Ok(block)
    }

    fn header_options(&self, options: &DataFrameOptions) -> CellFormatOptions {
        let header = &options.header_style;
        CellFormatOptions {
            font_name: header
                .font_name
                .clone()
                .or_else(|| options.data_style.font_name.clone()),
            font_size: header.font_size.or(options.data_style.font_size),
            bold: header.bold.unwrap_or(self.defaults.header_bold),
            italic: header.italic,
            font_color: header.font_color,
            fill_color: Some(header.fill_color.unwrap_or(self.defaults.header_fill)),
            number_format: None,
            align_horizontal: header.align_horizontal,
            align_vertical: header.align_vertical,
            wrap_text: header.wrap_text,
        }
    }

    /// Absolute column widths to set once the cells are written.
    fn resolve_widths(&self, columns: &[(&str, &[Value])], options: &DataFrameOptions) -> Result<Vec<(u32, f64)>> {
        let first_col = options.start.col;
        match &options.column_widths {
            None => Ok(Vec::new()),
            Some(ColumnWidths::Auto) => Ok(columns
                .iter()
                .enumerate()
                .map(|(c, (name, values))| {
                    let header_len = if options.header { name.chars().count() } else { 0 };
                    let max_len = values
                        .iter()
                        .map(|v| v.display_text().chars().count())
                        .fold(header_len, usize::max);
                    (first_col + c as u32, (max_len + 2) as f64 * 1.2)
                })
                .collect()),
            Some(ColumnWidths::Explicit(widths)) => widths
                .iter()
                .map(|(key, width)| {
                    let col = match key {
                        ColumnKey::Letter(letters) => letters_to_column(letters).ok_or_else(|| {
                            Error::InvalidInput(format!("invalid column letters '{}'", letters))
                        })?,
                        ColumnKey::Index(index) => *index,
                    };
                    Ok((col, *width))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::SheetDefaults;
    use crate::table::Column;

    fn sheet() -> Worksheet {
        Worksheet::new("Data".to_string(), SheetDefaults::default())
    }

    fn sales() -> TabularData {
        TabularData::new(vec![
            Column::new("Region", ["North", "South"]),
            Column::new("Sales", [Some(1250.5), None]),
        ])
    }

    #[test]
    fn test_write_dataframe_typed_values() {
        let mut ws = sheet();
        let range = ws
            .write_dataframe(&sales(), &DataFrameOptions::new().number_format("Sales", "#,##0.00"))
            .unwrap();
        assert_eq!(range.to_string(), "A1:B3");

        assert_eq!(ws.read_cell(1, 2).unwrap(), Some(&CellValue::Text("Sales".into())));
        assert_eq!(ws.read_cell(2, 2).unwrap(), Some(&CellValue::Float(1250.5)));
        assert_eq!(ws.read_cell(3, 2).unwrap(), None);
        assert_eq!(
            ws.cell_style(2, 2).unwrap().number_format.as_deref(),
            Some("#,##0.00")
        );
        assert_eq!(ws.cell_style(2, 1).unwrap().number_format, None);
    }

    #[test]
    fn test_header_style_defaults() {
        let mut ws = sheet();
        ws.write_dataframe(&sales(), &DataFrameOptions::new()).unwrap();
        let header = ws.cell_style(1, 1).unwrap();
        assert!(header.font.bold);
        assert_eq!(header.fill, Some(RgbColor::new(0xD9, 0xD9, 0xD9)));
        assert_eq!(header.font.name.as_deref(), Some("Arial"));
        let data = ws.cell_style(2, 1).unwrap();
        assert!(!data.font.bold);
        assert_eq!(data.fill, None);
    }

    #[test]
    fn test_header_falls_back_to_data_font() {
        let mut ws = sheet();
        let options = DataFrameOptions::new()
            .data_style(CellFormatOptions::new().font_name("Georgia").font_size(12.0))
            .header_style(HeaderStyle {
                bold: Some(false),
                fill_color: Some(RgbColor::WHITE),
                ..HeaderStyle::default()
            });
        ws.write_dataframe(&sales(), &options).unwrap();
        let header = ws.cell_style(1, 2).unwrap();
        assert_eq!(header.font.name.as_deref(), Some("Georgia"));
        assert_eq!(header.font.size, Some(12.0));
        assert!(!header.font.bold);
        assert_eq!(header.fill, Some(RgbColor::WHITE));
    }

    #[test]
    fn test_index_column_naming() {
        let mut ws = sheet();
        ws.write_dataframe(&sales(), &DataFrameOptions::new().include_index(true))
            .unwrap();
        assert_eq!(ws.read_cell(1, 1).unwrap(), Some(&CellValue::Text("index".into())));
        assert_eq!(ws.read_cell(2, 1).unwrap(), Some(&CellValue::Int(0)));
        assert_eq!(ws.read_cell(3, 1).unwrap(), Some(&CellValue::Int(1)));

        let named = sales().with_index(RowIndex::named("Id", [10, 20]));
        let mut ws = sheet();
        ws.write_dataframe(&named, &DataFrameOptions::new().include_index(true))
            .unwrap();
        assert_eq!(ws.read_cell(1, 1).unwrap(), Some(&CellValue::Text("Id".into())));

        let mut ws = sheet();
        let options = DataFrameOptions::new()
            .include_index(true)
            .index_label("Row")
            .number_format("Row", "0");
        ws.write_dataframe(&named, &options).unwrap();
        assert_eq!(ws.read_cell(1, 1).unwrap(), Some(&CellValue::Text("Row".into())));
        assert_eq!(ws.cell_style(2, 1).unwrap().number_format.as_deref(), Some("0"));
    }

    #[test]
    fn test_without_header_and_offset() {
        let mut ws = sheet();
        let range = ws
            .write_dataframe(&sales(), &DataFrameOptions::new().header(false).start(5, 3))
            .unwrap();
        assert_eq!(range.to_string(), "C5:D6");
        assert_eq!(ws.read_cell(5, 3).unwrap(), Some(&CellValue::Text("North".into())));
    }

    #[test]
    fn test_auto_column_widths() {
        let mut ws = sheet();
        ws.write_dataframe(&sales(), &DataFrameOptions::new().auto_column_widths())
            .unwrap();
        // "Region" and "North"/"South" -> 6 chars
        assert_eq!(ws.column_width(1), Some((6 + 2) as f64 * 1.2));
        // "1250.5" -> 6 chars
        assert_eq!(ws.column_width(2), Some((6 + 2) as f64 * 1.2));
    }

    #[test]
    fn test_explicit_widths_and_heights() {
        let mut ws = sheet();
        let options = DataFrameOptions::new()
            .column_width("B", 20.0)
            .column_width(1u32, 8.0)
            .row_height(1, 24.0)
            .row_height(3, 18.0)
            .row_height(9, 50.0);
        ws.write_dataframe(&sales(), &options).unwrap();
        assert_eq!(ws.column_width(1), Some(8.0));
        assert_eq!(ws.column_width(2), Some(20.0));
        assert_eq!(ws.row_height(1), Some(24.0));
        assert_eq!(ws.row_height(3), Some(18.0));
        assert_eq!(ws.row_height(9), None);
    }

    #[test]
    fn test_invalid_input_leaves_sheet_untouched() {
        let mut ws = sheet();
        let ragged = TabularData::new(vec![Column::new("A", [1, 2]), Column::new("B", [1])]);
        assert!(matches!(
            ws.write_dataframe(&ragged, &DataFrameOptions::new()),
            Err(Error::InvalidInput(_))
        ));

        let bad_letters = DataFrameOptions::new().column_width("B2", 5.0);
        assert!(ws.write_dataframe(&sales(), &bad_letters).is_err());
        assert!(ws.cells().next().is_none());
    }
}
