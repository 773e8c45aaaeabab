//! Worksheets: typed cells with styles, merged ranges and dimensions.

use std::collections::BTreeMap;

use crate::common::config::SheetDefaults;
use crate::common::{Error, Font, Result, RgbColor};
use crate::ooxml::xlsx::cell::{CellAnchor, CellRange, CellValue, check_cell, letters_to_column};
use crate::ooxml::xlsx::format::{CellFormatOptions, CellStyle};
use crate::table::{DocumentSurface, GridRegion, RenderedTable, TableGrid, TableOptions, TabularData, render};

/// A cell's value and style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

/// One sheet of a workbook. Rows and columns are 1-based.
#[derive(Debug, Clone)]
pub struct Worksheet {
    title: String,
    /// Keyed by (row, col) so iteration is in row-major order
    cells: BTreeMap<(u32, u32), Cell>,
    merged: Vec<CellRange>,
    column_widths: BTreeMap<u32, f64>,
    row_heights: BTreeMap<u32, f64>,
    pub(crate) defaults: SheetDefaults,
}

impl Worksheet {
    pub(crate) fn new(title: String, defaults: SheetDefaults) -> Self {
        Self {
            title,
            cells: BTreeMap::new(),
            merged: Vec::new(),
            column_widths: BTreeMap::new(),
            row_heights: BTreeMap::new(),
            defaults,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Write a value and merge `options` into the cell's style.
    pub fn write_cell(
        &mut self,
        row: u32,
        col: u32,
        value: impl Into<CellValue>,
        options: &CellFormatOptions,
    ) -> Result<()> {
        check_cell(row, col)?;
        let cell = self.cells.entry((row, col)).or_default();
        cell.value = value.into();
        cell.style.merge(options, &self.defaults);
        Ok(())
    }

    /// Value of a cell; `None` when the cell is empty.
    pub fn read_cell(&self, row: u32, col: u32) -> Result<Option<&CellValue>> {
        check_cell(row, col)?;
        Ok(self
            .cells
            .get(&(row, col))
            .map(|c| &c.value)
            .filter(|v| !v.is_empty()))
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    pub fn cell_style(&self, row: u32, col: u32) -> Option<&CellStyle> {
        self.cells.get(&(row, col)).map(|c| &c.style)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((u32, u32), &Cell)> {
        self.cells.iter().map(|(&pos, cell)| (pos, cell))
    }

    pub(crate) fn cell_mut(&mut self, row: u32, col: u32) -> &mut Cell {
        self.cells.entry((row, col)).or_default()
    }

    /// Merge a block of cells. Values outside the top-left cell are
    /// discarded, as spreadsheet applications do.
    pub fn merge_cells(&mut self, start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Result<CellRange> {
        let range = CellRange::new(start_row, start_col, end_row, end_col)?;
        if let Some(existing) = self.merged.iter().find(|m| m.intersects(&range)) {
            return Err(Error::InvalidInput(format!(
                "range {} overlaps merged range {}",
                range, existing
            )));
        }

        for ((row, col), cell) in self.cells.iter_mut() {
            if range.contains(*row, *col) && (*row, *col) != (start_row, start_col) {
                cell.value = CellValue::Empty;
            }
        }
        self.merged.push(range);
        Ok(range)
    }

    pub fn unmerge_cells(&mut self, start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Result<()> {
        let range = CellRange::new(start_row, start_col, end_row, end_col)?;
        let position = self
            .merged
            .iter()
            .position(|m| *m == range)
            .ok_or_else(|| Error::RangeNotMerged(range.to_string()))?;
        self.merged.remove(position);
        Ok(())
    }

    pub fn merged_ranges(&self) -> &[CellRange] {
        &self.merged
    }

    /// Width of a 1-based column in character widths.
    pub fn set_column_width(&mut self, col: u32, width: f64) -> Result<()> {
        check_cell(1, col)?;
        check_dimension(width)?;
        self.column_widths.insert(col, width);
        Ok(())
    }

    /// Width of a column given by letters, e.g. `"B"`.
    pub fn set_column_width_by_letter(&mut self, letters: &str, width: f64) -> Result<()> {
        let col = letters_to_column(letters)
            .ok_or_else(|| Error::InvalidInput(format!("invalid column letters '{}'", letters)))?;
        self.set_column_width(col, width)
    }

    pub fn column_width(&self, col: u32) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    pub(crate) fn column_widths(&self) -> &BTreeMap<u32, f64> {
        &self.column_widths
    }

    /// Height of a 1-based row in points.
    pub fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        check_cell(row, 1)?;
        check_dimension(height)?;
        self.row_heights.insert(row, height);
        Ok(())
    }

    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights.get(&row).copied()
    }

    pub(crate) fn row_heights(&self) -> &BTreeMap<u32, f64> {
        &self.row_heights
    }

    /// Smallest range covering every stored cell.
    pub fn used_range(&self) -> Option<CellRange> {
        let (&(first_row, _), _) = self.cells.first_key_value()?;
        let (&(last_row, _), _) = self.cells.last_key_value()?;
        let first_col = self.cells.keys().map(|&(_, c)| c).min()?;
        let last_col = self.cells.keys().map(|&(_, c)| c).max()?;
        Some(CellRange {
            first_row,
            first_col,
            last_row,
            last_col,
        })
    }

    /// Render `data` as a grid of display text with its top-left cell at
    /// `anchor`.
    pub fn render_table(
        &mut self,
        data: &TabularData,
        anchor: CellAnchor,
        options: &TableOptions,
    ) -> Result<RenderedTable<CellRange>> {
        render(self, data, &anchor, options)
    }
}

fn check_dimension(value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("invalid dimension {}", value)))
    }
}

/// A rendered table's block of cells, borrowed from its worksheet.
pub struct SheetGrid<'a> {
    sheet: &'a mut Worksheet,
    range: CellRange,
}

impl SheetGrid<'_> {
    fn position(&self, row: usize, col: usize) -> (u32, u32) {
        (
            self.range.first_row + row as u32,
            self.range.first_col + col as u32,
        )
    }
}

impl TableGrid for SheetGrid<'_> {
    type Handle = CellRange;

    fn rows(&self) -> usize {
        self.range.rows() as usize
    }

    fn cols(&self) -> usize {
        self.range.cols() as usize
    }

    fn set_text(&mut self, row: usize, col: usize, text: &str) {
        let (row, col) = self.position(row, col);
        let defaults = self.sheet.defaults.clone();
        let cell = self.sheet.cell_mut(row, col);
        cell.value = if text.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(text.to_string())
        };
        cell.style.merge(&CellFormatOptions::default(), &defaults);
    }

    fn set_font(&mut self, row: usize, col: usize, font: &Font) {
        let (row, col) = self.position(row, col);
        self.sheet.cell_mut(row, col).style.apply_font(font);
    }

    fn set_fill(&mut self, row: usize, col: usize, color: RgbColor) {
        let (row, col) = self.position(row, col);
        self.sheet.cell_mut(row, col).style.fill = Some(color);
    }

    /// Width in character widths.
    fn set_column_width(&mut self, col: usize, width: f64) {
        let (_, col) = self.position(0, col);
        if check_dimension(width).is_ok() {
            self.sheet.column_widths.insert(col, width);
        }
    }

    /// Height in points.
    fn set_row_height(&mut self, row: usize, height: f64) {
        let (row, _) = self.position(row, 0);
        if check_dimension(height).is_ok() {
            self.sheet.row_heights.insert(row, height);
        }
    }

    fn handle(&self) -> CellRange {
        self.range
    }
}

impl DocumentSurface for Worksheet {
    type Region = CellAnchor;
    type Handle = CellRange;
    type Grid<'a> = SheetGrid<'a>;

    fn add_grid(&mut self, rows: usize, cols: usize, region: &CellAnchor) -> Result<SheetGrid<'_>> {
        region.validate()?;
        let range = CellRange::from_anchor(*region, rows, cols)?;
        Ok(SheetGrid { sheet: self, range })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, RowIndex, StyleSpec};

    fn sheet() -> Worksheet {
        Worksheet::new("Sheet".to_string(), SheetDefaults::default())
    }

    #[test]
    fn test_write_and_read_cell() {
        let mut ws = sheet();
        ws.write_cell(1, 1, "Name", &CellFormatOptions::new().bold(true)).unwrap();
        ws.write_cell(2, 1, 42, &CellFormatOptions::new()).unwrap();

        assert_eq!(ws.read_cell(1, 1).unwrap(), Some(&CellValue::Text("Name".into())));
        assert_eq!(ws.read_cell(2, 1).unwrap(), Some(&CellValue::Int(42)));
        assert_eq!(ws.read_cell(3, 1).unwrap(), None);
        assert!(ws.cell_style(1, 1).unwrap().font.bold);
        assert!(matches!(
            ws.write_cell(0, 1, 1, &CellFormatOptions::new()),
            Err(Error::InvalidCellReference { row: 0, col: 1 })
        ));
        assert!(ws.read_cell(1, 0).is_err());
    }

    #[test]
    fn test_rewrite_keeps_style() {
        let mut ws = sheet();
        ws.write_cell(1, 1, 1.5, &CellFormatOptions::new().number_format("0.00")).unwrap();
        ws.write_cell(1, 1, 2.5, &CellFormatOptions::new()).unwrap();
        let style = ws.cell_style(1, 1).unwrap();
        assert_eq!(style.number_format.as_deref(), Some("0.00"));
        assert_eq!(ws.read_cell(1, 1).unwrap(), Some(&CellValue::Float(2.5)));
    }

    #[test]
    fn test_merge_and_unmerge() {
        let mut ws = sheet();
        ws.write_cell(1, 1, "Title", &CellFormatOptions::new()).unwrap();
        ws.write_cell(1, 2, "lost", &CellFormatOptions::new()).unwrap();

        let range = ws.merge_cells(1, 1, 1, 3).unwrap();
        assert_eq!(range.to_string(), "A1:C1");
        assert_eq!(ws.read_cell(1, 2).unwrap(), None);
        assert_eq!(ws.read_cell(1, 1).unwrap(), Some(&CellValue::Text("Title".into())));

        assert!(matches!(ws.merge_cells(1, 2, 2, 2), Err(Error::InvalidInput(_))));
        assert!(matches!(
            ws.unmerge_cells(1, 1, 1, 2),
            Err(Error::RangeNotMerged(r)) if r == "A1:B1"
        ));
        ws.unmerge_cells(1, 1, 1, 3).unwrap();
        assert!(ws.merged_ranges().is_empty());
    }

    #[test]
    fn test_dimensions() {
        let mut ws = sheet();
        ws.set_column_width(2, 18.5).unwrap();
        ws.set_column_width_by_letter("d", 9.0).unwrap();
        ws.set_row_height(3, 30.0).unwrap();
        assert_eq!(ws.column_width(2), Some(18.5));
        assert_eq!(ws.column_width(4), Some(9.0));
        assert_eq!(ws.row_height(3), Some(30.0));
        assert!(ws.set_column_width_by_letter("1A", 9.0).is_err());
        assert!(ws.set_row_height(1, -2.0).is_err());
    }

    #[test]
    fn test_used_range() {
        let mut ws = sheet();
        assert_eq!(ws.used_range(), None);
        ws.write_cell(2, 3, 1, &CellFormatOptions::new()).unwrap();
        ws.write_cell(5, 2, 1, &CellFormatOptions::new()).unwrap();
        assert_eq!(ws.used_range().unwrap().to_string(), "B2:C5");
    }

    #[test]
    fn test_render_table_on_sheet() {
        let mut ws = sheet();
        let data = TabularData::new(vec![
            Column::new("Quantity", [120, 250]),
            Column::new("UnitPrice", [0.99, 0.59]),
        ])
        .with_index(RowIndex::named("Item", ["Widget", "Gadget"]));
        let options = TableOptions::new()
            .display_name("UnitPrice", "Price")
            .number_format("UnitPrice", "$.2f")
            .include_index(true)
            .style(
                StyleSpec::new()
                    .header_fill_color(RgbColor::new(0xBD, 0xD7, 0xEE))
                    .column_widths(vec![12.0, 10.0, 10.0, 99.0]),
            );

        let table = ws.render_table(&data, CellAnchor::new(2, 2), &options).unwrap();
        assert_eq!(table.handle.to_string(), "B2:D4");
        assert_eq!((table.rows, table.cols), (3, 3));

        let text = |r, c| ws.read_cell(r, c).unwrap().map(CellValue::display_text);
        assert_eq!(text(2, 2).as_deref(), Some("Item"));
        assert_eq!(text(2, 4).as_deref(), Some("Price"));
        assert_eq!(text(3, 2).as_deref(), Some("Widget"));
        assert_eq!(text(3, 4).as_deref(), Some("$0.99"));
        assert_eq!(text(4, 3).as_deref(), Some("250"));

        let header = ws.cell_style(2, 3).unwrap();
        assert!(header.font.bold);
        assert_eq!(header.fill, Some(RgbColor::new(0xBD, 0xD7, 0xEE)));
        assert!(!ws.cell_style(3, 3).unwrap().font.bold);

        assert_eq!(ws.column_width(2), Some(12.0));
        assert_eq!(ws.column_width(5), None);
    }

    #[test]
    fn test_render_table_rejects_off_sheet_anchor() {
        let mut ws = sheet();
        let data = TabularData::new(vec![Column::new("A", [1])]);
        let result = ws.render_table(&data, CellAnchor::new(0, 1), &TableOptions::new());
        assert!(matches!(result, Err(Error::InvalidCellReference { .. })));
        assert!(ws.cells().next().is_none());
    }
}
