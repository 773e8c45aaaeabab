//! Tables on slides (`<a:tbl>` inside a graphic frame).

use crate::common::{Font, Length, RgbColor};
use crate::ooxml::pptx::shape::{Frame, ShapeId};
use crate::ooxml::pptx::text::TextFrame;
use crate::table::TableGrid;

/// Default style of new PowerPoint tables, "Medium Style 2 - Accent 1".
pub const DEFAULT_TABLE_STYLE_ID: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub text: TextFrame,
    pub fill: Option<RgbColor>,
}

impl TableCell {
    pub fn text(&self) -> String {
        self.text.text()
    }
}

/// A grid of cells with explicit column widths and row heights.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    cells: Vec<Vec<TableCell>>,
    col_widths: Vec<Length>,
    row_heights: Vec<Length>,
    /// Style the first row as a header
    pub first_row: bool,
    /// Alternate row shading
    pub band_rows: bool,
}

impl Table {
    /// An empty `rows` x `cols` table whose columns and rows share `frame`
    /// evenly.
    pub fn new(rows: usize, cols: usize, frame: &Frame) -> Self {
        Self {
            cells: vec![vec![TableCell::default(); cols]; rows],
            col_widths: frame.width.split_even(cols),
            row_heights: frame.height.split_even(rows),
            first_row: true,
            band_rows: true,
        }
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.cells.get_mut(row).and_then(|r| r.get_mut(col))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TableCell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Text of every cell, row by row.
    pub fn text_grid(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(TableCell::text).collect())
            .collect()
    }

    pub fn column_widths(&self) -> &[Length] {
        &self.col_widths
    }

    pub fn row_heights(&self) -> &[Length] {
        &self.row_heights
    }

    pub fn set_column_width(&mut self, col: usize, width: Length) {
        if let Some(w) = self.col_widths.get_mut(col) {
            *w = width;
        }
    }

    pub fn set_row_height(&mut self, row: usize, height: Length) {
        if let Some(h) = self.row_heights.get_mut(row) {
            *h = height;
        }
    }

    /// Sum of the column widths, the graphic frame's width.
    pub fn total_width(&self) -> Length {
        Length::from_emus(self.col_widths.iter().map(Length::emus).sum())
    }

    pub fn total_height(&self) -> Length {
        Length::from_emus(self.row_heights.iter().map(Length::emus).sum())
    }
}

/// Mutable view of a table on a slide, handed to the table renderer.
///
/// Widths and heights arrive in inches.
pub struct SlideTable<'a> {
    pub(crate) id: ShapeId,
    pub(crate) table: &'a mut Table,
}

impl TableGrid for SlideTable<'_> {
    type Handle = ShapeId;

    fn rows(&self) -> usize {
        self.table.row_count()
    }

    fn cols(&self) -> usize {
        self.table.column_count()
    }

    fn set_text(&mut self, row: usize, col: usize, text: &str) {
        if let Some(cell) = self.table.cell_mut(row, col) {
            cell.text = TextFrame::from_text(text);
        }
    }

    fn set_font(&mut self, row: usize, col: usize, font: &Font) {
        if let Some(cell) = self.table.cell_mut(row, col) {
            cell.text.apply_font(font);
        }
    }

    fn set_fill(&mut self, row: usize, col: usize, color: RgbColor) {
        if let Some(cell) = self.table.cell_mut(row, col) {
            cell.fill = Some(color);
        }
    }

    fn set_column_width(&mut self, col: usize, width: f64) {
        self.table.set_column_width(col, Length::from_inches(width));
    }

    fn set_row_height(&mut self, row: usize, height: f64) {
        self.table.set_row_height(row, Length::from_inches(height));
    }

    fn handle(&self) -> ShapeId {
        self.id
    }
}
