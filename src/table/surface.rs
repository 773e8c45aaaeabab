//! The seam between the table renderer and a concrete document.
//!
//! A [`DocumentSurface`] creates a grid of cells at a region; the returned
//! [`TableGrid`] borrows the surface mutably while the renderer fills it.
//! Slides and worksheets both implement these traits.

use crate::common::{Font, Result, RgbColor};

/// Where on a surface a grid goes.
pub trait GridRegion {
    /// Reject regions the surface cannot place a grid at.
    fn validate(&self) -> Result<()>;
}

/// A rectangular grid of cells owned by a surface.
///
/// Row and column indices are zero-based and always inside the grid when
/// called by the renderer.
pub trait TableGrid {
    /// Opaque handle identifying the grid once the borrow ends.
    type Handle;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Replace the cell's content with a single run of `text`.
    fn set_text(&mut self, row: usize, col: usize, text: &str);

    /// Apply the set fields of `font` to every text run already in the cell.
    fn set_font(&mut self, row: usize, col: usize, font: &Font);

    /// Solid background fill.
    fn set_fill(&mut self, row: usize, col: usize, color: RgbColor);

    fn set_column_width(&mut self, col: usize, width: f64);

    fn set_row_height(&mut self, row: usize, height: f64);

    fn handle(&self) -> Self::Handle;
}

/// A document that can host table grids.
pub trait DocumentSurface {
    type Region: GridRegion;
    type Handle;
    type Grid<'a>: TableGrid<Handle = Self::Handle>
    where
        Self: 'a;

    /// Create an empty `rows` x `cols` grid at `region`.
    fn add_grid(&mut self, rows: usize, cols: usize, region: &Self::Region)
    -> Result<Self::Grid<'_>>;
}
