//! Excel (.xlsx) workbook writing.
//!
//! A [`Workbook`] holds worksheets of typed, styled cells. Data can be
//! written cell by cell, as a typed block with [`Worksheet::write_dataframe`],
//! or as a display-formatted table with [`Worksheet::render_table`].
//!
//! # Example
//!
//! ```rust,no_run
//! use deckbook::ooxml::xlsx::{DataFrameOptions, Workbook};
//! use deckbook::table::{Column, TabularData};
//!
//! let data = TabularData::new(vec![
//!     Column::new("Region", ["North", "South"]),
//!     Column::new("Revenue", [1250.5, 980.0]),
//! ]);
//!
//! let mut wb = Workbook::new();
//! let ws = wb.add_worksheet(Some("Revenue"))?;
//! ws.write_dataframe(
//!     &data,
//!     &DataFrameOptions::new()
//!         .number_format("Revenue", "#,##0.00")
//!         .auto_column_widths(),
//! )?;
//! wb.save(Some("revenue.xlsx"))?;
//! # Ok::<(), deckbook::Error>(())
//! ```

pub mod cell;
pub mod dataframe;
pub mod format;
pub mod workbook;
pub mod worksheet;
mod writer;

pub use cell::{CellAnchor, CellRange, CellValue, MAX_COLS, MAX_ROWS, column_to_letters, letters_to_column};
pub use dataframe::{ColumnKey, ColumnWidths, DataFrameOptions, HeaderStyle};
pub use format::{Alignment, CellFont, CellFormatOptions, CellStyle, HorizontalAlignment, VerticalAlignment};
pub use workbook::{SheetRef, Workbook};
pub use worksheet::{Cell, SheetGrid, Worksheet};
