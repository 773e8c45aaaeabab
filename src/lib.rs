//! Deckbook - render tabular data into formatted tables on PowerPoint
//! slides and Excel worksheets
//!
//! # Features
//!
//! - **Table renderer**: one surface-agnostic algorithm that turns named
//!   columns into a header row plus formatted cells, with an optional index
//!   column, display names, number formats, and per-row/column styling
//! - **Number formatting**: Python-style format specifications (`$.2f`,
//!   `,.0f`, `.1%`) applied to numeric cells only
//! - **PowerPoint writer**: layouts, placeholders, text, shapes, charts and
//!   tables, saved as `.pptx`
//! - **Excel writer**: typed and styled cells, merges, data frame blocks,
//!   saved as `.xlsx`
//! - **Configuration**: YAML-loadable defaults for fonts, layouts and header
//!   styling
//!
//! # Example - A table on a slide
//!
//! ```no_run
//! use deckbook::ooxml::pptx::{Frame, Presentation};
//! use deckbook::table::{Column, TableOptions, TabularData};
//!
//! # fn main() -> deckbook::Result<()> {
//! let data = TabularData::new(vec![
//!     Column::new("Quantity", [120, 250]),
//!     Column::new("UnitPrice", [0.99, 0.59]),
//! ]);
//! let options = TableOptions::new()
//!     .display_name("UnitPrice", "Price")
//!     .number_format("UnitPrice", "$.2f");
//!
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide("Title Only")?;
//! slide.set_title("Order lines")?;
//! slide.add_table_from_data(&data, Frame::from_inches(1.0, 1.5, 8.0, 1.5), &options)?;
//! pres.save("orders.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - The same table on a worksheet
//!
//! ```no_run
//! use deckbook::ooxml::xlsx::{CellAnchor, Workbook};
//! use deckbook::table::{Column, TableOptions, TabularData};
//!
//! # fn main() -> deckbook::Result<()> {
//! let data = TabularData::new(vec![
//!     Column::new("Quantity", [120, 250]),
//!     Column::new("UnitPrice", [0.99, 0.59]),
//! ]);
//! let options = TableOptions::new().number_format("UnitPrice", "$.2f");
//!
//! let mut wb = Workbook::new();
//! let range = wb
//!     .add_worksheet(Some("Orders"))?
//!     .render_table(&data, CellAnchor::new(2, 2), &options)?;
//! assert_eq!(range.handle.to_string(), "B2:C4");
//! wb.save(Some("orders.xlsx"))?;
//! # Ok(())
//! # }
//! ```

/// Shared types: errors, configuration, colors, fonts and lengths
pub mod common;

/// Office Open XML packages and the PowerPoint and Excel writers
pub mod ooxml;

/// Surface-agnostic table rendering and number formatting
pub mod table;

pub use common::{Config, Error, Result};
