//! Table rendering: tabular data to a grid of formatted cells.
//!
//! The renderer is surface-agnostic. A slide (`ooxml::pptx::Slide`) and a
//! worksheet (`ooxml::xlsx::Worksheet`) both implement [`DocumentSurface`],
//! so the same data and options produce the same cell text on either.
//!
//! ```
//! use deckbook::table::{render, Column, TabularData, TableOptions};
//! # use deckbook::table::{DocumentSurface, GridRegion, TableGrid};
//! # use deckbook::common::{Font, Result, RgbColor};
//! # struct Region;
//! # impl GridRegion for Region { fn validate(&self) -> Result<()> { Ok(()) } }
//! # #[derive(Default)] struct Texts(Vec<Vec<String>>);
//! # struct Grid<'a>(&'a mut Texts);
//! # impl TableGrid for Grid<'_> {
//! #     type Handle = ();
//! #     fn rows(&self) -> usize { self.0.0.len() }
//! #     fn cols(&self) -> usize { self.0.0[0].len() }
//! #     fn set_text(&mut self, r: usize, c: usize, t: &str) { self.0.0[r][c] = t.to_string(); }
//! #     fn set_font(&mut self, _: usize, _: usize, _: &Font) {}
//! #     fn set_fill(&mut self, _: usize, _: usize, _: RgbColor) {}
//! #     fn set_column_width(&mut self, _: usize, _: f64) {}
//! #     fn set_row_height(&mut self, _: usize, _: f64) {}
//! #     fn handle(&self) {}
//! # }
//! # impl DocumentSurface for Texts {
//! #     type Region = Region;
//! #     type Handle = ();
//! #     type Grid<'a> = Grid<'a>;
//! #     fn add_grid(&mut self, rows: usize, cols: usize, _: &Region) -> Result<Grid<'_>> {
//! #         self.0 = vec![vec![String::new(); cols]; rows];
//! #         Ok(Grid(self))
//! #     }
//! # }
//! let data = TabularData::new(vec![
//!     Column::new("Quantity", [120, 250]),
//!     Column::new("UnitPrice", [0.99, 0.59]),
//! ]);
//! let options = TableOptions::new()
//!     .display_name("UnitPrice", "Price")
//!     .number_format("UnitPrice", "$.2f");
//!
//! let mut surface = Texts::default();
//! let table = render(&mut surface, &data, &Region, &options)?;
//! assert_eq!((table.rows, table.cols), (3, 2));
//! assert_eq!(surface.0[0], ["Quantity", "Price"]);
//! assert_eq!(surface.0[1], ["120", "$0.99"]);
//! # Ok::<(), deckbook::Error>(())
//! ```

pub mod data;
pub mod format;
pub mod render;
pub mod style;
pub mod surface;

pub use data::{Column, ColumnDisplayMap, ColumnFormatMap, RowIndex, TabularData, Value};
pub use format::{FormatError, Number, NumberFormat, format_number};
pub use render::{DEFAULT_INDEX_HEADER, RenderedTable, render};
pub use style::{Dimensions, StyleSpec, TableOptions};
pub use surface::{DocumentSurface, GridRegion, TableGrid};
