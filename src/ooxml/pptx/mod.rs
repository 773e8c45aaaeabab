//! PowerPoint (.pptx) presentation writing.
//!
//! A [`Presentation`] starts from the default master with its eleven
//! standard layouts. Slides are added from a layout, filled with text,
//! shapes, charts and tables, and the whole deck is saved as a `.pptx`
//! package.
//!
//! # Example
//!
//! ```rust,no_run
//! use deckbook::ooxml::pptx::{Frame, Presentation};
//! use deckbook::table::{Column, TableOptions, TabularData};
//!
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide("Title Only")?;
//! slide.set_title("Revenue")?;
//!
//! let data = TabularData::new(vec![
//!     Column::new("Region", ["North", "South"]),
//!     Column::new("Revenue", [1250.5, 980.0]),
//! ]);
//! slide.add_table_from_data(&data, Frame::from_inches(1.0, 1.5, 8.0, 2.0), &TableOptions::default())?;
//!
//! pres.save("revenue.pptx")?;
//! # Ok::<(), deckbook::Error>(())
//! ```

pub mod chart;
pub mod layout;
pub mod placeholder;
pub mod presentation;
pub mod shape;
pub mod slide;
pub mod table;
pub mod text;
mod writer;

pub use chart::{Chart, ChartData, ChartType, Series};
pub use layout::{LayoutPlaceholder, SlideLayout};
pub use placeholder::PlaceholderType;
pub use presentation::Presentation;
pub use shape::{AutoShapeType, Frame, LineFormat, Shape, ShapeId, ShapeKind, ShapeRef};
pub use slide::Slide;
pub use table::{SlideTable, Table, TableCell};
pub use text::{Field, Paragraph, Run, TextFrame};
