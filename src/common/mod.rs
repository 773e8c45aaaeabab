//! Types shared by the table renderer and both document formats.

pub mod config;
pub mod error;
pub mod shapes;
pub mod style;
pub mod unit;
pub mod xml;

pub use config::{Config, DeckDefaults, LayoutRef, SheetDefaults, TextDefaults};
pub use error::{Error, Result};
pub use shapes::PlaceholderKind;
pub use style::{Font, Length, RgbColor};
