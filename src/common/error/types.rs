//! Unified error type for deckbook.
//!
//! Every fallible public operation returns [`Result`]. Cell-level number
//! formatting failures never surface here: the table renderer falls back to
//! plain text instead.
use std::path::PathBuf;

use thiserror::Error;

use crate::common::PlaceholderKind;

/// Main error type for deckbook operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller supplied data that violates an input invariant
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No slide layout carries the requested name
    #[error("Layout with name '{name}' not found. Available layout names are: {available:?}")]
    LayoutNotFound { name: String, available: Vec<String> },

    /// Slide layout index outside the master's layout list
    #[error("Layout index {index} is out of range. Available layouts: {count}")]
    LayoutIndexOutOfRange { index: usize, count: usize },

    /// Slide index outside the presentation
    #[error("Slide index {index} is out of range. Presentation has {count} slides")]
    SlideIndexOutOfRange { index: usize, count: usize },

    /// The slide has no placeholder of the requested kind
    #[error("This slide does not have a {0} placeholder")]
    PlaceholderNotFound(PlaceholderKind),

    /// Shape lookup by index, name or id failed
    #[error("Shape not found: {0}")]
    ShapeNotFound(String),

    /// Chart categories and series do not line up
    #[error("Invalid chart data: {0}")]
    InvalidChartData(String),

    /// No worksheet with the given title
    #[error("Worksheet '{0}' not found")]
    WorksheetNotFound(String),

    /// Worksheet index outside the workbook
    #[error("Worksheet index {index} is out of range. Workbook has {count} worksheets")]
    WorksheetIndexOutOfRange { index: usize, count: usize },

    /// Title rejected by the spreadsheet naming rules
    #[error("Invalid sheet name '{0}'")]
    InvalidSheetName(String),

    /// Row or column outside the 1-based worksheet grid
    #[error("Invalid cell reference: row {row}, column {col}")]
    InvalidCellReference { row: u32, col: u32 },

    /// Attempt to unmerge a range that was never merged
    #[error("Range {0} is not merged")]
    RangeNotMerged(String),

    /// Configuration could not be loaded or serialized
    #[error("Configuration error: {0}")]
    Config(String),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// Saving a document to disk failed
    #[error("Error saving '{}': {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

/// Result type for deckbook operations.
pub type Result<T> = std::result::Result<T, Error>;
