//! Unified error types for deckbook.
//!
//! This module provides the single error type shared by the table renderer,
//! the presentation model and the workbook model.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
