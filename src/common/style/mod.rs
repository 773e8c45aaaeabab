//! Common style and formatting types.
//!
//! This module provides the style types used by both slides and worksheets.

// Submodule declarations
pub mod color;
pub mod font;
pub mod len;

// Re-exports
pub use color::RgbColor;
pub use font::Font;
pub use len::Length;
