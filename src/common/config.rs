//! Document defaults loaded from YAML.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```yaml
//! deck:
//!   layout: "Title and Content"
//!   title:
//!     font_name: Georgia
//!     font_size: 36
//! sheet:
//!   header_fill: BDD7EE
//! ```
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result, RgbColor};

/// Reference to a slide layout, either by position in the master's layout
/// list or by layout name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutRef {
    Index(usize),
    Name(String),
}

impl From<usize> for LayoutRef {
    fn from(index: usize) -> Self {
        LayoutRef::Index(index)
    }
}

impl From<&str> for LayoutRef {
    fn from(name: &str) -> Self {
        LayoutRef::Name(name.to_string())
    }
}

impl From<String> for LayoutRef {
    fn from(name: String) -> Self {
        LayoutRef::Name(name)
    }
}

/// Font applied to the runs of a placeholder after its text is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDefaults {
    pub font_name: String,
    pub font_size: f64,
}

impl TextDefaults {
    fn arial(size: f64) -> Self {
        Self {
            font_name: "Arial".to_string(),
            font_size: size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckDefaults {
    /// Layout used by `Presentation::add_default_slide`
    pub layout: LayoutRef,
    pub table_header_bold: bool,
    pub table_include_index: bool,
    pub title: TextDefaults,
    pub subtitle: TextDefaults,
    pub footer: TextDefaults,
}

impl Default for DeckDefaults {
    fn default() -> Self {
        Self {
            // "Title Only" in the standard layout set
            layout: LayoutRef::Index(5),
            table_header_bold: true,
            table_include_index: false,
            title: TextDefaults::arial(32.0),
            subtitle: TextDefaults::arial(18.0),
            footer: TextDefaults::arial(12.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetDefaults {
    pub font_name: String,
    pub font_size: f64,
    pub header_bold: bool,
    pub header_fill: RgbColor,
    /// File name used when a workbook is saved without an explicit path
    pub default_filename: String,
}

impl Default for SheetDefaults {
    fn default() -> Self {
        Self {
            font_name: "Arial".to_string(),
            font_size: 10.0,
            header_bold: true,
            header_fill: RgbColor::new(0xD9, 0xD9, 0xD9),
            default_filename: "new_workbook.xlsx".to_string(),
        }
    }
}

/// Top-level configuration for presentations and workbooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub deck: DeckDefaults,
    pub sheet: SheetDefaults,
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse YAML config: {}", e)))
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
