//! Visual styling and options for a rendered table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::RgbColor;
use crate::common::config::DeckDefaults;
use crate::table::data::{ColumnDisplayMap, ColumnFormatMap};

/// Per-column widths or per-row heights, either positional or sparse.
///
/// Units belong to the surface: inches on a slide, character widths (columns)
/// and points (rows) on a worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimensions {
    List(Vec<f64>),
    Map(BTreeMap<usize, f64>),
}

impl Dimensions {
    /// `(index, size)` pairs in ascending index order.
    pub fn entries(&self) -> Vec<(usize, f64)> {
        match self {
            Dimensions::List(sizes) => sizes.iter().copied().enumerate().collect(),
            Dimensions::Map(sizes) => sizes.iter().map(|(&i, &s)| (i, s)).collect(),
        }
    }
}

impl From<Vec<f64>> for Dimensions {
    fn from(sizes: Vec<f64>) -> Self {
        Dimensions::List(sizes)
    }
}

impl From<BTreeMap<usize, f64>> for Dimensions {
    fn from(sizes: BTreeMap<usize, f64>) -> Self {
        Dimensions::Map(sizes)
    }
}

/// Fonts, colors and dimensions applied after the cells are filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub font_name: Option<String>,
    /// Font size in points for every cell
    pub font_size: Option<f64>,
    pub header_bold: bool,
    pub header_font_color: Option<RgbColor>,
    pub header_fill_color: Option<RgbColor>,
    pub column_widths: Option<Dimensions>,
    pub row_heights: Option<Dimensions>,
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            font_name: None,
            font_size: None,
            header_bold: true,
            header_font_color: None,
            header_fill_color: None,
            column_widths: None,
            row_heights: None,
        }
    }
}

impl StyleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_name(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn header_bold(mut self, bold: bool) -> Self {
        self.header_bold = bold;
        self
    }

    pub fn header_font_color(mut self, color: RgbColor) -> Self {
        self.header_font_color = Some(color);
        self
    }

    pub fn header_fill_color(mut self, color: RgbColor) -> Self {
        self.header_fill_color = Some(color);
        self
    }

    pub fn column_widths(mut self, widths: impl Into<Dimensions>) -> Self {
        self.column_widths = Some(widths.into());
        self
    }

    pub fn row_heights(mut self, heights: impl Into<Dimensions>) -> Self {
        self.row_heights = Some(heights.into());
        self
    }
}

/// Everything `render` needs besides the data and the region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions {
    pub display_names: ColumnDisplayMap,
    pub number_formats: ColumnFormatMap,
    pub include_index: bool,
    pub index_label: Option<String>,
    /// `None` renders with `StyleSpec::default()`, i.e. a bold header row
    pub style: Option<StyleSpec>,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options seeded from deck-level defaults.
    pub fn from_defaults(defaults: &DeckDefaults) -> Self {
        Self {
            include_index: defaults.table_include_index,
            style: Some(StyleSpec::new().header_bold(defaults.table_header_bold)),
            ..Self::default()
        }
    }

    pub fn display_name(mut self, column: impl Into<String>, header: impl Into<String>) -> Self {
        self.display_names.insert(column.into(), header.into());
        self
    }

    pub fn number_format(mut self, column: impl Into<String>, spec: impl Into<String>) -> Self {
        self.number_formats.insert(column.into(), spec.into());
        self
    }

    pub fn include_index(mut self, include: bool) -> Self {
        self.include_index = include;
        self
    }

    pub fn index_label(mut self, label: impl Into<String>) -> Self {
        self.index_label = Some(label.into());
        self
    }

    pub fn style(mut self, style: StyleSpec) -> Self {
        self.style = Some(style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_bolds_header() {
        let style = StyleSpec::default();
        assert!(style.header_bold);
        assert!(style.header_fill_color.is_none());
    }

    #[test]
    fn test_dimension_entries() {
        let list = Dimensions::from(vec![1.5, 2.0]);
        assert_eq!(list.entries(), vec![(0, 1.5), (1, 2.0)]);

        let map = Dimensions::from(BTreeMap::from([(4, 0.5), (1, 3.0)]));
        assert_eq!(map.entries(), vec![(1, 3.0), (4, 0.5)]);
    }

    #[test]
    fn test_options_from_defaults() {
        let defaults = DeckDefaults {
            table_include_index: true,
            table_header_bold: false,
            ..DeckDefaults::default()
        };
        let options = TableOptions::from_defaults(&defaults);
        assert!(options.include_index);
        assert_eq!(options.style.map(|s| s.header_bold), Some(false));
    }
}
