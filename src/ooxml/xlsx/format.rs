//! Cell styles and the options used to change them.

use crate::common::config::SheetDefaults;
use crate::common::{Font, RgbColor};

/// Resolved font of a styled cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellFont {
    pub name: Option<String>,
    pub size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<RgbColor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterContinuous,
    Distributed,
}

impl HorizontalAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Fill => "fill",
            Self::Justify => "justify",
            Self::CenterContinuous => "centerContinuous",
            Self::Distributed => "distributed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    Justify,
    Distributed,
}

impl VerticalAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
            Self::Justify => "justify",
            Self::Distributed => "distributed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: Option<HorizontalAlignment>,
    pub vertical: Option<VerticalAlignment>,
    pub wrap_text: Option<bool>,
}

impl Alignment {
    pub fn is_default(&self) -> bool {
        *self == Alignment::default()
    }
}

/// Everything that decides how a cell is drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStyle {
    pub font: CellFont,
    pub fill: Option<RgbColor>,
    pub number_format: Option<String>,
    pub alignment: Alignment,
}

impl CellStyle {
    /// Merge `options` into this style.
    ///
    /// Font name and size fall back to the existing value, then to the sheet
    /// default. Bold and italic can be turned on but never off. Fill and
    /// number format change only when given, and alignment merges field by
    /// field.
    pub fn merge(&mut self, options: &CellFormatOptions, defaults: &SheetDefaults) {
        self.font.name = Some(
            options
                .font_name
                .clone()
                .or_else(|| self.font.name.take())
                .unwrap_or_else(|| defaults.font_name.clone()),
        );
        self.font.size = Some(
            options
                .font_size
                .or(self.font.size)
                .unwrap_or(defaults.font_size),
        );
        self.font.bold |= options.bold;
        self.font.italic |= options.italic;
        if let Some(color) = options.font_color {
            self.font.color = Some(color);
        }

        if let Some(fill) = options.fill_color {
            self.fill = Some(fill);
        }
        if let Some(code) = &options.number_format {
            self.number_format = Some(code.clone());
        }

        if let Some(h) = options.align_horizontal {
            self.alignment.horizontal = Some(h);
        }
        if let Some(v) = options.align_vertical {
            self.alignment.vertical = Some(v);
        }
        if let Some(wrap) = options.wrap_text {
            self.alignment.wrap_text = Some(wrap);
        }
    }

    /// Apply the set fields of a renderer font directly.
    pub(crate) fn apply_font(&mut self, font: &Font) {
        if let Some(name) = &font.name {
            self.font.name = Some(name.clone());
        }
        if let Some(size) = font.size {
            self.font.size = Some(size);
        }
        if let Some(bold) = font.bold {
            self.font.bold = bold;
        }
        if let Some(italic) = font.italic {
            self.font.italic = italic;
        }
        if let Some(color) = font.color {
            self.font.color = Some(color);
        }
    }

    pub fn is_default(&self) -> bool {
        *self == CellStyle::default()
    }
}

/// Styling requested for a cell write. Unset fields leave the cell's
/// current style alone.
///
/// ```
/// use deckbook::common::RgbColor;
/// use deckbook::ooxml::xlsx::{CellFormatOptions, HorizontalAlignment};
///
/// let options = CellFormatOptions::new()
///     .bold(true)
///     .fill_color(RgbColor::new(0xFF, 0xF2, 0xCC))
///     .number_format("#,##0.00")
///     .align_horizontal(HorizontalAlignment::Right);
/// assert!(options.bold);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellFormatOptions {
    pub font_name: Option<String>,
    pub font_size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    pub font_color: Option<RgbColor>,
    pub fill_color: Option<RgbColor>,
    /// Excel number format code, e.g. `#,##0.00` or `yyyy-mm-dd`
    pub number_format: Option<String>,
    pub align_horizontal: Option<HorizontalAlignment>,
    pub align_vertical: Option<VerticalAlignment>,
    pub wrap_text: Option<bool>,
}

impl CellFormatOptions {
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

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn font_color(mut self, color: RgbColor) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn fill_color(mut self, color: RgbColor) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn number_format(mut self, code: impl Into<String>) -> Self {
        self.number_format = Some(code.into());
        self
    }

    pub fn align_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.align_horizontal = Some(align);
        self
    }

    pub fn align_vertical(mut self, align: VerticalAlignment) -> Self {
        self.align_vertical = Some(align);
        self
    }

    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = Some(wrap);
        self
    }
}

/// Id of a built-in number format, so well-known codes are not written as
/// custom formats.
pub(crate) fn builtin_format_id(code: &str) -> Option<u32> {
    let id = match code {
        "General" => 0,
        "0" => 1,
        "0.00" => 2,
        "#,##0" => 3,
        "#,##0.00" => 4,
        "0%" => 9,
        "0.00%" => 10,
        "0.00E+00" => 11,
        "# ?/?" => 12,
        "# ??/??" => 13,
        "mm-dd-yy" => 14,
        "d-mmm-yy" => 15,
        "d-mmm" => 16,
        "mmm-yy" => 17,
        "h:mm AM/PM" => 18,
        "h:mm:ss AM/PM" => 19,
        "h:mm" => 20,
        "h:mm:ss" => 21,
        "m/d/yy h:mm" => 22,
        "#,##0 ;(#,##0)" => 37,
        "#,##0 ;[Red](#,##0)" => 38,
        "#,##0.00;(#,##0.00)" => 39,
        "#,##0.00;[Red](#,##0.00)" => 40,
        "mm:ss" => 45,
        "[h]:mm:ss" => 46,
        "mmss.0" => 47,
        "##0.0E+0" => 48,
        "@" => 49,
        _ => return None,
    };
    Some(id)
}
