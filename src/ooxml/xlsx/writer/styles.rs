//! `styles.xml` generation.
//!
//! Fonts, fills, number formats and cell formats (XF records) are collected
//! while the worksheets are written, deduplicated, and indexed in the order
//! they were first seen.

use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

use crate::common::config::SheetDefaults;
use crate::common::xml::escape_xml;
use crate::common::{Result, RgbColor};
use crate::ooxml::xlsx::format::{Alignment, CellFont, CellStyle, builtin_format_id};

/// First id available to custom number formats.
const FIRST_CUSTOM_FORMAT_ID: u32 = 164;

/// Hashable identity of a font; the size is compared by its bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FontKey {
    name: String,
    size: u64,
    bold: bool,
    italic: bool,
    color: Option<RgbColor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Xf {
    font_id: usize,
    fill_id: usize,
    num_fmt_id: u32,
    alignment: Alignment,
}

#[derive(Debug)]
pub(crate) struct StylesBuilder {
    defaults: SheetDefaults,
    fonts: Vec<FontKey>,
    font_map: HashMap<FontKey, usize>,
    /// Solid fills; ids 0 and 1 are the reserved `none` and `gray125`
    fills: Vec<RgbColor>,
    fill_map: HashMap<RgbColor, usize>,
    number_formats: Vec<(u32, String)>,
    number_format_map: HashMap<String, u32>,
    cell_formats: Vec<Xf>,
    cell_format_map: HashMap<Xf, usize>,
}

impl StylesBuilder {
    /// Builder whose font 0 and style 0 are the sheet default font.
    pub fn new(defaults: &SheetDefaults) -> Self {
        let mut builder = Self {
            defaults: defaults.clone(),
            fonts: Vec::new(),
            font_map: HashMap::new(),
            fills: Vec::new(),
            fill_map: HashMap::new(),
            number_formats: Vec::new(),
            number_format_map: HashMap::new(),
            cell_formats: Vec::new(),
            cell_format_map: HashMap::new(),
        };
        let font_id = builder.add_font(&CellFont::default());
        builder.add_xf(Xf {
            font_id,
            fill_id: 0,
            num_fmt_id: 0,
            alignment: Alignment::default(),
        });
        builder
    }

    /// Style index (`s` attribute) of a cell style.
    pub fn add_style(&mut self, style: &CellStyle) -> usize {
        if style.is_default() {
            return 0;
        }
        let font_id = self.add_font(&style.font);
        let fill_id = style.fill.map_or(0, |color| self.add_fill(color));
        let num_fmt_id = style
            .number_format
            .as_deref()
            .map_or(0, |code| self.add_number_format(code));
        self.add_xf(Xf {
            font_id,
            fill_id,
            num_fmt_id,
            alignment: style.alignment,
        })
    }

    fn add_xf(&mut self, xf: Xf) -> usize {
        if let Some(&index) = self.cell_format_map.get(&xf) {
            return index;
        }
        let index = self.cell_formats.len();
        self.cell_formats.push(xf);
        self.cell_format_map.insert(xf, index);
        index
    }

    fn add_font(&mut self, font: &CellFont) -> usize {
        let key = FontKey {
            name: font.name.clone().unwrap_or_else(|| self.defaults.font_name.clone()),
            size: font.size.unwrap_or(self.defaults.font_size).to_bits(),
            bold: font.bold,
            italic: font.italic,
            color: font.color,
        };
        if let Some(&index) = self.font_map.get(&key) {
            return index;
        }
        let index = self.fonts.len();
        self.fonts.push(key.clone());
        self.font_map.insert(key, index);
        index
    }

    fn add_fill(&mut self, color: RgbColor) -> usize {
        if let Some(&index) = self.fill_map.get(&color) {
            return index;
        }
        let index = self.fills.len() + 2;
        self.fills.push(color);
        self.fill_map.insert(color, index);
        index
    }

    fn add_number_format(&mut self, code: &str) -> u32 {
        if let Some(id) = builtin_format_id(code) {
            return id;
        }
        if let Some(&id) = self.number_format_map.get(code) {
            return id;
        }
        let id = FIRST_CUSTOM_FORMAT_ID + self.number_formats.len() as u32;
        self.number_formats.push((id, code.to_string()));
        self.number_format_map.insert(code.to_string(), id);
        id
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#);

        if !self.number_formats.is_empty() {
            write!(xml, r#"<numFmts count="{}">"#, self.number_formats.len())?;
            for (id, code) in &self.number_formats {
                write!(xml, r#"<numFmt numFmtId="{}" formatCode="{}"/>"#, id, escape_xml(code))?;
            }
            xml.push_str("</numFmts>");
        }

        write!(xml, r#"<fonts count="{}">"#, self.fonts.len())?;
        for font in &self.fonts {
            xml.push_str("<font>");
            if font.bold {
                xml.push_str("<b/>");
            }
            if font.italic {
                xml.push_str("<i/>");
            }
            let size = f64::from_bits(font.size);
            write!(xml, r#"<sz val="{}"/>"#, size)?;
            if let Some(color) = font.color {
                write!(xml, r#"<color rgb="{}"/>"#, color.to_argb_hex())?;
            }
            write!(xml, r#"<name val="{}"/><family val="2"/></font>"#, escape_xml(&font.name))?;
        }
        xml.push_str("</fonts>");

        write!(xml, r#"<fills count="{}">"#, self.fills.len() + 2)?;
        xml.push_str(r#"<fill><patternFill patternType="none"/></fill>"#);
        xml.push_str(r#"<fill><patternFill patternType="gray125"/></fill>"#);
        for color in &self.fills {
            write!(
                xml,
                r#"<fill><patternFill patternType="solid"><fgColor rgb="{}"/><bgColor indexed="64"/></patternFill></fill>"#,
                color.to_argb_hex()
            )?;
        }
        xml.push_str("</fills>");

        xml.push_str(r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#);
        xml.push_str(r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#);

        write!(xml, r#"<cellXfs count="{}">"#, self.cell_formats.len())?;
        for xf in &self.cell_formats {
            write!(
                xml,
                r#"<xf numFmtId="{}" fontId="{}" fillId="{}" borderId="0" xfId="0""#,
                xf.num_fmt_id, xf.font_id, xf.fill_id
            )?;
            if xf.font_id != 0 {
                xml.push_str(r#" applyFont="1""#);
            }
            if xf.fill_id != 0 {
                xml.push_str(r#" applyFill="1""#);
            }
            if xf.num_fmt_id != 0 {
                xml.push_str(r#" applyNumberFormat="1""#);
            }
            if xf.alignment.is_default() {
                xml.push_str("/>");
                continue;
            }

            xml.push_str(r#" applyAlignment="1"><alignment"#);
            if let Some(h) = xf.alignment.horizontal {
                write!(xml, r#" horizontal="{}""#, h.as_str())?;
            }
            if let Some(v) = xf.alignment.vertical {
                write!(xml, r#" vertical="{}""#, v.as_str())?;
            }
            if let Some(wrap) = xf.alignment.wrap_text {
                write!(xml, r#" wrapText="{}""#, u8::from(wrap))?;
            }
            xml.push_str("/></xf>");
        }
        xml.push_str("</cellXfs>");

        xml.push_str(r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#);
        xml.push_str(r#"<dxfs count="0"/><tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>"#);
        xml.push_str("</styleSheet>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::xlsx::format::{CellFormatOptions, HorizontalAlignment};

    fn style(options: &CellFormatOptions) -> CellStyle {
        let mut style = CellStyle::default();
        style.merge(options, &SheetDefaults::default());
        style
    }

    #[test]
    fn test_default_style_is_index_zero() {
        let mut builder = StylesBuilder::new(&SheetDefaults::default());
        assert_eq!(builder.add_style(&CellStyle::default()), 0);
        // The sheet default font resolves to font 0 and style 0
        assert_eq!(builder.add_style(&style(&CellFormatOptions::new())), 0);

        let xml = builder.to_xml().unwrap();
        assert!(xml.contains(r#"<fonts count="1"><font><sz val="10"/><name val="Arial"/>"#));
        assert!(xml.contains(r#"<fills count="2">"#));
        assert!(!xml.contains("<numFmts"));
    }

    #[test]
    fn test_styles_are_deduplicated() {
        let mut builder = StylesBuilder::new(&SheetDefaults::default());
        let header = style(&CellFormatOptions::new().bold(true).fill_color(RgbColor::new(0xD9, 0xD9, 0xD9)));
        let a = builder.add_style(&header);
        let b = builder.add_style(&header.clone());
        assert_eq!(a, 1);
        assert_eq!(a, b);

        let xml = builder.to_xml().unwrap();
        assert!(xml.contains(r#"<fgColor rgb="FFD9D9D9"/>"#));
        assert!(xml.contains(r#"<xf numFmtId="0" fontId="1" fillId="2" borderId="0" xfId="0" applyFont="1" applyFill="1"/>"#));
    }

    #[test]
    fn test_number_formats() {
        let mut builder = StylesBuilder::new(&SheetDefaults::default());
        builder.add_style(&style(&CellFormatOptions::new().number_format("#,##0.00")));
        builder.add_style(&style(&CellFormatOptions::new().number_format("$#,##0.00")));
        builder.add_style(&style(&CellFormatOptions::new().number_format("yyyy-mm-dd")));

        let xml = builder.to_xml().unwrap();
        assert!(xml.contains(r#"<numFmts count="2">"#));
        assert!(xml.contains(r#"<numFmt numFmtId="164" formatCode="$#,##0.00"/>"#));
        assert!(xml.contains(r#"<numFmt numFmtId="165" formatCode="yyyy-mm-dd"/>"#));
        assert!(xml.contains(r#"<xf numFmtId="4" fontId="0""#));
    }

    #[test]
    fn test_alignment() {
        let mut builder = StylesBuilder::new(&SheetDefaults::default());
        let s = builder.add_style(&style(
            &CellFormatOptions::new()
                .align_horizontal(HorizontalAlignment::Center)
                .wrap_text(true),
        ));
        assert_eq!(s, 1);
        let xml = builder.to_xml().unwrap();
        assert!(xml.contains(r#"applyAlignment="1"><alignment horizontal="center" wrapText="1"/></xf>"#));
    }
}
