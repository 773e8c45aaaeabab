//! Worksheet part (`xl/worksheets/sheetN.xml`) generation.

use std::collections::BTreeSet;
use std::fmt::Write as FmtWrite;

use crate::common::Result;
use crate::ooxml::xlsx::cell::{CellValue, cell_reference, column_to_letters};
use crate::ooxml::xlsx::worksheet::{Cell, Worksheet};
use crate::ooxml::xlsx::writer::strings::SharedStrings;
use crate::ooxml::xlsx::writer::styles::StylesBuilder;

/// Serialize `sheet`, registering its strings and styles with the
/// workbook-wide tables.
pub(crate) fn sheet_xml(
    sheet: &Worksheet,
    strings: &mut SharedStrings,
    styles: &mut StylesBuilder,
    active: bool,
) -> Result<String> {
    let mut xml = String::with_capacity(1024 + sheet.cells().count() * 32);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    match sheet.used_range() {
        Some(range) if range.rows() == 1 && range.cols() == 1 => {
            write!(xml, r#"<dimension ref="{}"/>"#, cell_reference(range.first_row, range.first_col))?;
        },
        Some(range) => write!(xml, r#"<dimension ref="{}"/>"#, range)?,
        None => xml.push_str(r#"<dimension ref="A1"/>"#),
    }

    xml.push_str(r#"<sheetViews><sheetView workbookViewId="0""#);
    if active {
        xml.push_str(r#" tabSelected="1""#);
    }
    xml.push_str("/></sheetViews>");
    xml.push_str(r#"<sheetFormatPr defaultRowHeight="15"/>"#);

    if !sheet.column_widths().is_empty() {
        xml.push_str("<cols>");
        for (&col, &width) in sheet.column_widths() {
            write!(xml, r#"<col min="{col}" max="{col}" width="{width}" customWidth="1"/>"#)?;
        }
        xml.push_str("</cols>");
    }

    xml.push_str("<sheetData>");
    write_sheet_data(&mut xml, sheet, strings, styles)?;
    xml.push_str("</sheetData>");

    let merged = sheet.merged_ranges();
    if !merged.is_empty() {
        write!(xml, r#"<mergeCells count="{}">"#, merged.len())?;
        for range in merged {
            write!(xml, r#"<mergeCell ref="{}"/>"#, range)?;
        }
        xml.push_str("</mergeCells>");
    }

    xml.push_str(r#"<pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>"#);
    xml.push_str("</worksheet>");
    Ok(xml)
}

fn write_sheet_data(
    xml: &mut String,
    sheet: &Worksheet,
    strings: &mut SharedStrings,
    styles: &mut StylesBuilder,
) -> Result<()> {
    // Rows with a custom height are written even when they hold no cells
    let rows: BTreeSet<u32> = sheet
        .cells()
        .map(|((row, _), _)| row)
        .chain(sheet.row_heights().keys().copied())
        .collect();

    let mut cells = sheet.cells().peekable();
    for row in rows {
        write!(xml, r#"<row r="{}""#, row)?;
        if let Some(height) = sheet.row_height(row) {
            write!(xml, r#" ht="{}" customHeight="1""#, height)?;
        }
        xml.push('>');

        while let Some(((_, col), cell)) = cells.next_if(|((r, _), _)| *r == row) {
            write_cell(xml, row, col, cell, strings, styles)?;
        }
        xml.push_str("</row>");
    }
    Ok(())
}

fn write_cell(
    xml: &mut String,
    row: u32,
    col: u32,
    cell: &Cell,
    strings: &mut SharedStrings,
    styles: &mut StylesBuilder,
) -> Result<()> {
    let style = styles.add_style(&cell.style);
    if cell.value.is_empty() && style == 0 {
        return Ok(());
    }

    write!(xml, r#"<c r="{}{}""#, column_to_letters(col), row)?;
    if style != 0 {
        write!(xml, r#" s="{}""#, style)?;
    }

    match &cell.value {
        CellValue::Empty => xml.push_str("/>"),
        CellValue::Text(s) => write!(xml, r#" t="s"><v>{}</v></c>"#, strings.add(s))?,
        CellValue::Int(v) => write!(xml, "><v>{}</v></c>", itoa::Buffer::new().format(*v))?,
        CellValue::Float(v) if v.is_finite() => write!(xml, "><v>{}</v></c>", ryu::Buffer::new().format(*v))?,
        // No numeric encoding exists for infinities
        CellValue::Float(v) => write!(xml, r#" t="s"><v>{}</v></c>"#, strings.add(&v.to_string()))?,
        CellValue::Bool(v) => write!(xml, r#" t="b"><v>{}</v></c>"#, u8::from(*v))?,
    }
    Ok(())
}
