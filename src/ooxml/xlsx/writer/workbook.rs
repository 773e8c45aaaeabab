//! Workbook part (`xl/workbook.xml`) generation.

use std::fmt::Write as FmtWrite;

use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::xlsx::workbook::Workbook;

/// `sheet_rel_ids[i]` is the relationship id of the i-th worksheet part.
pub(crate) fn workbook_xml(workbook: &Workbook, sheet_rel_ids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );
    xml.push_str(r#"<workbookPr defaultThemeVersion="124226"/>"#);
    write!(
        xml,
        r#"<bookViews><workbookView xWindow="0" yWindow="0" windowWidth="16384" windowHeight="8192" activeTab="{}"/></bookViews>"#,
        workbook.active_index()
    )?;

    xml.push_str("<sheets>");
    for (i, (sheet, rel_id)) in workbook.worksheets().iter().zip(sheet_rel_ids).enumerate() {
        write!(
            xml,
            r#"<sheet name="{}" sheetId="{}" r:id="{}"/>"#,
            escape_xml(sheet.title()),
            i + 1,
            rel_id
        )?;
    }
    xml.push_str("</sheets>");

    xml.push_str(r#"<calcPr calcId="124519" fullCalcOnLoad="1"/>"#);
    xml.push_str("</workbook>");
    Ok(xml)
}
