//! Serialization of a [`Workbook`] into an OPC package.
//!
//! Worksheets are written first so the shared strings and styles they
//! register are complete before those two parts are generated.

mod sheet;
mod strings;
mod styles;
mod workbook;

use tracing::debug;

use crate::common::{Error, Result};
use crate::ooxml::common::app_properties_xml;
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::xlsx::workbook::Workbook;

use strings::SharedStrings;
use styles::StylesBuilder;

const WORKBOOK_PART: &str = "/xl/workbook.xml";

/// Build the complete package for a workbook.
pub(crate) fn build_package(wb: &Workbook) -> Result<OpcPackage> {
    if wb.worksheet_count() == 0 {
        return Err(Error::InvalidInput("a workbook needs at least one worksheet".to_string()));
    }

    let mut package = OpcPackage::new();
    package.relate_to(WORKBOOK_PART, rt::OFFICE_DOCUMENT);
    package.relate_to("/docProps/core.xml", rt::CORE_PROPERTIES);
    package.relate_to("/docProps/app.xml", rt::EXTENDED_PROPERTIES);

    let mut strings = SharedStrings::new();
    let mut styles = StylesBuilder::new(&wb.config().sheet);
    let mut sheet_parts = Vec::with_capacity(wb.worksheet_count());
    for (i, sheet) in wb.worksheets().iter().enumerate() {
        let xml = sheet::sheet_xml(sheet, &mut strings, &mut styles, i == wb.active_index())?;
        sheet_parts.push(xml);
    }

    let part = package.add_part(WORKBOOK_PART, ct::SML_SHEET_MAIN, Vec::new())?;
    let sheet_rel_ids: Vec<String> = (1..=sheet_parts.len())
        .map(|n| part.rels_mut().add(rt::WORKSHEET, &format!("worksheets/sheet{}.xml", n)))
        .collect();
    part.rels_mut().add(rt::STYLES, "styles.xml");
    part.rels_mut().add(rt::SHARED_STRINGS, "sharedStrings.xml");
    part.set_blob(workbook::workbook_xml(wb, &sheet_rel_ids)?);

    for (i, xml) in sheet_parts.into_iter().enumerate() {
        let partname = format!("/xl/worksheets/sheet{}.xml", i + 1);
        package.add_part(&partname, ct::SML_WORKSHEET, xml)?;
    }
    package.add_part("/xl/styles.xml", ct::SML_STYLES, styles.to_xml()?)?;
    package.add_part("/xl/sharedStrings.xml", ct::SML_SHARED_STRINGS, strings.to_xml()?)?;

    package.add_part("/docProps/core.xml", ct::OPC_CORE_PROPERTIES, wb.properties().to_xml())?;
    package.add_part(
        "/docProps/app.xml",
        ct::OFC_EXTENDED_PROPERTIES,
        app_properties_xml(&[("Worksheets", wb.worksheet_count())]),
    )?;

    debug!(
        parts = package.part_count(),
        sheets = wb.worksheet_count(),
        strings = strings.unique_count(),
        "built workbook package"
    );
    Ok(package)
}
