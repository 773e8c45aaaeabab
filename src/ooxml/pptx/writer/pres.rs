//! Presentation part XML (`ppt/presentation.xml`).

use std::fmt::Write as FmtWrite;

use crate::common::Result;
use crate::ooxml::pptx::presentation::Presentation;

/// First id of `<p:sldId>`; lower values are reserved.
const FIRST_SLIDE_ID: usize = 256;

/// Id of the only slide master, the lowest value allowed for masters.
pub(crate) const MASTER_ID: u32 = 2_147_483_648;

/// Generate presentation.xml with the given master and slide rIds.
pub(crate) fn presentation_xml(pres: &Presentation, master_rel_id: &str, slide_rel_ids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

    xml.push_str("<p:sldMasterIdLst>");
    write!(
        xml,
        r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
        MASTER_ID, master_rel_id
    )?;
    xml.push_str("</p:sldMasterIdLst>");

    if !slide_rel_ids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (i, rel_id) in slide_rel_ids.iter().enumerate() {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="{}"/>"#,
                FIRST_SLIDE_ID + i,
                rel_id
            )?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
        pres.slide_width().emus(),
        pres.slide_height().emus()
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);

    xml.push_str("<p:defaultTextStyle>");
    xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    for level in 1..=9 {
        write!(
            xml,
            r#"<a:lvl{lvl}pPr marL="{mar}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl{lvl}pPr>"#,
            lvl = level,
            mar = (level - 1) * 457_200
        )?;
    }
    xml.push_str("</p:defaultTextStyle>");

    xml.push_str("</p:presentation>");
    Ok(xml)
}
