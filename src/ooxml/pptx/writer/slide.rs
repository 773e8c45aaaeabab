//! Slide part XML (`ppt/slides/slideN.xml`).

use std::collections::HashMap;

use crate::common::Result;
use crate::ooxml::pptx::shape::ShapeId;
use crate::ooxml::pptx::slide::Slide;
use crate::ooxml::pptx::writer::shape::write_shape;

/// Generate slide XML. `chart_rel_ids` maps chart shapes to the slide
/// relationships pointing at their chart parts.
pub(crate) fn slide_xml(slide: &Slide, chart_rel_ids: &HashMap<ShapeId, String>) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#);
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);

    for shape in slide.shapes() {
        let rel_id = chart_rel_ids.get(&shape.id()).map(String::as_str);
        write_shape(&mut xml, shape, rel_id)?;
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sld>");

    Ok(xml)
}

/// The shape tree's own non-visual and group properties (id 1).
pub(crate) fn write_group_properties(xml: &mut String) {
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");
}
