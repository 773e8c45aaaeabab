//! Master, layout, theme and settings parts of a new presentation.
//!
//! These parts never change with slide content; they are generated from the
//! layout table so the placeholder geometry lives in one place.

use std::fmt::Write as FmtWrite;

use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::pptx::layout::{LayoutPlaceholder, SlideLayout, master_placeholders};
use crate::ooxml::pptx::placeholder::PlaceholderType;
use crate::ooxml::pptx::text::SLIDE_NUMBER_TEXT;
use crate::ooxml::pptx::writer::pres::MASTER_ID;
use crate::ooxml::pptx::writer::slide::write_group_properties;

const NS_DECLS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

const CLR_MAP: &str = r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#;

/// Generate slideMaster1.xml referencing every layout by rId.
pub(crate) fn slide_master_xml(layout_rel_ids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(8192);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, "<p:sldMaster {}>", NS_DECLS)?;

    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);
    for (i, placeholder) in master_placeholders().iter().enumerate() {
        write_placeholder(&mut xml, i as u32 + 2, placeholder, true)?;
    }
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(CLR_MAP);

    xml.push_str("<p:sldLayoutIdLst>");
    for (i, rel_id) in layout_rel_ids.iter().enumerate() {
        write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
            MASTER_ID as usize + 1 + i,
            rel_id
        )?;
    }
    xml.push_str("</p:sldLayoutIdLst>");

    write_text_styles(&mut xml)?;
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

/// Generate slideLayoutN.xml for one layout.
pub(crate) fn slide_layout_xml(layout: &SlideLayout) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:sldLayout {} type="{}" preserve="1">"#,
        NS_DECLS,
        layout.kind()
    )?;
    write!(xml, r#"<p:cSld name="{}">"#, escape_xml(layout.name()))?;
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);
    for (i, placeholder) in layout.placeholders().iter().enumerate() {
        write_placeholder(&mut xml, i as u32 + 2, placeholder, false)?;
    }
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

fn write_placeholder(xml: &mut String, id: u32, placeholder: &LayoutPlaceholder, on_master: bool) -> Result<()> {
    let ph_type = placeholder.ph_type;
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        id,
        ph_type.display_name(),
        id - 1
    )?;
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str("<p:nvPr><p:ph");
    if let Some(t) = ph_type.xml_type() {
        write!(xml, r#" type="{}""#, t)?;
    }
    if ph_type.is_vertical() {
        xml.push_str(r#" orient="vert""#);
    }
    if let Some(sz) = ph_type.xml_size() {
        write!(xml, r#" sz="{}""#, sz)?;
    }
    if placeholder.idx != 0 {
        write!(xml, r#" idx="{}""#, placeholder.idx)?;
    }
    xml.push_str("/></p:nvPr></p:nvSpPr>");

    let frame = placeholder.frame;
    write!(
        xml,
        r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        frame.left.emus(),
        frame.top.emus(),
        frame.width.emus(),
        frame.height.emus()
    )?;
    if on_master {
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    }
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    if ph_type.is_vertical() {
        xml.push_str(r#"<a:bodyPr vert="eaVert"/>"#);
    } else {
        xml.push_str("<a:bodyPr/>");
    }
    xml.push_str("<a:lstStyle/>");
    match ph_type {
        PlaceholderType::SlideNumber => {
            write!(
                xml,
                r#"<a:p><a:fld id="{{B6F15528-21DE-4FAA-801E-634DDDAF4B2B}}" type="slidenum"><a:rPr lang="en-US"/><a:t>{}</a:t></a:fld><a:endParaRPr lang="en-US"/></a:p>"#,
                SLIDE_NUMBER_TEXT
            )?;
        },
        _ => {
            write!(
                xml,
                r#"<a:p><a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r><a:endParaRPr lang="en-US"/></a:p>"#,
                prompt_text(ph_type)
            )?;
        },
    }
    xml.push_str("</p:txBody></p:sp>");
    Ok(())
}

fn prompt_text(ph_type: PlaceholderType) -> &'static str {
    match ph_type {
        PlaceholderType::Title | PlaceholderType::CenterTitle | PlaceholderType::VerticalTitle => {
            "Click to edit Master title style"
        },
        PlaceholderType::Subtitle => "Click to edit Master subtitle style",
        PlaceholderType::Body | PlaceholderType::Object | PlaceholderType::VerticalBody => {
            "Click to edit Master text styles"
        },
        PlaceholderType::Picture => "Click icon to add picture",
        PlaceholderType::Date | PlaceholderType::Footer | PlaceholderType::SlideNumber => "",
    }
}

fn write_text_styles(xml: &mut String) -> Result<()> {
    xml.push_str("<p:txStyles>");

    xml.push_str("<p:titleStyle>");
    xml.push_str(r#"<a:lvl1pPr algn="ctr" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/><a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr></a:lvl1pPr>"#);
    xml.push_str("</p:titleStyle>");

    xml.push_str("<p:bodyStyle>");
    let body_sizes = [3200, 2800, 2400, 2000, 2000, 2000, 2000, 2000, 2000];
    let bullets = ["•", "–", "•", "–", "»", "•", "•", "•", "•"];
    for (i, (size, bullet)) in body_sizes.iter().zip(bullets).enumerate() {
        let lvl = i + 1;
        let indent = if i == 0 { 342_900 } else { 285_750 };
        let mar_l = if i == 0 { 342_900 } else { 742_950 + (i - 1) * 400_050 };
        write!(
            xml,
            r#"<a:lvl{lvl}pPr marL="{mar_l}" indent="-{indent}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="{bullet}"/><a:defRPr sz="{size}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl{lvl}pPr>"#
        )?;
    }
    xml.push_str("</p:bodyStyle>");

    xml.push_str("<p:otherStyle>");
    xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    for lvl in 1..=9 {
        write!(
            xml,
            r#"<a:lvl{lvl}pPr marL="{}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl{lvl}pPr>"#,
            (lvl - 1) * 457_200
        )?;
    }
    xml.push_str("</p:otherStyle>");

    xml.push_str("</p:txStyles>");
    Ok(())
}

/// Generate theme1.xml, the default Office color, font and format scheme.
pub(crate) fn theme_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#);
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    for (tag, hex) in [
        ("dk2", "1F497D"),
        ("lt2", "EEECE1"),
        ("accent1", "4F81BD"),
        ("accent2", "C0504D"),
        ("accent3", "9BBB59"),
        ("accent4", "8064A2"),
        ("accent5", "4BACC6"),
        ("accent6", "F79646"),
        ("hlink", "0000FF"),
        ("folHlink", "800080"),
    ] {
        xml.push_str(&format!(r#"<a:{tag}><a:srgbClr val="{hex}"/></a:{tag}>"#));
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Office">"#);
    xml.push_str(r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#);
    xml.push_str(r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#);
    xml.push_str("</a:fontScheme>");

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str("<a:fillStyleLst>");
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="50000"/></a:schemeClr></a:solidFill>"#);
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="95000"/></a:schemeClr></a:solidFill>"#);
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for width in [9525, 25400, 38100] {
        xml.push_str(&format!(
            r#"<a:ln w="{width}" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"><a:shade val="95000"/></a:schemeClr></a:solidFill><a:prstDash val="solid"/></a:ln>"#
        ));
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/></a:schemeClr></a:solidFill>"#);
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="90000"/></a:schemeClr></a:solidFill>"#);
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/>");
    xml.push_str("<a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");
    xml
}

pub(crate) fn pres_props_xml() -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write_empty_root(&mut xml, "presentationPr");
    xml
}

pub(crate) fn view_props_xml() -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(&format!("<p:viewPr {}>", NS_DECLS));
    xml.push_str(r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#);
    xml.push_str(r#"<p:gridSpacing cx="76200" cy="76200"/>"#);
    xml.push_str("</p:viewPr>");
    xml
}

/// Table styles part naming the built-in default style; PowerPoint supplies
/// the style definition itself.
pub(crate) fn table_styles_xml() -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(&format!(
        r#"<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{}"/>"#,
        crate::ooxml::pptx::table::DEFAULT_TABLE_STYLE_ID
    ));
    xml
}

fn write_empty_root(xml: &mut String, tag: &str) {
    xml.push_str(&format!("<p:{} {}/>", tag, NS_DECLS));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::layout::standard_layouts;

    #[test]
    fn test_master_lists_layouts() {
        let rel_ids: Vec<String> = (1..=11).map(|i| format!("rId{}", i)).collect();
        let xml = slide_master_xml(&rel_ids).unwrap();
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483659" r:id="rId11"/>"#));
        assert!(xml.contains("<p:titleStyle>"));
        assert!(xml.contains("<a:lvl9pPr"));
        assert!(xml.contains(r#"type="sldNum""#));
    }

    #[test]
    fn test_layout_xml() {
        let layouts = standard_layouts();
        let xml = slide_layout_xml(&layouts[0]).unwrap();
        assert!(xml.contains(r#"type="title" preserve="1""#));
        assert!(xml.contains(r#"<p:cSld name="Title Slide">"#));
        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert!(xml.contains(r#"<a:off x="685800" y="2130425"/>"#));
    }

    #[test]
    fn test_vertical_layout() {
        let layouts = standard_layouts();
        let xml = slide_layout_xml(&layouts[10]).unwrap();
        assert!(xml.contains(r#"<p:ph type="title" orient="vert"/>"#));
        assert!(xml.contains(r#"vert="eaVert""#));
    }

    #[test]
    fn test_theme_has_scheme_colors() {
        let xml = theme_xml();
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="4F81BD"/></a:accent1>"#));
        assert!(xml.contains("<a:fontScheme"));
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }

    #[test]
    fn test_table_styles_default() {
        assert!(table_styles_xml().contains("{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"));
    }
}
