//! Shape XML for slides (`<p:sp>` and `<p:graphicFrame>`).

use std::fmt::Write as FmtWrite;

use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::common::{Result, RgbColor};
use crate::ooxml::pptx::shape::{Frame, LineFormat, Shape, ShapeKind};
use crate::ooxml::pptx::table::{DEFAULT_TABLE_STYLE_ID, Table};
use crate::ooxml::pptx::text::{Paragraph, Run, TextFrame};

/// Left margin and hanging indent of bulleted paragraphs, 0.3125".
const BULLET_INDENT: i64 = 285_750;

/// Stable id PowerPoint uses for slide-number fields.
const SLIDE_NUMBER_FIELD_ID: &str = "{B6F15528-21DE-4FAA-801E-634DDDAF4B2B}";

/// Write one shape. `chart_rel_id` is required for chart frames.
pub(crate) fn write_shape(xml: &mut String, shape: &Shape, chart_rel_id: Option<&str>) -> Result<()> {
    match shape.kind() {
        ShapeKind::Placeholder {
            ph_type,
            idx,
            text,
        } => {
            xml.push_str("<p:sp>");
            xml.push_str("<p:nvSpPr>");
            write_cnvpr(xml, shape)?;
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
            if *idx != 0 {
                write!(xml, r#" idx="{}""#, idx)?;
            }
            xml.push_str("/></p:nvPr>");
            xml.push_str("</p:nvSpPr>");

            // geometry is inherited from the layout
            if shape.fill().is_none() && !shape.line().is_set() {
                xml.push_str("<p:spPr/>");
            } else {
                xml.push_str("<p:spPr>");
                write_fill(xml, shape.fill())?;
                write_line(xml, &shape.line())?;
                xml.push_str("</p:spPr>");
            }

            xml.push_str("<p:txBody>");
            xml.push_str("<a:bodyPr/>");
            xml.push_str("<a:lstStyle/>");
            write_paragraphs(xml, text)?;
            xml.push_str("</p:txBody>");
            xml.push_str("</p:sp>");
        },
        ShapeKind::TextBox(text) => {
            xml.push_str("<p:sp>");
            xml.push_str("<p:nvSpPr>");
            write_cnvpr(xml, shape)?;
            xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
            xml.push_str("<p:nvPr/>");
            xml.push_str("</p:nvSpPr>");

            xml.push_str("<p:spPr>");
            write_xfrm(xml, "a", &shape.frame())?;
            xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
            match shape.fill() {
                Some(color) => write_fill(xml, Some(color))?,
                None => xml.push_str("<a:noFill/>"),
            }
            write_line(xml, &shape.line())?;
            xml.push_str("</p:spPr>");

            xml.push_str("<p:txBody>");
            write!(
                xml,
                r#"<a:bodyPr wrap="{}" rtlCol="0">"#,
                if text.word_wrap { "square" } else { "none" }
            )?;
            xml.push_str("<a:spAutoFit/>");
            xml.push_str("</a:bodyPr>");
            xml.push_str("<a:lstStyle/>");
            write_paragraphs(xml, text)?;
            xml.push_str("</p:txBody>");
            xml.push_str("</p:sp>");
        },
        ShapeKind::AutoShape { shape_type, text } => {
            xml.push_str("<p:sp>");
            xml.push_str("<p:nvSpPr>");
            write_cnvpr(xml, shape)?;
            xml.push_str("<p:cNvSpPr/>");
            xml.push_str("<p:nvPr/>");
            xml.push_str("</p:nvSpPr>");

            xml.push_str("<p:spPr>");
            write_xfrm(xml, "a", &shape.frame())?;
            write!(
                xml,
                r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                shape_type.prst()
            )?;
            write_fill(xml, shape.fill())?;
            write_line(xml, &shape.line())?;
            xml.push_str("</p:spPr>");

            // theme-driven look of a freshly inserted shape
            xml.push_str("<p:style>");
            xml.push_str(r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#);
            xml.push_str(r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#);
            xml.push_str(r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#);
            xml.push_str(r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#);
            xml.push_str("</p:style>");

            xml.push_str("<p:txBody>");
            xml.push_str(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#);
            xml.push_str("<a:lstStyle/>");
            write_paragraphs(xml, text)?;
            xml.push_str("</p:txBody>");
            xml.push_str("</p:sp>");
        },
        ShapeKind::Table(table) => {
            let frame = Frame {
                width: table.total_width(),
                height: table.total_height(),
                ..shape.frame()
            };
            write_graphic_frame_start(xml, shape, &frame)?;
            xml.push_str(r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#);
            write_table(xml, table)?;
            xml.push_str("</a:graphicData>");
            write_graphic_frame_end(xml);
        },
        ShapeKind::Chart(_) => {
            write_graphic_frame_start(xml, shape, &shape.frame())?;
            xml.push_str(r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/chart">"#);
            write!(
                xml,
                r#"<c:chart xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" r:id="{}"/>"#,
                escape_xml(chart_rel_id.unwrap_or_default())
            )?;
            xml.push_str("</a:graphicData>");
            write_graphic_frame_end(xml);
        },
    }

    Ok(())
}

fn write_cnvpr(xml: &mut String, shape: &Shape) -> Result<()> {
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape.id(),
        escape_xml(shape.name())
    )?;
    Ok(())
}

/// `ns` is `a` inside `<p:spPr>` and `p` for graphic frames.
fn write_xfrm(xml: &mut String, ns: &str, frame: &Frame) -> Result<()> {
    write!(xml, "<{}:xfrm>", ns)?;
    write!(
        xml,
        r#"<a:off x="{}" y="{}"/>"#,
        frame.left.emus(),
        frame.top.emus()
    )?;
    write!(
        xml,
        r#"<a:ext cx="{}" cy="{}"/>"#,
        frame.width.emus(),
        frame.height.emus()
    )?;
    write!(xml, "</{}:xfrm>", ns)?;
    Ok(())
}

fn write_fill(xml: &mut String, fill: Option<RgbColor>) -> Result<()> {
    if let Some(color) = fill {
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            color.to_hex()
        )?;
    }
    Ok(())
}

fn write_line(xml: &mut String, line: &LineFormat) -> Result<()> {
    if !line.is_set() {
        return Ok(());
    }
    xml.push_str("<a:ln");
    if let Some(width) = line.width {
        write!(xml, r#" w="{}""#, width.emus())?;
    }
    xml.push('>');
    write_fill(xml, line.color)?;
    xml.push_str("</a:ln>");
    Ok(())
}

fn write_graphic_frame_start(xml: &mut String, shape: &Shape, frame: &Frame) -> Result<()> {
    xml.push_str("<p:graphicFrame>");
    xml.push_str("<p:nvGraphicFramePr>");
    write_cnvpr(xml, shape)?;
    xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGraphicFramePr>");
    write_xfrm(xml, "p", frame)?;
    xml.push_str("<a:graphic>");
    Ok(())
}

fn write_graphic_frame_end(xml: &mut String) {
    xml.push_str("</a:graphic>");
    xml.push_str("</p:graphicFrame>");
}

fn write_table(xml: &mut String, table: &Table) -> Result<()> {
    xml.push_str("<a:tbl>");
    write!(
        xml,
        r#"<a:tblPr firstRow="{}" bandRow="{}">"#,
        u8::from(table.first_row),
        u8::from(table.band_rows)
    )?;
    write!(
        xml,
        "<a:tableStyleId>{}</a:tableStyleId>",
        DEFAULT_TABLE_STYLE_ID
    )?;
    xml.push_str("</a:tblPr>");

    xml.push_str("<a:tblGrid>");
    for width in table.column_widths() {
        write!(xml, r#"<a:gridCol w="{}"/>"#, width.emus())?;
    }
    xml.push_str("</a:tblGrid>");

    for (row, height) in table.rows().zip(table.row_heights()) {
        write!(xml, r#"<a:tr h="{}">"#, height.emus())?;
        for cell in row {
            xml.push_str("<a:tc>");
            xml.push_str("<a:txBody><a:bodyPr/><a:lstStyle/>");
            write_paragraphs(xml, &cell.text)?;
            xml.push_str("</a:txBody>");
            match cell.fill {
                Some(color) => {
                    xml.push_str("<a:tcPr>");
                    write_fill(xml, Some(color))?;
                    xml.push_str("</a:tcPr>");
                },
                None => xml.push_str("<a:tcPr/>"),
            }
            xml.push_str("</a:tc>");
        }
        xml.push_str("</a:tr>");
    }

    xml.push_str("</a:tbl>");
    Ok(())
}

pub(crate) fn write_paragraphs(xml: &mut String, text: &TextFrame) -> Result<()> {
    for paragraph in text.paragraphs() {
        write_paragraph(xml, paragraph)?;
    }
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    if paragraph.bullet.is_some() || paragraph.level > 0 {
        xml.push_str("<a:pPr");
        if paragraph.level > 0 {
            write!(xml, r#" lvl="{}""#, paragraph.level.min(8))?;
        }
        match paragraph.bullet {
            Some(bullet) => {
                let margin = BULLET_INDENT * (i64::from(paragraph.level.min(8)) + 1);
                write!(
                    xml,
                    r#" marL="{}" indent="-{}">"#,
                    margin, BULLET_INDENT
                )?;
                xml.push_str(r#"<a:buFont typeface="Arial"/>"#);
                let mut buf = [0u8; 4];
                write!(
                    xml,
                    r#"<a:buChar char="{}"/>"#,
                    escape_xml(bullet.encode_utf8(&mut buf))
                )?;
                xml.push_str("</a:pPr>");
            },
            None => xml.push_str("/>"),
        }
    }

    for run in &paragraph.runs {
        write_run(xml, run)?;
    }

    if paragraph.runs.is_empty() {
        xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
    }

    xml.push_str("</a:p>");
    Ok(())
}

fn write_run(xml: &mut String, run: &Run) -> Result<()> {
    match run.field {
        Some(field) => write!(
            xml,
            r#"<a:fld id="{}" type="{}">"#,
            SLIDE_NUMBER_FIELD_ID,
            field.xml_type()
        )?,
        None => xml.push_str("<a:r>"),
    }

    xml.push_str(r#"<a:rPr lang="en-US""#);
    let font = &run.font;
    if let Some(size) = font.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    if let Some(bold) = font.bold {
        write!(xml, r#" b="{}""#, u8::from(bold))?;
    }
    if let Some(italic) = font.italic {
        write!(xml, r#" i="{}""#, u8::from(italic))?;
    }
    xml.push_str(r#" dirty="0""#);

    if font.color.is_none() && font.name.is_none() {
        xml.push_str("/>");
    } else {
        xml.push('>');
        write_fill(xml, font.color)?;
        if let Some(name) = &font.name {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(name))?;
            write!(xml, r#"<a:cs typeface="{}"/>"#, escape_xml(name))?;
        }
        xml.push_str("</a:rPr>");
    }

    write!(xml, "<a:t>{}</a:t>", escape_xml(&run.text))?;
    xml.push_str(if run.field.is_some() { "</a:fld>" } else { "</a:r>" });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Font;
    use crate::ooxml::pptx::chart::{Chart, ChartData, ChartType};
    use crate::ooxml::pptx::placeholder::PlaceholderType;
    use crate::ooxml::pptx::shape::{AutoShapeType, ShapeId};

    fn to_xml(shape: &Shape, rel: Option<&str>) -> String {
        let mut xml = String::new();
        write_shape(&mut xml, shape, rel).unwrap();
        xml
    }

    #[test]
    fn test_placeholder_xml() {
        let mut text = TextFrame::from_text("Q3 & Q4");
        text.apply_font(&Font::new().name("Arial").size(32.0).bold(true));
        let shape = Shape::new(
            ShapeId(2),
            "Title 1",
            Frame::default(),
            ShapeKind::Placeholder {
                ph_type: PlaceholderType::Title,
                idx: 0,
                text,
            },
        );
        let xml = to_xml(&shape, None);
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Title 1"/>"#));
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains("<p:spPr/>"));
        assert!(xml.contains(r#"sz="3200" b="1""#));
        assert!(xml.contains(r#"<a:latin typeface="Arial"/>"#));
        assert!(xml.contains("<a:t>Q3 &amp; Q4</a:t>"));
    }

    #[test]
    fn test_footer_placeholder_attributes() {
        let shape = Shape::new(
            ShapeId(5),
            "Footer Placeholder 4",
            Frame::default(),
            ShapeKind::Placeholder {
                ph_type: PlaceholderType::Footer,
                idx: 11,
                text: TextFrame::new(),
            },
        );
        let xml = to_xml(&shape, None);
        assert!(xml.contains(r#"<p:ph type="ftr" sz="quarter" idx="11"/>"#));
        assert!(xml.contains("<a:endParaRPr"));
    }

    #[test]
    fn test_auto_shape_fill_and_line() {
        let mut shape = Shape::new(
            ShapeId(3),
            "Box",
            Frame::from_inches(1.0, 1.0, 2.0, 1.0),
            ShapeKind::AutoShape {
                shape_type: AutoShapeType::RoundedRectangle,
                text: TextFrame::new(),
            },
        );
        shape.set_fill(RgbColor::new(0x44, 0x72, 0xC4)).unwrap();
        shape.set_line_color(RgbColor::BLACK).unwrap();
        shape.set_line_weight(2.0).unwrap();
        let xml = to_xml(&shape, None);
        assert!(xml.contains(r#"<a:off x="914400" y="914400"/>"#));
        assert!(xml.contains(r#"prst="roundRect""#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="4472C4"/></a:solidFill>"#));
        assert!(xml.contains(r#"<a:ln w="25400"><a:solidFill><a:srgbClr val="000000"/></a:solidFill></a:ln>"#));
    }

    #[test]
    fn test_bullets() {
        let mut text = TextFrame::new();
        text.add_paragraph(Paragraph {
            bullet: Some('•'),
            ..Paragraph::new("Revenue up")
        });
        let shape = Shape::new(ShapeId(4), "TextBox 3", Frame::default(), ShapeKind::TextBox(text));
        let xml = to_xml(&shape, None);
        assert!(xml.contains(r#"<a:pPr marL="285750" indent="-285750">"#));
        assert!(xml.contains(r#"<a:buChar char="•"/>"#));
        assert!(xml.contains("<a:noFill/>"));
    }

    #[test]
    fn test_table_frame() {
        let mut table = Table::new(2, 2, &Frame::from_emus(0, 0, 2000, 1000));
        table.cell_mut(0, 0).unwrap().text = TextFrame::single_run("Name");
        table.cell_mut(0, 0).unwrap().fill = Some(RgbColor::WHITE);
        let shape = Shape::new(ShapeId(6), "Table 5", Frame::from_emus(10, 20, 2000, 1000), ShapeKind::Table(table));
        let xml = to_xml(&shape, None);
        assert!(xml.contains(r#"<p:xfrm><a:off x="10" y="20"/><a:ext cx="2000" cy="1000"/></p:xfrm>"#));
        assert!(xml.contains(r#"<a:gridCol w="1000"/>"#));
        assert!(xml.contains(r#"<a:tr h="500">"#));
        assert!(xml.contains("<a:t>Name</a:t>"));
        assert!(xml.contains(r#"<a:tcPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:tcPr>"#));
        assert_eq!(xml.matches("<a:tc>").count(), 4);
    }

    #[test]
    fn test_chart_frame() {
        let chart = Chart::new(ChartType::Pie, ChartData::new(["A"]).series("S", [1.0]), None);
        let shape = Shape::new(ShapeId(7), "Chart 6", Frame::default(), ShapeKind::Chart(chart));
        let xml = to_xml(&shape, Some("rId2"));
        assert!(xml.contains(r#"r:id="rId2""#));
        assert!(xml.contains("drawingml/2006/chart"));
    }

    #[test]
    fn test_slide_number_field() {
        let mut text = TextFrame::new();
        text.add_paragraph(Paragraph {
            runs: vec![Run::slide_number()],
            ..Paragraph::default()
        });
        let mut xml = String::new();
        write_paragraphs(&mut xml, &text).unwrap();
        assert!(xml.contains(r#"type="slidenum""#));
        assert!(xml.contains("</a:fld>"));
    }
}
