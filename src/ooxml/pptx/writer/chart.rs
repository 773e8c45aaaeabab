//! Chart part XML (`ppt/charts/chartN.xml`).

use std::fmt::Write as FmtWrite;

use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::pptx::chart::{Chart, ChartType, Series};

const CAT_AX_ID: u32 = 1;
const VAL_AX_ID: u32 = 2;

/// Generate chart XML with the data stored as literal caches.
pub(crate) fn chart_xml(chart: &Chart) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" "#);
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);
    xml.push_str(r#"<c:date1904 val="0"/>"#);
    xml.push_str(r#"<c:lang val="en-US"/>"#);
    xml.push_str(r#"<c:roundedCorners val="0"/>"#);

    xml.push_str("<c:chart>");
    if let Some(title) = chart.title() {
        write_title(&mut xml, title)?;
        xml.push_str(r#"<c:autoTitleDeleted val="0"/>"#);
    } else {
        xml.push_str(r#"<c:autoTitleDeleted val="1"/>"#);
    }

    write_plot_area(&mut xml, chart)?;

    if chart.has_legend() {
        xml.push_str(r#"<c:legend><c:legendPos val="r"/><c:overlay val="0"/></c:legend>"#);
    }
    xml.push_str(r#"<c:plotVisOnly val="1"/>"#);
    xml.push_str(r#"<c:dispBlanksAs val="gap"/>"#);
    xml.push_str("</c:chart>");

    xml.push_str("</c:chartSpace>");
    Ok(xml)
}

fn write_title(xml: &mut String, title: &str) -> Result<()> {
    xml.push_str("<c:title><c:tx><c:rich>");
    xml.push_str("<a:bodyPr/><a:lstStyle/>");
    xml.push_str("<a:p><a:pPr><a:defRPr/></a:pPr>");
    write!(xml, r#"<a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r>"#, escape_xml(title))?;
    xml.push_str("</a:p></c:rich></c:tx>");
    xml.push_str(r#"<c:overlay val="0"/>"#);
    xml.push_str("</c:title>");
    Ok(())
}

fn write_plot_area(xml: &mut String, chart: &Chart) -> Result<()> {
    let chart_type = chart.chart_type();
    let series = &chart.data().series;
    let categories = &chart.data().categories;

    xml.push_str("<c:plotArea>");
    xml.push_str("<c:layout/>");

    match chart_type {
        ChartType::ColumnClustered | ChartType::ColumnStacked | ChartType::BarClustered | ChartType::BarStacked => {
            let dir = match chart_type {
                ChartType::BarClustered | ChartType::BarStacked => "bar",
                _ => "col",
            };
            let stacked = matches!(chart_type, ChartType::ColumnStacked | ChartType::BarStacked);
            xml.push_str("<c:barChart>");
            write!(xml, r#"<c:barDir val="{}"/>"#, dir)?;
            write!(
                xml,
                r#"<c:grouping val="{}"/>"#,
                if stacked { "stacked" } else { "clustered" }
            )?;
            xml.push_str(r#"<c:varyColors val="0"/>"#);
            write_all_series(xml, series, categories, None)?;
            xml.push_str(r#"<c:gapWidth val="150"/>"#);
            if stacked {
                xml.push_str(r#"<c:overlap val="100"/>"#);
            }
            write_axis_ids(xml)?;
            xml.push_str("</c:barChart>");
        },
        ChartType::Line | ChartType::LineMarkers => {
            let markers = chart_type == ChartType::LineMarkers;
            xml.push_str("<c:lineChart>");
            xml.push_str(r#"<c:grouping val="standard"/>"#);
            xml.push_str(r#"<c:varyColors val="0"/>"#);
            write_all_series(xml, series, categories, Some(markers))?;
            write!(xml, r#"<c:marker val="{}"/>"#, if markers { "1" } else { "0" })?;
            write_axis_ids(xml)?;
            xml.push_str("</c:lineChart>");
        },
        ChartType::Pie => {
            xml.push_str("<c:pieChart>");
            xml.push_str(r#"<c:varyColors val="1"/>"#);
            write_all_series(xml, series, categories, None)?;
            xml.push_str(r#"<c:firstSliceAng val="0"/>"#);
            xml.push_str("</c:pieChart>");
        },
        ChartType::Doughnut => {
            xml.push_str("<c:doughnutChart>");
            xml.push_str(r#"<c:varyColors val="1"/>"#);
            write_all_series(xml, series, categories, None)?;
            xml.push_str(r#"<c:firstSliceAng val="0"/>"#);
            xml.push_str(r#"<c:holeSize val="50"/>"#);
            xml.push_str("</c:doughnutChart>");
        },
        ChartType::Area => {
            xml.push_str("<c:areaChart>");
            xml.push_str(r#"<c:grouping val="standard"/>"#);
            xml.push_str(r#"<c:varyColors val="0"/>"#);
            write_all_series(xml, series, categories, None)?;
            write_axis_ids(xml)?;
            xml.push_str("</c:areaChart>");
        },
    }

    if chart_type.has_axes() {
        write_axes(xml)?;
    }

    xml.push_str("</c:plotArea>");
    Ok(())
}

/// `markers` is only set for line charts, where every series states whether
/// its points carry a marker.
fn write_all_series(xml: &mut String, series: &[Series], categories: &[String], markers: Option<bool>) -> Result<()> {
    for (i, s) in series.iter().enumerate() {
        xml.push_str("<c:ser>");
        write!(xml, r#"<c:idx val="{}"/><c:order val="{}"/>"#, i, i)?;
        write!(xml, "<c:tx><c:v>{}</c:v></c:tx>", escape_xml(&s.name))?;
        if markers == Some(false) {
            xml.push_str(r#"<c:marker><c:symbol val="none"/></c:marker>"#);
        }
        write_string_literal(xml, "c:cat", categories)?;
        write_numeric_literal(xml, "c:val", &s.values)?;
        if markers.is_some() {
            xml.push_str(r#"<c:smooth val="0"/>"#);
        }
        xml.push_str("</c:ser>");
    }
    Ok(())
}

fn write_string_literal(xml: &mut String, tag: &str, values: &[String]) -> Result<()> {
    write!(xml, "<{}><c:strLit>", tag)?;
    write!(xml, r#"<c:ptCount val="{}"/>"#, values.len())?;
    for (i, val) in values.iter().enumerate() {
        write!(xml, r#"<c:pt idx="{}"><c:v>{}</c:v></c:pt>"#, i, escape_xml(val))?;
    }
    write!(xml, "</c:strLit></{}>", tag)?;
    Ok(())
}

fn write_numeric_literal(xml: &mut String, tag: &str, values: &[f64]) -> Result<()> {
    write!(xml, "<{}><c:numLit>", tag)?;
    xml.push_str("<c:formatCode>General</c:formatCode>");
    write!(xml, r#"<c:ptCount val="{}"/>"#, values.len())?;
    for (i, val) in values.iter().enumerate() {
        // NaN points are left out so the chart shows a gap.
        if val.is_finite() {
            write!(xml, r#"<c:pt idx="{}"><c:v>{}</c:v></c:pt>"#, i, val)?;
        }
    }
    write!(xml, "</c:numLit></{}>", tag)?;
    Ok(())
}

fn write_axis_ids(xml: &mut String) -> Result<()> {
    write!(xml, r#"<c:axId val="{}"/><c:axId val="{}"/>"#, CAT_AX_ID, VAL_AX_ID)?;
    Ok(())
}

fn write_axes(xml: &mut String) -> Result<()> {
    xml.push_str("<c:catAx>");
    write!(xml, r#"<c:axId val="{}"/>"#, CAT_AX_ID)?;
    xml.push_str(r#"<c:scaling><c:orientation val="minMax"/></c:scaling>"#);
    xml.push_str(r#"<c:delete val="0"/>"#);
    xml.push_str(r#"<c:axPos val="b"/>"#);
    xml.push_str(r#"<c:majorTickMark val="out"/><c:minorTickMark val="none"/><c:tickLblPos val="nextTo"/>"#);
    write!(xml, r#"<c:crossAx val="{}"/>"#, VAL_AX_ID)?;
    xml.push_str(r#"<c:crosses val="autoZero"/>"#);
    xml.push_str(r#"<c:auto val="1"/><c:lblAlgn val="ctr"/><c:lblOffset val="100"/><c:noMultiLvlLbl val="0"/>"#);
    xml.push_str("</c:catAx>");

    xml.push_str("<c:valAx>");
    write!(xml, r#"<c:axId val="{}"/>"#, VAL_AX_ID)?;
    xml.push_str(r#"<c:scaling><c:orientation val="minMax"/></c:scaling>"#);
    xml.push_str(r#"<c:delete val="0"/>"#);
    xml.push_str(r#"<c:axPos val="l"/>"#);
    xml.push_str("<c:majorGridlines/>");
    xml.push_str(r#"<c:numFmt formatCode="General" sourceLinked="1"/>"#);
    xml.push_str(r#"<c:majorTickMark val="out"/><c:minorTickMark val="none"/><c:tickLblPos val="nextTo"/>"#);
    write!(xml, r#"<c:crossAx val="{}"/>"#, CAT_AX_ID)?;
    xml.push_str(r#"<c:crosses val="autoZero"/>"#);
    xml.push_str(r#"<c:crossBetween val="between"/>"#);
    xml.push_str("</c:valAx>");
    Ok(())
}
