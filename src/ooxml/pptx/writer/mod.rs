//! Serialization of a [`Presentation`] into an OPC package.
//!
//! Each part is added first with its relationships and only then given its
//! XML, so the markup can reference the rIds the part was assigned.

mod chart;
mod pres;
mod shape;
mod slide;
mod template;

use std::collections::HashMap;

use tracing::debug;

use crate::common::Result;
use crate::ooxml::common::app_properties_xml;
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::pptx::presentation::Presentation;

const PRESENTATION_PART: &str = "/ppt/presentation.xml";
const MASTER_PART: &str = "/ppt/slideMasters/slideMaster1.xml";
const THEME_PART: &str = "/ppt/theme/theme1.xml";

/// Build the complete package for a presentation.
pub(crate) fn build_package(pres: &Presentation) -> Result<OpcPackage> {
    let mut package = OpcPackage::new();

    package.relate_to(PRESENTATION_PART, rt::OFFICE_DOCUMENT);
    package.relate_to("/docProps/core.xml", rt::CORE_PROPERTIES);
    package.relate_to("/docProps/app.xml", rt::EXTENDED_PROPERTIES);

    // presentation.xml
    let part = package.add_part(PRESENTATION_PART, ct::PML_PRESENTATION_MAIN, Vec::new())?;
    let master_rel_id = part.rels_mut().add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    let slide_rel_ids: Vec<String> = (1..=pres.slide_count())
        .map(|n| part.rels_mut().add(rt::SLIDE, &format!("slides/slide{}.xml", n)))
        .collect();
    part.rels_mut().add(rt::PRES_PROPS, "presProps.xml");
    part.rels_mut().add(rt::VIEW_PROPS, "viewProps.xml");
    part.rels_mut().add(rt::THEME, "theme/theme1.xml");
    part.rels_mut().add(rt::TABLE_STYLES, "tableStyles.xml");
    part.set_blob(pres::presentation_xml(pres, &master_rel_id, &slide_rel_ids)?);

    package.add_part("/ppt/presProps.xml", ct::PML_PRES_PROPS, template::pres_props_xml())?;
    package.add_part("/ppt/viewProps.xml", ct::PML_VIEW_PROPS, template::view_props_xml())?;
    package.add_part("/ppt/tableStyles.xml", ct::PML_TABLE_STYLES, template::table_styles_xml())?;
    package.add_part(THEME_PART, ct::OFC_THEME, template::theme_xml())?;

    // Master and layouts
    let part = package.add_part(MASTER_PART, ct::PML_SLIDE_MASTER, Vec::new())?;
    let layout_rel_ids: Vec<String> = (1..=pres.layouts().len())
        .map(|n| {
            part.rels_mut()
                .add(rt::SLIDE_LAYOUT, &format!("../slideLayouts/slideLayout{}.xml", n))
        })
        .collect();
    part.rels_mut().add(rt::THEME, "../theme/theme1.xml");
    part.set_blob(template::slide_master_xml(&layout_rel_ids)?);

    for (i, layout) in pres.layouts().iter().enumerate() {
        let partname = format!("/ppt/slideLayouts/slideLayout{}.xml", i + 1);
        let part = package.add_part(&partname, ct::PML_SLIDE_LAYOUT, Vec::new())?;
        part.rels_mut().add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        part.set_blob(template::slide_layout_xml(layout)?);
    }

    // Slides and their charts
    let mut chart_count = 0;
    for (i, slide) in pres.slides().iter().enumerate() {
        let partname = format!("/ppt/slides/slide{}.xml", i + 1);
        let part = package.add_part(&partname, ct::PML_SLIDE, Vec::new())?;
        part.rels_mut().add(
            rt::SLIDE_LAYOUT,
            &format!("../slideLayouts/slideLayout{}.xml", slide.layout_index() + 1),
        );

        let mut chart_rel_ids = HashMap::new();
        let mut chart_parts = Vec::new();
        for shape in slide.shapes() {
            if let Some(chart) = shape.chart() {
                chart_count += 1;
                let rel_id = part
                    .rels_mut()
                    .add(rt::CHART, &format!("../charts/chart{}.xml", chart_count));
                chart_rel_ids.insert(shape.id(), rel_id);
                chart_parts.push((chart_count, chart));
            }
        }
        part.set_blob(slide::slide_xml(slide, &chart_rel_ids)?);

        for (n, chart) in chart_parts {
            let partname = format!("/ppt/charts/chart{}.xml", n);
            package.add_part(&partname, ct::DML_CHART, chart::chart_xml(chart)?)?;
        }
    }

    package.add_part("/docProps/core.xml", ct::OPC_CORE_PROPERTIES, pres.properties().to_xml())?;
    package.add_part(
        "/docProps/app.xml",
        ct::OFC_EXTENDED_PROPERTIES,
        app_properties_xml(&[("Slides", pres.slide_count())]),
    )?;

    debug!(
        parts = package.part_count(),
        slides = pres.slide_count(),
        charts = chart_count,
        "built presentation package"
    );
    Ok(package)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::{ChartData, ChartType, Frame};

    fn part_text(package: &OpcPackage, name: &str) -> String {
        let part = package
            .iter_parts()
            .find(|p| p.partname() == name)
            .unwrap_or_else(|| panic!("missing part {}", name));
        String::from_utf8(part.blob().to_vec()).unwrap()
    }

    #[test]
    fn test_empty_presentation_parts() {
        let package = build_package(&Presentation::new()).unwrap();
        assert!(package.contains_part(PRESENTATION_PART));
        assert!(package.contains_part(MASTER_PART));
        assert!(package.contains_part("/ppt/slideLayouts/slideLayout11.xml"));
        assert!(package.contains_part(THEME_PART));
        assert!(!package.contains_part("/ppt/slides/slide1.xml"));
        assert_eq!(package.rels().len(), 3);
    }

    #[test]
    fn test_slides_relate_to_layouts() {
        let mut pres = Presentation::new();
        pres.add_slide(0).unwrap();
        pres.add_slide("Blank").unwrap();
        let package = build_package(&pres).unwrap();

        let slide2 = package
            .iter_parts()
            .find(|p| p.partname() == "/ppt/slides/slide2.xml")
            .unwrap();
        let rel = slide2.rels().iter().next().unwrap();
        assert_eq!(rel.target_ref(), "../slideLayouts/slideLayout7.xml");

        let xml = part_text(&package, PRESENTATION_PART);
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(part_text(&package, "/docProps/app.xml").contains("<Slides>2</Slides>"));
    }

    #[test]
    fn test_chart_parts_numbered_across_slides() {
        let mut pres = Presentation::new();
        for _ in 0..2 {
            pres.add_slide(6)
                .unwrap()
                .add_chart(
                    ChartType::Pie,
                    ChartData::new(["A", "B"]).series("S", [1.0, 2.0]),
                    Frame::from_inches(1.0, 1.0, 4.0, 3.0),
                    None,
                )
                .unwrap();
        }
        let package = build_package(&pres).unwrap();
        assert!(package.contains_part("/ppt/charts/chart1.xml"));
        assert!(package.contains_part("/ppt/charts/chart2.xml"));

        let slide2 = package
            .iter_parts()
            .find(|p| p.partname() == "/ppt/slides/slide2.xml")
            .unwrap();
        let chart_rel = slide2.rels().iter().find(|r| r.reltype() == rt::CHART).unwrap();
        assert_eq!(chart_rel.target_ref(), "../charts/chart2.xml");
        assert!(part_text(&package, "/ppt/slides/slide2.xml").contains(&format!(r#"r:id="{}""#, chart_rel.r_id())));
    }
}
