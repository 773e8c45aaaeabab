//! Slide layouts of the default master.
//!
//! The layout set and placeholder geometry follow the default 4:3 Office
//! template, so slides built here open with familiar positions.

use crate::ooxml::pptx::placeholder::PlaceholderType;
use crate::ooxml::pptx::shape::Frame;

/// Placeholder a layout contributes to every slide built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlaceholder {
    pub ph_type: PlaceholderType,
    pub idx: u32,
    pub frame: Frame,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideLayout {
    name: String,
    /// `type` attribute of `<p:sldLayout>`
    kind: &'static str,
    placeholders: Vec<LayoutPlaceholder>,
}

impl SlideLayout {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn placeholders(&self) -> &[LayoutPlaceholder] {
        &self.placeholders
    }
}

const TITLE: Frame = Frame::from_emus(457_200, 274_638, 8_229_600, 1_143_000);
const BODY: Frame = Frame::from_emus(457_200, 1_600_200, 8_229_600, 4_525_963);
const DATE: Frame = Frame::from_emus(457_200, 6_356_350, 2_133_600, 365_125);
const FOOTER: Frame = Frame::from_emus(3_124_200, 6_356_350, 2_895_600, 365_125);
const SLIDE_NUMBER: Frame = Frame::from_emus(6_553_200, 6_356_350, 2_133_600, 365_125);

/// Placeholders shared by the master and every layout.
pub(crate) fn master_placeholders() -> Vec<LayoutPlaceholder> {
    vec![
        ph(PlaceholderType::Title, 0, TITLE),
        ph(PlaceholderType::Body, 1, BODY),
        ph(PlaceholderType::Date, 2, DATE),
        ph(PlaceholderType::Footer, 3, FOOTER),
        ph(PlaceholderType::SlideNumber, 4, SLIDE_NUMBER),
    ]
}

fn ph(ph_type: PlaceholderType, idx: u32, frame: Frame) -> LayoutPlaceholder {
    LayoutPlaceholder {
        ph_type,
        idx,
        frame,
    }
}

fn layout(name: &str, kind: &'static str, mut placeholders: Vec<LayoutPlaceholder>) -> SlideLayout {
    placeholders.extend([
        ph(PlaceholderType::Date, 10, DATE),
        ph(PlaceholderType::Footer, 11, FOOTER),
        ph(PlaceholderType::SlideNumber, 12, SLIDE_NUMBER),
    ]);
    SlideLayout {
        name: name.to_string(),
        kind,
        placeholders,
    }
}

/// The eleven layouts of the default template, in master order.
pub(crate) fn standard_layouts() -> Vec<SlideLayout> {
    use PlaceholderType::*;

    vec![
        layout(
            "Title Slide",
            "title",
            vec![
                ph(CenterTitle, 0, Frame::from_emus(685_800, 2_130_425, 7_772_400, 1_470_025)),
                ph(Subtitle, 1, Frame::from_emus(1_371_600, 3_886_200, 6_400_800, 1_752_600)),
            ],
        ),
        layout(
            "Title and Content",
            "obj",
            vec![ph(Title, 0, TITLE), ph(Object, 1, BODY)],
        ),
        layout(
            "Section Header",
            "secHead",
            vec![
                ph(Title, 0, Frame::from_emus(722_313, 4_406_900, 7_772_400, 1_362_075)),
                ph(Body, 1, Frame::from_emus(722_313, 2_906_713, 7_772_400, 1_500_187)),
            ],
        ),
        layout(
            "Two Content",
            "twoObj",
            vec![
                ph(Title, 0, TITLE),
                ph(Object, 1, Frame::from_emus(457_200, 1_600_200, 4_038_600, 4_525_963)),
                ph(Object, 2, Frame::from_emus(4_648_200, 1_600_200, 4_038_600, 4_525_963)),
            ],
        ),
        layout(
            "Comparison",
            "twoTxTwoObj",
            vec![
                ph(Title, 0, TITLE),
                ph(Body, 1, Frame::from_emus(457_200, 1_535_113, 4_040_188, 639_762)),
                ph(Object, 2, Frame::from_emus(457_200, 2_174_875, 4_040_188, 3_951_288)),
                ph(Body, 3, Frame::from_emus(4_645_025, 1_535_113, 4_041_775, 639_762)),
                ph(Object, 4, Frame::from_emus(4_645_025, 2_174_875, 4_041_775, 3_951_288)),
            ],
        ),
        layout("Title Only", "titleOnly", vec![ph(Title, 0, TITLE)]),
        layout("Blank", "blank", Vec::new()),
        layout(
            "Content with Caption",
            "objTx",
            vec![
                ph(Title, 0, Frame::from_emus(457_200, 273_050, 3_008_313, 1_162_050)),
                ph(Object, 1, Frame::from_emus(3_575_050, 273_050, 5_111_750, 5_853_113)),
                ph(Body, 2, Frame::from_emus(457_200, 1_435_100, 3_008_313, 4_691_063)),
            ],
        ),
        layout(
            "Picture with Caption",
            "picTx",
            vec![
                ph(Title, 0, Frame::from_emus(1_792_288, 4_800_600, 5_486_400, 566_738)),
                ph(Picture, 1, Frame::from_emus(1_792_288, 612_775, 5_486_400, 4_114_800)),
                ph(Body, 2, Frame::from_emus(1_792_288, 5_367_338, 5_486_400, 804_862)),
            ],
        ),
        layout(
            "Title and Vertical Text",
            "vertTx",
            vec![ph(Title, 0, TITLE), ph(VerticalBody, 1, BODY)],
        ),
        layout(
            "Vertical Title and Text",
            "vertTitleAndTx",
            vec![
                ph(VerticalTitle, 0, Frame::from_emus(6_629_400, 274_638, 2_057_400, 5_851_525)),
                ph(VerticalBody, 1, Frame::from_emus(457_200, 274_638, 6_019_800, 5_851_525)),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PlaceholderKind;

    #[test]
    fn test_standard_layout_names() {
        let layouts = standard_layouts();
        assert_eq!(layouts.len(), 11);
        assert_eq!(layouts[0].name(), "Title Slide");
        assert_eq!(layouts[5].name(), "Title Only");
        assert_eq!(layouts[10].name(), "Vertical Title and Text");
    }

    #[test]
    fn test_every_layout_has_footer_row() {
        for layout in standard_layouts() {
            let kinds: Vec<_> = layout.placeholders().iter().map(|p| p.ph_type.kind()).collect();
            assert!(kinds.contains(&PlaceholderKind::Footer), "{}", layout.name());
            assert!(kinds.contains(&PlaceholderKind::SlideNumber), "{}", layout.name());
        }
    }

    #[test]
    fn test_blank_has_no_title() {
        let blank = &standard_layouts()[6];
        assert!(
            blank
                .placeholders()
                .iter()
                .all(|p| p.ph_type.kind() != PlaceholderKind::Title)
        );
    }

    #[test]
    fn test_placeholder_indices_unique() {
        for layout in standard_layouts() {
            let mut idx: Vec<_> = layout.placeholders().iter().map(|p| p.idx).collect();
            idx.sort_unstable();
            idx.dedup();
            assert_eq!(idx.len(), layout.placeholders().len());
        }
    }
}
