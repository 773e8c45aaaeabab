//! Placeholder types as they appear in `<p:ph type="..."/>`.

use crate::common::PlaceholderKind;

/// The placeholder type of a layout or slide placeholder shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderType {
    Title,
    CenterTitle,
    Subtitle,
    Body,
    /// Generic content placeholder (`obj`), the default when `type` is omitted
    Object,
    Picture,
    Date,
    Footer,
    SlideNumber,
    VerticalTitle,
    VerticalBody,
}

impl PlaceholderType {
    /// Value of the `type` attribute, `None` for the implied `obj`.
    pub fn xml_type(&self) -> Option<&'static str> {
        match self {
            PlaceholderType::Title | PlaceholderType::VerticalTitle => Some("title"),
            PlaceholderType::CenterTitle => Some("ctrTitle"),
            PlaceholderType::Subtitle => Some("subTitle"),
            PlaceholderType::Body | PlaceholderType::VerticalBody => Some("body"),
            PlaceholderType::Object => None,
            PlaceholderType::Picture => Some("pic"),
            PlaceholderType::Date => Some("dt"),
            PlaceholderType::Footer => Some("ftr"),
            PlaceholderType::SlideNumber => Some("sldNum"),
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(
            self,
            PlaceholderType::VerticalTitle | PlaceholderType::VerticalBody
        )
    }

    /// Size attribute written for the small footer-row placeholders.
    pub(crate) fn xml_size(&self) -> Option<&'static str> {
        match self {
            PlaceholderType::Date | PlaceholderType::Footer | PlaceholderType::SlideNumber => {
                Some("quarter")
            },
            _ => None,
        }
    }

    /// The coarse kind used to look placeholders up on a slide.
    pub fn kind(&self) -> PlaceholderKind {
        match self {
            PlaceholderType::Title | PlaceholderType::CenterTitle | PlaceholderType::VerticalTitle => {
                PlaceholderKind::Title
            },
            PlaceholderType::Subtitle => PlaceholderKind::Subtitle,
            PlaceholderType::Footer => PlaceholderKind::Footer,
            PlaceholderType::SlideNumber => PlaceholderKind::SlideNumber,
            PlaceholderType::Body | PlaceholderType::VerticalBody | PlaceholderType::Object => {
                PlaceholderKind::Body
            },
            PlaceholderType::Picture | PlaceholderType::Date => PlaceholderKind::Other,
        }
    }

    /// Base of the shape name PowerPoint gives placeholders of this type.
    pub(crate) fn display_name(&self) -> &'static str {
        match self {
            PlaceholderType::Title | PlaceholderType::CenterTitle => "Title",
            PlaceholderType::Subtitle => "Subtitle",
            PlaceholderType::Body => "Text Placeholder",
            PlaceholderType::Object => "Content Placeholder",
            PlaceholderType::Picture => "Picture Placeholder",
            PlaceholderType::Date => "Date Placeholder",
            PlaceholderType::Footer => "Footer Placeholder",
            PlaceholderType::SlideNumber => "Slide Number Placeholder",
            PlaceholderType::VerticalTitle => "Vertical Title",
            PlaceholderType::VerticalBody => "Vertical Text Placeholder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(PlaceholderType::CenterTitle.kind(), PlaceholderKind::Title);
        assert_eq!(PlaceholderType::VerticalTitle.kind(), PlaceholderKind::Title);
        assert_eq!(PlaceholderType::Object.kind(), PlaceholderKind::Body);
        assert_eq!(PlaceholderType::Date.kind(), PlaceholderKind::Other);
        assert_eq!(
            PlaceholderType::SlideNumber.kind(),
            PlaceholderKind::SlideNumber
        );
    }

    #[test]
    fn test_xml_type() {
        assert_eq!(PlaceholderType::Object.xml_type(), None);
        assert_eq!(PlaceholderType::SlideNumber.xml_type(), Some("sldNum"));
        assert_eq!(PlaceholderType::VerticalBody.xml_type(), Some("body"));
        assert!(PlaceholderType::VerticalBody.is_vertical());
    }
}
