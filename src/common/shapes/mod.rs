//! Placeholder classification shared by the presentation model and errors.

use std::fmt;

/// The placeholder roles the slide API addresses directly.
///
/// Every concrete placeholder type on a slide maps onto one of these; types
/// the API never targets by role land in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    Title,
    Subtitle,
    Footer,
    SlideNumber,
    Body,
    Other,
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Footer => "footer",
            Self::SlideNumber => "slide number",
            Self::Body => "body",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
