//! Shapes on a slide.
//!
//! Every shape has a slide-unique id, a name and a frame. What it holds is
//! described by [`ShapeKind`]: placeholders, text boxes and auto shapes carry
//! a text frame, graphic frames carry a table or a chart.

use std::fmt;

use crate::common::{Error, Length, Result, RgbColor};
use crate::ooxml::pptx::chart::Chart;
use crate::ooxml::pptx::placeholder::PlaceholderType;
use crate::ooxml::pptx::table::Table;
use crate::ooxml::pptx::text::TextFrame;
use crate::table::GridRegion;

/// Slide-unique shape id (`<p:cNvPr id="..."/>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position and size of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub left: Length,
    pub top: Length,
    pub width: Length,
    pub height: Length,
}

impl Frame {
    pub fn new(left: Length, top: Length, width: Length, height: Length) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(
            Length::from_inches(left),
            Length::from_inches(top),
            Length::from_inches(width),
            Length::from_inches(height),
        )
    }

    pub(crate) const fn from_emus(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left: Length::from_emus(left),
            top: Length::from_emus(top),
            width: Length::from_emus(width),
            height: Length::from_emus(height),
        }
    }
}

impl GridRegion for Frame {
    fn validate(&self) -> Result<()> {
        if !self.width.is_positive() || !self.height.is_positive() {
            return Err(Error::InvalidInput(format!(
                "frame must have positive width and height, got {} x {}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Preset geometries for auto shapes (`<a:prstGeom prst="..."/>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoShapeType {
    Rectangle,
    RoundedRectangle,
    Oval,
    Triangle,
    Diamond,
    Pentagon,
    Hexagon,
    RightArrow,
    LeftArrow,
    Chevron,
    Star5,
    Cloud,
    Line,
}

impl AutoShapeType {
    pub fn prst(&self) -> &'static str {
        match self {
            AutoShapeType::Rectangle => "rect",
            AutoShapeType::RoundedRectangle => "roundRect",
            AutoShapeType::Oval => "ellipse",
            AutoShapeType::Triangle => "triangle",
            AutoShapeType::Diamond => "diamond",
            AutoShapeType::Pentagon => "pentagon",
            AutoShapeType::Hexagon => "hexagon",
            AutoShapeType::RightArrow => "rightArrow",
            AutoShapeType::LeftArrow => "leftArrow",
            AutoShapeType::Chevron => "chevron",
            AutoShapeType::Star5 => "star5",
            AutoShapeType::Cloud => "cloud",
            AutoShapeType::Line => "line",
        }
    }

    pub(crate) fn display_name(&self) -> &'static str {
        match self {
            AutoShapeType::Rectangle => "Rectangle",
            AutoShapeType::RoundedRectangle => "Rounded Rectangle",
            AutoShapeType::Oval => "Oval",
            AutoShapeType::Triangle => "Isosceles Triangle",
            AutoShapeType::Diamond => "Diamond",
            AutoShapeType::Pentagon => "Regular Pentagon",
            AutoShapeType::Hexagon => "Hexagon",
            AutoShapeType::RightArrow => "Right Arrow",
            AutoShapeType::LeftArrow => "Left Arrow",
            AutoShapeType::Chevron => "Chevron",
            AutoShapeType::Star5 => "5-Point Star",
            AutoShapeType::Cloud => "Cloud",
            AutoShapeType::Line => "Straight Connector",
        }
    }
}

/// Outline of a shape; unset fields inherit from the theme.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineFormat {
    pub color: Option<RgbColor>,
    pub width: Option<Length>,
}

impl LineFormat {
    pub fn is_set(&self) -> bool {
        self.color.is_some() || self.width.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Placeholder {
        ph_type: PlaceholderType,
        idx: u32,
        text: TextFrame,
    },
    TextBox(TextFrame),
    AutoShape {
        shape_type: AutoShapeType,
        text: TextFrame,
    },
    Table(Table),
    Chart(Chart),
}

/// A shape on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub(crate) id: ShapeId,
    pub(crate) name: String,
    pub(crate) frame: Frame,
    pub(crate) kind: ShapeKind,
    pub(crate) fill: Option<RgbColor>,
    pub(crate) line: LineFormat,
}

impl Shape {
    pub(crate) fn new(id: ShapeId, name: impl Into<String>, frame: Frame, kind: ShapeKind) -> Self {
        Self {
            id,
            name: name.into(),
            frame,
            kind,
            fill: None,
            line: LineFormat::default(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn fill(&self) -> Option<RgbColor> {
        self.fill
    }

    pub fn line(&self) -> LineFormat {
        self.line
    }

    pub fn placeholder_type(&self) -> Option<PlaceholderType> {
        match self.kind {
            ShapeKind::Placeholder { ph_type, .. } => Some(ph_type),
            _ => None,
        }
    }

    pub fn is_graphic_frame(&self) -> bool {
        matches!(self.kind, ShapeKind::Table(_) | ShapeKind::Chart(_))
    }

    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.kind {
            ShapeKind::Placeholder { text, .. }
            | ShapeKind::TextBox(text)
            | ShapeKind::AutoShape { text, .. } => Some(text),
            ShapeKind::Table(_) | ShapeKind::Chart(_) => None,
        }
    }

    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        match &mut self.kind {
            ShapeKind::Placeholder { text, .. }
            | ShapeKind::TextBox(text)
            | ShapeKind::AutoShape { text, .. } => Some(text),
            ShapeKind::Table(_) | ShapeKind::Chart(_) => None,
        }
    }

    /// Text of the shape, empty for graphic frames.
    pub fn text(&self) -> String {
        self.text_frame().map(TextFrame::text).unwrap_or_default()
    }

    pub fn table(&self) -> Option<&Table> {
        match &self.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn chart(&self) -> Option<&Chart> {
        match &self.kind {
            ShapeKind::Chart(chart) => Some(chart),
            _ => None,
        }
    }

    pub(crate) fn set_fill(&mut self, color: RgbColor) -> Result<()> {
        self.ensure_outline_shape("fill color")?;
        self.fill = Some(color);
        Ok(())
    }

    pub(crate) fn set_line_color(&mut self, color: RgbColor) -> Result<()> {
        self.ensure_outline_shape("line color")?;
        self.line.color = Some(color);
        Ok(())
    }

    pub(crate) fn set_line_weight(&mut self, points: f64) -> Result<()> {
        self.ensure_outline_shape("line weight")?;
        if points.is_nan() || points < 0.0 {
            return Err(Error::InvalidInput(format!(
                "line weight must be a non-negative number of points, got {}",
                points
            )));
        }
        self.line.width = Some(Length::from_points(points));
        Ok(())
    }

    fn ensure_outline_shape(&self, what: &str) -> Result<()> {
        if self.is_graphic_frame() {
            return Err(Error::InvalidInput(format!(
                "cannot set {} on graphic frame '{}'",
                what, self.name
            )));
        }
        Ok(())
    }
}

/// How a caller names a shape on a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeRef {
    /// Position in the slide's shape tree
    Index(usize),
    Name(String),
    Id(ShapeId),
}

impl From<usize> for ShapeRef {
    fn from(index: usize) -> Self {
        ShapeRef::Index(index)
    }
}

impl From<&str> for ShapeRef {
    fn from(name: &str) -> Self {
        ShapeRef::Name(name.to_string())
    }
}

impl From<String> for ShapeRef {
    fn from(name: String) -> Self {
        ShapeRef::Name(name)
    }
}

impl From<ShapeId> for ShapeRef {
    fn from(id: ShapeId) -> Self {
        ShapeRef::Id(id)
    }
}

impl fmt::Display for ShapeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeRef::Index(i) => write!(f, "index {}", i),
            ShapeRef::Name(name) => write!(f, "name '{}'", name),
            ShapeRef::Id(id) => write!(f, "id {}", id),
        }
    }
}
